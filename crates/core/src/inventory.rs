use crate::{Item, ItemKind, RandomSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no item at slot {slot} (bag holds {len})")]
    NoItemAtSlot { slot: usize, len: usize },
}

/// Items held by one player. Order only matters for priority scans.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ItemBag {
    items: Vec<Item>,
}

impl ItemBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn remove_at(&mut self, slot: usize) -> Result<Item, InventoryError> {
        if slot >= self.items.len() {
            return Err(InventoryError::NoItemAtSlot {
                slot,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(slot))
    }

    /// Remove a uniformly chosen item, or `None` when empty.
    pub fn take_random(&mut self, rng: &mut dyn RandomSource) -> Option<Item> {
        if self.items.is_empty() {
            return None;
        }
        let slot = rng.index(self.items.len());
        Some(self.items.remove(slot))
    }

    /// Slot of the first item of `kind`.
    pub fn position(&self, kind: ItemKind) -> Option<usize> {
        self.items.iter().position(|item| item.kind() == kind)
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.position(kind).is_some()
    }

    pub fn drain_all(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.items.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    pub fn kinds(&self) -> Vec<ItemKind> {
        self.items.iter().map(Item::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for ItemBag {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Item>> for ItemBag {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}
