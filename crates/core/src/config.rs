use crate::ItemKind;
use serde::{Deserialize, Serialize};

/// Round setup ranges. All bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RulesConfig {
    #[serde(default = "default_hp_min")]
    pub hp_min: u32,
    #[serde(default = "default_hp_max")]
    pub hp_max: u32,
    #[serde(default = "default_shells_min")]
    pub shells_min: usize,
    #[serde(default = "default_shells_max")]
    pub shells_max: usize,
    #[serde(default)]
    pub items_min: usize,
    #[serde(default)]
    pub items_max: usize,
    #[serde(default = "default_item_pool")]
    pub item_pool: Vec<ItemKind>,
}

fn default_hp_min() -> u32 {
    2
}

fn default_hp_max() -> u32 {
    4
}

fn default_shells_min() -> usize {
    2
}

fn default_shells_max() -> usize {
    8
}

fn default_item_pool() -> Vec<ItemKind> {
    ItemKind::ALL.to_vec()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            hp_min: default_hp_min(),
            hp_max: default_hp_max(),
            shells_min: default_shells_min(),
            shells_max: default_shells_max(),
            items_min: 0,
            items_max: 0,
            item_pool: default_item_pool(),
        }
    }
}

impl RulesConfig {
    /// `(min, max)` hp with `min >= 1` and `max >= min`.
    pub fn hp_bounds(&self) -> (u32, u32) {
        let min = self.hp_min.max(1);
        (min, self.hp_max.max(min))
    }

    /// `(min, max)` even magazine sizes with room for one live and one blank.
    pub fn shell_bounds(&self) -> (usize, usize) {
        let min = round_up_even(self.shells_min.max(2));
        let max = round_up_even(self.shells_max).max(min);
        (min, max)
    }

    pub fn item_bounds(&self) -> (usize, usize) {
        (self.items_min, self.items_max.max(self.items_min))
    }

    /// True when rounds hand out fresh items.
    pub fn deals_items(&self) -> bool {
        self.item_bounds().1 > 0 && !self.item_pool.is_empty()
    }
}

fn round_up_even(value: usize) -> usize {
    value + value % 2
}
