use crate::{Event, EventBus, GameState, RandomSource};
use serde::{Deserialize, Serialize};

/// Item discriminant, used for priority scans and dealing pools.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemKind {
    CigarettePack,
    MagnifyingGlass,
    Beer,
    Handcuffs,
    Handsaw,
    Adrenaline,
    Burner,
    Inverter,
    ExpiredMedicine,
    Remote,
    Jammer,
}

impl ItemKind {
    pub const ALL: [ItemKind; 11] = [
        ItemKind::CigarettePack,
        ItemKind::MagnifyingGlass,
        ItemKind::Beer,
        ItemKind::Handcuffs,
        ItemKind::Handsaw,
        ItemKind::Adrenaline,
        ItemKind::Burner,
        ItemKind::Inverter,
        ItemKind::ExpiredMedicine,
        ItemKind::Remote,
        ItemKind::Jammer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CigarettePack => "Cigarette Pack",
            Self::MagnifyingGlass => "Magnifying Glass",
            Self::Beer => "Beer",
            Self::Handcuffs => "Handcuffs",
            Self::Handsaw => "Handsaw",
            Self::Adrenaline => "Adrenaline",
            Self::Burner => "Burner",
            Self::Inverter => "Inverter",
            Self::ExpiredMedicine => "Expired Medicine",
            Self::Remote => "Remote",
            Self::Jammer => "Jammer",
        }
    }
}

/// A consumable item. Discarded once applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Item {
    CigarettePack,
    MagnifyingGlass,
    /// Heals one hp, same as a cigarette pack.
    Beer,
    /// Restrains its own owner; the caller decides who that is.
    Handcuffs,
    Handsaw,
    Adrenaline,
    Burner,
    Inverter,
    ExpiredMedicine,
    Remote,
    Jammer { target: usize },
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::CigarettePack => ItemKind::CigarettePack,
            Self::MagnifyingGlass => ItemKind::MagnifyingGlass,
            Self::Beer => ItemKind::Beer,
            Self::Handcuffs => ItemKind::Handcuffs,
            Self::Handsaw => ItemKind::Handsaw,
            Self::Adrenaline => ItemKind::Adrenaline,
            Self::Burner => ItemKind::Burner,
            Self::Inverter => ItemKind::Inverter,
            Self::ExpiredMedicine => ItemKind::ExpiredMedicine,
            Self::Remote => ItemKind::Remote,
            Self::Jammer { .. } => ItemKind::Jammer,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Build an item of `kind`. Jammers aim at `jam_target`.
    pub fn from_kind(kind: ItemKind, jam_target: usize) -> Self {
        match kind {
            ItemKind::CigarettePack => Self::CigarettePack,
            ItemKind::MagnifyingGlass => Self::MagnifyingGlass,
            ItemKind::Beer => Self::Beer,
            ItemKind::Handcuffs => Self::Handcuffs,
            ItemKind::Handsaw => Self::Handsaw,
            ItemKind::Adrenaline => Self::Adrenaline,
            ItemKind::Burner => Self::Burner,
            ItemKind::Inverter => Self::Inverter,
            ItemKind::ExpiredMedicine => Self::ExpiredMedicine,
            ItemKind::Remote => Self::Remote,
            ItemKind::Jammer => Self::Jammer { target: jam_target },
        }
    }
}

/// Apply `item` for `owner`. The item must already be out of every bag.
///
/// Never fails: an item without a legal target (empty magazine, no opponent
/// items, unknown seat) leaves the state as it was apart from owner flags.
pub fn apply_item(state: &mut GameState, owner: usize, item: Item, events: &mut EventBus) {
    if owner >= state.players.len() {
        log::debug!("ignoring {} for unknown seat {owner}", item.name());
        return;
    }
    log::debug!("seat {owner} applies {}", item.name());
    events.push(Event::ItemUsed {
        player: owner,
        item: item.kind(),
    });
    match item {
        Item::CigarettePack | Item::Beer => {
            state.players[owner].heal(1);
        }
        Item::MagnifyingGlass => {
            let revealed = state.shotgun.front().map(|shell| shell.kind);
            state.players[owner].last_revealed = revealed;
        }
        Item::Handcuffs => {
            state.players[owner].cuffed = true;
        }
        Item::Handsaw => {
            let player = &mut state.players[owner];
            if player.cuffed {
                player.cuffed = false;
                player.damage(1);
            }
        }
        Item::Adrenaline => apply_adrenaline(state, owner, events),
        Item::Burner => {
            let peeked = state.shotgun.back().map(|shell| shell.kind);
            let player = &mut state.players[owner];
            player.burner_used = true;
            if peeked.is_some() {
                player.peeked = peeked;
            }
        }
        Item::Inverter => {
            let player = &mut state.players[owner];
            player.inverted = !player.inverted;
            if let Some(shell) = state.shotgun.front_mut() {
                shell.kind = shell.kind.flipped();
            }
        }
        Item::ExpiredMedicine => {
            let roll = state.rng.next_f64();
            let player = &mut state.players[owner];
            if roll < 0.5 {
                player.heal(2);
                player.med_success = Some(true);
            } else {
                player.damage(1);
                player.med_success = Some(false);
            }
        }
        Item::Remote => {
            state.ensure_turn_order();
            if state.turn_order.len() > 1 {
                state.turn_order[1..].reverse();
            }
        }
        Item::Jammer { target } => {
            if let Some(player) = state.players.get_mut(target) {
                player.flags.skip = true;
            }
        }
    }
}

fn apply_adrenaline(state: &mut GameState, owner: usize, events: &mut EventBus) {
    state.players[owner].adrenaline = true;
    let victim = state
        .players
        .iter()
        .enumerate()
        .find(|(idx, player)| *idx != owner && !player.items.is_empty())
        .map(|(idx, _)| idx);
    let Some(victim) = victim else {
        return;
    };
    let GameState { players, rng, .. } = &mut *state;
    let Some(stolen) = players[victim].items.take_random(rng) else {
        return;
    };
    events.push(Event::ItemStolen {
        thief: owner,
        victim,
        item: stolen.kind(),
    });
    apply_item(state, owner, stolen, events);
}
