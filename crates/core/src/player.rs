use crate::{ItemBag, ShellType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerFlags {
    /// Consumed by the next turn rotation that reaches this seat.
    #[serde(default)]
    pub skip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub(crate) hp: u32,
    #[serde(default)]
    pub(crate) hp_max: u32,
    #[serde(default)]
    pub items: ItemBag,
    #[serde(default)]
    pub flags: PlayerFlags,
    #[serde(default = "default_damage_boost")]
    pub damage_boost: u32,
    #[serde(default)]
    pub cuffed: bool,
    #[serde(default)]
    pub adrenaline: bool,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub last_revealed: Option<ShellType>,
    #[serde(default)]
    pub peeked: Option<ShellType>,
    #[serde(default)]
    pub med_success: Option<bool>,
    #[serde(default)]
    pub burner_used: bool,
}

fn default_damage_boost() -> u32 {
    1
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_hp(name, 0)
    }

    pub fn with_hp(name: impl Into<String>, hp_max: u32) -> Self {
        Self {
            name: name.into(),
            hp: hp_max,
            hp_max,
            items: ItemBag::default(),
            flags: PlayerFlags::default(),
            damage_boost: default_damage_boost(),
            cuffed: false,
            adrenaline: false,
            inverted: false,
            last_revealed: None,
            peeked: None,
            med_success: None,
            burner_used: false,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn hp_max(&self) -> u32 {
        self.hp_max
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Reset both current and maximum hp for a new round.
    pub fn set_round_hp(&mut self, hp_max: u32) {
        self.hp_max = hp_max;
        self.hp = hp_max;
    }

    /// Set current hp, clamped to `hp_max`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.hp_max);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.hp_max);
    }

    pub fn damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Drop everything that only holds for the round just played.
    pub fn clear_round_marks(&mut self) {
        self.flags = PlayerFlags::default();
        self.damage_boost = default_damage_boost();
        self.cuffed = false;
        self.adrenaline = false;
        self.inverted = false;
        self.last_revealed = None;
        self.peeked = None;
        self.med_success = None;
        self.burner_used = false;
    }
}
