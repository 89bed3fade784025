use crate::{InventoryError, Player, RngSource, Shotgun};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod round;
mod turn;

pub use round::{FINISH_STREAK, TRACKED_SEAT};
pub use turn::TurnOutcome;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    #[default]
    Items,
    Health,
    Load,
    Main,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown player seat {0}")]
    UnknownPlayer(usize),
    #[error("magazine is empty")]
    MagazineEmpty,
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for GameError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}

/// Full state of one match. Mutated in place by every operation.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub phase: Phase,
    pub round: u32,
    pub(crate) turn: usize,
    pub players: Vec<Player>,
    pub shotgun: Shotgun,
    #[serde(default)]
    pub rng: RngSource,
    pub streak: u32,
    pub finished: bool,
    #[serde(default)]
    pub bank: u64,
    #[serde(default, deserialize_with = "nullable_seats")]
    pub(crate) turn_order: Vec<usize>,
}

/// Older saves write `"turnOrder": null` before the first rotation.
fn nullable_seats<'de, D>(deserializer: D) -> Result<Vec<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<usize>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GameState {
    pub fn new(players: Vec<Player>) -> Self {
        let turn_order = (0..players.len()).collect();
        Self {
            phase: Phase::Items,
            round: 1,
            turn: 0,
            players,
            shotgun: Shotgun::new(),
            rng: RngSource::default(),
            streak: 0,
            finished: false,
            bank: 0,
            turn_order,
        }
    }

    pub fn with_rng(mut self, rng: RngSource) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RngSource::seeded(seed))
    }

    pub fn with_shotgun(mut self, shotgun: Shotgun) -> Self {
        self.shotgun = shotgun;
        self
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Seat of the active player.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn turn_order(&self) -> &[usize] {
        &self.turn_order
    }

    pub fn player(&self, seat: usize) -> Result<&Player, GameError> {
        self.players.get(seat).ok_or(GameError::UnknownPlayer(seat))
    }

    pub fn player_mut(&mut self, seat: usize) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(seat)
            .ok_or(GameError::UnknownPlayer(seat))
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.turn)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a state, repairing hp above `hp_max` and a turn order that is
    /// not a permutation of the seats.
    pub fn from_json(body: &str) -> Result<Self, GameError> {
        let mut state: GameState = serde_json::from_str(body)?;
        for player in &mut state.players {
            let hp = player.hp;
            player.set_hp(hp);
        }
        state.ensure_turn_order();
        if !state.turn_order.contains(&state.turn) {
            state.turn = state.turn_order.first().copied().unwrap_or(0);
        }
        Ok(state)
    }

    pub(crate) fn set_phase(&mut self, phase: Phase, events: &mut crate::EventBus) {
        if self.phase != phase {
            self.phase = phase;
            events.push(crate::Event::PhaseChanged { phase });
        }
    }

    pub(crate) fn ensure_turn_order(&mut self) {
        let len = self.players.len();
        let mut seen = vec![false; len];
        let valid = self.turn_order.len() == len
            && self.turn_order.iter().all(|&seat| {
                seat < len && !std::mem::replace(&mut seen[seat], true)
            });
        if !valid {
            self.turn_order = (0..len).collect();
        }
    }

    pub(crate) fn reset_turn_order(&mut self) {
        self.turn_order = (0..self.players.len()).collect();
        self.turn = 0;
    }
}
