use buckshot_core::{dealer_choose_target, GameState, RandomSource};
use serde::{Deserialize, Serialize};

/// How a seat picks whom to fire at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeatPolicy {
    /// Always the actor itself.
    SelfShot,
    /// The dealer's peek rule.
    Dealer,
    /// The next seat in turn order.
    Opponent,
    /// Uniformly self or the next seat.
    Random,
}

impl SeatPolicy {
    pub fn choose_target(
        self,
        state: &GameState,
        actor: usize,
        rng: &mut dyn RandomSource,
    ) -> usize {
        let seats = state.players.len().max(1);
        let opponent = (actor + 1) % seats;
        match self {
            Self::SelfShot => actor,
            Self::Dealer => dealer_choose_target(state),
            Self::Opponent => opponent,
            Self::Random => {
                if rng.next_f64() < 0.5 {
                    actor
                } else {
                    opponent
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SelfShot => "self",
            Self::Dealer => "dealer",
            Self::Opponent => "opponent",
            Self::Random => "random",
        }
    }
}
