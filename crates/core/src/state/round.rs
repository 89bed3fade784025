use super::{GameState, Phase};
use crate::setup::{deal_items, fill_magazine, roll_hp};
use crate::{Event, EventBus, RulesConfig, DEALER_SEAT};

/// Seat whose wins feed the streak and bank.
pub const TRACKED_SEAT: usize = 0;
/// Consecutive wins that end the match.
pub const FINISH_STREAK: u32 = 3;

impl GameState {
    /// Roll hp, load the magazine and deal items from the state's own rng.
    ///
    /// Round marks (cuffs, skips, peeks, boosts) are cleared. When the rules
    /// deal items, each bag is replaced by the new hand.
    pub fn start_round(&mut self, config: &RulesConfig, events: &mut EventBus) {
        let deals = config.deals_items();
        for player in &mut self.players {
            player.clear_round_marks();
            if deals {
                player.items.drain_all();
            }
        }
        self.shotgun.barrel_mod = false;
        let hp_max = roll_hp(&mut self.players, &mut self.rng, config);
        let shells = fill_magazine(&mut self.shotgun, &mut self.rng, config);
        deal_items(&mut self.players, &mut self.rng, config);
        self.reset_turn_order();
        self.set_phase(Phase::Main, events);
        log::info!(
            "round {} started: hp {hp_max}, {shells} shells ({} live)",
            self.round,
            self.shotgun.live_count()
        );
        events.push(Event::RoundStarted {
            round: self.round,
            hp_max,
            shells,
            live: self.shotgun.live_count(),
        });
    }

    /// Advance the round counter and start the next round.
    pub fn next_round(&mut self, config: &RulesConfig, events: &mut EventBus) {
        self.round = self.round.saturating_add(1);
        self.start_round(config, events);
    }

    /// Close the round for `winner`, updating streak and bank.
    pub fn resolve_round(&mut self, winner: usize, events: &mut EventBus) {
        self.shotgun.clear();
        if winner == TRACKED_SEAT {
            self.streak = self.streak.saturating_add(1);
            if self.streak >= FINISH_STREAK {
                self.finished = true;
            }
        } else {
            self.streak = 0;
            self.bank = 0;
        }
        log::info!(
            "round {} won by seat {winner}; streak {} bank {}",
            self.round,
            self.streak,
            self.bank
        );
        events.push(Event::RoundResolved {
            winner,
            streak: self.streak,
            finished: self.finished,
        });
    }

    /// `round_winner`, plus the table rule for a double knockout: when no
    /// seat is left standing the dealer takes the round.
    pub fn settled_winner(&self) -> Option<usize> {
        if let Some(winner) = self.round_winner() {
            return Some(winner);
        }
        let knocked_out =
            self.players.len() >= 2 && self.players.iter().all(|player| !player.is_alive());
        knocked_out.then_some(DEALER_SEAT)
    }

    /// The seat that has won the current round, if any.
    ///
    /// The last seat standing wins. When the magazine runs dry with more than
    /// one seat alive, the highest hp wins and ties go to the lower seat.
    pub fn round_winner(&self) -> Option<usize> {
        if self.players.len() < 2 {
            return None;
        }
        let alive: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.is_alive())
            .map(|(seat, _)| seat)
            .collect();
        match alive.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ if self.shotgun.is_empty() => alive
                .iter()
                .copied()
                .max_by(|a, b| {
                    self.players[*a]
                        .hp()
                        .cmp(&self.players[*b].hp())
                        .then(b.cmp(a))
                }),
            _ => None,
        }
    }
}
