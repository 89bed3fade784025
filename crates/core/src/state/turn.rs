use super::{GameError, GameState, Phase};
use crate::{apply_item, dealer_use_items, Event, EventBus, Item, ShellType, DEALER_SEAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing was fired; the caller must reload first.
    MagazineEmpty,
    Fired {
        shell: ShellType,
        target: usize,
        damage: u32,
        next: usize,
    },
}

impl GameState {
    /// Play one turn for `actor`, firing at `actor` itself.
    pub fn take_turn(&mut self, actor: usize, events: &mut EventBus) -> TurnOutcome {
        self.take_turn_at(actor, actor, events)
    }

    /// Play one turn for `actor`, firing the front shell at `target`.
    ///
    /// The turn's items go first (see `use_turn_items`), then the shell is
    /// fired with `fire`. Nothing happens on an empty magazine.
    pub fn take_turn_at(
        &mut self,
        actor: usize,
        target: usize,
        events: &mut EventBus,
    ) -> TurnOutcome {
        if self.shotgun.is_empty() {
            return self.report_empty(events);
        }
        self.use_turn_items(actor, events);
        self.fire(actor, target, events)
    }

    /// The item hook that opens a turn: the dealer seat runs its priority
    /// policy, any other seat applies every item it holds.
    pub fn use_turn_items(&mut self, actor: usize, events: &mut EventBus) {
        if actor == DEALER_SEAT {
            dealer_use_items(self, events);
        } else {
            self.use_items(actor, events);
        }
    }

    /// Fire the front shell from `actor` at `target` and pass the turn.
    /// No items are used.
    pub fn fire(&mut self, actor: usize, target: usize, events: &mut EventBus) -> TurnOutcome {
        let Some(shell) = self.shotgun.pop_front() else {
            return self.report_empty(events);
        };

        let mut damage = 0;
        if shell.is_live() {
            let boost = self
                .players
                .get(actor)
                .map(|player| player.damage_boost.max(1))
                .unwrap_or(1);
            damage = if self.shotgun.barrel_mod { boost * 2 } else { boost };
            if let Some(player) = self.players.get_mut(target) {
                player.damage(damage);
            }
        }
        self.shotgun.barrel_mod = false;
        if let Some(player) = self.players.get_mut(actor) {
            player.damage_boost = 1;
        }
        log::debug!(
            "seat {actor} fired {} at seat {target} for {damage}",
            shell.kind.label()
        );
        events.push(Event::ShellFired {
            actor,
            target,
            shell: shell.kind,
            damage,
        });

        let next = self.next_player(events);
        if self.shotgun.is_empty() {
            self.set_phase(Phase::Items, events);
        }
        TurnOutcome::Fired {
            shell: shell.kind,
            target,
            damage,
            next,
        }
    }

    fn report_empty(&mut self, events: &mut EventBus) -> TurnOutcome {
        events.push(Event::MagazineEmpty);
        self.set_phase(Phase::Items, events);
        TurnOutcome::MagazineEmpty
    }

    /// Like `take_turn_at`, but rejects unknown seats and an empty magazine.
    pub fn try_take_turn(
        &mut self,
        actor: usize,
        target: usize,
        events: &mut EventBus,
    ) -> Result<TurnOutcome, GameError> {
        self.player(actor)?;
        self.player(target)?;
        if self.shotgun.is_empty() {
            return Err(GameError::MagazineEmpty);
        }
        Ok(self.take_turn_at(actor, target, events))
    }

    /// Rotate the head of the turn order to the tail until a seat without a
    /// pending skip comes up. Each skip flag is cleared as it is consumed.
    pub fn next_player(&mut self, events: &mut EventBus) -> usize {
        self.ensure_turn_order();
        let len = self.turn_order.len();
        if len == 0 {
            return self.turn;
        }
        let mut skipped = 0;
        // len skips clear every flag, so the next rotation always lands
        for _ in 0..=len {
            self.turn_order.rotate_left(1);
            self.turn = self.turn_order[0];
            let player = &mut self.players[self.turn];
            if !player.flags.skip {
                break;
            }
            player.flags.skip = false;
            skipped += 1;
            log::debug!("seat {} skips a turn", self.turn);
            events.push(Event::TurnSkipped { player: self.turn });
        }
        if skipped >= len {
            log::warn!(
                "every seat was skip-flagged; rotation settled on seat {}",
                self.turn
            );
        }
        events.push(Event::TurnPassed { player: self.turn });
        self.turn
    }

    /// Apply every item `owner` holds, in bag order, and empty the bag.
    pub fn use_items(&mut self, owner: usize, events: &mut EventBus) {
        let Some(player) = self.players.get_mut(owner) else {
            return;
        };
        for item in player.items.drain_all() {
            apply_item(self, owner, item, events);
        }
    }

    /// Remove the item at `slot` from `owner`'s bag and apply it.
    pub fn use_item_at(
        &mut self,
        owner: usize,
        slot: usize,
        events: &mut EventBus,
    ) -> Result<Item, GameError> {
        let item = self.player_mut(owner)?.items.remove_at(slot)?;
        apply_item(self, owner, item, events);
        Ok(item)
    }
}
