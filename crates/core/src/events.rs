use crate::{ItemKind, Phase, ShellType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        hp_max: u32,
        shells: usize,
        live: usize,
    },
    ShellFired {
        actor: usize,
        target: usize,
        shell: ShellType,
        damage: u32,
    },
    ItemUsed { player: usize, item: ItemKind },
    ItemStolen {
        thief: usize,
        victim: usize,
        item: ItemKind,
    },
    TurnSkipped { player: usize },
    TurnPassed { player: usize },
    MagazineEmpty,
    PhaseChanged { phase: Phase },
    RoundResolved {
        winner: usize,
        streak: u32,
        finished: bool,
    },
    CashedOut { amount: u64, bank: u64 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
