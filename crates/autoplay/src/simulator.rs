use crate::{RoundStatus, RoundTrace, SeatPolicy, StepRecord};
use buckshot_core::{
    double_or_nothing, EventBus, GameState, Lcg, Player, RulesConfig, TurnOutcome, TRACKED_SEAT,
};

/// One match between two scripted seats.
#[derive(Debug)]
pub struct Simulator {
    pub state: GameState,
    pub events: EventBus,
    pub policies: [SeatPolicy; 2],
    rules: RulesConfig,
    policy_rng: Lcg,
    seed: u64,
    steps: u32,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Finished { bank: u64 },
    CashedOut { bank: u64 },
    Lost,
    Unresolved,
}

impl Simulator {
    pub fn new(seed: u64, rules: RulesConfig, policies: [SeatPolicy; 2]) -> Self {
        let players = vec![Player::new("Player"), Player::new("Dealer")];
        let mut sim = Self {
            state: GameState::new(players).with_seed(seed),
            events: EventBus::default(),
            policies,
            rules,
            policy_rng: Lcg::from_seed(!seed),
            seed,
            steps: 0,
        };
        sim.state.start_round(&sim.rules, &mut sim.events);
        sim
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Play one turn for the active seat.
    pub fn step(&mut self) -> StepRecord {
        let actor = self.state.turn();
        let policy = self
            .policies
            .get(actor)
            .copied()
            .unwrap_or(SeatPolicy::SelfShot);
        let hp_before = self.hp_snapshot();
        let magazine_before = self.state.shotgun.len();

        // items can flip the front shell, so the target is picked after them
        if magazine_before > 0 {
            self.state.use_turn_items(actor, &mut self.events);
        }
        let target = policy.choose_target(&self.state, actor, &mut self.policy_rng);
        let outcome = self.state.fire(actor, target, &mut self.events);
        let event_count = self.events.drain().count();
        self.steps += 1;

        let (shell, damage) = match outcome {
            TurnOutcome::Fired { shell, damage, .. } => (Some(shell), damage),
            TurnOutcome::MagazineEmpty => (None, 0),
        };
        StepRecord {
            step: self.steps,
            round: self.state.round,
            actor,
            target,
            shell,
            damage,
            hp_before,
            hp_after: self.hp_snapshot(),
            magazine_before,
            magazine_after: self.state.shotgun.len(),
            event_count,
        }
    }

    /// Play the current round until a seat wins or `max_turns` pass.
    pub fn play_round(&mut self, max_turns: u32, record: bool) -> RoundTrace {
        let mut steps = Vec::new();
        let mut status = RoundStatus::TurnLimit;
        for _ in 0..max_turns {
            let step = self.step();
            let stalled = step.shell.is_none();
            if record {
                steps.push(step);
            }
            if let Some(winner) = self.state.settled_winner() {
                status = RoundStatus::Won { winner };
                break;
            }
            if stalled {
                status = RoundStatus::Stalled;
                break;
            }
        }
        RoundTrace {
            seed: self.seed,
            status,
            steps,
        }
    }

    /// Play rounds until the match finishes, seat 0 loses or cashes out.
    pub fn play_session(
        &mut self,
        max_turns: u32,
        cash_out_streak: Option<u32>,
    ) -> (SessionOutcome, u32) {
        let mut rounds = 0;
        loop {
            rounds += 1;
            let trace = self.play_round(max_turns, false);
            let RoundStatus::Won { winner } = trace.status else {
                return (SessionOutcome::Unresolved, rounds);
            };
            self.state.resolve_round(winner, &mut self.events);
            if winner != TRACKED_SEAT {
                return (SessionOutcome::Lost, rounds);
            }
            if self.state.finished {
                let bank = self.state.bank;
                return (SessionOutcome::Finished { bank }, rounds);
            }
            let streak = self.state.streak;
            let keep_going = cash_out_streak.map_or(true, |limit| streak < limit);
            if double_or_nothing(&mut self.state, || keep_going, &mut self.events) {
                return (
                    SessionOutcome::CashedOut {
                        bank: self.state.bank,
                    },
                    rounds,
                );
            }
            self.state.next_round(&self.rules, &mut self.events);
            self.events.drain().for_each(drop);
        }
    }

    fn hp_snapshot(&self) -> Vec<u32> {
        self.state.players.iter().map(Player::hp).collect()
    }
}
