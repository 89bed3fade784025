use crate::{
    AutoplayError, RoundStatus, SessionOutcome, SessionStats, SimulationConfig,
    SimulationReport, Simulator,
};
use buckshot_core::Lcg;
use std::time::Instant;

/// Play `config.games` independent single-round duels.
pub fn run_batch(config: &SimulationConfig) -> Result<SimulationReport, AutoplayError> {
    validate(config)?;
    let started_at = Instant::now();
    let mut seeds = Lcg::from_seed(config.seed);
    let mut wins = [0u32; 2];
    let mut unresolved = 0;
    let mut total_turns = 0u64;
    let mut traces = Vec::new();

    for game in 0..config.games {
        let seed = seeds.fork_seed();
        let mut sim = Simulator::new(seed, config.rules.clone(), config.policies);
        let trace = sim.play_round(config.max_turns_per_round, config.record_traces);
        total_turns += u64::from(sim.steps());
        match trace.status {
            RoundStatus::Won { winner } if winner < 2 => wins[winner] += 1,
            _ => {
                log::debug!("game {game} (seed {seed:#x}) ended without a winner");
                unresolved += 1;
            }
        }
        if config.record_traces {
            traces.push(trace);
        }
    }

    let report = SimulationReport {
        seed: config.seed,
        games: config.games,
        wins,
        unresolved,
        total_turns,
        wall_time_ms: started_at.elapsed().as_millis() as u64,
        sessions: None,
        traces,
    };
    log::info!(
        "{} games: seat 0 won {} ({:.3})",
        report.games,
        report.wins[0],
        report.player0_ratio()
    );
    Ok(report)
}

/// Play `config.games` multi-round sessions with the double-or-nothing economy.
pub fn run_sessions(config: &SimulationConfig) -> Result<SessionStats, AutoplayError> {
    validate(config)?;
    let mut seeds = Lcg::from_seed(config.seed);
    let mut stats = SessionStats::default();
    for _ in 0..config.games {
        let seed = seeds.fork_seed();
        let mut sim = Simulator::new(seed, config.rules.clone(), config.policies);
        let (outcome, rounds) =
            sim.play_session(config.max_turns_per_round, config.cash_out_streak);
        stats.sessions += 1;
        stats.rounds += u64::from(rounds);
        match outcome {
            SessionOutcome::Finished { bank } => {
                stats.finished += 1;
                stats.total_bank = stats.total_bank.saturating_add(bank);
            }
            SessionOutcome::CashedOut { bank } => {
                stats.cashed_out += 1;
                stats.total_bank = stats.total_bank.saturating_add(bank);
            }
            SessionOutcome::Lost | SessionOutcome::Unresolved => {}
        }
    }
    Ok(stats)
}

fn validate(config: &SimulationConfig) -> Result<(), AutoplayError> {
    if config.max_turns_per_round == 0 {
        return Err(AutoplayError::InvalidConfig(
            "max_turns_per_round must be positive".to_string(),
        ));
    }
    if config.rules.item_bounds().1 > 0 && config.rules.item_pool.is_empty() {
        return Err(AutoplayError::InvalidConfig(
            "items are dealt but the item pool is empty".to_string(),
        ));
    }
    Ok(())
}
