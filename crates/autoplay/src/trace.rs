use crate::AutoplayError;
use buckshot_core::ShellType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundStatus {
    Won { winner: usize },
    TurnLimit,
    Stalled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub round: u32,
    pub actor: usize,
    pub target: usize,
    pub shell: Option<ShellType>,
    pub damage: u32,
    pub hp_before: Vec<u32>,
    pub hp_after: Vec<u32>,
    pub magazine_before: usize,
    pub magazine_after: usize,
    pub event_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTrace {
    pub seed: u64,
    pub status: RoundStatus,
    pub steps: Vec<StepRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub sessions: u32,
    pub finished: u32,
    pub cashed_out: u32,
    pub total_bank: u64,
    pub rounds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub games: u32,
    pub wins: [u32; 2],
    pub unresolved: u32,
    pub total_turns: u64,
    pub wall_time_ms: u64,
    #[serde(default)]
    pub sessions: Option<SessionStats>,
    #[serde(default)]
    pub traces: Vec<RoundTrace>,
}

impl SimulationReport {
    /// Share of decided games won by seat 0.
    pub fn player0_ratio(&self) -> f64 {
        let decided = self.wins[0] + self.wins[1];
        if decided == 0 {
            return 0.0;
        }
        f64::from(self.wins[0]) / f64::from(decided)
    }

    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(self.games)
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("seed: {:#x}", self.seed),
            format!(
                "games: {} (seat 0: {}, seat 1: {}, unresolved: {})",
                self.games, self.wins[0], self.wins[1], self.unresolved
            ),
            format!("seat 0 win ratio: {:.4}", self.player0_ratio()),
            format!("mean turns per round: {:.2}", self.mean_turns()),
            format!("wall time: {}ms", self.wall_time_ms),
        ];
        if let Some(stats) = self.sessions.as_ref() {
            lines.push(format!(
                "sessions: {} finished: {} cashed out: {} rounds: {} bank total: {}",
                stats.sessions, stats.finished, stats.cashed_out, stats.rounds, stats.total_bank
            ));
        }
        for trace in &self.traces {
            lines.push(String::new());
            lines.push(format!("round seed {:#x}: {}", trace.seed, status_label(trace.status)));
            for step in &trace.steps {
                let shell = step.shell.map(ShellType::label).unwrap_or("-");
                lines.push(format!(
                    "  {:>3} | seat {} -> seat {} {:<5} dmg {} | hp {:?} -> {:?} | shells {} -> {}",
                    step.step,
                    step.actor,
                    step.target,
                    shell,
                    step.damage,
                    step.hp_before,
                    step.hp_after,
                    step.magazine_before,
                    step.magazine_after
                ));
            }
        }
        lines.join("\n")
    }
}

fn status_label(status: RoundStatus) -> String {
    match status {
        RoundStatus::Won { winner } => format!("won by seat {winner}"),
        RoundStatus::TurnLimit => "turn limit".to_string(),
        RoundStatus::Stalled => "stalled".to_string(),
    }
}

pub fn write_json(path: &Path, report: &SimulationReport) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, report: &SimulationReport) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, report.to_text_report())?;
    Ok(())
}
