use crate::SeatPolicy;
use buckshot_core::RulesConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub seed: u64,
    pub games: u32,
    pub max_turns_per_round: u32,
    pub rules: RulesConfig,
    pub policies: [SeatPolicy; 2],
    /// Streak at which seat 0 cashes out in session play. `None` never does.
    pub cash_out_streak: Option<u32>,
    pub record_traces: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            games: 10_000,
            max_turns_per_round: 64,
            rules: RulesConfig::default(),
            policies: [SeatPolicy::SelfShot, SeatPolicy::SelfShot],
            cash_out_streak: Some(2),
            record_traces: false,
        }
    }
}
