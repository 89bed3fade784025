mod persistence;
mod play;
mod view;

use anyhow::{Context, Result};
use buckshot_autoplay::{
    run_batch, run_sessions, write_json, write_text, SeatPolicy, SimulationConfig,
};
use buckshot_core::RulesConfig;
use clap::{Parser, Subcommand, ValueEnum};
use persistence::{default_state_path, load_rules_file, load_state_file};
use play::{PlayOptions, Session};
use std::path::PathBuf;

/// Buckshot Roulette
#[derive(Parser)]
#[command(name = "buckshot")]
#[command(about = "Play or simulate Buckshot Roulette duels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rules file (JSON); missing fields fall back to defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the dealer on the terminal
    Play {
        /// Seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,

        /// Save file used by `save` and `load` without an argument
        #[arg(long)]
        save: Option<PathBuf>,

        /// Continue from the save file instead of starting fresh
        #[arg(long)]
        resume: bool,
    },

    /// Run headless duels and report win rates
    Simulate {
        #[arg(short, long, default_value = "10000")]
        games: u32,

        #[arg(short, long, default_value = "12648430")]
        seed: u64,

        /// Target policy for seat 0
        #[arg(long, value_enum, default_value = "self")]
        seat0: PolicyArg,

        /// Target policy for seat 1
        #[arg(long, value_enum, default_value = "self")]
        seat1: PolicyArg,

        /// Turn cap per round before it counts as unresolved
        #[arg(long, default_value = "64")]
        max_turns: u32,

        /// Also play full double-or-nothing sessions
        #[arg(long)]
        sessions: bool,

        /// Streak at which seat 0 cashes out during sessions; never when omitted
        #[arg(long)]
        cash_out: Option<u32>,

        /// Keep per-step traces in the JSON report
        #[arg(long)]
        traces: bool,

        #[arg(long)]
        json: Option<PathBuf>,

        #[arg(long)]
        text: Option<PathBuf>,
    },

    /// Print a saved game
    Inspect {
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    #[value(name = "self")]
    SelfShot,
    Dealer,
    Opponent,
    Random,
}

impl From<PolicyArg> for SeatPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::SelfShot => SeatPolicy::SelfShot,
            PolicyArg::Dealer => SeatPolicy::Dealer,
            PolicyArg::Opponent => SeatPolicy::Opponent,
            PolicyArg::Random => SeatPolicy::Random,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let rules = match &cli.config {
        Some(path) => Some(load_rules_file(path)?),
        None => None,
    };

    match cli.command {
        Commands::Play { seed, save, resume } => {
            let save_path = save.or_else(default_state_path);
            let resume = if resume {
                let path = save_path
                    .as_deref()
                    .context("no save file to resume from; pass --save")?;
                Some(load_state_file(path)?)
            } else {
                None
            };
            let mut session = Session::new(PlayOptions {
                seed,
                rules: rules.unwrap_or_else(table_rules),
                save_path,
                resume,
            });
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout())?;
        }
        Commands::Simulate {
            games,
            seed,
            seat0,
            seat1,
            max_turns,
            sessions,
            cash_out,
            traces,
            json,
            text,
        } => {
            let config = SimulationConfig {
                seed,
                games,
                max_turns_per_round: max_turns,
                rules: rules.unwrap_or_default(),
                policies: [seat0.into(), seat1.into()],
                cash_out_streak: cash_out,
                record_traces: traces,
            };
            let mut report = run_batch(&config)?;
            if sessions {
                report.sessions = Some(run_sessions(&config)?);
            }
            println!("{}", report.to_text_report());
            if let Some(path) = json {
                write_json(&path, &report)?;
                log::info!("wrote {}", path.display());
            }
            if let Some(path) = text {
                write_text(&path, &report)?;
                log::info!("wrote {}", path.display());
            }
        }
        Commands::Inspect { path } => {
            let path = path
                .or_else(default_state_path)
                .context("no save path given")?;
            let state = load_state_file(&path)?;
            for line in view::status_lines(&state) {
                println!("{line}");
            }
            println!("{}", state.to_json_pretty()?);
        }
    }
    Ok(())
}

/// Interactive games deal a few items per round unless a rules file says otherwise.
fn table_rules() -> RulesConfig {
    RulesConfig {
        items_min: 1,
        items_max: 3,
        ..RulesConfig::default()
    }
}
