use crate::persistence::{load_state_file, save_state_file};
use crate::view::{describe_event, status_lines};
use anyhow::{bail, Context, Result};
use buckshot_core::{
    dealer_take_turn, double_or_nothing, EventBus, GameState, Lcg, Player, RulesConfig,
    TurnOutcome, DEALER_SEAT,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const HUMAN_SEAT: usize = 0;

const HELP: &str = "\
commands: shoot [self|dealer], use <n>, status, save [file], load [file], help, quit
items you still hold are spent automatically when you shoot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aim {
    Myself,
    Dealer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shoot(Aim),
    /// One-based slot as shown by `status`.
    Use(usize),
    Status,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        bail!("empty command");
    };
    let arg = parts.next();
    let command = match head.to_ascii_lowercase().as_str() {
        "shoot" | "s" => match arg.map(str::to_ascii_lowercase).as_deref() {
            None | Some("self") | Some("me") => Command::Shoot(Aim::Myself),
            Some("dealer") | Some("d") => Command::Shoot(Aim::Dealer),
            Some(other) => bail!("unknown target: {other}"),
        },
        "use" | "u" => {
            let Some(raw) = arg else {
                bail!("usage: use <n>");
            };
            let slot: usize = raw
                .parse()
                .with_context(|| format!("invalid item number: {raw}"))?;
            if slot == 0 {
                bail!("item numbers start at 1");
            }
            Command::Use(slot)
        }
        "status" | "st" => Command::Status,
        "save" => Command::Save(arg.map(PathBuf::from)),
        "load" => Command::Load(arg.map(PathBuf::from)),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => bail!("unknown command: {other}"),
    };
    Ok(command)
}

#[derive(Debug, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub rules: RulesConfig,
    pub save_path: Option<PathBuf>,
    pub resume: Option<GameState>,
}

pub struct Session {
    pub state: GameState,
    events: EventBus,
    rules: RulesConfig,
    save_path: Option<PathBuf>,
}

impl Session {
    pub fn new(options: PlayOptions) -> Self {
        let mut events = EventBus::default();
        let state = match options.resume {
            Some(state) => state,
            None => {
                let seed = options
                    .seed
                    .unwrap_or_else(|| Lcg::from_entropy().state());
                log::info!("new game with seed {seed}");
                let mut state = GameState::new(vec![Player::new("You"), Player::new("Dealer")])
                    .with_seed(seed);
                state.start_round(&options.rules, &mut events);
                state
            }
        };
        Self {
            state,
            events,
            rules: options.rules,
            save_path: options.save_path,
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "Buckshot Roulette. Type 'help' for commands.")?;
        self.flush_events(&mut out)?;
        self.print_status(&mut out)?;
        loop {
            self.flush_events(&mut out)?;
            if self.state.finished {
                writeln!(out, "You walk away with {}.", self.state.bank)?;
                return Ok(());
            }
            if let Some(winner) = self.state.settled_winner() {
                if !self.finish_round(winner, &mut input, &mut out)? {
                    return Ok(());
                }
                continue;
            }
            let seat = self.state.turn();
            if seat != HUMAN_SEAT {
                let outcome = if seat == DEALER_SEAT {
                    dealer_take_turn(&mut self.state, &mut self.events)
                } else {
                    self.state.take_turn(seat, &mut self.events)
                };
                if outcome == TurnOutcome::MagazineEmpty {
                    // nobody can win an unloaded round; deal a fresh one
                    log::warn!("seat {seat} faced an empty magazine; reloading");
                    self.state.next_round(&self.rules, &mut self.events);
                }
                continue;
            }
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            if line.trim().is_empty() {
                continue;
            }
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            if !self.apply(command, &mut out)? {
                return Ok(());
            }
        }
    }

    /// Returns false when the player quits.
    fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        match command {
            Command::Shoot(aim) => {
                let target = match aim {
                    Aim::Myself => HUMAN_SEAT,
                    Aim::Dealer => DEALER_SEAT,
                };
                if let TurnOutcome::MagazineEmpty =
                    self.state
                        .take_turn_at(HUMAN_SEAT, target, &mut self.events)
                {
                    log::debug!("shot attempted on an empty magazine");
                }
            }
            Command::Use(slot) => {
                if let Err(err) = self
                    .state
                    .use_item_at(HUMAN_SEAT, slot - 1, &mut self.events)
                {
                    writeln!(out, "{err}")?;
                }
            }
            Command::Status => self.print_status(out)?,
            Command::Save(path) => match self.target_path(path) {
                Some(path) => match save_state_file(&self.state, &path) {
                    Ok(()) => writeln!(out, "saved to {}", path.display())?,
                    Err(err) => writeln!(out, "{err:#}")?,
                },
                None => writeln!(out, "no save path; pass one explicitly")?,
            },
            Command::Load(path) => match self.target_path(path) {
                Some(path) => match load_state_file(&path) {
                    Ok(state) => {
                        self.state = state;
                        self.events.drain().for_each(drop);
                        writeln!(out, "loaded {}", path.display())?;
                        self.print_status(out)?;
                    }
                    Err(err) => writeln!(out, "{err:#}")?,
                },
                None => writeln!(out, "no save path; pass one explicitly")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Settle the round, offer double or nothing to a winning player and
    /// reload. Returns false when input ran out at the prompt.
    fn finish_round<R: BufRead, W: Write>(
        &mut self,
        winner: usize,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool> {
        self.state.resolve_round(winner, &mut self.events);
        self.flush_events(out)?;
        if self.state.finished {
            return Ok(true);
        }
        let mut more_input = true;
        if winner == HUMAN_SEAT {
            write!(
                out,
                "Double or nothing? Current payout {}. [y/n] ",
                buckshot_core::payout(self.state.streak)
            )?;
            out.flush()?;
            let answer = read_line(input)?;
            more_input = answer.is_some();
            let keep = answer
                .map(|line| line.trim().to_ascii_lowercase().starts_with('y'))
                .unwrap_or(false);
            double_or_nothing(&mut self.state, || keep, &mut self.events);
        }
        self.state.next_round(&self.rules, &mut self.events);
        self.flush_events(out)?;
        self.print_status(out)?;
        Ok(more_input)
    }

    fn target_path(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| self.save_path.clone())
    }

    fn flush_events<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let events: Vec<_> = self.events.drain().collect();
        for event in &events {
            if let Some(line) = describe_event(&self.state, event) {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in status_lines(&self.state) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
