use crate::play::HUMAN_SEAT;
use buckshot_core::{Event, GameState, ShellType};

pub fn seat_name(state: &GameState, seat: usize) -> &str {
    state
        .players
        .get(seat)
        .map(|player| player.name.as_str())
        .unwrap_or("?")
}

pub fn status_lines(state: &GameState) -> Vec<String> {
    let mut lines = vec![format!(
        "Round {} | streak {} | bank {} | shells {} ({} live, {} blank)",
        state.round,
        state.streak,
        state.bank,
        state.shotgun.len(),
        state.shotgun.live_count(),
        state.shotgun.blank_count(),
    )];
    for (seat, player) in state.players.iter().enumerate() {
        let marker = if seat == state.turn() { '>' } else { ' ' };
        let mut line = format!(
            "{marker} {} {}/{} hp",
            player.name,
            player.hp(),
            player.hp_max()
        );
        if player.cuffed {
            line.push_str(" [cuffed]");
        }
        if player.flags.skip {
            line.push_str(" [skips next turn]");
        }
        if let Some(shell) = player.last_revealed {
            line.push_str(&format!(" [saw {}]", shell.label()));
        }
        lines.push(line);
        for (slot, item) in player.items.iter().enumerate() {
            lines.push(format!("    {}. {}", slot + 1, item.name()));
        }
    }
    lines
}

/// "You shoot" for the human seat, "Dealer shoots" for everyone else.
fn acts(state: &GameState, seat: usize, verb: &str) -> String {
    if seat == HUMAN_SEAT {
        format!("You {verb}")
    } else {
        format!("{} {verb}s", seat_name(state, seat))
    }
}

fn object(state: &GameState, actor: usize, target: usize) -> String {
    match (actor == target, target == HUMAN_SEAT) {
        (true, true) => "yourself".to_string(),
        (true, false) => "itself".to_string(),
        (false, true) => "you".to_string(),
        (false, false) => seat_name(state, target).to_string(),
    }
}

pub fn describe_event(state: &GameState, event: &Event) -> Option<String> {
    let line = match event {
        Event::RoundStarted {
            round,
            hp_max,
            shells,
            live,
        } => format!("-- Round {round}: {hp_max} hp each, {shells} shells loaded ({live} live) --"),
        Event::ShellFired {
            actor,
            target,
            shell,
            damage,
        } => {
            let shot = format!(
                "{} {}",
                acts(state, *actor, "shoot"),
                object(state, *actor, *target)
            );
            match shell {
                ShellType::Live => format!("{shot}: LIVE, {damage} damage"),
                ShellType::Blank => format!("{shot}: blank"),
            }
        }
        Event::ItemUsed { player, item } => {
            format!("{} {}", acts(state, *player, "use"), item.name())
        }
        Event::ItemStolen {
            thief,
            victim,
            item,
        } => format!(
            "{} {} from {}",
            acts(state, *thief, "steal"),
            item.name(),
            object(state, *thief, *victim)
        ),
        Event::TurnSkipped { player } => format!("{} a turn", acts(state, *player, "lose")),
        Event::MagazineEmpty => "The shotgun is empty.".to_string(),
        Event::RoundResolved {
            winner,
            streak,
            finished,
        } => {
            let mut line = format!("{} the round (streak {streak})", acts(state, *winner, "win"));
            if *finished {
                line.push_str(". Game over.");
            }
            line
        }
        Event::CashedOut { amount, bank } => format!("Cashed out {amount}. Bank: {bank}"),
        Event::TurnPassed { .. } | Event::PhaseChanged { .. } => return None,
    };
    Some(line)
}
