use crate::{GameState, Item, Player, RandomSource, RulesConfig, Shell, ShellType, Shotgun};

/// Give every player the same freshly rolled `hp == hp_max`.
pub fn set_round_hp(
    state: &mut GameState,
    rng: &mut dyn RandomSource,
    config: &RulesConfig,
) -> u32 {
    roll_hp(&mut state.players, rng, config)
}

/// Load an even-sized magazine with at least one live and one blank, then
/// Fisher-Yates shuffle it. Returns the number of shells loaded.
pub fn load_shotgun(
    state: &mut GameState,
    rng: &mut dyn RandomSource,
    config: &RulesConfig,
) -> usize {
    fill_magazine(&mut state.shotgun, rng, config)
}

pub(crate) fn roll_hp(
    players: &mut [Player],
    rng: &mut dyn RandomSource,
    config: &RulesConfig,
) -> u32 {
    let (min, max) = config.hp_bounds();
    let hp_max = min + rng.index((max - min + 1) as usize) as u32;
    for player in players {
        player.set_round_hp(hp_max);
    }
    hp_max
}

pub(crate) fn fill_magazine(
    shotgun: &mut Shotgun,
    rng: &mut dyn RandomSource,
    config: &RulesConfig,
) -> usize {
    let (min, max) = config.shell_bounds();
    let pairs = (max - min) / 2 + 1;
    let count = min + rng.index(pairs) * 2;

    let mut shells = Vec::with_capacity(count);
    shells.push(Shell::live());
    shells.push(Shell::blank());
    for _ in 2..count {
        let kind = if rng.next_f64() < 0.5 {
            ShellType::Live
        } else {
            ShellType::Blank
        };
        shells.push(Shell::new(kind));
    }
    for i in (1..shells.len()).rev() {
        let j = rng.index(i + 1);
        shells.swap(i, j);
    }
    shotgun.load(shells);
    count
}

/// Deal each player a rolled number of items from the configured pool.
/// A dealt jammer aims at the next seat.
pub fn deal_items(players: &mut [Player], rng: &mut dyn RandomSource, config: &RulesConfig) {
    if !config.deals_items() {
        return;
    }
    let (min, max) = config.item_bounds();
    let seats = players.len();
    for (seat, player) in players.iter_mut().enumerate() {
        let count = min + rng.index(max - min + 1);
        for _ in 0..count {
            let kind = config.item_pool[rng.index(config.item_pool.len())];
            player.items.push(Item::from_kind(kind, (seat + 1) % seats));
        }
    }
}
