use crate::{apply_item, EventBus, GameState, ItemKind, ShellType, TurnOutcome};

/// Seat driven by the scripted dealer.
pub const DEALER_SEAT: usize = 1;

/// Kinds the dealer reaches for, most wanted first. Anything else is held.
pub const DEALER_PRIORITY: [ItemKind; 7] = [
    ItemKind::Handcuffs,
    ItemKind::Adrenaline,
    ItemKind::MagnifyingGlass,
    ItemKind::Burner,
    ItemKind::Inverter,
    ItemKind::Beer,
    ItemKind::Handsaw,
];

/// Apply at most one dealer item: the first held kind in priority order.
pub fn dealer_use_items(state: &mut GameState, events: &mut EventBus) -> Option<ItemKind> {
    let dealer = state.players.get_mut(DEALER_SEAT)?;
    let slot = DEALER_PRIORITY
        .iter()
        .find_map(|kind| dealer.items.position(*kind))?;
    let item = dealer.items.remove_at(slot).ok()?;
    apply_item(state, DEALER_SEAT, item, events);
    Some(item.kind())
}

/// A full dealer turn: use an item, then pick the target from the shell the
/// item left at the front, then fire.
pub fn dealer_take_turn(state: &mut GameState, events: &mut EventBus) -> TurnOutcome {
    if !state.shotgun.is_empty() {
        dealer_use_items(state, events);
    }
    let target = dealer_choose_target(state);
    state.fire(DEALER_SEAT, target, events)
}

/// Seat the dealer aims at: the human when the front shell is live,
/// otherwise itself. Reads the magazine without touching it.
pub fn dealer_choose_target(state: &GameState) -> usize {
    match state.shotgun.front() {
        Some(shell) if shell.kind == ShellType::Live => crate::TRACKED_SEAT,
        _ => DEALER_SEAT,
    }
}
