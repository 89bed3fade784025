use crate::{Event, EventBus, GameState};

/// Bank value of cashing out a streak: `2^streak`, saturating.
pub fn payout(streak: u32) -> u64 {
    2u64.checked_pow(streak).unwrap_or(u64::MAX)
}

/// Ask `decide` whether to keep the streak going. Declining banks the
/// payout and resets the streak. Returns true when the player cashed out.
pub fn double_or_nothing<F>(state: &mut GameState, decide: F, events: &mut EventBus) -> bool
where
    F: FnOnce() -> bool,
{
    if decide() {
        return false;
    }
    let amount = payout(state.streak);
    state.bank = state.bank.saturating_add(amount);
    state.streak = 0;
    log::info!("cashed out {amount}; bank {}", state.bank);
    events.push(Event::CashedOut {
        amount,
        bank: state.bank,
    });
    true
}
