use cosmwasm_std::{coin, StdResult, Storage};
use raffle_msg::raffle::{RoundState, UpkeepResponse};

use crate::{
    ledger::snapshot_for_payout,
    state::{CONFIG, LAST_TIMESTAMP, ROUND_STATE},
};

/// Readiness predicate, free of side effects.
///
/// Upkeep is needed once the interval has fully elapsed while the round is
/// open and holds at least one entrant and a nonzero pool.
pub fn check_upkeep(storage: &dyn Storage, now: u64) -> StdResult<UpkeepResponse> {
    let config = CONFIG.load(storage)?;
    let state = ROUND_STATE.load(storage)?;
    let last_timestamp = LAST_TIMESTAMP.load(storage)?;
    let snapshot = snapshot_for_payout(storage)?;

    let elapsed = now.saturating_sub(last_timestamp);
    let entrant_count = snapshot.entrants.len() as u32;

    let time_passed = elapsed > config.interval;
    let is_open = state == RoundState::Open;
    let has_balance = !snapshot.balance.is_zero();
    let has_entrants = entrant_count > 0;

    Ok(UpkeepResponse {
        upkeep_needed: time_passed && is_open && has_balance && has_entrants,
        state,
        balance: coin(snapshot.balance.u128(), config.entrance_fee.denom),
        entrant_count,
        last_timestamp,
        interval: config.interval,
        elapsed,
    })
}
