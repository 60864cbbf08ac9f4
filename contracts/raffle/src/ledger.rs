//! Pool ledger: entrants of the current round and the fees they paid.
//!
//! Only the round controller calls into this module. Every function runs
//! inside a single execute call, so the drain in [`select_and_drain`] is
//! never observed half done.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128, Uint256};
use raffle_msg::raffle::{Config, RoundState};

use crate::{
    error::ContractError,
    state::{ENTRANTS, POOLED_BALANCE, ROUND_STATE},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PoolSnapshot {
    pub entrants: Vec<Addr>,
    pub balance: Uint128,
}

/// Records one entry for `participant`, returns the new entrant count.
pub fn join(
    storage: &mut dyn Storage,
    config: &Config,
    participant: Addr,
    amount: Uint128,
) -> Result<u32, ContractError> {
    if amount < config.entrance_fee.amount {
        return Err(ContractError::InsufficientFee {
            sent: amount,
            required: config.entrance_fee.amount,
        });
    }

    let state = ROUND_STATE.load(storage)?;
    if state != RoundState::Open {
        return Err(ContractError::RoundNotAcceptingEntries { state });
    }

    let mut entrants = ENTRANTS.load(storage)?;
    entrants.push(participant);
    ENTRANTS.save(storage, &entrants)?;

    POOLED_BALANCE.update(storage, |x| -> StdResult<Uint128> { Ok(x.checked_add(amount)?) })?;

    Ok(entrants.len() as u32)
}

pub fn snapshot_for_payout(storage: &dyn Storage) -> StdResult<PoolSnapshot> {
    Ok(PoolSnapshot {
        entrants: ENTRANTS.load(storage)?,
        balance: POOLED_BALANCE.load(storage)?,
    })
}

/// Picks `entrants[random_word % entrant_count]` and empties the pool.
///
/// Modulo reduction favors low indices by at most `entrant_count / 2^256`,
/// negligible for any realistic entrant count.
pub fn select_and_drain(
    storage: &mut dyn Storage,
    random_word: Uint256,
) -> Result<(Addr, Uint128), ContractError> {
    let PoolSnapshot { entrants, balance } = snapshot_for_payout(storage)?;
    if entrants.is_empty() {
        return Err(ContractError::NoEntrants {});
    }

    let winner_index = winner_index(random_word, entrants.len())?;
    let winner = entrants[winner_index].clone();

    ENTRANTS.save(storage, &vec![])?;
    POOLED_BALANCE.save(storage, &Uint128::zero())?;

    Ok((winner, balance))
}

pub fn entrant_count(storage: &dyn Storage) -> StdResult<u32> {
    Ok(ENTRANTS.load(storage)?.len() as u32)
}

fn winner_index(random_word: Uint256, entrant_count: usize) -> StdResult<usize> {
    let index = random_word.checked_rem(Uint256::from(entrant_count as u64))?;
    // the remainder is below entrant_count, which fits usize
    Ok(Uint128::try_from(index)?.u128() as usize)
}
