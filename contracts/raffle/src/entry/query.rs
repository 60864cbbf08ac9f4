use cosmwasm_std::{coin, Addr, Coin, Deps, Env, StdResult};
use raffle_msg::raffle::{Config, RequestParams, RoundState, UpkeepResponse};

use crate::{
    error::ContractError,
    ledger,
    state::{
        CONFIG, ENTRANTS, LAST_TIMESTAMP, NUM_WORDS, PAGINATION_DEFAULT_LIMIT,
        PAGINATION_MAX_LIMIT, PENDING_REQUEST, POOLED_BALANCE, RECENT_WINNER,
        REQUEST_CONFIRMATIONS, ROUND_STATE,
    },
    upkeep::check_upkeep,
};

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_entrance_fee(deps: Deps, _env: Env) -> StdResult<Coin> {
    Ok(CONFIG.load(deps.storage)?.entrance_fee)
}

pub fn query_interval(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(CONFIG.load(deps.storage)?.interval)
}

pub fn query_round_state(deps: Deps, _env: Env) -> StdResult<RoundState> {
    ROUND_STATE.load(deps.storage)
}

pub fn query_entrant(deps: Deps, _env: Env, index: u32) -> Result<Addr, ContractError> {
    let entrants = ENTRANTS.load(deps.storage)?;

    entrants
        .get(index as usize)
        .cloned()
        .ok_or(ContractError::IndexOutOfRange {
            index,
            count: entrants.len() as u32,
        })
}

/// entrants in join order, `start_after` is an exclusive index
pub fn query_entrants(
    deps: Deps,
    _env: Env,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let start = start_after.map(|x| x as usize + 1).unwrap_or_default();
    let limit = limit
        .unwrap_or(PAGINATION_DEFAULT_LIMIT)
        .min(PAGINATION_MAX_LIMIT) as usize;

    Ok(ENTRANTS
        .load(deps.storage)?
        .into_iter()
        .skip(start)
        .take(limit)
        .collect())
}

pub fn query_entrant_count(deps: Deps, _env: Env) -> StdResult<u32> {
    ledger::entrant_count(deps.storage)
}

pub fn query_recent_winner(deps: Deps, _env: Env) -> StdResult<Option<Addr>> {
    RECENT_WINNER.may_load(deps.storage)
}

pub fn query_last_timestamp(deps: Deps, _env: Env) -> StdResult<u64> {
    LAST_TIMESTAMP.load(deps.storage)
}

pub fn query_pooled_balance(deps: Deps, _env: Env) -> StdResult<Coin> {
    let denom = CONFIG.load(deps.storage)?.entrance_fee.denom;
    let balance = POOLED_BALANCE.load(deps.storage)?;

    Ok(coin(balance.u128(), denom))
}

pub fn query_pending_request(deps: Deps, _env: Env) -> StdResult<Option<u64>> {
    PENDING_REQUEST.may_load(deps.storage)
}

pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<UpkeepResponse> {
    check_upkeep(deps.storage, env.block.time.seconds())
}

pub fn query_request_params(deps: Deps, _env: Env) -> StdResult<RequestParams> {
    let config = CONFIG.load(deps.storage)?;

    Ok(RequestParams {
        key_hash: config.gas_lane,
        subscription_id: config.subscription_id,
        request_confirmations: REQUEST_CONFIRMATIONS,
        callback_gas_limit: config.callback_gas_limit,
        num_words: NUM_WORDS,
    })
}
