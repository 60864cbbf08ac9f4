use cosmwasm_std::{
    ensure, ensure_eq, entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply,
    Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use raffle_msg::raffle::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use semver::Version;

use crate::{
    entry::{
        execute::{
            enter_raffle, fulfill_random_words, handle_payout_reply, handle_request_reply,
            perform_upkeep,
        },
        instantiate::try_instantiate,
        query::{
            query_check_upkeep, query_config, query_entrant, query_entrant_count,
            query_entrants, query_entrance_fee, query_interval, query_last_timestamp,
            query_pending_request, query_pooled_balance, query_recent_winner,
            query_request_params, query_round_state,
        },
    },
    error::ContractError,
    state::{CONTRACT_NAME, CONTRACT_VERSION},
};

pub const REQUEST_RANDOMNESS_REPLY_ID: u64 = 1;
pub const PAYOUT_REPLY_ID: u64 = 2;

/// Creates a new contract with the specified parameters in the [`InstantiateMsg`].
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes execute functions available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => enter_raffle(deps, env, info),
        ExecuteMsg::PerformUpkeep {} => perform_upkeep(deps, env, info),
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

/// Exposes queries available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&query_config(deps, env)?)?),
        QueryMsg::EntranceFee {} => Ok(to_json_binary(&query_entrance_fee(deps, env)?)?),
        QueryMsg::Interval {} => Ok(to_json_binary(&query_interval(deps, env)?)?),
        QueryMsg::RoundState {} => Ok(to_json_binary(&query_round_state(deps, env)?)?),
        QueryMsg::Entrant { index } => Ok(to_json_binary(&query_entrant(deps, env, index)?)?),
        QueryMsg::Entrants { start_after, limit } => Ok(to_json_binary(&query_entrants(
            deps,
            env,
            start_after,
            limit,
        )?)?),
        QueryMsg::EntrantCount {} => Ok(to_json_binary(&query_entrant_count(deps, env)?)?),
        QueryMsg::RecentWinner {} => Ok(to_json_binary(&query_recent_winner(deps, env)?)?),
        QueryMsg::LastTimestamp {} => Ok(to_json_binary(&query_last_timestamp(deps, env)?)?),
        QueryMsg::PooledBalance {} => Ok(to_json_binary(&query_pooled_balance(deps, env)?)?),
        QueryMsg::PendingRequest {} => {
            Ok(to_json_binary(&query_pending_request(deps, env)?)?)
        }
        QueryMsg::CheckUpkeep {} => Ok(to_json_binary(&query_check_upkeep(deps, env)?)?),
        QueryMsg::RequestParams {} => Ok(to_json_binary(&query_request_params(deps, env)?)?),
    }
}

/// Migrates stored state to this code version.
///
/// The stored contract name must match unless `update_contract_name` is set,
/// and downgrades are refused. Round state is left untouched.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;

    if !msg.update_contract_name.unwrap_or_default() {
        ensure_eq!(
            stored.contract,
            CONTRACT_NAME,
            ContractError::ContractNameErr(stored.contract.clone())
        );
    }

    let code_version: Version = CONTRACT_VERSION.parse()?;
    let stored_version: Version = stored.version.parse()?;
    ensure!(
        code_version >= stored_version,
        ContractError::VersionErr(stored.version.clone())
    );

    if code_version > stored_version || stored.contract != CONTRACT_NAME {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REQUEST_RANDOMNESS_REPLY_ID => handle_request_reply(deps, env, msg),
        PAYOUT_REPLY_ID => handle_payout_reply(deps, env, msg),
        id => Err(ContractError::UnknownReplyId(id)),
    }
}
