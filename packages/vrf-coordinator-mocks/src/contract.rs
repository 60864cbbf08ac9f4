#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};

use raffle_msg::vrf_coordinator::{ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::{
    actions::{execute as e, instantiate::try_instantiate, query as q},
    error::ContractError,
};

/// Creates a new contract with the specified parameters packed in the "msg" variable
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes all the execute functions available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateSubscription {} => e::try_create_subscription(deps, env, info),

        ExecuteMsg::AddConsumer {
            subscription_id,
            consumer,
        } => e::try_add_consumer(deps, env, info, subscription_id, consumer),

        ExecuteMsg::RemoveConsumer {
            subscription_id,
            consumer,
        } => e::try_remove_consumer(deps, env, info, subscription_id, consumer),

        ExecuteMsg::RequestRandomWords {
            key_hash,
            subscription_id,
            request_confirmations,
            callback_gas_limit,
            num_words,
        } => e::try_request_random_words(
            deps,
            env,
            info,
            key_hash,
            subscription_id,
            request_confirmations,
            callback_gas_limit,
            num_words,
        ),

        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => e::try_fulfill_random_words(deps, env, info, request_id, random_words),

        ExecuteMsg::UpdateOperator { operator } => {
            e::try_update_operator(deps, env, info, operator)
        }
    }
}

/// Exposes all the queries available in the contract
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Operator {} => to_json_binary(&q::query_operator(deps, env)?),

        QueryMsg::Subscription { subscription_id } => {
            to_json_binary(&q::query_subscription(deps, env, subscription_id)?)
        }

        QueryMsg::Request { request_id } => {
            to_json_binary(&q::query_request(deps, env, request_id)?)
        }
    }
}
