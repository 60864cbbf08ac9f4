use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint256, WasmMsg,
};
use cw_utils::nonpayable;

use raffle_msg::vrf_coordinator::{ConsumerExecuteMsg, RandomnessRequest, Subscription};

use crate::{
    error::ContractError,
    state::{
        is_consumer, MAX_NUM_WORDS, MIN_REQUEST_CONFIRMATIONS, OPERATOR, REQUESTS,
        REQUEST_COUNTER, SUBSCRIPTIONS, SUBSCRIPTION_COUNTER,
    },
};

pub fn try_create_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let subscription_id = SUBSCRIPTION_COUNTER.update(deps.storage, |x| -> StdResult<u64> {
        Ok(x + 1)
    })?;

    SUBSCRIPTIONS.save(
        deps.storage,
        subscription_id,
        &Subscription {
            owner: info.sender.clone(),
            consumers: vec![],
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&subscription_id)?)
        .add_attribute("action", "create_subscription")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("subscription_id", subscription_id.to_string()))
}

pub fn try_add_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    subscription_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let consumer = deps.api.addr_validate(&consumer)?;
    let mut subscription = load_owned_subscription(deps.as_ref(), &info.sender, subscription_id)?;

    // adding a registered consumer again is a no-op
    if !is_consumer(&subscription, &consumer) {
        subscription.consumers.push(consumer.clone());
        SUBSCRIPTIONS.save(deps.storage, subscription_id, &subscription)?;
    }

    Ok(Response::new()
        .add_attribute("action", "add_consumer")
        .add_attribute("subscription_id", subscription_id.to_string())
        .add_attribute("consumer", consumer.as_str()))
}

pub fn try_remove_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    subscription_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let consumer = deps.api.addr_validate(&consumer)?;
    let mut subscription = load_owned_subscription(deps.as_ref(), &info.sender, subscription_id)?;

    ensure!(
        is_consumer(&subscription, &consumer),
        ContractError::InvalidConsumer {
            subscription_id,
            consumer: consumer.to_string(),
        }
    );

    subscription.consumers.retain(|x| x != &consumer);
    SUBSCRIPTIONS.save(deps.storage, subscription_id, &subscription)?;

    Ok(Response::new()
        .add_attribute("action", "remove_consumer")
        .add_attribute("subscription_id", subscription_id.to_string())
        .add_attribute("consumer", consumer.as_str()))
}

#[allow(clippy::too_many_arguments)]
pub fn try_request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    key_hash: String,
    subscription_id: u64,
    request_confirmations: u16,
    callback_gas_limit: u32,
    num_words: u32,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let subscription = SUBSCRIPTIONS
        .may_load(deps.storage, subscription_id)?
        .ok_or(ContractError::InvalidSubscription { subscription_id })?;

    ensure!(
        is_consumer(&subscription, &info.sender),
        ContractError::InvalidConsumer {
            subscription_id,
            consumer: info.sender.to_string(),
        }
    );
    ensure!(
        request_confirmations >= MIN_REQUEST_CONFIRMATIONS,
        ContractError::InvalidRequestConfirmations {
            have: request_confirmations,
            want: MIN_REQUEST_CONFIRMATIONS,
        }
    );
    ensure!(num_words != 0, ContractError::ZeroNumWords);
    ensure!(
        num_words <= MAX_NUM_WORDS,
        ContractError::NumWordsTooBig {
            have: num_words,
            want: MAX_NUM_WORDS,
        }
    );

    let request_id =
        REQUEST_COUNTER.update(deps.storage, |x| -> StdResult<u64> { Ok(x + 1) })?;

    REQUESTS.save(
        deps.storage,
        request_id,
        &RandomnessRequest {
            consumer: info.sender.clone(),
            subscription_id,
            key_hash: key_hash.clone(),
            request_confirmations,
            callback_gas_limit,
            num_words,
            requested_at_height: env.block.height,
        },
    )?;

    deps.api.debug(&format!(
        "vrf coordinator: request {} from {} at height {}",
        request_id, info.sender, env.block.height
    ));

    Ok(Response::new()
        .set_data(to_json_binary(&request_id)?)
        .add_attribute("action", "random_words_requested")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("consumer", info.sender.as_str())
        .add_attribute("key_hash", &key_hash)
        .add_attribute("subscription_id", subscription_id.to_string())
        .add_attribute("num_words", num_words.to_string()))
}

pub fn try_fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OPERATOR.assert_admin(deps.as_ref(), &info.sender)?;

    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::NonexistentRequest { request_id })?;

    let ready_at = request.requested_at_height + request.request_confirmations as u64;
    ensure!(
        env.block.height >= ready_at,
        ContractError::ConfirmationsPending {
            request_id,
            ready_at,
        }
    );
    ensure_eq!(
        random_words.len(),
        request.num_words as usize,
        ContractError::WrongWordCount {
            have: random_words.len(),
            want: request.num_words,
        }
    );

    // a failing consumer reverts the whole delivery, so the request stays deliverable
    REQUESTS.remove(deps.storage, request_id);

    let msg = WasmMsg::Execute {
        contract_addr: request.consumer.to_string(),
        msg: to_json_binary(&ConsumerExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "random_words_fulfilled")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("consumer", request.consumer.as_str()))
}

pub fn try_update_operator(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OPERATOR.assert_admin(deps.as_ref(), &info.sender)?;

    let operator = deps.api.addr_validate(&operator)?;
    OPERATOR.set(deps.branch(), Some(operator.clone()))?;

    Ok(Response::new()
        .add_attribute("action", "update_operator")
        .add_attribute("operator", operator.as_str()))
}

fn load_owned_subscription(
    deps: Deps,
    sender: &Addr,
    subscription_id: u64,
) -> Result<Subscription, ContractError> {
    let subscription = SUBSCRIPTIONS
        .may_load(deps.storage, subscription_id)?
        .ok_or(ContractError::InvalidSubscription { subscription_id })?;
    ensure_eq!(&subscription.owner, sender, ContractError::MustBeSubOwner);

    Ok(subscription)
}
