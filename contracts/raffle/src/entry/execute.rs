use cosmwasm_std::{
    coin, from_json, to_json_binary, BankMsg, DepsMut, Env, Event, MessageInfo, Reply, Response,
    SubMsg, SubMsgResult, Uint256, WasmMsg,
};
use cw_utils::{may_pay, nonpayable, parse_reply_execute_data};
use raffle_msg::{raffle::RoundState, vrf_coordinator::ExecuteMsg as CoordinatorExecuteMsg};

use crate::{
    contract::{PAYOUT_REPLY_ID, REQUEST_RANDOMNESS_REPLY_ID},
    error::ContractError,
    ledger,
    state::{
        Payout, CONFIG, LAST_TIMESTAMP, NUM_WORDS, PAYOUT, PENDING_REQUEST, RECENT_WINNER,
        REQUEST_CONFIRMATIONS, ROUND_STATE,
    },
    upkeep::check_upkeep,
};

/// Join the current round with the funds attached to the message
pub fn enter_raffle(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // no funds count as zero, other denoms are rejected
    let amount = may_pay(&info, &config.entrance_fee.denom)?;

    let entrant_count = ledger::join(deps.storage, &config, info.sender.clone(), amount)?;

    Ok(Response::new()
        .add_event(Event::new("raffle_entered").add_attribute("participant", info.sender.as_str()))
        .add_attribute("action", "enter_raffle")
        .add_attribute("participant", info.sender)
        .add_attribute("amount", amount)
        .add_attribute("entrant_count", entrant_count.to_string()))
}

/// Close the round and ask the coordinator for randomness.
///
/// Readiness is always evaluated here rather than trusted from the caller.
/// The request id is only known in [`handle_request_reply`].
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let upkeep = check_upkeep(deps.storage, env.block.time.seconds())?;
    if !upkeep.upkeep_needed {
        return Err(ContractError::UpkeepNotReady {
            balance: upkeep.balance.amount,
            entrant_count: upkeep.entrant_count,
            state: upkeep.state,
        });
    }

    let config = CONFIG.load(deps.storage)?;
    ROUND_STATE.save(deps.storage, &RoundState::Resolving)?;

    let msg = WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.gas_lane,
            subscription_id: config.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(msg, REQUEST_RANDOMNESS_REPLY_ID))
        .add_attribute("action", "perform_upkeep")
        .add_attribute("entrant_count", upkeep.entrant_count.to_string())
        .add_attribute("balance", upkeep.balance.to_string()))
}

/// Store the request id the coordinator allocated as the pending request
pub fn handle_request_reply(
    deps: DepsMut,
    _env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let res = parse_reply_execute_data(msg)?;
    let request_id: u64 = match res.data {
        Some(data) => from_json(data)?,
        None => return Err(ContractError::MissingRequestId {}),
    };

    PENDING_REQUEST.save(deps.storage, &request_id)?;
    deps.api
        .debug(&format!("raffle: resolving, pending request {}", request_id));

    Ok(Response::new()
        .add_event(
            Event::new("randomness_requested").add_attribute("request_id", request_id.to_string()),
        )
        .add_attribute("action", "request_randomness")
        .add_attribute("request_id", request_id.to_string()))
}

/// Coordinator callback: pick the winner, reset the round, pay out.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.vrf_coordinator {
        return Err(ContractError::OnlyCoordinatorCanFulfill {
            sender: info.sender.to_string(),
            coordinator: config.vrf_coordinator.to_string(),
        });
    }

    // cleared on success, so a replayed id is rejected here as well
    if PENDING_REQUEST.may_load(deps.storage)? != Some(request_id) {
        return Err(ContractError::UnknownRequest { request_id });
    }

    let random_word = *random_words
        .first()
        .ok_or(ContractError::NoRandomWords {})?;

    let (winner, amount) = ledger::select_and_drain(deps.storage, random_word)?;

    RECENT_WINNER.save(deps.storage, &winner)?;
    PENDING_REQUEST.remove(deps.storage);
    ROUND_STATE.save(deps.storage, &RoundState::Open)?;
    LAST_TIMESTAMP.save(deps.storage, &env.block.time.seconds())?;

    deps.api.debug(&format!(
        "raffle: request {} picked {}, round reopened",
        request_id, winner
    ));

    let prize = coin(amount.u128(), config.entrance_fee.denom);
    let mut response = Response::new()
        .add_event(Event::new("winner_picked").add_attribute("winner", winner.as_str()))
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner", winner.as_str())
        .add_attribute("prize", prize.to_string());

    if !amount.is_zero() {
        PAYOUT.save(
            deps.storage,
            &Payout {
                winner: winner.clone(),
                amount: prize.clone(),
            },
        )?;

        let msg = BankMsg::Send {
            to_address: winner.to_string(),
            amount: vec![prize],
        };
        response = response.add_submessage(SubMsg::reply_always(msg, PAYOUT_REPLY_ID));
    }

    Ok(response)
}

/// A failed transfer reverts the whole fulfillment: the round stays
/// resolving with the same pending request, entrants and pool.
pub fn handle_payout_reply(
    deps: DepsMut,
    _env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let Payout { winner, amount } = PAYOUT.load(deps.storage)?;

    match msg.result {
        SubMsgResult::Ok(_) => {
            PAYOUT.remove(deps.storage);

            Ok(Response::new()
                .add_attribute("action", "payout")
                .add_attribute("winner", winner)
                .add_attribute("amount", amount.to_string()))
        }
        SubMsgResult::Err(reason) => Err(ContractError::PayoutTransferFailed {
            winner: winner.to_string(),
            amount,
            reason,
        }),
    }
}
