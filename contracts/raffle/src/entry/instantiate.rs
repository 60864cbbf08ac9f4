use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;
use cw_utils::nonpayable;
use raffle_msg::raffle::{Config, InstantiateMsg, RoundState};

use crate::{
    error::ContractError,
    state::{
        CONFIG, CONTRACT_NAME, CONTRACT_VERSION, ENTRANTS, LAST_TIMESTAMP, POOLED_BALANCE,
        ROUND_STATE,
    },
};

pub fn try_instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure!(
        !msg.entrance_fee.amount.is_zero(),
        ContractError::ZeroEntranceFee {}
    );

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        entrance_fee: msg.entrance_fee,
        interval: msg.interval,
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        gas_lane: msg.gas_lane,
        subscription_id: msg.subscription_id,
        callback_gas_limit: msg.callback_gas_limit,
    };
    CONFIG.save(deps.storage, &config)?;

    ROUND_STATE.save(deps.storage, &RoundState::Open)?;
    ENTRANTS.save(deps.storage, &vec![])?;
    POOLED_BALANCE.save(deps.storage, &Uint128::zero())?;
    LAST_TIMESTAMP.save(deps.storage, &env.block.time.seconds())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate raffle")
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string())
        .add_attribute("vrf_coordinator", config.vrf_coordinator))
}
