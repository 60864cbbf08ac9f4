use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use cw_utils::nonpayable;

use raffle_msg::vrf_coordinator::InstantiateMsg;

use crate::{
    error::ContractError,
    state::{CONTRACT_NAME, OPERATOR, REQUEST_COUNTER, SUBSCRIPTION_COUNTER},
};

const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn try_instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let operator = match msg.operator {
        Some(x) => deps.api.addr_validate(&x)?,
        None => info.sender,
    };
    OPERATOR.set(deps.branch(), Some(operator.clone()))?;

    SUBSCRIPTION_COUNTER.save(deps.storage, &0)?;
    REQUEST_COUNTER.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate vrf coordinator mock")
        .add_attribute("operator", operator.as_str()))
}
