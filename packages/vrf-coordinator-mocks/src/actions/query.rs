use cosmwasm_std::{Addr, Deps, Env, StdResult};

use raffle_msg::vrf_coordinator::{RandomnessRequest, Subscription};

use crate::state::{OPERATOR, REQUESTS, SUBSCRIPTIONS};

pub fn query_operator(deps: Deps, _env: Env) -> StdResult<Option<Addr>> {
    OPERATOR.get(deps)
}

pub fn query_subscription(deps: Deps, _env: Env, subscription_id: u64) -> StdResult<Subscription> {
    SUBSCRIPTIONS.load(deps.storage, subscription_id)
}

/// fulfilled requests are removed, so `None` means unknown or already delivered
pub fn query_request(
    deps: Deps,
    _env: Env,
    request_id: u64,
) -> StdResult<Option<RandomnessRequest>> {
    REQUESTS.may_load(deps.storage, request_id)
}
