use cosmwasm_std::Addr;
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

use raffle_msg::vrf_coordinator::{RandomnessRequest, Subscription};

pub const CONTRACT_NAME: &str = "crates.io:vrf-coordinator-mocks";

pub const MIN_REQUEST_CONFIRMATIONS: u16 = 3;
pub const MAX_NUM_WORDS: u32 = 500;

/// account allowed to deliver randomness
pub const OPERATOR: Admin = Admin::new("operator");

pub const SUBSCRIPTION_COUNTER: Item<u64> = Item::new("subscription counter");
pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");

pub const REQUEST_COUNTER: Item<u64> = Item::new("request counter");
/// requests waiting for fulfillment
pub const REQUESTS: Map<u64, RandomnessRequest> = Map::new("requests");

pub fn is_consumer(subscription: &Subscription, consumer: &Addr) -> bool {
    subscription.consumers.iter().any(|x| x == consumer)
}
