use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};
use cw_storage_plus::Item;
use raffle_msg::raffle::{Config, RoundState};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "crates.io:raffle";

/// Contract version that is used for migration.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Blocks the provider waits before answering a request
pub const REQUEST_CONFIRMATIONS: u16 = 3;
/// Random words requested per round
pub const NUM_WORDS: u32 = 1;

pub const PAGINATION_MAX_LIMIT: u32 = 1_000;
pub const PAGINATION_DEFAULT_LIMIT: u32 = 100;

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND_STATE: Item<RoundState> = Item::new("round_state");

/// Entrants of the current round in join order, one item per entry.
/// Every join rewrites the whole list and fulfillment loads it once, so the
/// size of a round is bounded by the callback gas limit of the provider.
pub const ENTRANTS: Item<Vec<Addr>> = Item::new("entrants");
/// Sum of fees paid by the current entrants
pub const POOLED_BALANCE: Item<Uint128> = Item::new("pooled_balance");

/// Request id awaiting fulfillment, present only while resolving
pub const PENDING_REQUEST: Item<u64> = Item::new("pending_request");
/// Start of the current round in seconds
pub const LAST_TIMESTAMP: Item<u64> = Item::new("last_timestamp");
pub const RECENT_WINNER: Item<Addr> = Item::new("recent_winner");

/// Transfer in flight between fulfillment and its reply
pub const PAYOUT: Item<Payout> = Item::new("payout");

#[cw_serde]
pub struct Payout {
    pub winner: Addr,
    pub amount: Coin,
}
