use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint256};
use strum_macros::Display;

#[cw_serde]
pub struct InstantiateMsg {
    /// Fee every entry has to pay, its denom is the only one the pool accepts
    pub entrance_fee: Coin,
    /// Minimal round duration in seconds
    pub interval: u64,
    /// Randomness provider the raffle requests words from
    pub vrf_coordinator: String,
    /// Provider routing key (key hash)
    pub gas_lane: String,
    /// Provider subscription the raffle is registered as consumer of
    pub subscription_id: u64,
    /// Resource budget the provider grants the fulfillment callback
    pub callback_gas_limit: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// join the current round, funds must contain at least the entrance fee
    EnterRaffle {},
    /// close the round and request randomness if the upkeep check passes
    PerformUpkeep {},
    /// randomness callback, accepted from the coordinator only
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
pub struct MigrateMsg {
    pub update_contract_name: Option<bool>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    #[returns(Coin)]
    EntranceFee {},

    #[returns(u64)]
    Interval {},

    #[returns(RoundState)]
    RoundState {},

    /// entrant at a join position of the current round
    #[returns(Addr)]
    Entrant { index: u32 },

    #[returns(Vec<Addr>)]
    Entrants {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(u32)]
    EntrantCount {},

    #[returns(Option<Addr>)]
    RecentWinner {},

    #[returns(u64)]
    LastTimestamp {},

    #[returns(Coin)]
    PooledBalance {},

    #[returns(Option<u64>)]
    PendingRequest {},

    /// readiness predicate with diagnostics
    #[returns(UpkeepResponse)]
    CheckUpkeep {},

    /// parameters sent with every randomness request
    #[returns(RequestParams)]
    RequestParams {},
}

#[cw_serde]
#[derive(Copy, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RoundState {
    Open,
    Resolving,
}

#[cw_serde]
pub struct Config {
    pub entrance_fee: Coin,
    pub interval: u64,
    pub vrf_coordinator: Addr,
    pub gas_lane: String,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
}

#[cw_serde]
pub struct UpkeepResponse {
    pub upkeep_needed: bool,
    pub state: RoundState,
    pub balance: Coin,
    pub entrant_count: u32,
    pub last_timestamp: u64,
    pub interval: u64,
    /// seconds since the round started
    pub elapsed: u64,
}

#[cw_serde]
pub struct RequestParams {
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}
