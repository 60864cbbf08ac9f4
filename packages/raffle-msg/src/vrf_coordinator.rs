use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint256};

#[cw_serde]
pub struct InstantiateMsg {
    /// account allowed to deliver randomness, instantiator by default
    pub operator: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // any user ---------------------------------------------------------------------------------
    /// response data contains the new subscription id
    CreateSubscription {},

    // subscription owner -----------------------------------------------------------------------
    AddConsumer {
        subscription_id: u64,
        consumer: String,
    },

    RemoveConsumer {
        subscription_id: u64,
        consumer: String,
    },

    // subscription consumer --------------------------------------------------------------------
    /// response data contains the JSON encoded request id
    RequestRandomWords {
        key_hash: String,
        subscription_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },

    // operator ---------------------------------------------------------------------------------
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },

    UpdateOperator {
        operator: String,
    },
}

/// Callback every consumer has to accept from the coordinator
#[cw_serde]
pub enum ConsumerExecuteMsg {
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Option<Addr>)]
    Operator {},

    #[returns(Subscription)]
    Subscription { subscription_id: u64 },

    #[returns(Option<RandomnessRequest>)]
    Request { request_id: u64 },
}

#[cw_serde]
pub struct Subscription {
    pub owner: Addr,
    pub consumers: Vec<Addr>,
}

#[cw_serde]
pub struct RandomnessRequest {
    pub consumer: Addr,
    pub subscription_id: u64,
    pub key_hash: String,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub requested_at_height: u64,
}
