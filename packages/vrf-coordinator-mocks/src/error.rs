use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Subscription {subscription_id} does not exist!")]
    InvalidSubscription { subscription_id: u64 },

    #[error("Sender is not the subscription owner!")]
    MustBeSubOwner,

    #[error("{consumer} is not a consumer of subscription {subscription_id}!")]
    InvalidConsumer {
        subscription_id: u64,
        consumer: String,
    },

    #[error("At least one word must be requested!")]
    ZeroNumWords,

    #[error("Requested {have} words, max is {want}!")]
    NumWordsTooBig { have: u32, want: u32 },

    #[error("Requested {have} confirmations, min is {want}!")]
    InvalidRequestConfirmations { have: u16, want: u16 },

    #[error("Request {request_id} does not exist!")]
    NonexistentRequest { request_id: u64 },

    #[error("Request {request_id} can be fulfilled at height {ready_at}!")]
    ConfirmationsPending { request_id: u64, ready_at: u64 },

    #[error("Expected {want} words, got {have}!")]
    WrongWordCount { have: usize, want: u32 },
}
