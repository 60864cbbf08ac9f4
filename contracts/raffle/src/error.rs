use cosmwasm_std::{Coin, StdError, Uint128};
use cw_utils::{ParseReplyError, PaymentError};
use raffle_msg::raffle::RoundState;
use thiserror::Error;

/// ## Description
/// This enum describes raffle contract errors!
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("New version must be greater than previous one: {0}")]
    VersionErr(String),

    #[error("Contract name mismatch: {0}")]
    ContractNameErr(String),

    #[error("Unknown reply id: {0}")]
    UnknownReplyId(u64),

    #[error("Entrance fee must be greater than zero")]
    ZeroEntranceFee {},

    #[error("Not enough funds sent: {sent}, entrance fee is {required}")]
    InsufficientFee { sent: Uint128, required: Uint128 },

    #[error("Raffle is not accepting entries while {state}")]
    RoundNotAcceptingEntries { state: RoundState },

    #[error("Upkeep not needed: balance {balance}, entrants {entrant_count}, state {state}")]
    UpkeepNotReady {
        balance: Uint128,
        entrant_count: u32,
        state: RoundState,
    },

    #[error("Only coordinator {coordinator} can fulfill, got {sender}")]
    OnlyCoordinatorCanFulfill { sender: String, coordinator: String },

    #[error("Unknown randomness request: {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("Fulfillment contains no random words")]
    NoRandomWords {},

    #[error("Coordinator returned no request id")]
    MissingRequestId {},

    #[error("No entrants to pick a winner from")]
    NoEntrants {},

    #[error("Failed to transfer {amount} to winner {winner}: {reason}")]
    PayoutTransferFailed {
        winner: String,
        amount: Coin,
        reason: String,
    },

    #[error("Entrant index {index} is out of range, entrant count is {count}")]
    IndexOutOfRange { index: u32, count: u32 },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}

impl From<ContractError> for StdError {
    fn from(contract_error: ContractError) -> Self {
        Self::generic_err(contract_error.to_string())
    }
}
