pub mod contract;
pub mod entry {
    pub mod execute;
    pub mod instantiate;
    pub mod query;
}
mod error;
pub mod ledger;
/// state on the blockchain
pub mod state;
pub mod upkeep;
pub use crate::error::ContractError;
