pub mod contract;
/// refund batch and pagination limits
pub mod config;
pub mod entry {
    pub mod execute;
    pub mod instantiate;
    pub mod query;
}
/// custom error handler
mod error;
pub mod math;
pub mod querier;
/// state on the blockchain
pub mod state;
pub mod utils;

pub use crate::error::ContractError;
