use cosmwasm_std::{OverflowError, StdError};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use launchpad_msg::token_sale::SalePhase;
use thiserror::Error;

/// ## Description
/// This enum describes token sale contract errors!
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("New version must be greater than previous one: {0}")]
    VersionErr(String),

    #[error("Contract name must be same: {0}")]
    ContractNameErr(String),

    #[error("TokenSale: {0}")]
    InvalidParameter(String),

    #[error("TokenSale: already initialized")]
    AlreadyInitialized {},

    #[error("TokenSale: caller is not the admin")]
    Unauthorized {},

    #[error("TokenSale: inactive")]
    Inactive {},

    #[error("TokenSale: finalized")]
    AlreadyFinalized {},

    #[error("TokenSale: refund started")]
    RefundStarted {},

    #[error("TokenSale: not whitelisted")]
    NotWhitelisted {},

    #[error("TokenSale: not in {phase} time")]
    NotInTimeWindow { phase: SalePhase },

    #[error("TokenSale: not eligible to participate in whitelist sale")]
    NotEligibleForWhitelist {},

    #[error("TokenSale: invalid purchase amount")]
    InvalidPurchaseAmount {},

    #[error("TokenSale: exceed maximum investment")]
    ExceedsMaximumInvestment {},

    #[error("TokenSale: sold out")]
    SoldOut {},

    #[error("TokenSale: sale can not be finalized yet")]
    TooEarly {},

    #[error("TokenSale: invalid address")]
    InvalidAddress {},

    #[error("TokenSale: address is already taken")]
    AddressAlreadyTaken {},
}

impl ContractError {
    pub fn invalid_parameter(reason: &str) -> Self {
        Self::InvalidParameter(reason.to_string())
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
