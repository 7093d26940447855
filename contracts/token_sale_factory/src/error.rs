use cosmwasm_std::StdError;
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

/// ## Description
/// This enum describes token sale factory contract errors!
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

    #[error("Contract name must be same: {0}")]
    ContractNameErr(String),

    #[error("Unknown reply id: {0}")]
    UnknownReplyId(u64),

    #[error("TokenSaleFactory: {0}")]
    InvalidParameter(String),
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
