use std::fmt;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, StdError, Uint128};

/// Inclusive window of block seconds.
#[cw_serde]
#[derive(Copy, Default)]
pub struct TimeFrame {
    pub start_time: u64,
    pub end_time: u64,
}

impl TimeFrame {
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// both bounds set and start strictly before end
    pub fn is_valid(&self) -> bool {
        self.start_time > 0 && self.end_time > 0 && self.start_time < self.end_time
    }

    pub fn contains(&self, time: u64) -> bool {
        self.start_time <= time && time <= self.end_time
    }
}

#[cw_serde]
#[derive(Copy, Default)]
pub enum SaleStatus {
    #[default]
    Inactive,
    Active,
}

impl TryFrom<u8> for SaleStatus {
    type Error = StdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SaleStatus::Inactive),
            1 => Ok(SaleStatus::Active),
            _ => Err(StdError::generic_err(format!("unknown sale status: {value}"))),
        }
    }
}

impl From<SaleStatus> for u8 {
    fn from(status: SaleStatus) -> Self {
        match status {
            SaleStatus::Inactive => 0,
            SaleStatus::Active => 1,
        }
    }
}

#[cw_serde]
#[derive(Copy)]
pub enum SalePhase {
    Whitelist,
    Public,
}

impl fmt::Display for SalePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalePhase::Whitelist => write!(f, "whitelist sale"),
            SalePhase::Public => write!(f, "public sale"),
        }
    }
}

/// Configurable sale parameters, shared by creation and reconfiguration.
#[cw_serde]
pub struct SaleParams {
    /// maximum amount of purchase token the sale accepts in total
    pub hardcap: Uint128,
    pub whitelist_sale_time_frame: TimeFrame,
    /// must start at or after the end of the whitelist window
    pub public_sale_time_frame: TimeFrame,
    /// per-investor whitelist caps, indexed by whitelist level
    pub purchase_levels: Vec<Uint128>,
    /// per-investor cap during the public phase
    pub public_sale_purchase_cap: Uint128,
    /// cw20 token investors pay with
    pub purchase_token: String,
}

#[cw_serde]
pub struct SaleConfig {
    pub name: String,
    /// receives proceeds and runs refunds, emergency withdrawals and wallet changes
    pub admin: Addr,
    pub hardcap: Uint128,
    pub whitelist_sale_time_frame: TimeFrame,
    pub public_sale_time_frame: TimeFrame,
    pub purchase_levels: Vec<Uint128>,
    pub public_sale_purchase_cap: Uint128,
    pub purchase_token: Addr,
    pub status: SaleStatus,
}

#[cw_serde]
#[derive(Default)]
pub struct SaleStats {
    pub total_sale_amount: Uint128,
    pub total_whitelist_sale_amount: Uint128,
    pub total_public_sale_amount: Uint128,
}

#[cw_serde]
pub struct Investor {
    pub investor: Addr,
    /// 0 means the investor may only join the public phase
    pub whitelist_purchase_level: u32,
    pub total_investment: Uint128,
    pub whitelist_sale_total_investment: Uint128,
    pub public_sale_total_investment: Uint128,
}

impl Investor {
    pub fn new(investor: Addr, whitelist_purchase_level: u32) -> Self {
        Self {
            investor,
            whitelist_purchase_level,
            total_investment: Uint128::zero(),
            whitelist_sale_total_investment: Uint128::zero(),
            public_sale_total_investment: Uint128::zero(),
        }
    }
}

#[cw_serde]
pub struct InstantiateMsg {
    /// configuring authority of the sale
    pub owner: String,
    pub name: String,
    pub admin: String,
    pub params: SaleParams,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// replace all configurable parameters and the status (0 inactive, 1 active)
    Configure { params: SaleParams, status: u8 },
    /// register or update investors with their whitelist levels
    RegisterInvestors {
        addresses: Vec<String>,
        whitelist_levels: Vec<u32>,
    },
    /// buy during the whitelist window, pulling funds through a cw20 allowance
    PurchaseWhitelistSale { amount: Uint128 },
    /// buy during the public window, pulling funds through a cw20 allowance
    PurchasePublicSale { amount: Uint128 },
    /// send collected funds to the sale admin and close the sale
    Finalize {},
    /// refund investors from the saved cursor, at most `limit` of them
    RefundAll { limit: Option<u32> },
    /// sweep all funds to the sale admin and deactivate the sale
    EmergencyWithdraw {},
    /// move an investor record to a new wallet
    ChangeInvestorWalletAddress {
        old_address: String,
        new_address: String,
    },
    /// update owner
    UpdateOwner { owner: String },
}

#[cw_serde]
pub struct MigrateMsg {
    pub update_contract_name: Option<bool>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// query full sale snapshot
    #[returns(TokenSaleDataResponse)]
    TokenSaleData {},
    /// query owner
    #[returns(Addr)]
    Owner {},
    /// query sale status
    #[returns(SaleStatus)]
    Status {},
    /// query investor record
    #[returns(Option<Investor>)]
    Investor { address: String },
    /// query number of registered investors
    #[returns(u64)]
    InvestorCount {},
    /// query investor address by registration index
    #[returns(Option<Addr>)]
    InvestorAddress { index: u64 },
    /// query investors in registration order
    #[returns(Vec<Investor>)]
    Investors {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// query index the next refund batch starts from
    #[returns(u64)]
    NextRefundIdx {},
    /// query whether an investor was refunded
    #[returns(bool)]
    Refunded { address: String },
    /// query whether the sale was finalized
    #[returns(bool)]
    Finalized {},
}

#[cw_serde]
pub struct TokenSaleDataResponse {
    pub config: SaleConfig,
    pub stats: SaleStats,
    pub finalized: bool,
    pub refund_started: bool,
}
