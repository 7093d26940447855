use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::token_sale::SaleParams;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// instantiate a new token sale owned by the caller
    CreateSale {
        /// code id of the stored token sale contract
        implementation: u64,
        name: String,
        admin: String,
        params: SaleParams,
    },
}

#[cw_serde]
pub struct MigrateMsg {
    pub update_contract_name: Option<bool>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// query created sales in creation order
    #[returns(Vec<Addr>)]
    Sales {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// query number of created sales
    #[returns(u64)]
    SaleCount {},
}
