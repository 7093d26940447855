use cosmwasm_std::Addr;
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use launchpad_msg::token_sale::{Investor, SaleConfig, SaleStats};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "token_sale";

/// Contract version that is used for migration.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Owner of the contract who can configure the sale and register investors
pub const OWNER: Admin = Admin::new("owner");
pub const CONFIG: Item<SaleConfig> = Item::new("config");
/// Sale-wide purchase totals
pub const SALE_STATS: Item<SaleStats> = Item::new("sale_stats");
/// One-way latch set by finalize
pub const FINALIZED: Item<bool> = Item::new("finalized");

/// Investor records keyed by wallet
pub const INVESTORS: Map<&Addr, Investor> = Map::new("investors");
/// Registration order: index => wallet
pub const INVESTOR_ADDRESSES: Map<u64, Addr> = Map::new("investor_addresses");
/// Reverse lookup: wallet => index
pub const INVESTOR_INDICES: Map<&Addr, u64> = Map::new("investor_indices");
pub const INVESTOR_COUNT: Item<u64> = Item::new("investor_count");

/// Index the next refund batch starts from
pub const NEXT_REFUND_IDX: Item<u64> = Item::new("next_refund_idx");
/// One-way latch set by the first refund batch
pub const REFUND_STARTED: Item<bool> = Item::new("refund_started");
pub const REFUNDED: Map<&Addr, bool> = Map::new("refunded");
