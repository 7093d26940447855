use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "token_sale_factory";

/// Contract version that is used for migration.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_QUERY_LIMIT: u32 = 10;
pub const MAX_QUERY_LIMIT: u32 = 30;

/// Code id of the sale being instantiated, read back in the reply
pub const PENDING_IMPLEMENTATION: Item<u64> = Item::new("pending_implementation");
/// Created sales in creation order
pub const SALES: Map<u64, Addr> = Map::new("sales");
pub const SALE_COUNT: Item<u64> = Item::new("sale_count");
