use cosmwasm_std::{Addr, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::state::{DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT, SALES, SALE_COUNT};

/// query created sales
pub fn query_sales(
    deps: Deps,
    _env: Env,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    SALES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, sale)| sale))
        .collect()
}

/// query number of created sales
pub fn query_sale_count(deps: Deps, _env: Env) -> StdResult<u64> {
    Ok(SALE_COUNT.may_load(deps.storage)?.unwrap_or_default())
}
