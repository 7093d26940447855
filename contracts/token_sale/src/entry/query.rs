use cosmwasm_std::{Addr, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;
use launchpad_msg::token_sale::{Investor, SaleStatus, TokenSaleDataResponse};

use crate::{
    config::{DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT},
    state::{
        CONFIG, FINALIZED, INVESTORS, INVESTOR_ADDRESSES, INVESTOR_COUNT, NEXT_REFUND_IDX, OWNER,
        REFUNDED, REFUND_STARTED, SALE_STATS,
    },
};

/// query full sale snapshot
pub fn query_token_sale_data(deps: Deps, _env: Env) -> StdResult<TokenSaleDataResponse> {
    Ok(TokenSaleDataResponse {
        config: CONFIG.load(deps.storage)?,
        stats: SALE_STATS.load(deps.storage)?,
        finalized: FINALIZED.load(deps.storage)?,
        refund_started: REFUND_STARTED.load(deps.storage)?,
    })
}

/// query owner
pub fn query_owner(deps: Deps, _env: Env) -> StdResult<Addr> {
    OWNER
        .get(deps)?
        .ok_or_else(|| StdError::generic_err("owner is not set"))
}

pub fn query_status(deps: Deps, _env: Env) -> StdResult<SaleStatus> {
    Ok(CONFIG.load(deps.storage)?.status)
}

pub fn query_investor(deps: Deps, _env: Env, address: String) -> StdResult<Option<Investor>> {
    INVESTORS.may_load(deps.storage, &Addr::unchecked(address))
}

pub fn query_investor_count(deps: Deps, _env: Env) -> StdResult<u64> {
    INVESTOR_COUNT.load(deps.storage)
}

pub fn query_investor_address(deps: Deps, _env: Env, index: u64) -> StdResult<Option<Addr>> {
    INVESTOR_ADDRESSES.may_load(deps.storage, index)
}

/// query investors in registration order
pub fn query_investors(
    deps: Deps,
    _env: Env,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<Investor>> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    INVESTOR_ADDRESSES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, address) = item?;
            INVESTORS.load(deps.storage, &address)
        })
        .collect()
}

pub fn query_next_refund_idx(deps: Deps, _env: Env) -> StdResult<u64> {
    NEXT_REFUND_IDX.load(deps.storage)
}

pub fn query_refunded(deps: Deps, _env: Env, address: String) -> StdResult<bool> {
    Ok(REFUNDED
        .may_load(deps.storage, &Addr::unchecked(address))?
        .unwrap_or_default())
}

pub fn query_finalized(deps: Deps, _env: Env) -> StdResult<bool> {
    FINALIZED.load(deps.storage)
}
