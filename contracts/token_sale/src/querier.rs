use cosmwasm_std::{Addr, Deps, StdResult, Uint128};
use cw20::{BalanceResponse, Cw20QueryMsg};

pub fn query_token_balance(deps: Deps, token: &Addr, address: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: address.to_string(),
        },
    )?;
    Ok(res.balance)
}
