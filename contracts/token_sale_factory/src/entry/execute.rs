use cosmwasm_std::{
    ensure, to_json_binary, DepsMut, Env, Event, MessageInfo, Reply, Response, SubMsg, WasmMsg,
};
use cw_utils::{nonpayable, parse_reply_instantiate_data};
use launchpad_msg::token_sale::{InstantiateMsg as SaleInstantiateMsg, SaleParams};

use crate::{
    contract::INSTANTIATE_SALE_REPLY_ID,
    error::ContractError,
    state::{PENDING_IMPLEMENTATION, SALES, SALE_COUNT},
};

/// Instantiate a new sale owned by the caller.
///
/// Sale parameters are checked by the sale itself, so a rejected configuration
/// fails the whole call with the sale's error.
pub fn create_sale(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    implementation: u64,
    name: String,
    admin: String,
    params: SaleParams,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ensure!(
        implementation != 0,
        ContractError::InvalidParameter("implementation address is zero".to_string())
    );

    PENDING_IMPLEMENTATION.save(deps.storage, &implementation)?;

    let label = format!("token sale {name}");
    let msg = WasmMsg::Instantiate {
        admin: Some(info.sender.to_string()),
        code_id: implementation,
        msg: to_json_binary(&SaleInstantiateMsg {
            owner: info.sender.to_string(),
            name: name.clone(),
            admin,
            params,
        })?,
        funds: vec![],
        label,
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(msg, INSTANTIATE_SALE_REPLY_ID))
        .add_attribute("action", "create_sale")
        .add_attribute("name", name)
        .add_attribute("owner", info.sender))
}

/// Record the new sale and announce it
pub fn handle_instantiate_sale_reply(
    deps: DepsMut,
    env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let res = parse_reply_instantiate_data(msg)?;
    let sale = deps.api.addr_validate(&res.contract_address)?;

    let implementation = PENDING_IMPLEMENTATION.load(deps.storage)?;
    PENDING_IMPLEMENTATION.remove(deps.storage);

    let id = SALE_COUNT.may_load(deps.storage)?.unwrap_or_default();
    SALES.save(deps.storage, id, &sale)?;
    SALE_COUNT.save(deps.storage, &(id + 1))?;

    Ok(Response::new()
        .add_event(
            Event::new("token_sale_created")
                .add_attribute("implementation", implementation.to_string())
                .add_attribute("proxy", sale.clone())
                .add_attribute("factory", env.contract.address),
        )
        .set_data(to_json_binary(&sale)?))
}
