use cosmwasm_std::{ensure, to_json_binary, Addr, Api, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;
use launchpad_msg::token_sale::{SaleParams, SaleStatus};

use crate::error::ContractError;

/// Checks proposed sale parameters as a whole, first failure wins.
/// Returns the validated purchase token and status.
pub fn validate_sale_params(
    api: &dyn Api,
    params: &SaleParams,
    status: u8,
) -> Result<(Addr, SaleStatus), ContractError> {
    ensure!(
        !params.hardcap.is_zero(),
        ContractError::invalid_parameter("hardcap is zero")
    );

    let whitelist = &params.whitelist_sale_time_frame;
    ensure!(
        whitelist.is_valid(),
        ContractError::invalid_parameter("invalid whitelist sale time frame")
    );

    let public = &params.public_sale_time_frame;
    ensure!(
        public.is_valid() && public.start_time >= whitelist.end_time,
        ContractError::invalid_parameter("invalid public sale time frame")
    );

    ensure!(
        !params.purchase_levels.is_empty(),
        ContractError::invalid_parameter("empty purchase levels")
    );
    ensure!(
        !params.public_sale_purchase_cap.is_zero(),
        ContractError::invalid_parameter("public sale cap is zero")
    );
    ensure!(
        !params.purchase_token.is_empty(),
        ContractError::invalid_parameter("purchase token address is zero")
    );
    let purchase_token = api.addr_validate(&params.purchase_token)?;

    let status = SaleStatus::try_from(status)
        .map_err(|_| ContractError::invalid_parameter("invalid status"))?;

    Ok((purchase_token, status))
}

pub fn transfer_token_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

pub fn transfer_from_token_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}
