use cosmwasm_std::{
    ensure_eq, entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version};
use launchpad_msg::token_sale::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SalePhase};
use semver::Version;

use crate::{
    entry::{
        execute::{
            change_investor_wallet_address, configure, emergency_withdraw, finalize, purchase,
            refund_all, register_investors, update_owner,
        },
        instantiate::try_instantiate,
        query::{
            query_finalized, query_investor, query_investor_address, query_investor_count,
            query_investors, query_next_refund_idx, query_owner, query_refunded, query_status,
            query_token_sale_data,
        },
    },
    error::ContractError,
    state::{CONTRACT_NAME, CONTRACT_VERSION},
};

/// Creates a new contract with the specified parameters in the [`InstantiateMsg`].
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes execute functions available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Configure { params, status } => configure(deps, env, info, params, status),
        ExecuteMsg::RegisterInvestors {
            addresses,
            whitelist_levels,
        } => register_investors(deps, env, info, addresses, whitelist_levels),
        ExecuteMsg::PurchaseWhitelistSale { amount } => {
            purchase(deps, env, info, SalePhase::Whitelist, amount)
        }
        ExecuteMsg::PurchasePublicSale { amount } => {
            purchase(deps, env, info, SalePhase::Public, amount)
        }
        ExecuteMsg::Finalize {} => finalize(deps, env, info),
        ExecuteMsg::RefundAll { limit } => refund_all(deps, env, info, limit),
        ExecuteMsg::EmergencyWithdraw {} => emergency_withdraw(deps, env, info),
        ExecuteMsg::ChangeInvestorWalletAddress {
            old_address,
            new_address,
        } => change_investor_wallet_address(deps, env, info, old_address, new_address),
        ExecuteMsg::UpdateOwner { owner } => update_owner(deps, env, info, owner),
    }
}

/// Exposes queries available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenSaleData {} => Ok(to_json_binary(&query_token_sale_data(deps, env)?)?),
        QueryMsg::Owner {} => Ok(to_json_binary(&query_owner(deps, env)?)?),
        QueryMsg::Status {} => Ok(to_json_binary(&query_status(deps, env)?)?),
        QueryMsg::Investor { address } => {
            Ok(to_json_binary(&query_investor(deps, env, address)?)?)
        }
        QueryMsg::InvestorCount {} => Ok(to_json_binary(&query_investor_count(deps, env)?)?),
        QueryMsg::InvestorAddress { index } => {
            Ok(to_json_binary(&query_investor_address(deps, env, index)?)?)
        }
        QueryMsg::Investors { start_after, limit } => Ok(to_json_binary(&query_investors(
            deps,
            env,
            start_after,
            limit,
        )?)?),
        QueryMsg::NextRefundIdx {} => Ok(to_json_binary(&query_next_refund_idx(deps, env)?)?),
        QueryMsg::Refunded { address } => {
            Ok(to_json_binary(&query_refunded(deps, env, address)?)?)
        }
        QueryMsg::Finalized {} => Ok(to_json_binary(&query_finalized(deps, env)?)?),
    }
}

/// Manages contract migration.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    let version: Version = CONTRACT_VERSION.parse()?;
    let storage_version: Version = get_contract_version(deps.storage)?.version.parse()?;
    let contract_name = get_contract_version(deps.storage)?.contract;

    match msg.update_contract_name {
        Some(true) => {}
        _ => {
            ensure_eq!(
                contract_name,
                CONTRACT_NAME,
                ContractError::ContractNameErr(contract_name)
            );
        }
    }

    ensure_eq!(
        (version >= storage_version),
        true,
        ContractError::VersionErr(storage_version.to_string())
    );

    if version > storage_version {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new()
        .add_attribute("new_contract_name", CONTRACT_NAME)
        .add_attribute("new_contract_version", CONTRACT_VERSION))
}
