use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use launchpad_msg::token_sale::{InstantiateMsg, SaleConfig, SaleStats, SaleStatus};

use crate::{
    error::ContractError,
    state::{
        CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FINALIZED, INVESTOR_COUNT, NEXT_REFUND_IDX, OWNER,
        REFUND_STARTED, SALE_STATS,
    },
    utils::validate_sale_params,
};

/// Sets up a sale once. The sale starts active.
pub fn try_instantiate(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    ensure!(
        !CONFIG.exists(deps.storage),
        ContractError::AlreadyInitialized {}
    );
    ensure!(
        !msg.admin.is_empty(),
        ContractError::invalid_parameter("admin address is zero")
    );
    let admin = deps.api.addr_validate(&msg.admin)?;

    let (purchase_token, status) =
        validate_sale_params(deps.api, &msg.params, SaleStatus::Active.into())?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    OWNER.set(deps.branch(), Some(owner.clone()))?;

    let params = msg.params;
    CONFIG.save(
        deps.storage,
        &SaleConfig {
            name: msg.name.clone(),
            admin: admin.clone(),
            hardcap: params.hardcap,
            whitelist_sale_time_frame: params.whitelist_sale_time_frame,
            public_sale_time_frame: params.public_sale_time_frame,
            purchase_levels: params.purchase_levels,
            public_sale_purchase_cap: params.public_sale_purchase_cap,
            purchase_token: purchase_token.clone(),
            status,
        },
    )?;
    SALE_STATS.save(deps.storage, &SaleStats::default())?;
    FINALIZED.save(deps.storage, &false)?;
    INVESTOR_COUNT.save(deps.storage, &0)?;
    NEXT_REFUND_IDX.save(deps.storage, &0)?;
    REFUND_STARTED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("owner", owner)
        .add_attribute("admin", admin)
        .add_attribute("purchase_token", purchase_token))
}
