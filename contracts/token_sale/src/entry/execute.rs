use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, Api, DepsMut, Env, Event, MessageInfo, Response,
    Uint128,
};
use cw_utils::nonpayable;
use launchpad_msg::token_sale::{Investor, SaleParams, SalePhase, SaleStatus};

use crate::{
    config::{DEFAULT_REFUND_LIMIT, MAX_REFUND_LIMIT},
    error::ContractError,
    math::calculate_purchase_amount,
    querier::query_token_balance,
    state::{
        CONFIG, FINALIZED, INVESTORS, INVESTOR_ADDRESSES, INVESTOR_COUNT, INVESTOR_INDICES,
        NEXT_REFUND_IDX, OWNER, REFUNDED, REFUND_STARTED, SALE_STATS,
    },
    utils::{transfer_from_token_msg, transfer_token_msg, validate_sale_params},
};

/// Update sale parameters and status
pub fn configure(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    params: SaleParams,
    status: u8,
) -> Result<Response, ContractError> {
    // only owner can executable
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let (purchase_token, status) = validate_sale_params(deps.api, &params, status)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.hardcap = params.hardcap;
    config.whitelist_sale_time_frame = params.whitelist_sale_time_frame;
    config.public_sale_time_frame = params.public_sale_time_frame;
    config.purchase_levels = params.purchase_levels;
    config.public_sale_purchase_cap = params.public_sale_purchase_cap;
    config.purchase_token = purchase_token;
    config.status = status;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "configure")
        .add_attribute("hardcap", config.hardcap)
        .add_attribute("status", u8::from(status).to_string()))
}

/// Register new investors or update whitelist levels of existing ones
pub fn register_investors(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    addresses: Vec<String>,
    whitelist_levels: Vec<u32>,
) -> Result<Response, ContractError> {
    // only owner can executable
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    ensure_eq!(
        addresses.len(),
        whitelist_levels.len(),
        ContractError::invalid_parameter("lengths do not match")
    );

    let config = CONFIG.load(deps.storage)?;
    let level_count = config.purchase_levels.len();

    // validate the whole batch before touching storage
    let mut entries = Vec::with_capacity(addresses.len());
    for (address, level) in addresses.iter().zip(whitelist_levels) {
        ensure!(
            !address.is_empty(),
            ContractError::invalid_parameter("investor address is zero")
        );
        ensure!(
            (level as usize) < level_count,
            ContractError::invalid_parameter("invalid whitelist purchase level")
        );
        entries.push((deps.api.addr_validate(address)?, level));
    }

    let mut count = INVESTOR_COUNT.load(deps.storage)?;
    let mut added = 0u64;
    for (address, level) in entries {
        let investor = match INVESTORS.may_load(deps.storage, &address)? {
            Some(mut investor) => {
                investor.whitelist_purchase_level = level;
                investor
            }
            None => {
                INVESTOR_ADDRESSES.save(deps.storage, count, &address)?;
                INVESTOR_INDICES.save(deps.storage, &address, &count)?;
                count += 1;
                added += 1;
                Investor::new(address.clone(), level)
            }
        };
        INVESTORS.save(deps.storage, &address, &investor)?;
    }
    INVESTOR_COUNT.save(deps.storage, &count)?;

    Ok(Response::new()
        .add_attribute("action", "register_investors")
        .add_event(
            Event::new("investors_registered")
                .add_attribute("count", addresses.len().to_string())
                .add_attribute("added", added.to_string()),
        ))
}

/// Buy into the sale for the sender during the given phase
pub fn purchase(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    phase: SalePhase,
    amount: Uint128,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    ensure!(
        config.status == SaleStatus::Active,
        ContractError::Inactive {}
    );
    ensure!(
        !FINALIZED.load(deps.storage)?,
        ContractError::AlreadyFinalized {}
    );
    ensure!(
        !REFUND_STARTED.load(deps.storage)?,
        ContractError::RefundStarted {}
    );

    let mut investor = INVESTORS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotWhitelisted {})?;

    let time_frame = match phase {
        SalePhase::Whitelist => config.whitelist_sale_time_frame,
        SalePhase::Public => config.public_sale_time_frame,
    };
    ensure!(
        time_frame.contains(env.block.time.seconds()),
        ContractError::NotInTimeWindow { phase }
    );

    let level = investor.whitelist_purchase_level;
    if phase == SalePhase::Whitelist {
        ensure!(level > 0, ContractError::NotEligibleForWhitelist {});
    }
    ensure!(!amount.is_zero(), ContractError::InvalidPurchaseAmount {});

    let (personal_cap, invested) = match phase {
        SalePhase::Whitelist => {
            // levels may have shrunk through reconfiguration after registration
            let cap = config
                .purchase_levels
                .get(level as usize)
                .copied()
                .ok_or_else(|| {
                    ContractError::invalid_parameter("invalid whitelist purchase level")
                })?;
            (cap, investor.whitelist_sale_total_investment)
        }
        SalePhase::Public => (
            config.public_sale_purchase_cap,
            investor.public_sale_total_investment,
        ),
    };

    let mut stats = SALE_STATS.load(deps.storage)?;
    let accepted = calculate_purchase_amount(
        amount,
        personal_cap,
        invested,
        config.hardcap,
        stats.total_sale_amount,
    )?;

    match phase {
        SalePhase::Whitelist => {
            investor.whitelist_sale_total_investment =
                investor.whitelist_sale_total_investment.checked_add(accepted)?;
            stats.total_whitelist_sale_amount =
                stats.total_whitelist_sale_amount.checked_add(accepted)?;
        }
        SalePhase::Public => {
            investor.public_sale_total_investment =
                investor.public_sale_total_investment.checked_add(accepted)?;
            stats.total_public_sale_amount = stats.total_public_sale_amount.checked_add(accepted)?;
        }
    }
    investor.total_investment = investor.total_investment.checked_add(accepted)?;
    stats.total_sale_amount = stats.total_sale_amount.checked_add(accepted)?;
    INVESTORS.save(deps.storage, &info.sender, &investor)?;
    SALE_STATS.save(deps.storage, &stats)?;

    let pull_msg = transfer_from_token_msg(
        &config.purchase_token,
        &info.sender,
        &env.contract.address,
        accepted,
    )?;

    Ok(Response::new()
        .add_message(pull_msg)
        .add_attribute("action", "purchase")
        .add_event(
            Event::new("new_investment")
                .add_attribute("investor", info.sender)
                .add_attribute("amount", accepted)
                .add_attribute("phase", phase.to_string()),
        )
        .set_data(to_json_binary(&accepted)?))
}

/// Send everything collected to the sale admin and close the sale
pub fn finalize(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    // only owner can executable
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    ensure!(
        !FINALIZED.load(deps.storage)?,
        ContractError::AlreadyFinalized {}
    );
    ensure!(
        !REFUND_STARTED.load(deps.storage)?,
        ContractError::RefundStarted {}
    );

    let mut config = CONFIG.load(deps.storage)?;
    let stats = SALE_STATS.load(deps.storage)?;
    ensure!(
        stats.total_sale_amount >= config.hardcap
            || env.block.time.seconds() > config.public_sale_time_frame.end_time,
        ContractError::TooEarly {}
    );

    let balance = query_token_balance(
        deps.as_ref(),
        &config.purchase_token,
        &env.contract.address,
    )?;

    FINALIZED.save(deps.storage, &true)?;
    config.status = SaleStatus::Inactive;
    CONFIG.save(deps.storage, &config)?;

    let mut res = Response::new().add_attribute("action", "finalize");
    if !balance.is_zero() {
        res = res.add_message(transfer_token_msg(
            &config.purchase_token,
            &config.admin,
            balance,
        )?);
    }
    Ok(res.add_event(
        Event::new("finalized")
            .add_attribute("admin", config.admin)
            .add_attribute("amount", balance),
    ))
}

/// Refund investors in registration order, resuming from the saved cursor
pub fn refund_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    limit: Option<u32>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    // only sale admin can executable
    ensure_eq!(info.sender, config.admin, ContractError::Unauthorized {});
    ensure!(
        !FINALIZED.load(deps.storage)?,
        ContractError::AlreadyFinalized {}
    );

    let limit = limit.unwrap_or(DEFAULT_REFUND_LIMIT).min(MAX_REFUND_LIMIT) as u64;
    let count = INVESTOR_COUNT.load(deps.storage)?;
    let start = NEXT_REFUND_IDX.load(deps.storage)?;
    let end = start.saturating_add(limit).min(count);

    let mut res = Response::new().add_attribute("action", "refund_all");
    let mut refunded = Uint128::zero();
    for idx in start..end {
        let address = INVESTOR_ADDRESSES.load(deps.storage, idx)?;
        if REFUNDED.may_load(deps.storage, &address)?.unwrap_or_default() {
            continue;
        }
        let investor = INVESTORS.load(deps.storage, &address)?;
        if !investor.total_investment.is_zero() {
            res = res
                .add_message(transfer_token_msg(
                    &config.purchase_token,
                    &address,
                    investor.total_investment,
                )?)
                .add_event(
                    Event::new("refund")
                        .add_attribute("investor", address.clone())
                        .add_attribute("amount", investor.total_investment),
                );
            refunded = refunded.checked_add(investor.total_investment)?;
        }
        REFUNDED.save(deps.storage, &address, &true)?;
    }
    NEXT_REFUND_IDX.save(deps.storage, &end)?;
    REFUND_STARTED.save(deps.storage, &true)?;

    if end >= count && config.status != SaleStatus::Inactive {
        config.status = SaleStatus::Inactive;
        CONFIG.save(deps.storage, &config)?;
    }

    Ok(res
        .add_attribute("refunded_amount", refunded)
        .add_attribute("next_refund_idx", end.to_string()))
}

/// Sweep the whole balance to the sale admin and stop the sale
pub fn emergency_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    // only sale admin can executable
    ensure_eq!(info.sender, config.admin, ContractError::Unauthorized {});

    let balance = query_token_balance(
        deps.as_ref(),
        &config.purchase_token,
        &env.contract.address,
    )?;
    config.status = SaleStatus::Inactive;
    CONFIG.save(deps.storage, &config)?;

    let mut res = Response::new().add_attribute("action", "emergency_withdraw");
    if !balance.is_zero() {
        res = res.add_message(transfer_token_msg(
            &config.purchase_token,
            &config.admin,
            balance,
        )?);
    }
    Ok(res.add_event(
        Event::new("emergency_withdrawal")
            .add_attribute("admin", config.admin)
            .add_attribute("amount", balance),
    ))
}

/// Move an investor record to a new wallet, keeping its registration slot
pub fn change_investor_wallet_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    old_address: String,
    new_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // only sale admin can executable
    ensure_eq!(info.sender, config.admin, ContractError::Unauthorized {});
    ensure!(
        !FINALIZED.load(deps.storage)?,
        ContractError::AlreadyFinalized {}
    );

    let old_address = validate_wallet(deps.api, &old_address)?;
    let new_address = validate_wallet(deps.api, &new_address)?;
    let mut investor = INVESTORS
        .may_load(deps.storage, &old_address)?
        .ok_or(ContractError::InvalidAddress {})?;
    ensure!(
        !INVESTORS.has(deps.storage, &new_address),
        ContractError::AddressAlreadyTaken {}
    );

    investor.investor = new_address.clone();
    INVESTORS.save(deps.storage, &new_address, &investor)?;
    INVESTORS.remove(deps.storage, &old_address);

    if let Some(refunded) = REFUNDED.may_load(deps.storage, &old_address)? {
        REFUNDED.save(deps.storage, &new_address, &refunded)?;
        REFUNDED.remove(deps.storage, &old_address);
    }

    let index = INVESTOR_INDICES.load(deps.storage, &old_address)?;
    INVESTOR_ADDRESSES.save(deps.storage, index, &new_address)?;
    INVESTOR_INDICES.save(deps.storage, &new_address, &index)?;
    INVESTOR_INDICES.remove(deps.storage, &old_address);

    Ok(Response::new()
        .add_attribute("action", "change_investor_wallet_address")
        .add_event(
            Event::new("investor_wallet_changed")
                .add_attribute("old", old_address)
                .add_attribute("new", new_address),
        ))
}

/// Update owner
pub fn update_owner(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    // only owner can executable
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;
    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    OWNER.set(deps.branch(), Some(new_owner_addr))?;
    Ok(Response::new()
        .add_attribute("action", "update owner")
        .add_attribute("to", new_owner))
}

fn validate_wallet(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    ensure!(!address.is_empty(), ContractError::InvalidAddress {});
    api.addr_validate(address)
        .map_err(|_| ContractError::InvalidAddress {})
}
