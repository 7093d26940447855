use cosmwasm_std::Uint128;

use crate::error::ContractError;

/// Amount actually accepted for a purchase request.
///
/// The request is clamped to the investor's remaining personal allowance for the
/// phase and to what is left of the hardcap. The personal check runs first.
pub fn calculate_purchase_amount(
    requested: Uint128,
    personal_cap: Uint128,
    invested: Uint128,
    hardcap: Uint128,
    total_sold: Uint128,
) -> Result<Uint128, ContractError> {
    if personal_cap <= invested {
        return Err(ContractError::ExceedsMaximumInvestment {});
    }
    let personal_remaining = personal_cap - invested;

    let global_remaining = hardcap.saturating_sub(total_sold);
    if global_remaining.is_zero() {
        return Err(ContractError::SoldOut {});
    }

    Ok(requested.min(personal_remaining).min(global_remaining))
}
