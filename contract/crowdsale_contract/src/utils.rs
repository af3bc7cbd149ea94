use soroban_sdk::{token, Address, Env};

use crate::errors::SaleError;
use crate::storage_types::{CampaignState, Rate, SaleConfig, Unit};

/// Convert a payment amount to allocation units, truncating toward zero.
pub fn to_tokens(amount: i128, rate: &Rate) -> Result<i128, SaleError> {
    amount
        .checked_mul(rate.numerator)
        .ok_or(SaleError::ArithmeticOverflow)?
        .checked_div(rate.denominator)
        .ok_or(SaleError::ArithmeticOverflow)
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, SaleError> {
    a.checked_add(b).ok_or(SaleError::ArithmeticOverflow)
}

/// Check if `now` lies inside the accepting window (both ends inclusive)
pub fn is_within_window(state: &CampaignState, now: u64) -> bool {
    now >= state.start && now <= state.finish
}

/// Check if the window has closed
pub fn is_past_finish(state: &CampaignState, now: u64) -> bool {
    now > state.finish
}

pub fn hard_cap_reached(config: &SaleConfig, state: &CampaignState) -> bool {
    state.total_in(config.cap_unit) >= config.hard_cap
}

/// Hard cap expressed in allocation units; the most the sale can ever issue.
pub fn allocation_ceiling(config: &SaleConfig) -> Result<i128, SaleError> {
    match config.cap_unit {
        Unit::Allocation => Ok(config.hard_cap),
        Unit::Payment => to_tokens(config.hard_cap, &config.rate),
    }
}

/// Move `amount` of the payment asset from the investor into the contract.
pub fn collect_payment(env: &Env, payment_token: &Address, from: &Address, amount: i128) {
    let client = token::Client::new(env, payment_token);
    client.transfer(from, &env.current_contract_address(), &amount);
}
