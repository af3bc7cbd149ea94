use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::SaleError;
use crate::storage;
use crate::storage_types::{CampaignState, MintEntry, SaleConfig};
use crate::utils::allocation_ceiling;

/// One-time deployment: persist the configuration, mint the sale inventory
/// to the contract, make the initial distributions and optionally pass the
/// sale token's minting authority on.
///
/// The contract must be the sale token's admin when this runs.
#[allow(clippy::too_many_arguments)]
pub fn initialize(
    env: &Env,
    issuer: &Address,
    payment_token: &Address,
    sale_token: &Address,
    config: &SaleConfig,
    start: u64,
    finish: u64,
    premint: &Vec<MintEntry>,
    minter: &Option<Address>,
) -> Result<CampaignState, SaleError> {
    if storage::is_initialized(env) {
        return Err(SaleError::InvalidState);
    }
    config.validate()?;
    if start >= finish || payment_token == sale_token {
        return Err(SaleError::InvalidInput);
    }
    if premint.iter().any(|entry| entry.amount <= 0) {
        return Err(SaleError::InvalidInput);
    }

    storage::set_deployment(env, issuer, payment_token, sale_token, config);

    let admin = token::StellarAssetClient::new(env, sale_token);
    admin.mint(&env.current_contract_address(), &allocation_ceiling(config)?);
    for entry in premint.iter() {
        admin.mint(&entry.to, &entry.amount);
    }
    if let Some(minter) = minter {
        admin.set_admin(minter);
    }

    storage::set_initialized(env);

    Ok(CampaignState {
        start,
        finish,
        total_raised: 0,
        total_allocated: 0,
        finalized: false,
        whitelist_enabled: config.whitelist,
        withdrawn: false,
        settled: 0,
    })
}
