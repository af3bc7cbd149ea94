use soroban_sdk::{Address, Env, Vec};

use crate::errors::SaleError;
use crate::storage::{self, SaleStore};
use crate::storage_types::CampaignState;

/// Require the issuer's signature on the current invocation.
pub fn require_issuer(env: &Env) -> Result<Address, SaleError> {
    let issuer = storage::get_issuer(env)?;
    issuer.require_auth();
    Ok(issuer)
}

/// Reject investors missing from the whitelist while it is enforced.
pub fn check_whitelist<S: SaleStore>(
    store: &S,
    state: &CampaignState,
    investor: &Address,
) -> Result<(), SaleError> {
    if state.whitelist_enabled && !store.is_whitelisted(investor) {
        return Err(SaleError::Unauthorized);
    }
    Ok(())
}

pub fn white<S: SaleStore>(store: &mut S, account: &Address) -> Result<(), SaleError> {
    if store.is_whitelisted(account) {
        return Err(SaleError::InvalidState);
    }
    store.insert_whitelisted(account);
    Ok(())
}

pub fn unwhite<S: SaleStore>(store: &mut S, account: &Address) -> Result<(), SaleError> {
    if !store.is_whitelisted(account) {
        return Err(SaleError::InvalidState);
    }
    store.remove_whitelisted(account);
    Ok(())
}

/// Whitelist every account, or none of them.
pub fn white_many<S: SaleStore>(store: &mut S, accounts: &Vec<Address>) -> Result<(), SaleError> {
    for (i, account) in accounts.iter().enumerate() {
        if store.is_whitelisted(&account) || repeats_earlier(accounts, i as u32, &account) {
            return Err(SaleError::InvalidState);
        }
    }
    for account in accounts.iter() {
        store.insert_whitelisted(&account);
    }
    Ok(())
}

/// Remove every account, or none of them.
pub fn unwhite_many<S: SaleStore>(
    store: &mut S,
    accounts: &Vec<Address>,
) -> Result<(), SaleError> {
    for (i, account) in accounts.iter().enumerate() {
        if !store.is_whitelisted(&account) || repeats_earlier(accounts, i as u32, &account) {
            return Err(SaleError::InvalidState);
        }
    }
    for account in accounts.iter() {
        store.remove_whitelisted(&account);
    }
    Ok(())
}

fn repeats_earlier(accounts: &Vec<Address>, index: u32, account: &Address) -> bool {
    (0..index).any(|j| accounts.get(j).as_ref() == Some(account))
}
