use soroban_sdk::{log, symbol_short, Address, Env};

use crate::access;
use crate::errors::SaleError;
use crate::sink::PaymentSink;
use crate::storage::SaleStore;
use crate::storage_types::{Asset, CampaignState, DepositReceipt, DepositRecord, SaleConfig};
use crate::utils::{checked_add, hard_cap_reached, is_within_window, to_tokens};

/// Validate and record one incoming payment.
///
/// Every check, and the immediate payout of transferable sales, runs before
/// the first write, so a rejected deposit leaves the ledger and `state`
/// exactly as they were. Bounds are applied to the investor's cumulative
/// contribution in `config.contrib_unit`; the hard cap is
/// first-come-first-served in `config.cap_unit`.
#[allow(clippy::too_many_arguments)]
pub fn process<S: SaleStore, P: PaymentSink>(
    env: &Env,
    store: &mut S,
    sink: &mut P,
    config: &SaleConfig,
    state: &mut CampaignState,
    investor: &Address,
    amount: i128,
    now: u64,
) -> Result<DepositReceipt, SaleError> {
    if amount <= 0 {
        return Err(SaleError::InvalidInput);
    }
    if !is_within_window(state, now) {
        return Err(SaleError::InvalidState);
    }
    if hard_cap_reached(config, state) {
        return Err(SaleError::CapacityExceeded);
    }
    if state.finalized {
        return Err(SaleError::InvalidState);
    }
    access::check_whitelist(store, state, investor)?;

    let tokens = to_tokens(amount, &config.rate)?;
    let prior = store
        .record(investor)
        .unwrap_or_else(|| DepositRecord::empty(investor.clone()));
    let updated = DepositRecord {
        investor: investor.clone(),
        amount_deposited: checked_add(prior.amount_deposited, amount)?,
        amount_allocated: checked_add(prior.amount_allocated, tokens)?,
    };

    let cumulative = updated.amount_in(config.contrib_unit);
    if cumulative < config.min_contrib || cumulative > config.max_contrib {
        return Err(SaleError::ContributionOutOfBounds);
    }

    let mut next = state.clone();
    next.total_raised = checked_add(state.total_raised, amount)?;
    next.total_allocated = checked_add(state.total_allocated, tokens)?;
    if next.total_in(config.cap_unit) > config.hard_cap {
        return Err(SaleError::CapacityExceeded);
    }

    let paid_out = config.pays_on_deposit() && tokens > 0;
    if paid_out {
        sink.pay(Asset::Allocation, investor, tokens, symbol_short!("tokens"))?;
    }

    store.upsert_record(&updated);
    *state = next;

    log!(
        env,
        "deposit accepted: amount {}, tokens {}, raised {}",
        amount,
        tokens,
        state.total_raised
    );

    Ok(DepositReceipt {
        investor: investor.clone(),
        amount,
        tokens,
        paid_out,
    })
}
