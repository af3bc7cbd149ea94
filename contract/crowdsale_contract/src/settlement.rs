use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

use crate::errors::SaleError;
use crate::sink::PaymentSink;
use crate::storage::SaleStore;
use crate::storage_types::{
    Asset, CampaignState, Outcome, SaleConfig, Settlement, SettlementMode,
};
use crate::utils::{checked_add, hard_cap_reached, is_past_finish};

/// Success or failure once the sale has closed; `Pending` before that.
///
/// The sale closes when the window has passed or the hard cap is reached.
/// Caps are compared in `config.cap_unit` on both sides.
pub fn outcome(config: &SaleConfig, state: &CampaignState, now: u64) -> Outcome {
    let closed = state.finalized || is_past_finish(state, now) || hard_cap_reached(config, state);
    if closed {
        decide(config, state)
    } else {
        Outcome::Pending
    }
}

fn decide(config: &SaleConfig, state: &CampaignState) -> Outcome {
    if state.total_in(config.cap_unit) >= config.soft_cap {
        Outcome::Success
    } else {
        Outcome::Failure
    }
}

/// Whether settlement itself owes the investors payouts. `Claim` sales and
/// allocations that already left at deposit time leave nothing to push.
fn disburses(config: &SaleConfig, outcome: Outcome) -> bool {
    match (outcome, config.settlement) {
        (_, SettlementMode::Claim) => false,
        (Outcome::Success, SettlementMode::Batch) => !config.pays_on_deposit(),
        _ => true,
    }
}

/// The one-way `open -> finalized` transition.
///
/// In `Batch` mode the first `page` index entries are paid right away: tokens
/// on success (unless they already left at deposit time), the deposit on
/// failure. `settle` pays the rest. In `Claim` mode the ledger is left for
/// investors to drain. A payout error leaves records already consumed in
/// `store`; the host discards them together with the failed invocation.
pub fn finalize<S: SaleStore, P: PaymentSink>(
    env: &Env,
    store: &mut S,
    sink: &mut P,
    config: &SaleConfig,
    state: &mut CampaignState,
    now: u64,
    page: u32,
) -> Result<Settlement, SaleError> {
    if state.finalized {
        return Err(SaleError::AlreadyFinalized);
    }
    let outcome = outcome(config, state, now);
    if outcome == Outcome::Pending {
        return Err(SaleError::NotYetEligible);
    }

    let settlement = if disburses(config, outcome) {
        pay_page(store, sink, state, outcome, page)?
    } else {
        Settlement {
            outcome,
            payouts: 0,
            total_paid: 0,
            remaining: 0,
        }
    };
    state.finalized = true;

    log!(
        env,
        "sale finalized: success {}, payouts {}, remaining {}",
        outcome == Outcome::Success,
        settlement.payouts,
        settlement.remaining
    );
    Ok(settlement)
}

/// Pay the next `limit` index entries of a finalized `Batch` sale.
///
/// Anyone may drive this forward: every payout goes to the owner of the
/// record it consumes. Records their owners already refunded or claimed are
/// skipped.
pub fn settle<S: SaleStore, P: PaymentSink>(
    env: &Env,
    store: &mut S,
    sink: &mut P,
    config: &SaleConfig,
    state: &mut CampaignState,
    limit: u32,
) -> Result<Settlement, SaleError> {
    if !state.finalized {
        return Err(SaleError::NotYetEligible);
    }
    if limit == 0 {
        return Err(SaleError::InvalidInput);
    }
    let outcome = decide(config, state);
    if !disburses(config, outcome) || state.settled >= store.investor_count() {
        return Err(SaleError::InvalidState);
    }

    let settlement = pay_page(store, sink, state, outcome, limit)?;
    log!(
        env,
        "settled page: payouts {}, remaining {}",
        settlement.payouts,
        settlement.remaining
    );
    Ok(settlement)
}

fn pay_page<S: SaleStore, P: PaymentSink>(
    store: &mut S,
    sink: &mut P,
    state: &mut CampaignState,
    outcome: Outcome,
    limit: u32,
) -> Result<Settlement, SaleError> {
    let count = store.investor_count();
    let end = state.settled.saturating_add(limit).min(count);
    let memo = memo_for(outcome);

    let mut settlement = Settlement {
        outcome,
        payouts: 0,
        total_paid: 0,
        remaining: count - end,
    };
    for index in state.settled..end {
        let Some(investor) = store.investor_at(index) else {
            continue;
        };
        let Some(record) = store.record(&investor) else {
            continue;
        };
        let (asset, amount) = record.owed(outcome).ok_or(SaleError::InvalidState)?;
        store.delete_record(&investor);
        if amount > 0 {
            sink.pay(asset, &investor, amount, memo.clone())?;
            settlement.payouts += 1;
            settlement.total_paid = checked_add(settlement.total_paid, amount)?;
        }
    }
    state.settled = end;
    Ok(settlement)
}

/// Return an investor's deposit after the sale closed below its soft cap.
///
/// The record is consumed before the payout is requested, so a repeated call
/// finds nothing and pays nothing.
pub fn refund<S: SaleStore, P: PaymentSink>(
    env: &Env,
    store: &mut S,
    sink: &mut P,
    config: &SaleConfig,
    state: &CampaignState,
    investor: &Address,
    now: u64,
) -> Result<i128, SaleError> {
    match outcome(config, state, now) {
        Outcome::Pending => return Err(SaleError::NotYetEligible),
        Outcome::Success => return Err(SaleError::InvalidState),
        Outcome::Failure => {}
    }

    let record = store
        .record(investor)
        .filter(|r| r.amount_deposited > 0)
        .ok_or(SaleError::NothingToRefund)?;
    store.delete_record(investor);
    sink.pay(Asset::Payment, investor, record.amount_deposited, symbol_short!("refund"))?;

    log!(env, "refunded {}", record.amount_deposited);
    Ok(record.amount_deposited)
}

/// Hand an investor their allocation after a successful finalize.
///
/// This is the only delivery path in `Claim` mode. In `Batch` mode it lets an
/// investor collect ahead of the paged payout; `settle` then skips the
/// consumed record.
pub fn claim<S: SaleStore, P: PaymentSink>(
    store: &mut S,
    sink: &mut P,
    config: &SaleConfig,
    state: &CampaignState,
    investor: &Address,
    now: u64,
) -> Result<i128, SaleError> {
    if !state.finalized {
        return Err(SaleError::NotYetEligible);
    }
    if outcome(config, state, now) != Outcome::Success || config.pays_on_deposit() {
        return Err(SaleError::InvalidState);
    }

    let record = store
        .record(investor)
        .filter(|r| r.amount_allocated > 0)
        .ok_or(SaleError::NothingToClaim)?;
    store.delete_record(investor);
    sink.pay(Asset::Allocation, investor, record.amount_allocated, symbol_short!("tokens"))?;
    Ok(record.amount_allocated)
}

/// Send the raised payment asset to the issuer, once, after a successful sale.
pub fn withdraw<P: PaymentSink>(
    sink: &mut P,
    config: &SaleConfig,
    state: &mut CampaignState,
    issuer: &Address,
    now: u64,
) -> Result<i128, SaleError> {
    match outcome(config, state, now) {
        Outcome::Pending => return Err(SaleError::NotYetEligible),
        Outcome::Failure => return Err(SaleError::InvalidState),
        Outcome::Success => {}
    }
    if state.withdrawn {
        return Err(SaleError::InvalidState);
    }

    state.withdrawn = true;
    if state.total_raised > 0 {
        sink.pay(Asset::Payment, issuer, state.total_raised, symbol_short!("withdraw"))?;
    }
    Ok(state.total_raised)
}

fn memo_for(outcome: Outcome) -> Symbol {
    match outcome {
        Outcome::Failure => symbol_short!("refund"),
        _ => symbol_short!("tokens"),
    }
}
