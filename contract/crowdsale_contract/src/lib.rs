#![no_std]

//! Token sale settlement contract.
//!
//! Investors deposit the payment asset during a fixed window and are
//! credited an allocation of the sale token at a fixed rate. Once the
//! window closes (or the hard cap is hit) the sale settles exactly once:
//! allocations are delivered on success, deposits are returned on failure.
//!
//! | Module          | Responsibility                                   |
//! |-----------------|--------------------------------------------------|
//! | `access`        | issuer checks and the whitelist gate             |
//! | `deposit`       | accepting payments and enforcing bounds and caps |
//! | `settlement`    | finalize, paged settle, refund, claim, withdraw  |
//! | `bootstrap`     | one-time deployment and initial minting          |
//! | `storage`       | `SaleStore` and its Soroban storage backend      |
//! | `sink`          | `PaymentSink` and its token-backed implementation|
//! | `presets`       | named sale configurations                        |

mod access;
mod bootstrap;
mod deposit;
mod errors;
mod events;
mod presets;
mod settlement;
mod sink;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub use errors::SaleError;
pub use presets::UNIT;
pub use sink::{PaymentSink, TokenSink};
pub use storage::{EnvStore, SaleStore};
pub use storage_types::*;
pub use utils::to_tokens;

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Deploy the sale. Runs once; the contract must already be the admin of
    /// `sale_token`. `minter`, when given, takes over the sale token's admin
    /// role after the inventory and `premint` entries have been minted.
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        env: Env,
        issuer: Address,
        payment_token: Address,
        sale_token: Address,
        config: SaleConfig,
        start: u64,
        finish: u64,
        premint: Vec<MintEntry>,
        minter: Option<Address>,
    ) -> Result<(), SaleError> {
        issuer.require_auth();

        let state = bootstrap::initialize(
            &env,
            &issuer,
            &payment_token,
            &sale_token,
            &config,
            start,
            finish,
            &premint,
            &minter,
        )?;
        EnvStore::new(&env).store_state(&state);

        events::emit_initialized(
            &env,
            events::InitializedEvent {
                issuer,
                start,
                finish,
                inventory: utils::allocation_ceiling(&config)?,
            },
        );
        Ok(())
    }

    /// Accept `amount` of the payment asset from `investor`.
    ///
    /// `asset` must be the payment token fixed at deployment. The funds are
    /// pulled from the investor in the same invocation that records them.
    pub fn deposit(
        env: Env,
        investor: Address,
        asset: Address,
        amount: i128,
    ) -> Result<DepositReceipt, SaleError> {
        investor.require_auth();

        let config = storage::get_config(&env)?;
        let payment_token = storage::get_payment_token(&env)?;
        if asset != payment_token {
            return Err(SaleError::InvalidInput);
        }

        let mut store = EnvStore::new(&env);
        let mut state = store.load_state()?;
        let mut sink = TokenSink::load(&env)?;
        let now = env.ledger().timestamp();

        let receipt = deposit::process(
            &env, &mut store, &mut sink, &config, &mut state, &investor, amount, now,
        )?;
        utils::collect_payment(&env, &payment_token, &investor, amount);
        store.store_state(&state);

        events::emit_deposit(
            &env,
            events::DepositEvent {
                investor,
                amount,
                tokens: receipt.tokens,
                total_raised: state.total_raised,
                total_allocated: state.total_allocated,
            },
        );
        Ok(receipt)
    }

    pub fn white(env: Env, account: Address) -> Result<(), SaleError> {
        access::require_issuer(&env)?;
        access::white(&mut EnvStore::new(&env), &account)?;
        events::emit_whitelisted(&env, account);
        Ok(())
    }

    pub fn unwhite(env: Env, account: Address) -> Result<(), SaleError> {
        access::require_issuer(&env)?;
        access::unwhite(&mut EnvStore::new(&env), &account)?;
        events::emit_unwhitelisted(&env, account);
        Ok(())
    }

    pub fn white_many(env: Env, accounts: Vec<Address>) -> Result<(), SaleError> {
        access::require_issuer(&env)?;
        access::white_many(&mut EnvStore::new(&env), &accounts)?;
        for account in accounts.iter() {
            events::emit_whitelisted(&env, account);
        }
        Ok(())
    }

    pub fn unwhite_many(env: Env, accounts: Vec<Address>) -> Result<(), SaleError> {
        access::require_issuer(&env)?;
        access::unwhite_many(&mut EnvStore::new(&env), &accounts)?;
        for account in accounts.iter() {
            events::emit_unwhitelisted(&env, account);
        }
        Ok(())
    }

    /// Turn whitelist enforcement on or off. Setting the current value is an error.
    pub fn set_whitelist(env: Env, enabled: bool) -> Result<(), SaleError> {
        access::require_issuer(&env)?;

        let mut store = EnvStore::new(&env);
        let mut state = store.load_state()?;
        if state.whitelist_enabled == enabled {
            return Err(SaleError::InvalidState);
        }
        state.whitelist_enabled = enabled;
        store.store_state(&state);

        events::emit_whitelist_toggled(&env, enabled);
        Ok(())
    }

    /// Move the opening time. Only allowed before the sale has opened.
    pub fn set_start(env: Env, start: u64) -> Result<(), SaleError> {
        access::require_issuer(&env)?;

        let mut store = EnvStore::new(&env);
        let mut state = store.load_state()?;
        if state.finalized || env.ledger().timestamp() >= state.start {
            return Err(SaleError::InvalidState);
        }
        if start >= state.finish {
            return Err(SaleError::InvalidInput);
        }
        state.start = start;
        store.store_state(&state);

        events::emit_schedule(
            &env,
            events::ScheduleEvent {
                start,
                finish: state.finish,
            },
        );
        Ok(())
    }

    /// Move the closing time. Only allowed while the window has not passed.
    pub fn set_finish(env: Env, finish: u64) -> Result<(), SaleError> {
        access::require_issuer(&env)?;

        let mut store = EnvStore::new(&env);
        let mut state = store.load_state()?;
        if state.finalized || utils::is_past_finish(&state, env.ledger().timestamp()) {
            return Err(SaleError::InvalidState);
        }
        if finish <= state.start {
            return Err(SaleError::InvalidInput);
        }
        state.finish = finish;
        store.store_state(&state);

        events::emit_schedule(
            &env,
            events::ScheduleEvent {
                start: state.start,
                finish,
            },
        );
        Ok(())
    }

    /// Settle the sale. Allowed once, after the window or at the hard cap.
    /// Pays at most `SETTLE_PAGE` records; `remaining` tells how many index
    /// entries are left for `settle`.
    pub fn finalize(env: Env) -> Result<Settlement, SaleError> {
        access::require_issuer(&env)?;

        let config = storage::get_config(&env)?;
        let mut store = EnvStore::new(&env);
        let mut state = store.load_state()?;
        let mut sink = TokenSink::load(&env)?;
        let now = env.ledger().timestamp();

        let settlement = settlement::finalize(
            &env, &mut store, &mut sink, &config, &mut state, now, SETTLE_PAGE,
        )?;
        store.store_state(&state);

        events::emit_finalized(&env, settlement.clone());
        Ok(settlement)
    }

    /// Continue the payout of a finalized batch sale, `limit` index entries
    /// at a time. Needs no authorization.
    pub fn settle(env: Env, limit: u32) -> Result<Settlement, SaleError> {
        let config = storage::get_config(&env)?;
        let mut store = EnvStore::new(&env);
        let mut state = store.load_state()?;
        let mut sink = TokenSink::load(&env)?;

        let settlement =
            settlement::settle(&env, &mut store, &mut sink, &config, &mut state, limit)?;
        store.store_state(&state);

        events::emit_settled(&env, settlement.clone());
        Ok(settlement)
    }

    /// Return the investor's deposit after a sale that missed its soft cap.
    pub fn refund(env: Env, investor: Address) -> Result<i128, SaleError> {
        investor.require_auth();

        let config = storage::get_config(&env)?;
        let mut store = EnvStore::new(&env);
        let state = store.load_state()?;
        let mut sink = TokenSink::load(&env)?;
        let now = env.ledger().timestamp();

        let amount = settlement::refund(
            &env, &mut store, &mut sink, &config, &state, &investor, now,
        )?;

        events::emit_refunded(&env, investor, amount);
        Ok(amount)
    }

    /// Deliver the investor's allocation after a successful finalize. In
    /// `Batch` mode this collects ahead of the paged payout.
    pub fn claim(env: Env, investor: Address) -> Result<i128, SaleError> {
        investor.require_auth();

        let config = storage::get_config(&env)?;
        let mut store = EnvStore::new(&env);
        let state = store.load_state()?;
        let mut sink = TokenSink::load(&env)?;
        let now = env.ledger().timestamp();

        let amount = settlement::claim(&mut store, &mut sink, &config, &state, &investor, now)?;

        events::emit_claimed(&env, investor, amount);
        Ok(amount)
    }

    /// Send the raised funds to the issuer after a successful sale.
    pub fn withdraw(env: Env) -> Result<i128, SaleError> {
        let issuer = access::require_issuer(&env)?;

        let config = storage::get_config(&env)?;
        let mut store = EnvStore::new(&env);
        let mut state = store.load_state()?;
        let mut sink = TokenSink::load(&env)?;
        let now = env.ledger().timestamp();

        let amount = settlement::withdraw(&mut sink, &config, &mut state, &issuer, now)?;
        store.store_state(&state);

        events::emit_withdrawn(&env, issuer, amount);
        Ok(amount)
    }

    // Views

    pub fn state(env: Env) -> Result<CampaignState, SaleError> {
        EnvStore::new(&env).load_state()
    }

    pub fn config(env: Env) -> Result<SaleConfig, SaleError> {
        storage::get_config(&env)
    }

    pub fn outcome(env: Env) -> Result<Outcome, SaleError> {
        let config = storage::get_config(&env)?;
        let state = EnvStore::new(&env).load_state()?;
        Ok(settlement::outcome(&config, &state, env.ledger().timestamp()))
    }

    pub fn record(env: Env, investor: Address) -> Option<DepositRecord> {
        EnvStore::new(&env).record(&investor)
    }

    pub fn investor_count(env: Env) -> u32 {
        EnvStore::new(&env).investor_count()
    }

    /// Investors in first-deposit order, `limit` of them from index `start`.
    pub fn investors(env: Env, start: u32, limit: u32) -> Vec<Address> {
        storage::investor_page(&env, &EnvStore::new(&env), start, limit)
    }

    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        EnvStore::new(&env).is_whitelisted(&account)
    }

    pub fn preset(_env: Env, preset: Preset) -> SaleConfig {
        presets::config(preset)
    }
}
