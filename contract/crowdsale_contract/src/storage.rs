use soroban_sdk::{Address, Env, Vec};

use crate::errors::SaleError;
use crate::storage_types::{
    CampaignState, DataKey, DepositRecord, PersistentKey, SaleConfig, TTL_INSTANCE, TTL_PERSISTENT,
};

/// Campaign singleton, per-investor ledger and whitelist set.
///
/// The engine only ever talks to storage through this trait, so every
/// operation can be driven against an in-memory ledger in tests.
pub trait SaleStore {
    fn load_state(&self) -> Result<CampaignState, SaleError>;
    fn store_state(&mut self, state: &CampaignState);

    fn record(&self, investor: &Address) -> Option<DepositRecord>;
    /// Writes the record, appending the investor to the index when no record
    /// exists yet. Records are only deleted once the sale has closed to new
    /// deposits, so a missing record always means a first deposit.
    fn upsert_record(&mut self, record: &DepositRecord);
    fn delete_record(&mut self, investor: &Address);

    /// Number of investors that ever deposited.
    fn investor_count(&self) -> u32;
    /// Investor at `index`, in first-deposit order.
    fn investor_at(&self, index: u32) -> Option<Address>;

    fn is_whitelisted(&self, account: &Address) -> bool;
    fn insert_whitelisted(&mut self, account: &Address);
    fn remove_whitelisted(&mut self, account: &Address);
}

/// `SaleStore` backed by the contract's own instance and persistent storage.
pub struct EnvStore<'a> {
    env: &'a Env,
}

impl<'a> EnvStore<'a> {
    pub fn new(env: &'a Env) -> Self {
        EnvStore { env }
    }
}

impl SaleStore for EnvStore<'_> {
    fn load_state(&self) -> Result<CampaignState, SaleError> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::State)
            .ok_or(SaleError::InvalidState)
    }

    fn store_state(&mut self, state: &CampaignState) {
        self.env.storage().instance().set(&DataKey::State, state);
        extend_instance(self.env);
    }

    fn record(&self, investor: &Address) -> Option<DepositRecord> {
        self.env
            .storage()
            .persistent()
            .get(&PersistentKey::Deposit(investor.clone()))
    }

    fn upsert_record(&mut self, record: &DepositRecord) {
        let key = PersistentKey::Deposit(record.investor.clone());
        if !self.env.storage().persistent().has(&key) {
            let count = self.investor_count();
            let slot = PersistentKey::InvestorAt(count);
            self.env.storage().persistent().set(&slot, &record.investor);
            extend_persistent(self.env, &slot);
            self.env
                .storage()
                .instance()
                .set(&DataKey::InvestorCount, &(count + 1));
        }
        self.env.storage().persistent().set(&key, record);
        extend_persistent(self.env, &key);
    }

    fn delete_record(&mut self, investor: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&PersistentKey::Deposit(investor.clone()));
    }

    fn investor_count(&self) -> u32 {
        self.env
            .storage()
            .instance()
            .get(&DataKey::InvestorCount)
            .unwrap_or(0)
    }

    fn investor_at(&self, index: u32) -> Option<Address> {
        self.env
            .storage()
            .persistent()
            .get(&PersistentKey::InvestorAt(index))
    }

    fn is_whitelisted(&self, account: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&PersistentKey::Whitelisted(account.clone()))
    }

    fn insert_whitelisted(&mut self, account: &Address) {
        let key = PersistentKey::Whitelisted(account.clone());
        self.env.storage().persistent().set(&key, &true);
        extend_persistent(self.env, &key);
    }

    fn remove_whitelisted(&mut self, account: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&PersistentKey::Whitelisted(account.clone()));
    }
}

/// Up to `limit` investors starting at index position `start`.
pub fn investor_page<S: SaleStore>(env: &Env, store: &S, start: u32, limit: u32) -> Vec<Address> {
    let end = start.saturating_add(limit).min(store.investor_count());
    let mut page = Vec::new(env);
    for index in start..end {
        if let Some(investor) = store.investor_at(index) {
            page.push_back(investor);
        }
    }
    page
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
    extend_instance(env);
}

pub fn get_issuer(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Issuer)
        .ok_or(SaleError::InvalidState)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::InvalidState)
}

pub fn get_payment_token(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(SaleError::InvalidState)
}

pub fn get_sale_token(env: &Env) -> Result<Address, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::SaleToken)
        .ok_or(SaleError::InvalidState)
}

pub fn set_deployment(
    env: &Env,
    issuer: &Address,
    payment_token: &Address,
    sale_token: &Address,
    config: &SaleConfig,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Issuer, issuer);
    instance.set(&DataKey::PaymentToken, payment_token);
    instance.set(&DataKey::SaleToken, sale_token);
    instance.set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
