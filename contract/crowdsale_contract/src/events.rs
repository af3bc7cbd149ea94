use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{Asset, Settlement};

#[contracttype]
#[derive(Clone)]
pub struct InitializedEvent {
    pub issuer: Address,
    pub start: u64,
    pub finish: u64,
    pub inventory: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct DepositEvent {
    pub investor: Address,
    pub amount: i128,
    pub tokens: i128,
    pub total_raised: i128,
    pub total_allocated: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ScheduleEvent {
    pub start: u64,
    pub finish: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct PayoutEvent {
    pub asset: Asset,
    pub to: Address,
    pub amount: i128,
    pub memo: Symbol,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events().publish((Symbol::new(env, "initialized"),), event);
}

pub fn emit_deposit(env: &Env, event: DepositEvent) {
    env.events().publish((Symbol::new(env, "deposit"),), event);
}

pub fn emit_whitelisted(env: &Env, account: Address) {
    env.events().publish((Symbol::new(env, "whitelisted"),), account);
}

pub fn emit_unwhitelisted(env: &Env, account: Address) {
    env.events().publish((Symbol::new(env, "unwhitelisted"),), account);
}

pub fn emit_whitelist_toggled(env: &Env, enabled: bool) {
    env.events().publish((Symbol::new(env, "whitelist_toggled"),), enabled);
}

pub fn emit_schedule(env: &Env, event: ScheduleEvent) {
    env.events().publish((Symbol::new(env, "schedule"),), event);
}

pub fn emit_finalized(env: &Env, event: Settlement) {
    env.events().publish((Symbol::new(env, "finalized"),), event);
}

pub fn emit_settled(env: &Env, event: Settlement) {
    env.events().publish((Symbol::new(env, "settled"),), event);
}

pub fn emit_payout(env: &Env, event: PayoutEvent) {
    env.events().publish((Symbol::new(env, "payout"),), event);
}

pub fn emit_refunded(env: &Env, investor: Address, amount: i128) {
    env.events().publish((Symbol::new(env, "refunded"), investor), amount);
}

pub fn emit_claimed(env: &Env, investor: Address, amount: i128) {
    env.events().publish((Symbol::new(env, "claimed"), investor), amount);
}

pub fn emit_withdrawn(env: &Env, issuer: Address, amount: i128) {
    env.events().publish((Symbol::new(env, "withdrawn"), issuer), amount);
}
