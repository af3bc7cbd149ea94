use soroban_sdk::{contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Issuer,
    PaymentToken,
    SaleToken,
    Config,
    State,
    InvestorCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Deposit(Address),
    Whitelisted(Address),
    InvestorAt(u32),
}

/// Unit a bound or cap is measured in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Unit {
    Payment,
    Allocation,
}

/// Which of the two assets a payout moves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Asset {
    Payment,
    Allocation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SettlementMode {
    /// `finalize` walks the ledger and pays every investor.
    Batch,
    /// `finalize` only closes the sale; investors call `claim`/`refund`.
    Claim,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Outcome {
    Pending,
    Success,
    Failure,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Preset {
    Standard,
    Whitelisted,
    Instant,
    WhitelistedInstant,
    SelfClaim,
    WhitelistedSelfClaim,
    TokenCapped,
    WhitelistedTokenCapped,
}

/// Allocation units per payment unit, as `numerator / denominator`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Rate {
    pub numerator: i128,
    pub denominator: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub rate: Rate,
    pub min_contrib: i128,
    pub max_contrib: i128,
    pub contrib_unit: Unit,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub cap_unit: Unit,
    pub whitelist: bool,
    pub transferable: bool,
    pub settlement: SettlementMode,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CampaignState {
    pub start: u64,
    pub finish: u64,
    pub total_raised: i128,
    pub total_allocated: i128,
    pub finalized: bool,
    pub whitelist_enabled: bool,
    pub withdrawn: bool,
    /// Investor index position the paged payout has reached.
    pub settled: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositRecord {
    pub investor: Address,
    pub amount_deposited: i128,
    pub amount_allocated: i128,
}

impl DepositRecord {
    pub fn empty(investor: Address) -> Self {
        DepositRecord {
            investor,
            amount_deposited: 0,
            amount_allocated: 0,
        }
    }

    /// Amount of `unit` this record holds.
    pub fn amount_in(&self, unit: Unit) -> i128 {
        match unit {
            Unit::Payment => self.amount_deposited,
            Unit::Allocation => self.amount_allocated,
        }
    }

    /// What settlement owes this investor for a decided outcome, and in
    /// which asset.
    pub fn owed(&self, outcome: Outcome) -> Option<(Asset, i128)> {
        match outcome {
            Outcome::Success => Some((Asset::Allocation, self.amount_allocated)),
            Outcome::Failure => Some((Asset::Payment, self.amount_deposited)),
            Outcome::Pending => None,
        }
    }
}

impl CampaignState {
    pub fn total_in(&self, unit: Unit) -> i128 {
        match unit {
            Unit::Payment => self.total_raised,
            Unit::Allocation => self.total_allocated,
        }
    }
}

/// One initial distribution of the sale token made by `init`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MintEntry {
    pub to: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositReceipt {
    pub investor: Address,
    pub amount: i128,
    pub tokens: i128,
    pub paid_out: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Settlement {
    pub outcome: Outcome,
    pub payouts: u32,
    pub total_paid: i128,
    /// Index entries still waiting for a `settle` call.
    pub remaining: u32,
}

// Constants
pub const SETTLE_PAGE: u32 = 20; // records paid by `finalize` itself
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
