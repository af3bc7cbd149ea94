use crate::errors::SaleError;
use crate::storage_types::{Preset, Rate, SaleConfig, SettlementMode, Unit};

/// One whole unit of a 7-decimal Stellar asset.
pub const UNIT: i128 = 10_000_000;

impl SaleConfig {
    pub fn validate(&self) -> Result<(), SaleError> {
        if self.rate.numerator <= 0 || self.rate.denominator <= 0 {
            return Err(SaleError::InvalidInput);
        }
        if self.min_contrib < 0 || self.max_contrib <= 0 || self.min_contrib > self.max_contrib {
            return Err(SaleError::InvalidInput);
        }
        if self.soft_cap < 0 || self.hard_cap <= 0 || self.soft_cap > self.hard_cap {
            return Err(SaleError::InvalidInput);
        }
        // Allocations paid at deposit time are final; such a sale must always succeed.
        if self.transferable && self.soft_cap > 0 {
            return Err(SaleError::InvalidInput);
        }
        Ok(())
    }

    /// Whether allocations leave the contract at deposit time rather than at settlement.
    pub fn pays_on_deposit(&self) -> bool {
        self.transferable
    }
}

pub fn config(preset: Preset) -> SaleConfig {
    match preset {
        Preset::Standard => standard(false),
        Preset::Whitelisted => standard(true),
        Preset::Instant => instant(false),
        Preset::WhitelistedInstant => instant(true),
        Preset::SelfClaim => self_claim(false),
        Preset::WhitelistedSelfClaim => self_claim(true),
        Preset::TokenCapped => token_capped(false),
        Preset::WhitelistedTokenCapped => token_capped(true),
    }
}

fn standard(whitelist: bool) -> SaleConfig {
    SaleConfig {
        rate: Rate {
            numerator: 100,
            denominator: 1,
        },
        min_contrib: 10 * UNIT,
        max_contrib: 100_000 * UNIT,
        contrib_unit: Unit::Payment,
        soft_cap: 50_000 * UNIT,
        hard_cap: 500_000 * UNIT,
        cap_unit: Unit::Payment,
        whitelist,
        transferable: false,
        settlement: SettlementMode::Batch,
    }
}

fn instant(whitelist: bool) -> SaleConfig {
    SaleConfig {
        soft_cap: 0,
        transferable: true,
        ..standard(whitelist)
    }
}

fn self_claim(whitelist: bool) -> SaleConfig {
    SaleConfig {
        settlement: SettlementMode::Claim,
        ..standard(whitelist)
    }
}

fn token_capped(whitelist: bool) -> SaleConfig {
    SaleConfig {
        rate: Rate {
            numerator: 3,
            denominator: 2,
        },
        min_contrib: 15 * UNIT,
        max_contrib: 150_000 * UNIT,
        contrib_unit: Unit::Allocation,
        soft_cap: 1_000_000 * UNIT,
        hard_cap: 15_000_000 * UNIT,
        cap_unit: Unit::Allocation,
        whitelist,
        transferable: false,
        settlement: SettlementMode::Batch,
    }
}
