use soroban_sdk::{token, Address, Env, Symbol};

use crate::errors::SaleError;
use crate::events;
use crate::storage;
use crate::storage_types::Asset;

/// Outbound payments made by the sale.
///
/// A call that returns `Ok` is final: the host commits the transfer together
/// with every ledger write of the same invocation, and discards both if the
/// invocation later fails. An `Err` aborts the operation that requested it.
pub trait PaymentSink {
    fn pay(&mut self, asset: Asset, to: &Address, amount: i128, memo: Symbol)
        -> Result<(), SaleError>;
}

/// Pays out of the contract's own balances of the two Stellar assets. A
/// transfer the token contract refuses comes back as `PayoutRejected`.
pub struct TokenSink<'a> {
    env: &'a Env,
    payment_token: Address,
    sale_token: Address,
}

impl<'a> TokenSink<'a> {
    pub fn new(env: &'a Env, payment_token: Address, sale_token: Address) -> Self {
        TokenSink {
            env,
            payment_token,
            sale_token,
        }
    }

    /// Sink over the two tokens recorded at deployment.
    pub fn load(env: &'a Env) -> Result<Self, SaleError> {
        Ok(TokenSink::new(
            env,
            storage::get_payment_token(env)?,
            storage::get_sale_token(env)?,
        ))
    }

    fn token_for(&self, asset: Asset) -> &Address {
        match asset {
            Asset::Payment => &self.payment_token,
            Asset::Allocation => &self.sale_token,
        }
    }
}

impl PaymentSink for TokenSink<'_> {
    fn pay(
        &mut self,
        asset: Asset,
        to: &Address,
        amount: i128,
        memo: Symbol,
    ) -> Result<(), SaleError> {
        if amount <= 0 {
            return Err(SaleError::InvalidInput);
        }

        let client = token::Client::new(self.env, self.token_for(asset));
        let this = self.env.current_contract_address();
        if !matches!(client.try_transfer(&this, to, &amount), Ok(Ok(()))) {
            return Err(SaleError::PayoutRejected);
        }

        events::emit_payout(
            self.env,
            events::PayoutEvent {
                asset,
                to: to.clone(),
                amount,
                memo,
            },
        );
        Ok(())
    }
}
