//! Transaction builder seam
//!
//! [`TxBuilder`] is the setter contract options are applied through. The
//! [`TransactionBuilder`] struct is the in-memory accumulator used by the CLI
//! and tests; any other builder (a signing client's, for instance) can plug in
//! by implementing the trait.

use serde::{Deserialize, Serialize};

use crate::tx_builder::signed::SignedTransaction;
use crate::types::{Address, Coins, Tip};

/// Mutable accumulator of transaction metadata prior to signing
pub trait TxBuilder {
    fn set_gas_limit(&mut self, limit: u64);
    fn set_fee_amount(&mut self, amount: Coins);
    fn set_memo(&mut self, memo: String);
    fn set_fee_payer(&mut self, fee_payer: Address);
    fn set_tip(&mut self, tip: Option<Tip>);
    fn set_timeout_height(&mut self, height: u64);
    fn set_fee_granter(&mut self, fee_granter: Address);
}

/// In-memory transaction builder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionBuilder {
    gas_limit: u64,
    fee_amount: Coins,
    memo: String,
    fee_payer: Option<Address>,
    fee_granter: Option<Address>,
    tip: Option<Tip>,
    timeout_height: u64,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn fee_amount(&self) -> &Coins {
        &self.fee_amount
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn fee_payer(&self) -> Option<&Address> {
        self.fee_payer.as_ref()
    }

    pub fn fee_granter(&self) -> Option<&Address> {
        self.fee_granter.as_ref()
    }

    pub fn tip(&self) -> Option<&Tip> {
        self.tip.as_ref()
    }

    pub fn timeout_height(&self) -> u64 {
        self.timeout_height
    }

    /// Seal the accumulated metadata into a transaction carrying `signers`
    ///
    /// No signature bytes are produced; this only fixes the metadata and the
    /// signer list so the result can be read back through [`SignedTx`].
    ///
    /// [`SignedTx`]: crate::tx_builder::SignedTx
    pub fn into_signed(self, signers: Vec<Address>) -> SignedTransaction {
        SignedTransaction {
            gas: self.gas_limit,
            fee: self.fee_amount,
            memo: self.memo,
            tip: self.tip,
            timeout_height: self.timeout_height,
            signers,
            fee_granter: self.fee_granter.unwrap_or_default(),
        }
    }
}

impl TxBuilder for TransactionBuilder {
    fn set_gas_limit(&mut self, limit: u64) {
        self.gas_limit = limit;
    }

    fn set_fee_amount(&mut self, amount: Coins) {
        self.fee_amount = amount;
    }

    fn set_memo(&mut self, memo: String) {
        self.memo = memo;
    }

    fn set_fee_payer(&mut self, fee_payer: Address) {
        self.fee_payer = Some(fee_payer);
    }

    fn set_tip(&mut self, tip: Option<Tip>) {
        self.tip = tip;
    }

    fn set_timeout_height(&mut self, height: u64) {
        self.timeout_height = height;
    }

    fn set_fee_granter(&mut self, fee_granter: Address) {
        self.fee_granter = Some(fee_granter);
    }
}
