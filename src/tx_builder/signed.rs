//! Read-only view of a finalized transaction

use serde::{Deserialize, Serialize};

use crate::types::{Address, Coins, Tip};

/// Accessors over a finalized transaction's metadata
pub trait SignedTx {
    fn gas(&self) -> u64;
    fn fee(&self) -> &Coins;
    fn memo(&self) -> &str;
    fn tip(&self) -> Option<&Tip>;
    fn timeout_height(&self) -> u64;
    fn signers(&self) -> &[Address];
    /// Declared fee granter; empty when none was set
    fn fee_granter(&self) -> &Address;
}

/// Finalized transaction metadata
///
/// Deserializable from JSON so transactions produced elsewhere can be fed to
/// [`inherit_tx_config`](crate::tx_builder::inherit_tx_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    #[serde(default)]
    pub gas: u64,
    #[serde(default)]
    pub fee: Coins,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub tip: Option<Tip>,
    #[serde(default)]
    pub timeout_height: u64,
    pub signers: Vec<Address>,
    #[serde(default)]
    pub fee_granter: Address,
}

impl SignedTx for SignedTransaction {
    fn gas(&self) -> u64 {
        self.gas
    }

    fn fee(&self) -> &Coins {
        &self.fee
    }

    fn memo(&self) -> &str {
        &self.memo
    }

    fn tip(&self) -> Option<&Tip> {
        self.tip.as_ref()
    }

    fn timeout_height(&self) -> u64 {
        self.timeout_height
    }

    fn signers(&self) -> &[Address] {
        &self.signers
    }

    fn fee_granter(&self) -> &Address {
        &self.fee_granter
    }
}
