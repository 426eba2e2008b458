//! Composable transaction options
//!
//! Each option is a deferred mutation of exactly one builder field. Options
//! are applied through [`TxOption::apply`], which hands back the same builder
//! so calls chain:
//!
//! ```
//! use txopt::tx_builder::{set_gas_limit, set_memo, TransactionBuilder};
//!
//! let mut builder = TransactionBuilder::new();
//! set_memo("hello").apply(set_gas_limit(21_000).apply(&mut builder));
//! assert_eq!(builder.gas_limit(), 21_000);
//! assert_eq!(builder.memo(), "hello");
//! ```
//!
//! Options touching different fields commute. When two options touch the same
//! field the last one applied wins.

use serde::{Deserialize, Serialize};

use crate::tx_builder::builder::TxBuilder;
use crate::types::{Address, Coin, Coins, Tip};

/// A single deferred builder adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "option", content = "value")]
pub enum TxOption {
    GasLimit(u64),
    FeeAmount(Coins),
    Memo(String),
    FeePayer(Address),
    Tip(Option<Tip>),
    TimeoutHeight(u64),
    FeeGranter(Address),
}

impl TxOption {
    /// Apply this option to `builder` and return the same builder
    pub fn apply<'a, B: TxBuilder + ?Sized>(&self, builder: &'a mut B) -> &'a mut B {
        tracing::debug!(option = self.name(), "Applying tx option");
        match self {
            Self::GasLimit(limit) => builder.set_gas_limit(*limit),
            Self::FeeAmount(fees) => builder.set_fee_amount(fees.clone()),
            Self::Memo(memo) => builder.set_memo(memo.clone()),
            Self::FeePayer(addr) => builder.set_fee_payer(addr.clone()),
            Self::Tip(tip) => builder.set_tip(tip.clone()),
            Self::TimeoutHeight(height) => builder.set_timeout_height(*height),
            Self::FeeGranter(addr) => builder.set_fee_granter(addr.clone()),
        }
        builder
    }

    /// Name of the field this option sets
    pub fn name(&self) -> &'static str {
        match self {
            Self::GasLimit(_) => "gas_limit",
            Self::FeeAmount(_) => "fee_amount",
            Self::Memo(_) => "memo",
            Self::FeePayer(_) => "fee_payer",
            Self::Tip(_) => "tip",
            Self::TimeoutHeight(_) => "timeout_height",
            Self::FeeGranter(_) => "fee_granter",
        }
    }
}

/// Apply `options` in order and return the same builder
pub fn apply_options<'a, B: TxBuilder + ?Sized>(
    builder: &'a mut B,
    options: &[TxOption],
) -> &'a mut B {
    options.iter().fold(builder, |b, opt| opt.apply(b))
}

pub fn set_gas_limit(limit: u64) -> TxOption {
    TxOption::GasLimit(limit)
}

pub fn set_fee_amount(fees: Coins) -> TxOption {
    TxOption::FeeAmount(fees)
}

/// Fee of `fee` units of the native bonding token
pub fn set_fee(fee: u64) -> TxOption {
    TxOption::FeeAmount(Coins::single(Coin::bond(u128::from(fee))))
}

pub fn set_memo(memo: impl Into<String>) -> TxOption {
    TxOption::Memo(memo.into())
}

pub fn set_fee_payer(fee_payer: Address) -> TxOption {
    TxOption::FeePayer(fee_payer)
}

pub fn set_tip(tip: Option<Tip>) -> TxOption {
    TxOption::Tip(tip)
}

/// Zero means no timeout
pub fn set_timeout_height(height: u64) -> TxOption {
    TxOption::TimeoutHeight(height)
}

pub fn set_fee_granter(fee_granter: Address) -> TxOption {
    TxOption::FeeGranter(fee_granter)
}
