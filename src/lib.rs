//! txopt - composable transaction options
//!
//! Functional options that set a transaction builder's gas limit, fee, memo,
//! tip, timeout height and fee payer/granter before signing, and a routine
//! that carries those settings over from an already finalized transaction.

pub mod appconsts;
pub mod config;
pub mod observability;
pub mod tx_builder;
pub mod types;

pub use appconsts::BOND_DENOM;
pub use tx_builder::{
    apply_options, inherit_tx_config, SignedTransaction, SignedTx, TransactionBuilder, TxBuilder,
    TxOption, TxOptionsError,
};
pub use types::{Address, Coin, Coins, Tip};
