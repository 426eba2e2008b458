//! Transaction option applier
//!
//! Small, composable mutators that configure an in-progress transaction's
//! metadata before signing, plus [`inherit_tx_config`] which carries those
//! settings forward from an already finalized transaction.
//!
//! ## Architecture
//!
//! - **builder**: the [`TxBuilder`] setter contract and an in-memory builder
//! - **signed**: the [`SignedTx`] accessor contract and a finalized transaction
//! - **options**: [`TxOption`] and one constructor per builder field
//! - **inherit**: conditional copy of settings from a finalized transaction
//! - **errors**: validation errors for option values
//!
//! Applying options never fails and never touches anything but the builder
//! it is handed. The builder is borrowed mutably and returned, so a builder
//! can only be configured from one place at a time.
//!
//! ## Usage Example
//!
//! ```
//! use txopt::tx_builder::{
//!     apply_options, inherit_tx_config, set_fee, set_gas_limit, TransactionBuilder,
//! };
//! use txopt::types::Address;
//!
//! let signer = Address::new(vec![1; 20]);
//! let mut original = TransactionBuilder::new();
//! apply_options(&mut original, &[set_gas_limit(80_000), set_fee(2_000)]);
//! let signed = original.into_signed(vec![signer]);
//!
//! let mut rebuilt = TransactionBuilder::new();
//! inherit_tx_config(&mut rebuilt, &signed);
//! assert_eq!(rebuilt.gas_limit(), 80_000);
//! ```

pub mod errors;
pub use errors::TxOptionsError;

mod builder;
mod inherit;
mod options;
mod signed;

pub use builder::{TransactionBuilder, TxBuilder};
pub use inherit::inherit_tx_config;
pub use options::{
    apply_options, set_fee, set_fee_amount, set_fee_granter, set_fee_payer, set_gas_limit,
    set_memo, set_timeout_height, set_tip, TxOption,
};
pub use signed::{SignedTransaction, SignedTx};
