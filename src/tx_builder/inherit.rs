//! Carry settings forward from a finalized transaction
//!
//! Used when a transaction is rebuilt or re-signed and the caller's original
//! intent (gas, fees, memo, tip, timeout, fee delegation) has to survive.
//! Zero and empty source values are treated as "unset" and are not copied.

use crate::appconsts::BOND_DENOM;
use crate::tx_builder::builder::TxBuilder;
use crate::tx_builder::signed::SignedTx;

/// Copy every non-default setting of `tx` onto `builder` and return it
///
/// Field policy:
/// - gas, timeout height: copied when non-zero
/// - fee: copied when the [`BOND_DENOM`] amount is non-zero; fees paid only
///   in other denominations are treated as zero and skipped
/// - memo: copied when non-empty
/// - tip: copied when present
/// - fee payer: set to the fee granter when `tx` has exactly one signer and
///   the granter differs from it, including when the granter is empty
/// - fee granter: copied when non-empty
pub fn inherit_tx_config<'a, B, T>(builder: &'a mut B, tx: &T) -> &'a mut B
where
    B: TxBuilder + ?Sized,
    T: SignedTx + ?Sized,
{
    let gas = tx.gas();
    if gas != 0 {
        tracing::debug!(gas, "Inheriting gas limit");
        builder.set_gas_limit(gas);
    }

    let fee = tx.fee();
    if fee.amount_of(BOND_DENOM) != 0 {
        tracing::debug!(fee = %fee, "Inheriting fee amount");
        builder.set_fee_amount(fee.clone());
    } else if !fee.is_empty() {
        tracing::trace!(fee = %fee, denom = BOND_DENOM, "Skipping fee without native component");
    }

    let memo = tx.memo();
    if !memo.is_empty() {
        tracing::debug!(memo, "Inheriting memo");
        builder.set_memo(memo.to_string());
    }

    if let Some(tip) = tx.tip() {
        tracing::debug!(tip = %tip.amount, tipper = %tip.tipper, "Inheriting tip");
        builder.set_tip(Some(tip.clone()));
    }

    let timeout_height = tx.timeout_height();
    if timeout_height != 0 {
        tracing::debug!(timeout_height, "Inheriting timeout height");
        builder.set_timeout_height(timeout_height);
    }

    let granter = tx.fee_granter();

    // With several signers a delegated fee payer could invalidate the
    // signatures, so delegation is only carried for single-signer txs.
    match tx.signers() {
        [signer] if granter != signer => {
            tracing::debug!(fee_payer = %granter, "Inheriting fee payer from fee granter");
            builder.set_fee_payer(granter.clone());
        }
        [_] => {}
        signers => {
            tracing::trace!(signers = signers.len(), "Skipping fee payer check");
        }
    }

    if !granter.is_empty() {
        tracing::debug!(fee_granter = %granter, "Inheriting fee granter");
        builder.set_fee_granter(granter.clone());
    }

    builder
}
