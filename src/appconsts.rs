//! Chain-wide constants

/// Denomination of the native bonding token, used for fees.
pub const BOND_DENOM: &str = "utia";
