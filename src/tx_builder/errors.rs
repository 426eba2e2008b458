//! Error types for transaction option values
//!
//! Applying an option or inheriting settings from a signed transaction never
//! fails. Errors only surface where option *values* are constructed from
//! untrusted input: denominations, coin strings, hex addresses and
//! configuration files.

use thiserror::Error;

/// Error type for building transaction option values
#[derive(Error, Debug)]
pub enum TxOptionsError {
    /// Denomination does not match the `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}` grammar
    #[error("Invalid denomination: {0:?}")]
    InvalidDenom(String),

    /// The same denomination appears more than once in a coin set
    #[error("Duplicate denomination in coin set: {0}")]
    DuplicateDenom(String),

    /// A coin string could not be parsed
    #[error("Invalid coin {input:?}: {reason}")]
    InvalidCoin {
        /// The offending input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// An address could not be decoded
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] hex::FromHexError),

    /// Configuration or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TxOptionsError {
    /// Get the error category for log fields
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDenom(_) => "denom",
            Self::DuplicateDenom(_) => "denom",
            Self::InvalidCoin { .. } => "coin",
            Self::InvalidAddress(_) => "address",
            Self::Configuration(_) => "config",
        }
    }
}

// Convenience constructors
impl TxOptionsError {
    /// Create an invalid denomination error
    pub fn invalid_denom(denom: impl Into<String>) -> Self {
        Self::InvalidDenom(denom.into())
    }

    /// Create a coin parse error
    pub fn invalid_coin(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCoin {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration(reason.into())
    }
}

/// Result type alias for option value construction.
pub type Result<T> = std::result::Result<T, TxOptionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TxOptionsError::invalid_denom("1x");
        assert_eq!(err.to_string(), "Invalid denomination: \"1x\"");

        let err = TxOptionsError::invalid_coin("abc", "missing amount");
        assert_eq!(err.to_string(), "Invalid coin \"abc\": missing amount");

        let err = TxOptionsError::DuplicateDenom("utia".to_string());
        assert_eq!(err.to_string(), "Duplicate denomination in coin set: utia");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(TxOptionsError::invalid_denom("x").category(), "denom");
        assert_eq!(TxOptionsError::invalid_coin("x", "y").category(), "coin");
        assert_eq!(TxOptionsError::configuration("x").category(), "config");

        let hex_err = hex::decode("zz").unwrap_err();
        assert_eq!(TxOptionsError::from(hex_err).category(), "address");
    }
}
