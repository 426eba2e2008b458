//! Configuration for default transaction options
//!
//! Loaded from a TOML file, optionally overridden by `TXOPT_*` environment
//! variables (a `.env` file is honoured). The `[tx]` table describes options
//! applied to every freshly created builder.
//!
//! ```toml
//! [tx]
//! gas_limit = 200000
//! fee = 2000
//! memo = "relayed"
//! fee_granter = "0a0b0c"
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tx_builder::errors::{Result, TxOptionsError};
use crate::tx_builder::{
    set_fee, set_fee_amount, set_fee_granter, set_fee_payer, set_gas_limit, set_memo,
    set_timeout_height, TxOption,
};
use crate::types::{Address, Coins};

pub const ENV_GAS_LIMIT: &str = "TXOPT_GAS_LIMIT";
pub const ENV_FEE: &str = "TXOPT_FEE";
pub const ENV_MEMO: &str = "TXOPT_MEMO";
pub const ENV_TIMEOUT_HEIGHT: &str = "TXOPT_TIMEOUT_HEIGHT";

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default transaction options
    #[serde(default)]
    pub tx: TxDefaults,

    /// Logging setup for the binary
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Options applied to every new builder; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxDefaults {
    pub gas_limit: Option<u64>,

    /// Fee in the native bonding token
    pub fee: Option<u64>,

    /// Explicit fee coins such as `"100utia,5uatom"`; takes precedence over `fee`
    pub fee_amount: Option<String>,

    pub memo: Option<String>,

    pub timeout_height: Option<u64>,

    /// Hex encoded fee payer address
    pub fee_payer: Option<String>,

    /// Hex encoded fee granter address
    pub fee_granter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl TxDefaults {
    /// Turn the populated fields into options, in field order
    pub fn to_options(&self) -> Result<Vec<TxOption>> {
        let mut options = Vec::new();

        if let Some(limit) = self.gas_limit {
            options.push(set_gas_limit(limit));
        }

        match (&self.fee_amount, self.fee) {
            (Some(coins), _) => options.push(set_fee_amount(coins.parse::<Coins>()?)),
            (None, Some(fee)) => options.push(set_fee(fee)),
            (None, None) => {}
        }

        if let Some(memo) = &self.memo {
            options.push(set_memo(memo.clone()));
        }

        if let Some(height) = self.timeout_height {
            options.push(set_timeout_height(height));
        }

        if let Some(payer) = &self.fee_payer {
            options.push(set_fee_payer(Address::from_hex(payer)?));
        }

        if let Some(granter) = &self.fee_granter {
            options.push(set_fee_granter(Address::from_hex(granter)?));
        }

        Ok(options)
    }

    /// Override fields from `lookup`, keyed by the `TXOPT_*` variable names
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_GAS_LIMIT) {
            self.gas_limit = Some(parse_u64(ENV_GAS_LIMIT, &v)?);
        }
        if let Some(v) = lookup(ENV_FEE) {
            self.fee = Some(parse_u64(ENV_FEE, &v)?);
        }
        if let Some(v) = lookup(ENV_MEMO) {
            self.memo = Some(v);
        }
        if let Some(v) = lookup(ENV_TIMEOUT_HEIGHT) {
            self.timeout_height = Some(parse_u64(ENV_TIMEOUT_HEIGHT, &v)?);
        }
        Ok(())
    }
}

fn parse_u64(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| TxOptionsError::configuration(format!("{key}={value:?}: {e}")))
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn from_file_with_env(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load `path` when it exists, otherwise start from defaults
    ///
    /// Environment overrides apply in both cases. The flag reports whether
    /// the file was found.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<(Self, bool)> {
        let path = path.as_ref();
        if path.exists() {
            Ok((Self::from_file_with_env(path)?, true))
        } else {
            let mut config = Self::default();
            config.apply_env_overrides()?;
            Ok((config, false))
        }
    }

    /// Options from the `[tx]` table, logging the failure category on error
    pub fn default_options(&self) -> Result<Vec<TxOption>> {
        self.tx.to_options().map_err(|e| {
            tracing::error!(category = e.category(), error = %e, "Invalid [tx] defaults");
            e
        })
    }

    /// Apply `TXOPT_*` overrides from the process environment and `.env`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        dotenvy::dotenv().ok();
        self.tx.apply_overrides(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.tx.to_options().unwrap().is_empty());
    }

    #[test]
    fn test_to_options_order() {
        let defaults = TxDefaults {
            gas_limit: Some(1),
            fee: Some(2),
            memo: Some("m".into()),
            timeout_height: Some(3),
            fee_payer: Some("01".into()),
            fee_granter: Some("02".into()),
            ..Default::default()
        };
        let names: Vec<_> = defaults
            .to_options()
            .unwrap()
            .iter()
            .map(TxOption::name)
            .collect();
        assert_eq!(
            names,
            ["gas_limit", "fee_amount", "memo", "timeout_height", "fee_payer", "fee_granter"]
        );
    }

    #[test]
    fn test_fee_amount_wins_over_fee() {
        let defaults = TxDefaults {
            fee: Some(2),
            fee_amount: Some("9uatom".into()),
            ..Default::default()
        };
        let options = defaults.to_options().unwrap();
        assert_eq!(options, vec![set_fee_amount("9uatom".parse().unwrap())]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_addr = TxDefaults {
            fee_granter: Some("not-hex".into()),
            ..Default::default()
        };
        assert_eq!(bad_addr.to_options().unwrap_err().category(), "address");

        let bad_coins = TxDefaults {
            fee_amount: Some("lots".into()),
            ..Default::default()
        };
        assert_eq!(bad_coins.to_options().unwrap_err().category(), "coin");
    }

    #[test]
    fn test_default_options_surfaces_category() {
        let config = Config {
            tx: TxDefaults {
                fee_payer: Some("0xzz".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.default_options().unwrap_err();
        assert_eq!(err.category(), "address");

        let config = Config {
            tx: TxDefaults {
                gas_limit: Some(7),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.default_options().unwrap(), vec![set_gas_limit(7)]);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_GAS_LIMIT, "5000"), (ENV_MEMO, "from env")]);
        let mut defaults = TxDefaults {
            gas_limit: Some(1),
            fee: Some(10),
            ..Default::default()
        };
        defaults
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(defaults.gas_limit, Some(5000));
        assert_eq!(defaults.fee, Some(10));
        assert_eq!(defaults.memo.as_deref(), Some("from env"));
    }

    #[test]
    fn test_override_parse_error() {
        let mut defaults = TxDefaults::default();
        let err = defaults
            .apply_overrides(|k| (k == ENV_FEE).then(|| "abc".to_string()))
            .unwrap_err();
        assert!(matches!(err, TxOptionsError::Configuration(_)));
    }
}
