//! Value types carried by transaction options

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::appconsts::BOND_DENOM;
use crate::tx_builder::errors::{Result, TxOptionsError};

static DENOM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9/:._-]{2,127}$").expect("static denom regex"));

static COIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)([a-zA-Z][a-zA-Z0-9/:._-]{2,127})$").expect("static coin regex")
});

/// Check a denomination against the chain's denom grammar
pub fn validate_denom(denom: &str) -> Result<()> {
    if DENOM_RE.is_match(denom) {
        Ok(())
    } else {
        Err(TxOptionsError::invalid_denom(denom))
    }
}

/// Account address as raw bytes
///
/// An empty address means "unset". Displayed and serialized as lowercase hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(Vec<u8>);

impl Address {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Decode from hex, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        Ok(Self(hex::decode(trimmed)?))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Address {
    type Err = TxOptionsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Wire form of a coin: amounts travel as decimal strings
#[derive(Serialize, Deserialize)]
struct RawCoin {
    denom: String,
    amount: String,
}

/// A single denomination and its non-negative amount
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCoin", into = "RawCoin")]
pub struct Coin {
    denom: String,
    amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Result<Self> {
        let denom = denom.into();
        validate_denom(&denom)?;
        Ok(Self { denom, amount })
    }

    /// Coin in the native bonding denomination
    pub fn bond(amount: u128) -> Self {
        Self {
            denom: BOND_DENOM.to_string(),
            amount,
        }
    }

    pub fn denom(&self) -> &str {
        &self.denom
    }

    pub fn amount(&self) -> u128 {
        self.amount
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = TxOptionsError;

    /// Parse `<amount><denom>`, e.g. `100utia`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let caps = COIN_RE
            .captures(s)
            .ok_or_else(|| TxOptionsError::invalid_coin(s, "expected <amount><denom>"))?;
        let amount = caps[1]
            .parse::<u128>()
            .map_err(|e| TxOptionsError::invalid_coin(s, e.to_string()))?;
        Ok(Self {
            denom: caps[2].to_string(),
            amount,
        })
    }
}

impl TryFrom<RawCoin> for Coin {
    type Error = TxOptionsError;

    fn try_from(raw: RawCoin) -> Result<Self> {
        let amount = raw
            .amount
            .parse::<u128>()
            .map_err(|e| TxOptionsError::invalid_coin(&raw.amount, e.to_string()))?;
        Self::new(raw.denom, amount)
    }
}

impl From<Coin> for RawCoin {
    fn from(coin: Coin) -> Self {
        Self {
            denom: coin.denom,
            amount: coin.amount.to_string(),
        }
    }
}

/// Set of coins sorted by denomination, at most one entry per denomination
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coin>", into = "Vec<Coin>")]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Sort the coins and reject duplicate denominations
    pub fn new(mut coins: Vec<Coin>) -> Result<Self> {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        if let Some(dup) = coins.windows(2).find(|w| w[0].denom == w[1].denom) {
            return Err(TxOptionsError::DuplicateDenom(dup[0].denom.clone()));
        }
        Ok(Self(coins))
    }

    pub fn single(coin: Coin) -> Self {
        Self(vec![coin])
    }

    /// Amount held in `denom`, zero when absent
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map_or(0, |c| c.amount)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}

impl FromStr for Coins {
    type Err = TxOptionsError;

    /// Parse a comma separated list such as `100utia,5uatom`
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let coins = s
            .split(',')
            .map(Coin::from_str)
            .collect::<Result<Vec<_>>>()?;
        Self::new(coins)
    }
}

impl TryFrom<Vec<Coin>> for Coins {
    type Error = TxOptionsError;

    fn try_from(coins: Vec<Coin>) -> Result<Self> {
        Self::new(coins)
    }
}

impl From<Coins> for Vec<Coin> {
    fn from(coins: Coins) -> Self {
        coins.0
    }
}

/// Optional extra payment attached to a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    /// Coins paid as the tip
    pub amount: Coins,
    /// Account paying the tip
    pub tipper: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denom_validation() {
        assert!(validate_denom("utia").is_ok());
        assert!(validate_denom("ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2").is_ok());
        assert!(validate_denom("ut").is_err()); // too short
        assert!(validate_denom("1utia").is_err()); // leading digit
        assert!(validate_denom("").is_err());
    }

    #[test]
    fn test_address_hex() {
        let addr = Address::from_hex("0xdeadbeef").unwrap();
        assert_eq!(addr.as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(addr.to_string(), "deadbeef");
        assert!(Address::from_hex("xyz").is_err());
        assert!(Address::default().is_empty());
    }

    #[test]
    fn test_coin_parse() {
        let coin: Coin = "100utia".parse().unwrap();
        assert_eq!(coin.denom(), "utia");
        assert_eq!(coin.amount(), 100);
        assert!("utia".parse::<Coin>().is_err());
        assert!("-5utia".parse::<Coin>().is_err());
    }

    #[test]
    fn test_coins_sorted_and_unique() {
        let coins: Coins = "5uatom,100utia".parse().unwrap();
        assert_eq!(coins.to_string(), "5uatom,100utia");

        let coins: Coins = "100utia,5uatom".parse().unwrap();
        assert_eq!(coins.iter().next().unwrap().denom(), "uatom");

        let err = "1utia,2utia".parse::<Coins>().unwrap_err();
        assert!(matches!(err, TxOptionsError::DuplicateDenom(d) if d == "utia"));
    }

    #[test]
    fn test_amount_of() {
        let coins: Coins = "5uatom,100utia".parse().unwrap();
        assert_eq!(coins.amount_of("utia"), 100);
        assert_eq!(coins.amount_of("uosmo"), 0);
        assert_eq!(Coins::default().amount_of("utia"), 0);
    }

    #[test]
    fn test_coins_json_amounts_are_strings() {
        let coins: Coins = "100utia".parse().unwrap();
        let json = serde_json::to_string(&coins).unwrap();
        assert_eq!(json, r#"[{"denom":"utia","amount":"100"}]"#);

        let back: Coins = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coins);

        let bad = r#"[{"denom":"utia","amount":"1"},{"denom":"utia","amount":"2"}]"#;
        assert!(serde_json::from_str::<Coins>(bad).is_err());
    }
}
