//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod request;
pub mod serde_util;

pub use request::{RequestTracker, Ticket};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── PairAddress ─────────────────────────────────────────────────────────────

/// A pool / pair address as the backend spells it (e.g. `"EQB3ncyBUTjZUA5EnFKR5_EnOMI9V1tTEAAPaiU71gc4TiUt"`).
///
/// Serializes transparently as a JSON string. Used as the selection key of the
/// pair list and the request key of the detail fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairAddress(String);

impl PairAddress {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PairAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PairAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PairAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for PairAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PairAddress(s.to_string()))
    }
}

impl Serialize for PairAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PairAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PairAddress(s))
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order form side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

// ─── TimeRange ───────────────────────────────────────────────────────────────

/// One of the four fixed observation windows used for volume / price-change reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "m5")]
    Minute5,
    #[serde(rename = "h1")]
    Hour1,
    #[serde(rename = "h6")]
    Hour6,
    #[default]
    #[serde(rename = "h24")]
    Hour24,
}

impl TimeRange {
    /// All buckets in display order.
    pub const ALL: [TimeRange; 4] = [
        TimeRange::Minute5,
        TimeRange::Hour1,
        TimeRange::Hour6,
        TimeRange::Hour24,
    ];

    /// Upstream JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute5 => "m5",
            Self::Hour1 => "h1",
            Self::Hour6 => "h6",
            Self::Hour24 => "h24",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minute5 => "5m",
            Self::Hour1 => "1h",
            Self::Hour6 => "6h",
            Self::Hour24 => "24h",
        }
    }

    /// Window length in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute5 => 300,
            Self::Hour1 => 3600,
            Self::Hour6 => 21600,
            Self::Hour24 => 86400,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_address_serde() {
        let addr = PairAddress::from("EQB3ncyBUTjZUA5EnFKR5");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"EQB3ncyBUTjZUA5EnFKR5\"");
        let back: PairAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_time_range_serde() {
        let r: TimeRange = serde_json::from_str("\"h6\"").unwrap();
        assert_eq!(r, TimeRange::Hour6);
        assert_eq!(r.seconds(), 21600);
        assert_eq!(r.label(), "6h");
    }

    #[test]
    fn test_time_range_default_is_24h() {
        assert_eq!(TimeRange::default(), TimeRange::Hour24);
    }

    #[test]
    fn test_time_range_order() {
        let keys: Vec<_> = TimeRange::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(keys, ["m5", "h1", "h6", "h24"]);
    }
}
