//! Wire types for pair responses (REST).
//!
//! Trending and search rows arrive in the aggregator's `attributes` /
//! `relationships` envelope; detail arrives as a flat pair document with
//! per-window maps. Every field is optional here; `convert.rs` decides which
//! ones are required and where missing data falls back.

use crate::shared::serde_util::{lenient_count, lenient_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Trending / search rows ─────────────────────────────────────────────────

/// A list response: either a bare array or a `{"data": [...]}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PoolListResponse {
    List(Vec<PoolRow>),
    Envelope { data: Vec<PoolRow> },
}

impl PoolListResponse {
    pub fn into_rows(self) -> Vec<PoolRow> {
        match self {
            PoolListResponse::List(rows) => rows,
            PoolListResponse::Envelope { data } => data,
        }
    }
}

/// Raw trending / search row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PoolRow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: Option<PoolAttributes>,
    #[serde(default)]
    pub relationships: Option<PoolRelationships>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PoolAttributes {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub market_cap_usd: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub fdv_usd: Option<Decimal>,
    #[serde(default)]
    pub volume_usd: Option<WindowValues>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PoolRelationships {
    #[serde(default)]
    pub dex: Option<RelationshipRef>,
    #[serde(default)]
    pub base_token: Option<RelationshipRef>,
    #[serde(default)]
    pub quote_token: Option<RelationshipRef>,
}

/// `{"data": {"id": "...", "type": "..."}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RelationshipRef {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RelationshipData {
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl RelationshipRef {
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

// ─── Per-window maps ─────────────────────────────────────────────────────────

/// Numeric value per window (`m5`, `h1`, `h6`, `h24`); any key may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WindowValues {
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub m5: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub h1: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub h6: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub h24: Option<Decimal>,
}

/// Transaction counts per window; any key may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WindowTxns {
    #[serde(default)]
    pub m5: Option<TxnsResponse>,
    #[serde(default)]
    pub h1: Option<TxnsResponse>,
    #[serde(default)]
    pub h6: Option<TxnsResponse>,
    #[serde(default)]
    pub h24: Option<TxnsResponse>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TxnsResponse {
    #[serde(default, deserialize_with = "lenient_count::deserialize")]
    pub buys: Option<u64>,
    #[serde(default, deserialize_with = "lenient_count::deserialize")]
    pub sells: Option<u64>,
}

// ─── Pair detail ─────────────────────────────────────────────────────────────

/// Raw pair detail from `GET /pairs/{address}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PairDetailResponse {
    #[serde(default, alias = "baseToken")]
    pub base_token: Option<TokenRef>,
    #[serde(default)]
    pub attributes: Option<DetailAttributes>,
    #[serde(default)]
    pub info: Option<DetailInfo>,
    #[serde(default, alias = "priceUsd", deserialize_with = "lenient_decimal::deserialize")]
    pub price_usd: Option<Decimal>,
    #[serde(default, alias = "priceNative", deserialize_with = "lenient_decimal::deserialize")]
    pub price_native: Option<Decimal>,
    #[serde(default, alias = "priceChange")]
    pub price_change: Option<WindowValues>,
    #[serde(default, alias = "marketCap", deserialize_with = "lenient_decimal::deserialize")]
    pub market_cap: Option<Decimal>,
    #[serde(default)]
    pub liquidity: Option<Liquidity>,
    #[serde(default, alias = "pairAddress")]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub txns: Option<WindowTxns>,
    #[serde(default)]
    pub volume: Option<WindowValues>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokenRef {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailAttributes {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DetailInfo {
    #[serde(default, rename = "imageUrl", alias = "image_url")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Liquidity {
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub usd: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub base: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub quote: Option<Decimal>,
}
