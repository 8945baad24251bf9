//! Wire types for position responses (REST).

use crate::shared::serde_util::{lenient_decimal, lenient_timestamp};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response for `GET /positions/`: a bare array or `{"positions": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PositionsResponse {
    List(Vec<PositionResponse>),
    Envelope { positions: Vec<PositionResponse> },
}

impl PositionsResponse {
    pub fn into_positions(self) -> Vec<PositionResponse> {
        match self {
            PositionsResponse::List(p) => p,
            PositionsResponse::Envelope { positions } => positions,
        }
    }
}

/// A single position record from the REST API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PositionResponse {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default, alias = "pair")]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub base_token: Option<String>,
    #[serde(default)]
    pub quote_token: Option<String>,
    #[serde(default, alias = "buy_price", deserialize_with = "lenient_decimal::deserialize")]
    pub entry_price: Option<Decimal>,
    #[serde(
        default,
        alias = "buy_price_native",
        deserialize_with = "lenient_decimal::deserialize"
    )]
    pub entry_price_native: Option<Decimal>,
    #[serde(default, alias = "sold_price", deserialize_with = "lenient_decimal::deserialize")]
    pub exit_price: Option<Decimal>,
    #[serde(
        default,
        alias = "sold_price_native",
        deserialize_with = "lenient_decimal::deserialize"
    )]
    pub exit_price_native: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "updated_at",
        deserialize_with = "lenient_timestamp::deserialize"
    )]
    pub closed_at: Option<DateTime<Utc>>,
}
