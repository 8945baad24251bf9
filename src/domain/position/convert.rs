//! Conversion: PositionResponse → Position.

use super::wire;
use super::Position;
use crate::domain::ValidationError;
use crate::shared::PairAddress;
use rust_decimal::Decimal;

impl TryFrom<wire::PositionResponse> for Position {
    type Error = ValidationError;

    fn try_from(source: wire::PositionResponse) -> Result<Self, Self::Error> {
        let pair_address = source
            .pair_address
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| ValidationError::missing("position", "pair_address"))?;

        let id = source.id.and_then(|v| match v {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        Ok(Position {
            id,
            pair_address: PairAddress::from(pair_address),
            base_token: source.base_token.unwrap_or_default(),
            quote_token: source.quote_token.unwrap_or_default(),
            entry_price: source.entry_price.unwrap_or(Decimal::ZERO),
            entry_price_native: source.entry_price_native.unwrap_or(Decimal::ZERO),
            exit_price: source.exit_price,
            exit_price_native: source.exit_price_native,
            opened_at: source.created_at,
            closed_at: source.closed_at,
        })
    }
}

pub(crate) fn positions_from_response(
    resp: wire::PositionsResponse,
) -> Result<Vec<Position>, ValidationError> {
    resp.into_positions()
        .into_iter()
        .map(Position::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::PositionStatus;
    use std::str::FromStr;

    #[test]
    fn test_legacy_field_names_accepted() {
        let json = r#"[{
            "id": 17,
            "pair": "EQpool",
            "base_token": "EQbase",
            "quote_token": "TON",
            "buy_price": "0.0007",
            "buy_price_native": "0.00013",
            "sold_price": null,
            "sold_price_native": null,
            "created_at": "2024-10-01T12:00:00Z"
        }]"#;
        let resp: wire::PositionsResponse = serde_json::from_str(json).unwrap();
        let positions = positions_from_response(resp).unwrap();
        assert_eq!(positions.len(), 1);
        let p = &positions[0];
        assert_eq!(p.id.as_deref(), Some("17"));
        assert_eq!(p.pair_address.as_str(), "EQpool");
        assert_eq!(p.entry_price, Decimal::from_str("0.0007").unwrap());
        assert_eq!(p.status(), PositionStatus::Open);
        assert!(p.opened_at.is_some());
    }

    #[test]
    fn test_envelope_and_closed_position() {
        let json = r#"{"positions": [{
            "pair_address": "EQpool",
            "entry_price": 1.5,
            "exit_price": 2.0
        }]}"#;
        let resp: wire::PositionsResponse = serde_json::from_str(json).unwrap();
        let positions = positions_from_response(resp).unwrap();
        assert_eq!(positions[0].status(), PositionStatus::Closed);
    }

    #[test]
    fn test_naive_timestamps_do_not_fail_the_list() {
        let json = r#"[
            {"pair": "EQpool", "buy_price": "1", "created_at": "2024-10-01 12:00:00.123456"},
            {"pair": "EQpool", "buy_price": "1", "created_at": "not a date"}
        ]"#;
        let resp: wire::PositionsResponse = serde_json::from_str(json).unwrap();
        let positions = positions_from_response(resp).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(
            positions[0].opened_at.map(|t| t.to_rfc3339()),
            Some("2024-10-01T12:00:00.123456+00:00".to_string())
        );
        assert!(positions[1].opened_at.is_none());
    }

    #[test]
    fn test_missing_pair_address_is_malformed() {
        let resp: wire::PositionsResponse =
            serde_json::from_str(r#"[{"entry_price": 1}]"#).unwrap();
        let err = positions_from_response(resp).unwrap_err();
        assert_eq!(err.field, "pair_address");
    }
}
