//! Integration tests for the TerminalX REST client.
//!
//! The offline modules check wire decoding and normalization against sample
//! bodies. The live tests hit a real backend:
//!
//! ```bash
//! TERMINALX_API_URL=http://localhost:8000/api \
//!     cargo test --features native --test api_integration -- --ignored --nocapture
//! ```

use rust_decimal::Decimal;
use std::str::FromStr;
use terminalx::auth::ExistsResponse;
use terminalx::domain::pair::wire::{PairDetailResponse, PoolListResponse};
use terminalx::domain::pair::{Pair, PairDetail};
use terminalx::domain::position::wire::PositionsResponse;
use terminalx::domain::position::Position;
use terminalx::network::PLACEHOLDER_ICON;
use terminalx::shared::TimeRange;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// =============================================================================
// Pair wire types
// =============================================================================

mod pair_types {
    use super::*;

    #[test]
    fn test_trending_envelope_deserialize() {
        let json = r#"{
            "data": [{
                "id": "ton_EQB3ncyBUTjZUA5EnFKR5_EnOMI9V1tTEAAPaiU71gc4TiUt",
                "type": "pool",
                "attributes": {
                    "address": "EQB3ncyBUTjZUA5EnFKR5_EnOMI9V1tTEAAPaiU71gc4TiUt",
                    "name": "NOT / TON",
                    "image_url": "https://assets.example/not.png",
                    "market_cap_usd": "812345678.9",
                    "fdv_usd": null,
                    "volume_usd": {"h24": 1234567.25}
                },
                "relationships": {
                    "dex": {"data": {"id": "dedust", "type": "dex"}},
                    "base_token": {"data": {"id": "ton_EQAvlWFD", "type": "token"}}
                }
            }]
        }"#;

        let rows = serde_json::from_str::<PoolListResponse>(json).unwrap().into_rows();
        assert_eq!(rows.len(), 1);

        let pair = Pair::try_from(rows.into_iter().next().unwrap()).unwrap();
        assert_eq!(pair.address.as_str(), "EQB3ncyBUTjZUA5EnFKR5_EnOMI9V1tTEAAPaiU71gc4TiUt");
        assert_eq!(pair.chain_id, "dedust");
        assert_eq!(pair.symbol, "NOT / TON");
        assert_eq!(pair.market_cap, Some(dec("812345678.9")));
        assert_eq!(pair.volume, dec("1234567.25"));
        assert_eq!(pair.base_token.address, "ton_EQAvlWFD");
    }

    #[test]
    fn test_bare_list_with_missing_image() {
        let json = r#"[{
            "attributes": {"address": "EQpool", "name": "X / TON", "image_url": "missing.png"}
        }]"#;

        let rows = serde_json::from_str::<PoolListResponse>(json).unwrap().into_rows();
        let pair = Pair::try_from(rows[0].clone()).unwrap();
        assert_eq!(pair.icon, PLACEHOLDER_ICON);
        assert_eq!(pair.market_cap, None);
        assert_eq!(pair.volume, Decimal::ZERO);
        assert_eq!(pair.id, "EQpool");
    }

    #[test]
    fn test_row_without_address_is_rejected() {
        let json = r#"[{"attributes": {"name": "X / TON"}}]"#;
        let rows = serde_json::from_str::<PoolListResponse>(json).unwrap().into_rows();
        assert!(Pair::try_from(rows[0].clone()).is_err());
    }

    #[test]
    fn test_detail_synthesizes_missing_windows() {
        let json = r#"{
            "baseToken": {"address": "EQtoken", "name": "Dogs", "symbol": "DOGS"},
            "info": {"imageUrl": "https://assets.example/dogs.png"},
            "priceUsd": "0.000712",
            "priceNative": "0.0001334",
            "priceChange": {"h1": 1.5, "h24": -3.25},
            "marketCap": 367000000,
            "liquidity": {"usd": 5000000, "base": 10000000000, "quote": 500000},
            "pairAddress": "EQpool",
            "txns": {"h24": {"buys": 300, "sells": 100}},
            "volume": {"h24": 80000}
        }"#;

        let resp: PairDetailResponse = serde_json::from_str(json).unwrap();
        let detail = PairDetail::try_from(resp).unwrap();

        assert_eq!(detail.symbol, "DOGS");
        assert_eq!(detail.icon, "https://assets.example/dogs.png");
        assert_eq!(detail.change_24h, dec("-3.25"));
        assert_eq!(detail.supply, dec("10000000000"));
        assert_eq!(detail.buckets[TimeRange::Hour1].price_change, dec("1.5"));
        assert_eq!(detail.buckets[TimeRange::Minute5].txns.total(), 0);

        let (buy, sell) = detail.buckets[TimeRange::Hour24].volume_split();
        assert_eq!(buy, Decimal::from(60000));
        assert_eq!(sell, Decimal::from(20000));
    }
}

// =============================================================================
// Position and auth wire types
// =============================================================================

mod position_types {
    use super::*;

    #[test]
    fn test_positions_envelope_deserialize() {
        let json = r#"{
            "positions": [
                {"id": 7, "pair": "EQpool", "base_token": "DOGS", "quote_token": "TON",
                 "buy_price": "0.0007", "buy_price_native": "0.00013",
                 "sold_price": null, "created_at": "2024-08-26T10:30:00Z"},
                {"id": 8, "pair": "EQpool", "base_token": "DOGS", "quote_token": "TON",
                 "buy_price": "0.0007", "sold_price": "0.0014"}
            ]
        }"#;

        let positions: Vec<Position> = serde_json::from_str::<PositionsResponse>(json)
            .unwrap()
            .into_positions()
            .into_iter()
            .map(|p| Position::try_from(p).unwrap())
            .collect();

        assert_eq!(positions.len(), 2);
        assert!(positions[0].is_open());
        assert!(!positions[1].is_open());
        assert_eq!(positions[1].realized_pnl_percent(), Some(Decimal::from(100)));
    }

    #[test]
    fn test_exists_accepts_both_shapes() {
        let flag: ExistsResponse = serde_json::from_str("true").unwrap();
        let object: ExistsResponse = serde_json::from_str(r#"{"exists": false}"#).unwrap();
        assert!(flag.exists());
        assert!(!object.exists());
    }
}

// =============================================================================
// Live API Tests (require TERMINALX_API_URL)
// =============================================================================

mod live_tests {
    use terminalx::client::{TerminalxClient, TerminalxClientBuilder};
    use terminalx::error::SdkError;

    fn get_client() -> Option<TerminalxClient> {
        dotenvy::dotenv().ok();
        std::env::var("TERMINALX_API_URL").ok()?;
        TerminalxClientBuilder::from_env().build().ok()
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_trending_and_detail() {
        let Some(client) = get_client() else {
            println!("Skipping live test: TERMINALX_API_URL not set");
            return;
        };

        let trending = client.pairs().trending().await.unwrap();
        println!("Trending pairs: {}", trending.len());
        let Some(first) = trending.first() else {
            return;
        };

        let detail = client.pairs().detail(first.address.as_str()).await.unwrap();
        println!("{} @ {} TON", detail.name, detail.price_native);
        assert_eq!(detail.pool_address, first.address);
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_search() {
        let Some(client) = get_client() else {
            println!("Skipping live test: TERMINALX_API_URL not set");
            return;
        };

        let results = client.pairs().search("dogs").await.unwrap();
        println!("Search 'dogs': {} results", results.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_unknown_pair() {
        let Some(client) = get_client() else {
            println!("Skipping live test: TERMINALX_API_URL not set");
            return;
        };

        let result = client.pairs().detail("EQ-no-such-pool").await;
        assert!(matches!(result, Err(SdkError::Http(_))));
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_identity_exists_never_errors() {
        let Some(client) = get_client() else {
            println!("Skipping live test: TERMINALX_API_URL not set");
            return;
        };

        let exists = client
            .auth()
            .identity_exists("EQB3ncyBUTjZUA5EnFKR5_EnOMI9V1tTEAAPaiU71gc4TiUt")
            .await;
        println!("Identity exists: {exists}");
    }
}
