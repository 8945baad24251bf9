//! Conversion: PoolRow → Pair, PairDetailResponse → PairDetail.
//!
//! This is the only place upstream shapes are mapped to view models.

use super::wire;
use super::{BaseToken, Pair, PairDetail, TimeBucket, TimeBuckets, Txns};
use crate::domain::ValidationError;
use crate::network::{PLACEHOLDER_ICON, UPSTREAM_MISSING_IMAGE};
use crate::shared::{PairAddress, TimeRange};
use rust_decimal::Decimal;

/// Upstream icon, or the local placeholder when upstream has none.
fn icon_or_placeholder(image_url: Option<&str>) -> String {
    match image_url.map(str::trim) {
        Some(url) if !url.is_empty() && url != UPSTREAM_MISSING_IMAGE => url.to_string(),
        _ => PLACEHOLDER_ICON.to_string(),
    }
}

/// Market cap fallback chain: market cap in USD, then FDV, then nothing.
///
/// Zero counts as "no data" at each step.
fn market_cap(market_cap_usd: Option<Decimal>, fdv_usd: Option<Decimal>) -> Option<Decimal> {
    market_cap_usd
        .filter(|v| !v.is_zero())
        .or(fdv_usd.filter(|v| !v.is_zero()))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

impl TryFrom<wire::PoolRow> for Pair {
    type Error = ValidationError;

    fn try_from(source: wire::PoolRow) -> Result<Self, Self::Error> {
        let attributes = source
            .attributes
            .ok_or_else(|| ValidationError::missing("pair", "attributes"))?;
        let relationships = source.relationships.unwrap_or_default();

        let address = non_empty(attributes.address)
            .ok_or_else(|| ValidationError::missing("pair", "attributes.address"))?;
        let name = attributes.name.unwrap_or_default();
        let symbol = non_empty(attributes.symbol).unwrap_or_else(|| name.clone());

        let base_token = BaseToken {
            address: relationships
                .base_token
                .as_ref()
                .and_then(|r| r.id())
                .unwrap_or_default()
                .to_string(),
            name: name.clone(),
            symbol: symbol.clone(),
        };

        Ok(Pair {
            id: source.id.unwrap_or_else(|| address.clone()),
            chain_id: relationships
                .dex
                .as_ref()
                .and_then(|r| r.id())
                .unwrap_or_default()
                .to_string(),
            icon: icon_or_placeholder(attributes.image_url.as_deref()),
            market_cap: market_cap(attributes.market_cap_usd, attributes.fdv_usd),
            volume: attributes
                .volume_usd
                .and_then(|v| v.h24)
                .unwrap_or(Decimal::ZERO),
            address: PairAddress::from(address),
            name,
            symbol,
            base_token,
        })
    }
}

/// Normalize a list response, keeping upstream order.
pub(crate) fn pairs_from_rows(rows: Vec<wire::PoolRow>) -> Result<Vec<Pair>, ValidationError> {
    rows.into_iter().map(Pair::try_from).collect()
}

fn window_value(values: Option<&wire::WindowValues>, range: TimeRange) -> Decimal {
    values
        .and_then(|v| match range {
            TimeRange::Minute5 => v.m5,
            TimeRange::Hour1 => v.h1,
            TimeRange::Hour6 => v.h6,
            TimeRange::Hour24 => v.h24,
        })
        .unwrap_or(Decimal::ZERO)
}

fn window_txns(txns: Option<&wire::WindowTxns>, range: TimeRange) -> Txns {
    let raw = txns.and_then(|t| match range {
        TimeRange::Minute5 => t.m5.as_ref(),
        TimeRange::Hour1 => t.h1.as_ref(),
        TimeRange::Hour6 => t.h6.as_ref(),
        TimeRange::Hour24 => t.h24.as_ref(),
    });
    match raw {
        Some(t) => Txns {
            buys: t.buys.unwrap_or(0),
            sells: t.sells.unwrap_or(0),
        },
        None => Txns::default(),
    }
}

/// Synthesize all four windows from whatever subset upstream sent.
fn buckets(source: &wire::PairDetailResponse) -> TimeBuckets {
    let mut buckets = TimeBuckets::default();
    for range in TimeRange::ALL {
        *buckets.get_mut(range) = TimeBucket {
            txns: window_txns(source.txns.as_ref(), range),
            volume: window_value(source.volume.as_ref(), range),
            price_change: window_value(source.price_change.as_ref(), range),
        };
    }
    buckets
}

impl TryFrom<wire::PairDetailResponse> for PairDetail {
    type Error = ValidationError;

    fn try_from(source: wire::PairDetailResponse) -> Result<Self, Self::Error> {
        let buckets = buckets(&source);

        let pool_address = non_empty(source.pair_address)
            .ok_or_else(|| ValidationError::missing("pair detail", "pair_address"))?;
        let base_token = source
            .base_token
            .ok_or_else(|| ValidationError::missing("pair detail", "base_token"))?;
        let token_address = non_empty(base_token.address)
            .ok_or_else(|| ValidationError::missing("pair detail", "base_token.address"))?;

        let name = base_token.name.unwrap_or_default();
        let symbol = source
            .attributes
            .as_ref()
            .and_then(|a| non_empty(a.symbol.clone()))
            .or_else(|| non_empty(base_token.symbol))
            .unwrap_or_else(|| name.clone());

        let image_url = source
            .attributes
            .as_ref()
            .and_then(|a| non_empty(a.image_url.clone()))
            .or_else(|| source.info.as_ref().and_then(|i| non_empty(i.image_url.clone())));

        Ok(PairDetail {
            name,
            token_address,
            symbol,
            icon: icon_or_placeholder(image_url.as_deref()),
            price: source.price_usd.unwrap_or(Decimal::ZERO),
            price_native: source.price_native.unwrap_or(Decimal::ZERO),
            change_24h: buckets.h24.price_change,
            market_cap: source.market_cap.unwrap_or(Decimal::ZERO),
            supply: source
                .liquidity
                .and_then(|l| l.base)
                .unwrap_or(Decimal::ZERO),
            pool_address: PairAddress::from(pool_address),
            buckets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn trending_json() -> &'static str {
        r#"[
            {
                "id": "ton_EQAf2LUJZPp1",
                "type": "pool",
                "attributes": {
                    "address": "EQAf2LUJZPp1",
                    "name": "DOGS / TON",
                    "image_url": "missing.png",
                    "market_cap_usd": null,
                    "fdv_usd": "1500000",
                    "volume_usd": {"m5": "10", "h24": "250000.5"}
                },
                "relationships": {
                    "dex": {"data": {"id": "stonfi", "type": "dex"}},
                    "base_token": {"data": {"id": "ton_EQCvxJy4", "type": "token"}}
                }
            },
            {
                "id": "ton_EQBnot",
                "attributes": {
                    "address": "EQBnot",
                    "name": "NOT / TON",
                    "symbol": "NOT",
                    "image_url": "https://assets.example/not.png",
                    "market_cap_usd": 9000000,
                    "fdv_usd": 12000000,
                    "volume_usd": {}
                }
            }
        ]"#
    }

    fn parse_trending(json: &str) -> Vec<Pair> {
        let resp: wire::PoolListResponse = serde_json::from_str(json).unwrap();
        pairs_from_rows(resp.into_rows()).unwrap()
    }

    #[test]
    fn test_market_cap_falls_back_to_fdv() {
        let pairs = parse_trending(trending_json());
        assert_eq!(pairs[0].market_cap, Some(dec("1500000")));
        assert_eq!(pairs[1].market_cap, Some(dec("9000000")));
    }

    #[test]
    fn test_market_cap_absent_when_no_data() {
        assert_eq!(market_cap(None, None), None);
        assert_eq!(market_cap(Some(Decimal::ZERO), None), None);
        assert_eq!(market_cap(Some(Decimal::ZERO), Some(dec("5"))), Some(dec("5")));
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let pairs = parse_trending(trending_json());
        assert_eq!(pairs[0].icon, PLACEHOLDER_ICON);
        assert_eq!(pairs[1].icon, "https://assets.example/not.png");
    }

    #[test]
    fn test_row_fields_flattened() {
        let pairs = parse_trending(trending_json());
        let dogs = &pairs[0];
        assert_eq!(dogs.address.as_str(), "EQAf2LUJZPp1");
        assert_eq!(dogs.chain_id, "stonfi");
        assert_eq!(dogs.volume, dec("250000.5"));
        assert_eq!(dogs.symbol, "DOGS / TON");
        assert_eq!(dogs.base_token.address, "ton_EQCvxJy4");

        let not = &pairs[1];
        assert_eq!(not.symbol, "NOT");
        assert_eq!(not.volume, Decimal::ZERO);
        assert_eq!(not.chain_id, "");
    }

    #[test]
    fn test_upstream_order_preserved() {
        let pairs = parse_trending(trending_json());
        let ids: Vec<_> = pairs.iter().map(|p| p.address.as_str()).collect();
        assert_eq!(ids, ["EQAf2LUJZPp1", "EQBnot"]);
    }

    #[test]
    fn test_normalization_is_deterministic() {
        assert_eq!(parse_trending(trending_json()), parse_trending(trending_json()));
    }

    #[test]
    fn test_envelope_shape_accepted() {
        let json = format!(r#"{{"data": {}}}"#, trending_json());
        assert_eq!(parse_trending(&json).len(), 2);
    }

    #[test]
    fn test_row_without_address_is_malformed() {
        let row: wire::PoolRow =
            serde_json::from_str(r#"{"id": "x", "attributes": {"name": "A"}}"#).unwrap();
        let err = Pair::try_from(row).unwrap_err();
        assert_eq!(err.field, "attributes.address");
    }

    fn detail_json() -> &'static str {
        r#"{
            "pair_address": "EQAf2LUJZPp1",
            "base_token": {"address": "EQCvxJy4", "name": "Dogs", "symbol": "DOGS"},
            "info": {"imageUrl": "https://assets.example/dogs.png"},
            "price_usd": "0.000712",
            "price_native": "0.000131",
            "market_cap": 368000000,
            "liquidity": {"usd": 1000, "base": 51000000, "quote": 12},
            "price_change": {"h1": -1.5, "h24": 4.25},
            "volume": {"m5": 120.5, "h24": 1000000},
            "txns": {"h24": {"buys": 30, "sells": 10}, "h1": {"buys": 2}}
        }"#
    }

    #[test]
    fn test_detail_synthesizes_all_buckets() {
        let resp: wire::PairDetailResponse = serde_json::from_str(detail_json()).unwrap();
        let detail = PairDetail::try_from(resp).unwrap();

        assert_eq!(detail.buckets.h6, TimeBucket::default());
        assert_eq!(detail.buckets.m5.txns, Txns { buys: 0, sells: 0 });
        assert_eq!(detail.buckets.m5.volume, dec("120.5"));
        assert_eq!(detail.buckets.m5.price_change, Decimal::ZERO);
        assert_eq!(detail.buckets.h1.txns, Txns { buys: 2, sells: 0 });
        assert_eq!(detail.buckets.h1.price_change, dec("-1.5"));
        assert_eq!(detail.buckets.h24.txns, Txns { buys: 30, sells: 10 });
        assert_eq!(detail.change_24h, dec("4.25"));
    }

    #[test]
    fn test_detail_without_any_bucket_maps_default_to_zero() {
        let resp: wire::PairDetailResponse = serde_json::from_str(
            r#"{"pair_address": "P", "base_token": {"address": "T"}}"#,
        )
        .unwrap();
        let detail = PairDetail::try_from(resp).unwrap();
        for (_, bucket) in detail.buckets.iter() {
            assert_eq!(*bucket, TimeBucket::default());
            assert_eq!(bucket.volume_split(), (Decimal::ZERO, Decimal::ZERO));
        }
        assert_eq!(detail.market_cap, Decimal::ZERO);
        assert_eq!(detail.supply, Decimal::ZERO);
        assert_eq!(detail.icon, PLACEHOLDER_ICON);
    }

    #[test]
    fn test_detail_scalar_fields() {
        let resp: wire::PairDetailResponse = serde_json::from_str(detail_json()).unwrap();
        let detail = PairDetail::try_from(resp).unwrap();
        assert_eq!(detail.name, "Dogs");
        assert_eq!(detail.symbol, "DOGS");
        assert_eq!(detail.token_address, "EQCvxJy4");
        assert_eq!(detail.pool_address.as_str(), "EQAf2LUJZPp1");
        assert_eq!(detail.icon, "https://assets.example/dogs.png");
        assert_eq!(detail.price, dec("0.000712"));
        assert_eq!(detail.price_native, dec("0.000131"));
        assert_eq!(detail.market_cap, dec("368000000"));
        assert_eq!(detail.supply, dec("51000000"));
    }

    #[test]
    fn test_detail_attributes_image_preferred_over_info() {
        let mut resp: wire::PairDetailResponse = serde_json::from_str(detail_json()).unwrap();
        resp.attributes = Some(wire::DetailAttributes {
            image_url: Some("https://assets.example/attr.png".into()),
            symbol: Some("DOGS".into()),
        });
        let detail = PairDetail::try_from(resp).unwrap();
        assert_eq!(detail.icon, "https://assets.example/attr.png");
    }

    #[test]
    fn test_detail_camel_case_aliases() {
        let resp: wire::PairDetailResponse = serde_json::from_str(
            r#"{"pairAddress": "P", "baseToken": {"address": "T", "name": "Tok"}, "priceUsd": "1.5", "marketCap": 10}"#,
        )
        .unwrap();
        let detail = PairDetail::try_from(resp).unwrap();
        assert_eq!(detail.price, dec("1.5"));
        assert_eq!(detail.market_cap, dec("10"));
    }

    #[test]
    fn test_detail_missing_pair_address_is_malformed() {
        let resp: wire::PairDetailResponse =
            serde_json::from_str(r#"{"base_token": {"address": "T"}}"#).unwrap();
        let err = PairDetail::try_from(resp).unwrap_err();
        assert_eq!(err.field, "pair_address");
    }
}
