//! Embedded chart URL.

use crate::network::CHART_EMBED_URL;
use crate::shared::PairAddress;

/// Dark-theme chart embed for a pool, without the trades and info panels.
pub fn chart_embed_url(pool: &PairAddress) -> String {
    format!(
        "{}/{}?embed=1&theme=dark&trades=0&info=0",
        CHART_EMBED_URL,
        urlencoding::encode(pool.as_str())
    )
}
