//! Pairs sub-client — trending, search, detail.

use crate::client::TerminalxClient;
use crate::domain::pair::convert::pairs_from_rows;
use crate::domain::pair::{Pair, PairDetail};
use crate::error::SdkError;

/// Sub-client for pair listings and detail.
pub struct Pairs<'a> {
    pub(crate) client: &'a TerminalxClient,
}

impl<'a> Pairs<'a> {
    /// Trending pairs in upstream order.
    pub async fn trending(&self) -> Result<Vec<Pair>, SdkError> {
        let resp = self.client.http.get_trending_pairs().await?;
        Ok(pairs_from_rows(resp.into_rows())?)
    }

    /// Server-side search. Callers should not send a blank term; the page
    /// composer shows the cached trending list instead.
    pub async fn search(&self, term: &str) -> Result<Vec<Pair>, SdkError> {
        let resp = self.client.http.search_pairs(term.trim()).await?;
        Ok(pairs_from_rows(resp.into_rows())?)
    }

    /// Detail for one pair, with all four time buckets populated.
    pub async fn detail(&self, address: &str) -> Result<PairDetail, SdkError> {
        let resp = self.client.http.get_pair_detail(address).await?;
        Ok(PairDetail::try_from(resp)?)
    }
}
