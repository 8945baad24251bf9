//! Positions sub-client.

use crate::client::TerminalxClient;
use crate::domain::position::convert::positions_from_response;
use crate::domain::position::Position;
use crate::error::SdkError;

pub struct Positions<'a> {
    pub(crate) client: &'a TerminalxClient,
}

impl<'a> Positions<'a> {
    /// Positions of the identity carried by the session cookie.
    pub async fn list(&self) -> Result<Vec<Position>, SdkError> {
        let resp = self.client.http.get_positions().await?;
        Ok(positions_from_response(resp)?)
    }
}
