//! Low-level HTTP client — `TerminalxHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to view models
//! happens in the domain sub-clients). Internal to the SDK — `TerminalxClient`
//! wraps this.

use crate::auth::{ExistsResponse, SignInProof, SignupResponse};
use crate::domain::pair::wire::{PairDetailResponse, PoolListResponse};
use crate::domain::position::wire::PositionsResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Header marking requests as programmatic (not a page navigation).
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Low-level HTTP client for the TerminalX REST API.
#[derive(Clone)]
pub struct TerminalxHttp {
    base_url: String,
    client: Client,
    /// Policy applied to GET endpoints. POSTs are never retried.
    read_retry: RetryPolicy,
}

impl TerminalxHttp {
    pub fn new(base_url: &str, read_retry: RetryPolicy) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(4);
        }
        #[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
        {
            builder = builder.cookie_store(true);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            read_retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Pairs ────────────────────────────────────────────────────────────

    pub async fn get_trending_pairs(&self) -> Result<PoolListResponse, HttpError> {
        let url = format!("{}/pairs/trending/", self.base_url);
        self.get(&url).await
    }

    pub async fn search_pairs(&self, term: &str) -> Result<PoolListResponse, HttpError> {
        let url = format!(
            "{}/pairs/?search={}",
            self.base_url,
            urlencoding::encode(term)
        );
        self.get(&url).await
    }

    pub async fn get_pair_detail(&self, address: &str) -> Result<PairDetailResponse, HttpError> {
        let url = format!("{}/pairs/{}", self.base_url, urlencoding::encode(address));
        self.get(&url).await
    }

    // ── Positions ────────────────────────────────────────────────────────

    pub async fn get_positions(&self) -> Result<PositionsResponse, HttpError> {
        let url = format!("{}/positions/", self.base_url);
        self.get(&url).await
    }

    // ── Users / Auth ─────────────────────────────────────────────────────

    pub async fn identity_exists(&self, address: &str) -> Result<ExistsResponse, HttpError> {
        let url = format!(
            "{}/users/{}/exists",
            self.base_url,
            urlencoding::encode(address)
        );
        self.get(&url).await
    }

    pub async fn sign_up(&self, proof: &SignInProof) -> Result<SignupResponse, HttpError> {
        let url = format!("{}/signup/", self.base_url);
        let body = self.send(reqwest::Method::POST, &url, Some(proof)).await?;
        decode(&body)
    }

    /// Login outcome is carried by the status code; the body is ignored.
    pub async fn log_in(&self, proof: &SignInProof) -> Result<(), HttpError> {
        let url = format!("{}/login/", self.base_url);
        self.send(reqwest::Method::POST, &url, Some(proof)).await?;
        Ok(())
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let body = self.send_with_retry(url).await?;
        decode(&body)
    }

    async fn send_with_retry(&self, url: &str) -> Result<String, HttpError> {
        let Some(config) = self.read_retry.config() else {
            return self.send(reqwest::Method::GET, url, None::<&()>).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.send(reqwest::Method::GET, url, None::<&()>).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => config.retries_status(*status),
                        HttpError::RateLimited { .. } => config.retries_status(429),
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if !should_retry || attempt == config.max_retries {
                        return Err(e);
                    }

                    let delay = match &e {
                        HttpError::RateLimited {
                            retry_after_ms: Some(ms),
                        } => std::time::Duration::from_millis(*ms),
                        _ => config.delay_for_attempt(attempt),
                    };
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    /// One attempt. Returns the raw body of a 2xx response.
    async fn send<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<String, HttpError> {
        let mut req = self
            .client
            .request(method, url)
            .header(REQUESTED_WITH.0, REQUESTED_WITH.1);

        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await?;

        if status.is_success() {
            return Ok(body_text);
        }

        Err(status_error(status.as_u16(), body_text, retry_after_ms))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, HttpError> {
    serde_json::from_str(body).map_err(|e| HttpError::Decode(e.to_string()))
}

/// Map a non-2xx status to the error taxonomy.
fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        400 => HttpError::BadRequest(body),
        401 => HttpError::Unauthorized,
        403 => HttpError::Forbidden(body),
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        409 => HttpError::Conflict(body),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
