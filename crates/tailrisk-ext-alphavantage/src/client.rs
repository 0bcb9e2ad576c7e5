//! HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use tailrisk_core::PriceSeries;
use tailrisk_traits::error::TraitError;
use tailrisk_traits::market_data::{PriceRequest, PriceSource, SourceType};

use crate::config::AlphaVantageConfig;
use crate::payload::{function_name, parse_time_series};

/// HTTP status codes that indicate transient server errors (retryable)
const RETRYABLE_STATUS_CODES: &[u16] = &[502, 503, 504];

/// Initial backoff delay in milliseconds (doubles with each retry)
const INITIAL_BACKOFF_MS: u64 = 250;

/// Upper bound on a single backoff delay in milliseconds
const MAX_BACKOFF_MS: u64 = 30_000;

/// Delay before retry number `attempt + 1`.
fn backoff_delay(attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt);
    Duration::from_millis(INITIAL_BACKOFF_MS.saturating_mul(factor).min(MAX_BACKOFF_MS))
}

/// Alpha Vantage price source.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    config: AlphaVantageConfig,
}

fn request_error(e: reqwest::Error) -> TraitError {
    if e.is_timeout() {
        TraitError::Timeout
    } else if e.is_decode() {
        TraitError::ParseError(e.to_string())
    } else {
        TraitError::ConnectionFailed(e.to_string())
    }
}

impl AlphaVantageClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// `TraitError::InvalidInput` when the API key is empty, and
    /// `TraitError::ConnectionFailed` when the HTTP client cannot be built.
    pub fn new(config: AlphaVantageConfig) -> Result<Self, TraitError> {
        if config.api_key.trim().is_empty() {
            return Err(TraitError::InvalidInput(
                "an Alpha Vantage API key is required".into(),
            ));
        }
        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for Alpha Vantage requests");
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| TraitError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Client configuration.
    pub fn config(&self) -> &AlphaVantageConfig {
        &self.config
    }

    /// Query parameters for a request, API key last.
    pub fn query_params(&self, request: &PriceRequest) -> Vec<(&'static str, String)> {
        vec![
            ("function", function_name(request.interval).to_string()),
            ("symbol", request.symbol.trim().to_string()),
            ("outputsize", "full".to_string()),
            ("apikey", self.config.api_key.clone()),
        ]
    }

    /// Fetch the raw JSON payload for a request.
    ///
    /// Transient server errors are retried with exponential backoff.
    pub async fn fetch_payload(&self, request: &PriceRequest) -> Result<Value, TraitError> {
        if request.symbol.trim().is_empty() {
            return Err(TraitError::InvalidInput("symbol is empty".into()));
        }
        let params = self.query_params(request);
        let max_retries = self.config.max_retries;

        for attempt in 0..=max_retries {
            let response = self
                .client
                .get(&self.config.base_url)
                .query(&params)
                .send()
                .await
                .map_err(request_error)?;

            let status = response.status().as_u16();
            if RETRYABLE_STATUS_CODES.contains(&status) && attempt < max_retries {
                let backoff = backoff_delay(attempt);
                warn!(
                    status = status,
                    attempt = attempt + 1,
                    max_attempts = max_retries + 1,
                    backoff_ms = backoff.as_millis(),
                    request = %request,
                    "Retryable HTTP error, backing off"
                );
                tokio::time::sleep(backoff).await;
                continue;
            }

            let text = response.text().await.map_err(request_error)?;
            if status >= 400 {
                return Err(TraitError::RequestRejected(format!("HTTP {status}: {text}")));
            }

            debug!(request = %request, bytes = text.len(), "received payload");
            return serde_json::from_str(&text).map_err(|e| TraitError::ParseError(e.to_string()));
        }

        Err(TraitError::ConnectionFailed(format!(
            "max retries ({max_retries}) exceeded for {request}"
        )))
    }
}

#[async_trait]
impl PriceSource for AlphaVantageClient {
    fn source_type(&self) -> SourceType {
        SourceType::Snapshot
    }

    async fn fetch(&self, request: &PriceRequest) -> Result<PriceSeries, TraitError> {
        let payload = self.fetch_payload(request).await?;
        let series = parse_time_series(&payload, request.interval)?;
        debug!(request = %request, observations = series.len(), "parsed price series");
        Ok(series)
    }
}
