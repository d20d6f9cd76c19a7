// Upstream player-info API via reqwest

mod retry;

pub use retry::RetryPolicy;

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::normalize::fill_url;

/// Terminal classification of one fetch attempt.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("player not found (HTTP 404)")]
    NotFound,
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("malformed response body: {0}")]
    Malformed(reqwest::Error),
}

impl FetchError {
    /// Worth another attempt: server errors, timeouts, transport faults.
    /// 404 and malformed bodies are permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Status(code) => *code >= 500,
            FetchError::Timeout | FetchError::Transport(_) => true,
            FetchError::NotFound | FetchError::Malformed(_) => false,
        }
    }
}

pub struct PlayerRepo {
    client: reqwest::Client,
    player_info_url: String,
    region: String,
    policy: RetryPolicy,
}

impl PlayerRepo {
    /// Build the shared HTTP client: fixed request timeout, bounded
    /// connection pool, reused across every fetch in the process.
    pub fn new(upstream: &UpstreamConfig, region: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(upstream.request_timeout_secs))
            .pool_max_idle_per_host(5)
            .build()?;
        Ok(Self {
            client,
            player_info_url: upstream.player_info_url.clone(),
            region: region.to_string(),
            policy: RetryPolicy::new(upstream.max_retries),
        })
    }

    /// Replace the retry policy (tests shrink the backoff base).
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// One logical "get data for one player" with bounded retries and
    /// exponential backoff. Every terminal failure comes back as None;
    /// no error crosses this boundary.
    pub async fn get_player(&self, uid: &str) -> Option<Value> {
        let url = fill_url(&self.player_info_url, uid, &self.region);
        let mut failures = 0;
        loop {
            debug!(uid, "fetching player info");
            match self.attempt(&url).await {
                Ok(data) => return Some(data),
                Err(e) if e.is_transient() => {
                    failures += 1;
                    if failures >= self.policy.max_retries {
                        warn!(
                            uid,
                            error = %e,
                            retries = failures,
                            operation = "get_player",
                            "giving up on player info"
                        );
                        return None;
                    }
                    let delay = self.policy.delay(failures);
                    debug!(
                        uid,
                        error = %e,
                        retry = failures,
                        delay_ms = delay.as_millis() as u64,
                        "retrying player info"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    warn!(uid, error = %e, operation = "get_player", "player info fetch failed");
                    return None;
                }
            }
        }
    }

    async fn attempt(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(e)
            }
        })?;
        match response.status().as_u16() {
            200 => response.json().await.map_err(FetchError::Malformed),
            404 => Err(FetchError::NotFound),
            status => Err(FetchError::Status(status)),
        }
    }
}
