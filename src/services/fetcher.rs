use std::{sync::Arc, time::Duration};

use rand::Rng;

use crate::{
    configuration::FetcherSettings,
    domain::{document::Document, product_id::ProductId},
};

use super::{Transport, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("gave up after {attempts} attempts, last error: {last}")]
    Exhausted { attempts: u32, last: Box<FetchError> },
}

pub enum FetchOutcome {
    Success(Document),
    Failure(FetchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub jitter: Duration,
}

impl RetryPolicy {
    /// Deterministic part of the wait after a failed `attempt` (1-based):
    /// `base_delay * 2^(attempt - 1)`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }

    pub fn delay_before_retry(&self, attempt: u32) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        let jitter = match jitter_ms {
            0 => Duration::ZERO,
            max => Duration::from_millis(rand::thread_rng().gen_range(0..=max)),
        };
        self.backoff(attempt) + jitter
    }
}

impl From<&FetcherSettings> for RetryPolicy {
    fn from(settings: &FetcherSettings) -> Self {
        RetryPolicy {
            max_attempts: settings.max_attempts.max(1),
            base_delay: settings.base_delay(),
            jitter: settings.jitter(),
        }
    }
}

pub struct Fetcher {
    transport: Arc<dyn Transport>,
    url_template: String,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, url_template: String, policy: RetryPolicy) -> Self {
        Fetcher {
            transport,
            url_template,
            policy,
        }
    }

    pub async fn fetch(&self, product_id: &ProductId) -> FetchOutcome {
        let url = product_id.detail_url(&self.url_template);
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            let error = match self.transport.get(&url).await {
                Ok(page) if page.is_success() => {
                    log::debug!(
                        "Fetched {} on attempt {}/{} ({} bytes)",
                        product_id,
                        attempt,
                        max_attempts,
                        page.body.len()
                    );
                    return FetchOutcome::Success(Document::parse(&page.body));
                }
                Ok(page) => {
                    log::warn!(
                        "Product {}: HTTP {} (attempt {}/{})",
                        product_id,
                        page.status,
                        attempt,
                        max_attempts
                    );
                    FetchError::Status(page.status)
                }
                Err(e) => {
                    log::error!(
                        "Product {}: {} (attempt {}/{})",
                        product_id,
                        e,
                        attempt,
                        max_attempts
                    );
                    FetchError::Transport(e)
                }
            };

            if attempt >= max_attempts {
                return FetchOutcome::Failure(FetchError::Exhausted {
                    attempts: attempt,
                    last: Box::new(error),
                });
            }

            let delay = self.policy.delay_before_retry(attempt);
            log::debug!("Retrying {} in {:?}", product_id, delay);
            tokio::time::sleep(delay).await;
        }
    }
}
