use std::{sync::Arc, time::Duration};

use log::warn;
use tokio::time::sleep;

use crate::{FetchError, PageRequest, PageResponse, RepositoryFetcher};

/// A struct that retries a RepositoryFetcher on transient failures with exponential backoff.
pub struct FetcherRetrier {
    /// The fetcher to be retried.
    fetcher: Arc<dyn RepositoryFetcher>,

    /// The maximum number of attempts for a request, including the first one.
    max_attempts: u32,

    /// The base delay for exponential backoff.
    base_delay: Duration,
}

impl FetcherRetrier {
    /// Creates a new `FetcherRetrier` instance with the given maximum number of attempts.
    pub fn new(
        fetcher: Arc<dyn RepositoryFetcher>,
        max_attempts: u32,
        base_delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    fn calculate_exponential_backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay * (2u32.pow(attempt.min(16)))
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for FetcherRetrier {
    /// Retries the request while it fails transiently, up to the maximum number of attempts.
    async fn fetch(&self, request: &PageRequest) -> Result<PageResponse, FetchError> {
        let mut attempts = 0;

        loop {
            match self.fetcher.fetch(request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    attempts += 1;
                    if !e.is_transient() || attempts >= self.max_attempts {
                        return Err(e);
                    }
                    warn!("Fetch attempt #{attempts} failed for {request}: {e}");
                    sleep(self.calculate_exponential_backoff_delay(attempts)).await;
                }
            }
        }
    }
}
