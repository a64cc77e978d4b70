use crate::{FetchError, PageRequest, PageResponse};

/// A trait for fetching pages of repositories from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches one page of repositories.
    async fn fetch(&self, request: &PageRequest) -> Result<PageResponse, FetchError>;
}
