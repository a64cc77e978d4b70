use anyhow::{Context, anyhow};
use log::{debug, warn};
use reqwest::{
    Client, Url,
    header::{ACCEPT, LINK},
};

use crate::{
    FetchError, PageRequest, PageResponse, Repository, RepositoryFetcher, StdResult,
    has_next_page,
};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Fetches pages of user repositories from the GitHub REST API.
#[derive(Debug)]
pub struct RestFetcher {
    client: Client,
    endpoint: Url,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance targeting the given API endpoint.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let endpoint =
            Url::parse(endpoint).with_context(|| format!("Invalid API endpoint: {endpoint}"))?;
        if endpoint.cannot_be_a_base() {
            return Err(anyhow!("API endpoint cannot be a base URL: {endpoint}"));
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    fn repositories_url(&self, request: &PageRequest) -> Result<Url, FetchError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("Invalid API endpoint: {}", self.endpoint)))?
            .pop_if_empty()
            .extend(["users", request.username(), "repos"]);

        Ok(url)
    }

    fn decode_repositories(body: &str) -> Result<Vec<Repository>, FetchError> {
        if body.trim().is_empty() {
            return Ok(vec![]);
        }

        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self, request: &PageRequest) -> Result<PageResponse, FetchError> {
        debug!("Fetching {request}");
        let response = self
            .client
            .get(self.repositories_url(request)?)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .query(&[
                ("page", request.page().to_string()),
                ("per_page", request.per_page().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = status.canonical_reason().unwrap_or("Unknown status");
            warn!("GitHub API answered {status} for {request}");
            return Err(FetchError::Http(status.as_u16(), message.to_string()));
        }

        let has_more = response
            .headers()
            .get_all(LINK)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .any(has_next_page);
        let body = response.text().await?;
        let repositories = Self::decode_repositories(&body)?;

        Ok(PageResponse::new(repositories, has_more))
    }
}
