use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, watch};

use crate::{FetchError, PageRequest, PaginationState, RepositoryBrowser, RepositoryFetcher};

/// The message published when a search is started without a username.
pub const EMPTY_USERNAME_ERROR: &str = "Username must not be empty";

/// The private part of a browsing session
#[derive(Debug, Default)]
struct BrowsingSession {
    username: String,
    page: u32,
    /// Incremented by every search, identifies the session a fetch belongs to.
    generation: u64,
}

/// A browser loading the repositories of a user one page at a time.
pub struct PaginatedBrowser {
    fetcher: Arc<dyn RepositoryFetcher>,
    session: Mutex<BrowsingSession>,
    state: watch::Sender<PaginationState>,
}

impl PaginatedBrowser {
    /// Creates a new `PaginatedBrowser` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        let (state, _) = watch::channel(PaginationState::default());

        Self {
            fetcher,
            session: Mutex::new(BrowsingSession::default()),
            state,
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> PaginationState {
        self.state.borrow().clone()
    }

    fn publish_failure(&self, request: &PageRequest, error: FetchError) {
        warn!("Failed to fetch {request}: {error}");
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error = Some(error.to_string());
        });
    }
}

#[async_trait::async_trait]
impl RepositoryBrowser for PaginatedBrowser {
    async fn search(&self, username: &str) {
        let (generation, request) = {
            let mut session = self.session.lock().await;
            session.generation += 1;
            session.username = username.to_string();
            session.page = 1;
            if username.is_empty() {
                self.state.send_replace(PaginationState {
                    error: Some(EMPTY_USERNAME_ERROR.to_string()),
                    ..PaginationState::default()
                });
                return;
            }
            self.state.send_replace(PaginationState {
                is_loading: true,
                ..PaginationState::default()
            });

            (session.generation, PageRequest::new(username, 1))
        };

        info!("Searching repositories of {username}");
        let result = self.fetcher.fetch(&request).await;

        let session = self.session.lock().await;
        if session.generation != generation {
            debug!("Discarding stale result of {request}");
            return;
        }
        match result {
            Ok(response) => {
                let (repositories, has_more) = response.into_parts();
                info!(
                    "Loaded {} repositories of {username}, has_more={has_more}",
                    repositories.len()
                );
                self.state.send_replace(PaginationState {
                    repositories,
                    is_loading: false,
                    error: None,
                    has_more,
                });
            }
            Err(error) => self.publish_failure(&request, error),
        }
    }

    async fn load_more(&self) {
        let (generation, request) = {
            let session = self.session.lock().await;
            if !self.state.borrow().can_load_more() {
                debug!("Ignoring load more request: {}", *self.state.borrow());
                return;
            }
            self.state.send_modify(|state| state.is_loading = true);

            (
                session.generation,
                PageRequest::new(&session.username, session.page + 1),
            )
        };

        info!("Loading more repositories: {request}");
        let result = self.fetcher.fetch(&request).await;

        let mut session = self.session.lock().await;
        if session.generation != generation {
            debug!("Discarding stale result of {request}");
            return;
        }
        match result {
            Ok(response) => {
                let (repositories, has_more) = response.into_parts();
                session.page = request.page();
                info!(
                    "Loaded {} more repositories of {}, has_more={has_more}",
                    repositories.len(),
                    session.username
                );
                self.state.send_modify(|state| {
                    state.repositories.extend(repositories);
                    state.is_loading = false;
                    state.has_more = has_more;
                });
            }
            Err(error) => self.publish_failure(&request, error),
        }
    }

    fn subscribe(&self) -> watch::Receiver<PaginationState> {
        self.state.subscribe()
    }
}
