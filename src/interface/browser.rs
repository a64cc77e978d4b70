use std::sync::Arc;

use log::{info, warn};
use tokio::{sync::watch, task::JoinHandle};

use crate::PaginationState;

/// A trait for browsing the repositories of a user page after page.
#[async_trait::async_trait]
pub trait RepositoryBrowser: Sync + Send {
    /// Starts a new session for the given username and loads its first page.
    async fn search(&self, username: &str);

    /// Loads the next page of the current session, if any.
    async fn load_more(&self);

    /// Subscribes to the state updates of the session.
    fn subscribe(&self) -> watch::Receiver<PaginationState>;
}

/// Triggers a search on the runtime without waiting for its completion.
pub fn trigger_search(browser: &Arc<dyn RepositoryBrowser>, username: &str) -> JoinHandle<()> {
    let browser = Arc::clone(browser);
    let username = username.to_string();
    tokio::spawn(async move { browser.search(&username).await })
}

/// Triggers a load of the next page on the runtime without waiting for its completion.
pub fn trigger_load_more(browser: &Arc<dyn RepositoryBrowser>) -> JoinHandle<()> {
    let browser = Arc::clone(browser);
    tokio::spawn(async move { browser.load_more().await })
}

/// Searches the given username, then loads pages until `max_pages` pages were loaded, the last
/// page was reached or a fetch failed.
///
/// Returns the number of pages successfully loaded.
pub async fn browse_pages(
    browser: &dyn RepositoryBrowser,
    username: &str,
    max_pages: u32,
) -> u32 {
    browser.search(username).await;
    if let Some(error) = browser.subscribe().borrow().error() {
        warn!("Search of {username} failed: {error}");
        return 0;
    }

    let mut loaded_pages = 1;
    while loaded_pages < max_pages && browser.subscribe().borrow().can_load_more() {
        browser.load_more().await;
        if let Some(error) = browser.subscribe().borrow().error() {
            warn!("Stopped loading pages of {username}: {error}");
            break;
        }
        loaded_pages += 1;
    }
    info!("Browsing of {username} completed after {loaded_pages} page(s)");

    loaded_pages
}
