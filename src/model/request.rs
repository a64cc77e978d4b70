use std::fmt::Display;

/// The number of repositories requested per page.
pub const REPOSITORIES_PER_PAGE: u8 = 30;

/// A request for one page of the public repositories of a GitHub user.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct PageRequest {
    /// The login of the user owning the repositories.
    pub(crate) username: String,

    /// The 1-based page index.
    pub(crate) page: u32,

    /// The number of repositories per page.
    pub(crate) per_page: u8,
}

impl PageRequest {
    /// Creates a new `PageRequest` for the given username and page.
    pub fn new(username: &str, page: u32) -> Self {
        Self {
            username: username.to_string(),
            page,
            per_page: REPOSITORIES_PER_PAGE,
        }
    }

    /// Retrieves the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Retrieves the page index.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Retrieves the page size.
    pub fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Creates a dummy `PageRequest` for testing purposes.
    #[cfg(test)]
    pub(crate) fn dummy() -> Self {
        Self::new("octocat", 1)
    }
}

impl Display for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PageRequest: username={}, page={}, per_page={}",
            self.username, self.page, self.per_page
        )
    }
}
