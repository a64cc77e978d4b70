use super::Repository;

/// One page of repositories and whether a following page exists.
#[derive(Debug, PartialEq, Eq)]
pub struct PageResponse {
    /// Retrieved repositories
    pub(crate) repositories: Vec<Repository>,

    /// Whether the API announced a following page
    pub(crate) has_more: bool,
}

impl PageResponse {
    /// Creates a new `PageResponse` instance with the given repositories.
    pub fn new(repositories: Vec<Repository>, has_more: bool) -> Self {
        Self {
            repositories,
            has_more,
        }
    }

    /// Retrieves the list of repositories.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Returns `true` if a following page exists.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Consumes the response into its repositories and next page flag.
    pub fn into_parts(self) -> (Vec<Repository>, bool) {
        (self.repositories, self.has_more)
    }
}
