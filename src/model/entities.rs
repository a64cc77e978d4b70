use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops::Deref,
};

use serde::Deserialize;

/// The unique identifier of a repository.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepositoryId(pub u64);

impl Deref for RepositoryId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a repository.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of a public GitHub repository.
///
/// Two repositories are equal when they share the same identifier.
#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
    /// The identifier of the repository.
    id: RepositoryId,

    /// The name of the repository.
    name: RepositoryName,

    /// The description of the repository, if any.
    #[serde(default)]
    description: Option<String>,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(id: u64, name: &str, description: Option<&str>) -> Self {
        Self {
            id: RepositoryId(id),
            name: RepositoryName(name.to_string()),
            description: description.map(|description| description.to_string()),
        }
    }

    /// Retrieves the repository identifier.
    pub fn id(&self) -> RepositoryId {
        self.id
    }

    /// Retrieves the repository name.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the repository description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Repository {}

impl Hash for Repository {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Repository: {} (#{}), Description: {}",
            self.name,
            self.id,
            self.description().unwrap_or("-")
        )
    }
}

/// Observable state of a browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Repositories accumulated since the last search
    pub(crate) repositories: Vec<Repository>,

    /// Whether a fetch is in flight
    pub(crate) is_loading: bool,

    /// Message of the last failed fetch
    pub(crate) error: Option<String>,

    /// Whether the last successful fetch announced a following page
    pub(crate) has_more: bool,
}

impl PaginationState {
    /// Retrieves the accumulated repositories.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Retrieves the message of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns `true` if another page can be loaded.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Returns `true` if a new fetch may be started by loading more repositories.
    pub fn can_load_more(&self) -> bool {
        !self.is_loading && self.has_more
    }
}

impl Display for PaginationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PaginationState: repositories={}, loading={}, has_more={}, error={:?}",
            self.repositories.len(),
            self.is_loading,
            self.has_more,
            self.error
        )
    }
}
