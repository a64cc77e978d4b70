use crate::{PaginationState, RepositoryId};

/// Turns successive pagination states into lines of text, printing each repository once.
#[derive(Debug, Default)]
pub struct TextRenderer {
    /// Identifiers of the repositories already rendered, in order
    rendered: Vec<RepositoryId>,
}

impl TextRenderer {
    /// Creates a new `TextRenderer` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders what changed since the previously rendered state.
    ///
    /// States may be skipped between two calls, so a new search is recognised either by its
    /// empty loading state or by a list that does not extend the rendered one.
    pub fn render(&mut self, state: &PaginationState) -> Vec<String> {
        let repositories = state.repositories();
        let extends_rendered = repositories.len() >= self.rendered.len()
            && repositories
                .iter()
                .zip(&self.rendered)
                .all(|(repository, id)| repository.id() == *id);
        let is_new_search = state.is_loading() && repositories.is_empty();
        if is_new_search || !extends_rendered {
            self.rendered.clear();
        }

        let mut lines = vec![];
        if is_new_search {
            lines.push("Searching...".to_string());
        } else if state.is_loading() {
            lines.push("Loading more...".to_string());
        }
        for repository in &repositories[self.rendered.len()..] {
            lines.push(match repository.description() {
                Some(description) => format!("  {} - {description}", repository.name()),
                None => format!("  {}", repository.name()),
            });
            self.rendered.push(repository.id());
        }
        if let Some(error) = state.error() {
            lines.push(format!("Error: {error}"));
        } else if !state.is_loading() && !state.has_more() {
            lines.push(format!("{} repositories, no more pages.", repositories.len()));
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use crate::Repository;

    use super::*;

    fn state(ids: &[u64], is_loading: bool, has_more: bool) -> PaginationState {
        PaginationState {
            repositories: ids
                .iter()
                .map(|id| Repository::new(*id, &format!("repository-{id}"), None))
                .collect(),
            is_loading,
            error: None,
            has_more,
        }
    }

    #[test]
    fn renders_only_appended_repositories() {
        let mut renderer = TextRenderer::new();

        renderer.render(&state(&[1, 2], false, true));
        let lines = renderer.render(&state(&[1, 2, 3], false, false));

        assert_eq!(
            vec![
                "  repository-3".to_string(),
                "3 repositories, no more pages.".to_string()
            ],
            lines
        );
    }

    #[test]
    fn renders_whole_list_of_new_search_when_loading_state_was_skipped() {
        let mut renderer = TextRenderer::new();

        renderer.render(&state(&[1, 2], false, false));
        let lines = renderer.render(&state(&[7, 8], false, false));

        assert_eq!(
            vec![
                "  repository-7".to_string(),
                "  repository-8".to_string(),
                "2 repositories, no more pages.".to_string()
            ],
            lines
        );
    }

    #[test]
    fn renders_longer_list_of_new_search_from_its_start() {
        let mut renderer = TextRenderer::new();

        renderer.render(&state(&[1], false, false));
        let lines = renderer.render(&state(&[5, 6, 7], false, true));

        assert_eq!(
            vec![
                "  repository-5".to_string(),
                "  repository-6".to_string(),
                "  repository-7".to_string()
            ],
            lines
        );
    }

    #[test]
    fn renders_same_list_again_after_search_loading_state() {
        let mut renderer = TextRenderer::new();

        renderer.render(&state(&[1], false, false));
        assert_eq!(
            vec!["Searching...".to_string()],
            renderer.render(&state(&[], true, false))
        );
        let lines = renderer.render(&state(&[1], false, false));

        assert_eq!(
            vec![
                "  repository-1".to_string(),
                "1 repositories, no more pages.".to_string()
            ],
            lines
        );
    }

    #[test]
    fn renders_loading_more_and_errors() {
        let mut renderer = TextRenderer::new();
        renderer.render(&state(&[1], false, true));

        let loading = renderer.render(&state(&[1], true, true));
        let failed = renderer.render(&PaginationState {
            error: Some("Transport error: connection reset".to_string()),
            ..state(&[1], false, true)
        });

        assert_eq!(vec!["Loading more...".to_string()], loading);
        assert_eq!(
            vec!["Error: Transport error: connection reset".to_string()],
            failed
        );
    }
}
