/// The token marking a following page in a `Link` header value.
pub const NEXT_PAGE_RELATION: &str = r#"rel="next""#;

/// Returns `true` if a `Link` header value announces a following page.
///
/// Entries look like `<https://api.github.com/user/1/repos?page=2>; rel="next"` and
/// are comma separated, in no particular order.
pub fn has_next_page(link_header: &str) -> bool {
    link_header.contains(NEXT_PAGE_RELATION)
}
