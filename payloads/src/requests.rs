use serde::{Deserialize, Serialize};

use crate::PAGE_SIZE;

/// Query string for a single page of image search results.
///
/// The api key is not part of this struct; the client appends it when the
/// request is sent so it never ends up in logs via `Debug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSearch {
    pub q: String,
    pub page: u32,
    pub per_page: u32,
    pub image_type: String,
    pub orientation: String,
    pub safesearch: bool,
}

impl ImageSearch {
    /// Search for `term` at the given 1-based page with the fixed page size.
    pub fn new(term: impl Into<String>, page: u32) -> Self {
        Self {
            q: term.into(),
            page,
            per_page: PAGE_SIZE,
            image_type: "photo".into(),
            orientation: "horizontal".into(),
            safesearch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_search_uses_fixed_page_size() {
        let search = ImageSearch::new("cats", 3);
        assert_eq!(search.q, "cats");
        assert_eq!(search.page, 3);
        assert_eq!(search.per_page, 12);
        assert!(search.safesearch);
    }
}
