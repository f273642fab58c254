//! Deterministic in-memory image catalog.
//!
//! Each known term maps to a hit count. Images are generated on the fly from
//! the term and their position in the result list, so the same request always
//! produces the same page and ids never repeat within a term.

use std::collections::HashMap;

use payloads::{Image, ImageId, responses::SearchResults};

/// The remote API never lets you page past this many hits, whatever the real
/// match count is.
pub const MAX_TOTAL_HITS: u32 = 500;

/// Accepted range for `per_page`.
pub const PER_PAGE_RANGE: std::ops::RangeInclusive<u32> = 3..=200;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("\"page\" is out of valid range.")]
    PageOutOfRange,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    totals: HashMap<String, u32>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `term` with `total` matches. Terms are matched
    /// case-insensitively after trimming.
    pub fn with_term(mut self, term: &str, total: u32) -> Self {
        self.totals.insert(normalize(term), total);
        self
    }

    /// A small catalog covering single page, partial last page, and capped
    /// results.
    pub fn demo() -> Self {
        Self::new()
            .with_term("cats", 40)
            .with_term("dogs", 25)
            .with_term("sunset", 12)
            .with_term("ocean", 7)
            .with_term("mountains", 120)
            .with_term("flowers", 4692)
    }

    /// Every known term with its total matches, in alphabetical order.
    pub fn terms(&self) -> Vec<(&str, u32)> {
        let mut terms: Vec<_> = self
            .totals
            .iter()
            .map(|(term, total)| (term.as_str(), *total))
            .collect();
        terms.sort_unstable();
        terms
    }

    /// Number of matches for `term`, before the paging cap.
    pub fn total(&self, term: &str) -> u32 {
        self.totals.get(&normalize(term)).copied().unwrap_or(0)
    }

    /// Number of matches reachable through paging.
    pub fn total_hits(&self, term: &str) -> u32 {
        self.total(term).min(MAX_TOTAL_HITS)
    }

    /// One page of results. Pages are 1-based.
    pub fn page(
        &self,
        term: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResults, CatalogError> {
        if page == 0 || !PER_PAGE_RANGE.contains(&per_page) {
            return Err(CatalogError::PageOutOfRange);
        }

        let total = self.total(term);
        let total_hits = self.total_hits(term);
        if total_hits == 0 {
            return Ok(SearchResults::default());
        }

        let start = (page - 1).saturating_mul(per_page);
        if start >= total_hits {
            return Err(CatalogError::PageOutOfRange);
        }
        let end = start.saturating_add(per_page).min(total_hits);

        let term = normalize(term);
        let hits = (start..end).map(|n| image(&term, n)).collect();
        Ok(SearchResults {
            total,
            total_hits,
            hits,
        })
    }
}

fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

fn term_seed(term: &str) -> u64 {
    term.bytes()
        .fold(7u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)))
        % 1_000_000
}

fn image(term: &str, position: u32) -> Image {
    let slug = term.split_whitespace().collect::<Vec<_>>().join("-");
    Image {
        id: ImageId(term_seed(term) * 1_000 + u64::from(position)),
        webformat_url: format!(
            "https://picsum.photos/seed/{slug}-{position}/640/427"
        ),
        large_image_url: format!(
            "https://picsum.photos/seed/{slug}-{position}/1280/853"
        ),
        tags: format!("{term}, demo, {position}"),
        user: Some("catalog".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_term_has_no_hits() {
        let catalog = Catalog::demo();
        let results = catalog.page("zzzznotfound", 1, 12).unwrap();
        assert_eq!(results.total_hits, 0);
        assert!(results.hits.is_empty());
    }

    #[test]
    fn terms_are_listed_alphabetically() {
        let catalog = Catalog::new()
            .with_term("Sunset", 12)
            .with_term("cats", 40);
        assert_eq!(catalog.terms(), vec![("cats", 40), ("sunset", 12)]);
    }

    #[test]
    fn terms_match_case_insensitively() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.total_hits("  CATS "), 40);
    }

    #[test]
    fn last_page_is_partial() {
        let catalog = Catalog::demo();
        let results = catalog.page("dogs", 3, 12).unwrap();
        assert_eq!(results.total_hits, 25);
        assert_eq!(results.hits.len(), 1);
    }

    #[test]
    fn page_past_the_end_is_rejected() {
        let catalog = Catalog::demo();
        assert_eq!(
            catalog.page("cats", 5, 12),
            Err(CatalogError::PageOutOfRange)
        );
        assert_eq!(
            catalog.page("cats", 0, 12),
            Err(CatalogError::PageOutOfRange)
        );
        assert_eq!(
            catalog.page("cats", 1, 500),
            Err(CatalogError::PageOutOfRange)
        );
    }

    #[test]
    fn total_hits_are_capped() {
        let catalog = Catalog::demo();
        let results = catalog.page("flowers", 1, 12).unwrap();
        assert_eq!(results.total, 4692);
        assert_eq!(results.total_hits, MAX_TOTAL_HITS);
    }

    #[test]
    fn ids_are_unique_across_pages() {
        let catalog = Catalog::demo();
        let mut ids: Vec<_> = (1..=4)
            .flat_map(|page| catalog.page("cats", page, 12).unwrap().hits)
            .map(|image| image.id)
            .collect();
        assert_eq!(ids.len(), 40);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn pages_are_deterministic() {
        let catalog = Catalog::demo();
        assert_eq!(
            catalog.page("mountains", 2, 12),
            catalog.page("mountains", 2, 12)
        );
    }
}
