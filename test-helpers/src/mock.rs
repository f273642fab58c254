//! Fixture data for tests and the development server.
//!
//! The builders here produce search results without going through http, for
//! unit-level tests of the gallery state machine.

use payloads::{Image, ImageId, PAGE_SIZE, responses::SearchResults};
use search_api::Catalog;

/// A single image with predictable urls.
pub fn image(id: u64) -> Image {
    Image {
        id: ImageId(id),
        webformat_url: format!("https://img.test/{id}_640.jpg"),
        large_image_url: format!("https://img.test/{id}_1280.jpg"),
        tags: format!("fixture, {id}"),
        user: None,
    }
}

/// Images with ids `first..first + count`.
pub fn images(first: u64, count: u64) -> Vec<Image> {
    (first..first + count).map(image).collect()
}

/// A response carrying `hits` for a query with `total_hits` matches.
pub fn search_results(total_hits: u32, hits: Vec<Image>) -> SearchResults {
    SearchResults {
        total: total_hits,
        total_hits,
        hits,
    }
}

/// The page a well-behaved api would return for `page` out of `total_hits`
/// matches, with ids numbered from 1 by position.
pub fn page_of(total_hits: u32, page: u32) -> SearchResults {
    let page_size = u64::from(PAGE_SIZE);
    let start = u64::from(page - 1) * page_size;
    let count = u64::from(total_hits).saturating_sub(start).min(page_size);
    search_results(total_hits, images(start + 1, count))
}

/// One line per term in `catalog`: hits reachable through paging, and how
/// many pages of [`PAGE_SIZE`] that makes.
pub fn summary(catalog: &Catalog) -> Vec<String> {
    catalog
        .terms()
        .into_iter()
        .map(|(term, _)| {
            let total_hits = catalog.total_hits(term);
            let pages = total_hits.div_ceil(PAGE_SIZE);
            format!("{term:<10} {total_hits:>4} hits, {pages} pages")
        })
        .collect()
}

/// Log the catalog's terms so a developer knows what to search for.
pub fn print_summary(catalog: &Catalog) {
    tracing::info!("📊 Demo catalog terms:");
    for line in summary(catalog) {
        tracing::info!("   {line}");
    }
    tracing::info!("   anything else returns no results");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_of_partial_last_page() {
        let last = page_of(25, 3);
        assert_eq!(last.total_hits, 25);
        assert_eq!(last.hits.len(), 1);
        assert_eq!(last.hits[0].id, ImageId(25));
    }

    #[test]
    fn page_of_full_page() {
        let second = page_of(40, 2);
        assert_eq!(second.hits.len(), 12);
        assert_eq!(second.hits[0].id, ImageId(13));
    }

    #[test]
    fn summary_follows_the_catalog() {
        let lines = summary(&Catalog::demo());

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("cats"), "{lines:?}");
        assert!(lines[0].ends_with("40 hits, 4 pages"), "{lines:?}");
        // Capped at what the api lets you page through
        let flowers = lines
            .iter()
            .find(|line| line.starts_with("flowers"))
            .expect("flowers is a demo term");
        assert!(flowers.ends_with("500 hits, 42 pages"), "{flowers}");
    }

    #[test]
    fn summary_of_custom_catalog() {
        let catalog = Catalog::new().with_term("Red Fox", 13);
        assert_eq!(summary(&catalog), vec!["red fox      13 hits, 2 pages"]);
    }
}
