use serde::{Deserialize, Serialize};

use crate::Image;

/// One page of search results.
///
/// `total_hits` is the number of hits reachable through paging, which can be
/// smaller than `total` for very broad queries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub total: u32,
    pub total_hits: u32,
    #[serde(default)]
    pub hits: Vec<Image>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.total_hits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_format() {
        let body = r#"{
            "total": 4692,
            "totalHits": 500,
            "hits": [{
                "id": 195893,
                "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
                "type": "photo",
                "tags": "blossom, bloom, flower",
                "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
                "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
                "user": "Josch13"
            }]
        }"#;

        let results: SearchResults = serde_json::from_str(body).unwrap();
        assert_eq!(results.total, 4692);
        assert_eq!(results.total_hits, 500);
        assert_eq!(results.hits.len(), 1);
        let image = &results.hits[0];
        assert_eq!(image.id.0, 195893);
        assert_eq!(image.tags, "blossom, bloom, flower");
        assert_eq!(image.user.as_deref(), Some("Josch13"));
        assert!(image.large_image_url.ends_with("_1280.jpg"));
    }

    #[test]
    fn empty_results_without_hits_field() {
        let results: SearchResults =
            serde_json::from_str(r#"{"total": 0, "totalHits": 0}"#).unwrap();
        assert!(results.is_empty());
        assert!(results.hits.is_empty());
    }
}
