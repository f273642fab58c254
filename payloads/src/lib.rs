//! Wire types shared between the UI, the stand-in search API, and tests,
//! plus the HTTP client for the image search API.

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of images requested per page. Fixed; the UI never changes it.
pub const PAGE_SIZE: u32 = 12;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ImageId(pub u64);

/// A single search hit.
///
/// Field names follow the Pixabay wire format. Only the fields the gallery
/// renders are kept; unknown fields are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    /// Preview-sized image used in the gallery grid.
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    /// Full-size image shown in the modal.
    #[serde(rename = "largeImageURL")]
    pub large_image_url: String,
    /// Comma separated tags, used as alt text.
    #[serde(default)]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}
