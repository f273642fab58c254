//! State machine behind the image search screen.
//!
//! [`GalleryState`] holds everything the screen shows: the current query, the
//! page, the accumulated images, and whether more pages exist. It changes only
//! through three transitions:
//!
//! - [`GalleryState::submit`] starts a new query at page 1,
//! - [`GalleryState::load_more`] asks for the next page,
//! - [`GalleryState::settle`] folds a finished fetch back in.
//!
//! The first two hand back a [`FetchRequest`] for the caller to run against
//! the search api; the last returns the [`Notification`]s to show. Nothing in
//! this crate performs io, so the UI decides how fetches are spawned.

mod notification;
mod query;
mod state;

pub use notification::{Notification, Severity};
pub use query::{QueryToken, ValidationError};
pub use state::{FetchRequest, GalleryState, Phase, is_last_page};

pub use payloads::PAGE_SIZE;
