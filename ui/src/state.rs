use gallery::GalleryState;
use yewdux::prelude::*;

/// Global app state. The search screen is the only writer.
#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Search (managed by use_image_search) ===
    pub gallery: GalleryState,
}
