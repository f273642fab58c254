pub mod use_image_search;
pub mod use_title;

pub use use_image_search::use_image_search;
pub use use_title::use_title;
