pub mod image_gallery;
pub mod image_gallery_item;
pub mod load_more_button;
pub mod loader;
pub mod modal;
pub mod search_form;
pub mod toast;

pub use image_gallery::ImageGallery;
pub use image_gallery_item::ImageGalleryItem;
pub use load_more_button::LoadMoreButton;
pub use loader::Loader;
pub use modal::Modal;
pub use search_form::SearchForm;
pub use toast::ToastContainer;
