use yew::prelude::*;

use crate::{
    components::{ImageGallery, LoadMoreButton, Loader, SearchForm},
    hooks::{use_image_search, use_title},
};

/// The search screen: form, results grid, loader, and load more control.
#[function_component]
pub fn SearchPage() -> Html {
    let search = use_image_search();
    let gallery = &search.gallery;

    let title = match gallery.search_term() {
        Some(term) => format!("{term} | Image search"),
        None => "Image search".to_string(),
    };
    use_title(&title);

    let images = gallery.images();
    // Stays visible but disabled while the next page loads
    let show_load_more = !images.is_empty() && !gallery.all_results_loaded();

    html! {
        <>
            <SearchForm on_submit={search.on_submit.clone()} />
            <main>
                if !images.is_empty() {
                    <ImageGallery images={images.to_vec()} />
                }
                if gallery.is_loading() {
                    <Loader />
                }
                if show_load_more {
                    <LoadMoreButton
                        on_click={search.on_load_more.clone()}
                        is_loading={gallery.is_loading()}
                    />
                }
            </main>
        </>
    }
}
