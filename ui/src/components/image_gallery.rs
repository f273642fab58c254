use payloads::Image;
use yew::prelude::*;

use super::{ImageGalleryItem, Modal};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub images: Vec<Image>,
}

/// Grid of search results. Clicking an image opens it full size.
#[function_component]
pub fn ImageGallery(props: &Props) -> Html {
    let selected = use_state(|| None::<Image>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |image: Image| selected.set(Some(image)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <>
            <ul class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3
                       xl:grid-cols-4 gap-4 max-w-7xl mx-auto px-4 py-6">
                {for props.images.iter().map(|image| html! {
                    <ImageGalleryItem
                        key={image.id.to_string()}
                        image={image.clone()}
                        on_select={on_select.clone()}
                    />
                })}
            </ul>

            if let Some(image) = &*selected {
                <Modal on_close={on_close}>
                    <img
                        src={image.large_image_url.clone()}
                        alt={image.tags.clone()}
                        class="max-h-[calc(100vh-24px)] object-contain"
                    />
                </Modal>
            }
        </>
    }
}
