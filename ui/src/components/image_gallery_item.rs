use payloads::Image;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub image: Image,
    pub on_select: Callback<Image>,
}

#[function_component]
pub fn ImageGalleryItem(props: &Props) -> Html {
    let onclick = {
        let image = props.image.clone();
        props.on_select.reform(move |_: MouseEvent| image.clone())
    };

    html! {
        <li class="rounded-sm overflow-hidden shadow-md">
            <img
                src={props.image.webformat_url.clone()}
                alt={props.image.tags.clone()}
                loading="lazy"
                {onclick}
                class="w-full h-64 object-cover cursor-zoom-in
                       transition-transform duration-200 hover:scale-105"
            />
        </li>
    }
}
