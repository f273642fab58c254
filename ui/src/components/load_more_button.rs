use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_click: Callback<()>,
    /// Disabled while a page is loading
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn LoadMoreButton(props: &Props) -> Html {
    let class = if props.is_loading {
        "px-6 py-2 rounded-md text-sm font-medium text-neutral-400 \
         bg-neutral-100 cursor-not-allowed"
    } else {
        "px-6 py-2 rounded-md text-sm font-medium text-white bg-blue-600 \
         hover:bg-blue-700 transition-colors duration-200"
    };

    html! {
        <div class="flex justify-center pb-8">
            <button
                type="button"
                onclick={props.on_click.reform(|_| ())}
                disabled={props.is_loading}
                {class}
            >
                {"Load more"}
            </button>
        </div>
    }
}
