use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Receives the raw input. Returning true clears the field.
    pub on_submit: Callback<String, bool>,
}

/// Search bar with a single `query` input. Stays enabled while a fetch is in
/// flight so a new search can replace it.
#[function_component]
pub fn SearchForm(props: &Props) -> Html {
    let input_ref = use_node_ref();

    let on_submit = {
        let input_ref = input_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            if on_submit.emit(input.value()) {
                input.set_value("");
            }
        })
    };

    html! {
        <header class="sticky top-0 z-40 bg-neutral-900 py-3 shadow-md">
            <form
                onsubmit={on_submit}
                class="flex max-w-xl mx-auto rounded-md overflow-hidden bg-white"
            >
                <button
                    type="submit"
                    class="px-4 text-neutral-600 hover:text-neutral-900"
                >
                    {"Search"}
                </button>
                <input
                    ref={input_ref}
                    name="query"
                    type="text"
                    autocomplete="off"
                    autofocus=true
                    placeholder="Search images and photos"
                    class="flex-1 px-3 py-2 text-neutral-900 outline-none"
                />
            </form>
        </header>
    }
}
