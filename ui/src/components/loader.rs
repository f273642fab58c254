use yew::prelude::*;

#[function_component]
pub fn Loader() -> Html {
    html! {
        <div class="flex justify-center py-6" role="progressbar" aria-label="Loading">
            <div class="h-10 w-10 rounded-full border-4 border-neutral-300
                        border-t-blue-600 animate-spin" />
        </div>
    }
}
