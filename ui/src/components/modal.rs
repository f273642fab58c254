use wasm_bindgen::{JsCast, closure::Closure};
use yew::prelude::*;

/// Overlay that closes on a backdrop click or the Escape key.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    // Escape closes the modal; the listener lives as long as the modal
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener =
                Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                });
            let document = web_sys::window().and_then(|w| w.document());
            if let Some(document) = &document
                && let Err(e) = document.add_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                )
            {
                tracing::warn!("failed to listen for Escape: {e:?}");
            }

            move || {
                if let Some(document) = &document
                    && let Err(e) = document
                        .remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        )
                {
                    tracing::warn!("failed to remove Escape listener: {e:?}");
                }
            }
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black/80 z-50 flex items-center
                   justify-center p-4"
        >
            <div class="max-w-[calc(100vw-48px)] max-h-[calc(100vh-24px)]">
                {props.children.clone()}
            </div>
        </div>
    }
}
