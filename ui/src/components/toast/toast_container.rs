use super::ToastItem;
use crate::contexts::toast::ToastContext;
use yew::prelude::*;

/// Stack of active toasts in the top right corner, oldest on top.
#[function_component]
pub fn ToastContainer() -> Html {
    let Some(context) = use_context::<ToastContext>() else {
        return html! {};
    };

    if context.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full" role="status" aria-live="polite">
            {for context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            })}
        </div>
    }
}
