use gallery::{Notification, Severity};
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// How long a toast stays up unless dismissed.
const DEFAULT_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Error,
    Success,
}

impl From<Severity> for ToastType {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Error,
            Severity::Success => Self::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(DEFAULT_DURATION_MS),
        }
    }
}

impl From<&Notification> for Toast {
    fn from(notification: &Notification) -> Self {
        Self::new(notification.to_string(), notification.severity().into())
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|toast| toast.id != id),
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    context: ToastContext,
}

impl ToastHandle {
    pub fn new(context: ToastContext) -> Self {
        Self { context }
    }

    pub fn add(&self, toast: Toast) {
        let toast_id = toast.id;
        let duration = toast.duration;

        self.context.dispatch(ToastAction::Add(toast));

        if let Some(duration_ms) = duration {
            let context = self.context.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                context.dispatch(ToastAction::Remove(toast_id));
            });
        }
    }

    /// Show a search notification with the toast style matching its
    /// severity.
    pub fn notify(&self, notification: &Notification) {
        self.add(Toast::from(notification));
    }

    pub fn remove(&self, id: Uuid) {
        self.context.dispatch(ToastAction::Remove(id));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let context = use_context::<ToastContext>()
        .expect("use_toast must be used within a ToastProvider");
    ToastHandle::new(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: ToastState, action: ToastAction) -> ToastState {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn toasts_keep_arrival_order() {
        let found = Toast::from(&Notification::Found { total_hits: 7 });
        let all = Toast::from(&Notification::AllLoaded);

        let state = reduce(ToastState::default(), ToastAction::Add(found.clone()));
        let state = reduce(state, ToastAction::Add(all.clone()));
        assert_eq!(state.toasts, vec![found.clone(), all.clone()]);

        let state = reduce(state, ToastAction::Remove(found.id));
        assert_eq!(state.toasts, vec![all]);
    }

    #[test]
    fn notification_severity_picks_style() {
        assert_eq!(
            Toast::from(&Notification::FetchFailed).toast_type,
            ToastType::Error
        );
        let toast = Toast::from(&Notification::Found { total_hits: 40 });
        assert_eq!(toast.toast_type, ToastType::Success);
        assert_eq!(toast.message, "We found 40 images=)");
        assert_eq!(toast.duration, Some(DEFAULT_DURATION_MS));
    }
}
