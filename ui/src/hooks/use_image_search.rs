use gallery::{FetchRequest, GalleryState, Notification};
use jiff::Timestamp;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State,
    contexts::toast::{ToastHandle, use_toast},
    get_api_client,
};

pub struct ImageSearchHandle {
    pub gallery: GalleryState,
    /// Takes the raw form input. Returns true when the query was accepted
    /// and the form should be cleared.
    pub on_submit: Callback<String, bool>,
    pub on_load_more: Callback<()>,
}

/// Hook driving the search screen.
///
/// Submitting and loading more go through the gallery state machine in the
/// global store. Each transition that yields a fetch spawns it, and the result
/// is settled back into the store; the resulting notifications become toasts.
#[hook]
pub fn use_image_search() -> ImageSearchHandle {
    let (state, dispatch) = use_store::<State>();
    let toasts = use_toast();

    let on_submit = {
        let dispatch = dispatch.clone();
        let toasts = toasts.clone();
        Callback::from(move |raw: String| {
            let mut submission = None;
            dispatch.reduce_mut(|state| {
                submission =
                    Some(submit_query(&mut state.gallery, &raw, Timestamp::now()));
            });
            let Some(submission) = submission else {
                return false;
            };

            let clears_input = submission.clears_input();
            match submission {
                Submission::Fetch(request) => {
                    spawn_fetch(dispatch.clone(), toasts.clone(), request)
                }
                Submission::Rejected(notification) => {
                    toasts.notify(&notification)
                }
            }
            clears_input
        })
    };

    let on_load_more = Callback::from(move |_: ()| {
        let mut request = None;
        dispatch.reduce_mut(|state| request = state.gallery.load_more());

        if let Some(request) = request {
            spawn_fetch(dispatch.clone(), toasts.clone(), request);
        }
    });

    ImageSearchHandle {
        gallery: state.gallery.clone(),
        on_submit,
        on_load_more,
    }
}

/// What a form submission turned into.
#[derive(Debug, PartialEq)]
enum Submission {
    /// Accepted. Any fetch still in flight is superseded by this one.
    Fetch(FetchRequest),
    /// Nothing changed; the user is told why.
    Rejected(Notification),
}

impl Submission {
    /// The form keeps its text when the input was rejected.
    fn clears_input(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

fn submit_query(
    gallery: &mut GalleryState,
    raw: &str,
    now: Timestamp,
) -> Submission {
    match gallery.submit(raw, now) {
        Ok(request) => Submission::Fetch(request),
        Err(e) => {
            tracing::debug!("rejected search input: {e}");
            Submission::Rejected(Notification::from(e))
        }
    }
}

/// Run one fetch and settle it into the store.
fn spawn_fetch(
    dispatch: Dispatch<State>,
    toasts: ToastHandle,
    request: FetchRequest,
) {
    yew::platform::spawn_local(async move {
        let api_client = get_api_client();
        let outcome =
            api_client.search_images(&request.term, request.page).await;

        let mut notifications = Vec::new();
        dispatch.reduce_mut(|state| {
            notifications = state.gallery.settle(request.generation, outcome);
        });

        for notification in &notifications {
            toasts.notify(notification);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_millisecond(1_700_000_000_000).unwrap()
    }

    #[test]
    fn blank_input_is_rejected_with_one_notification() {
        let mut gallery = GalleryState::default();

        let submission = submit_query(&mut gallery, "   ", now());

        assert_eq!(
            submission,
            Submission::Rejected(Notification::ValidationFailed)
        );
        assert!(!submission.clears_input());
        assert_eq!(gallery, GalleryState::default());
    }

    #[test]
    fn accepted_input_clears_the_form() {
        let mut gallery = GalleryState::default();

        let submission = submit_query(&mut gallery, " cats ", now());

        let Submission::Fetch(request) = &submission else {
            panic!("expected a fetch, got {submission:?}");
        };
        assert_eq!((request.term.as_str(), request.page), ("cats", 1));
        assert!(submission.clears_input());
    }

    #[test]
    fn search_while_loading_replaces_pending_fetch() {
        let mut gallery = GalleryState::default();
        let Submission::Fetch(first) = submit_query(&mut gallery, "cats", now())
        else {
            panic!("cats should be accepted");
        };
        assert!(gallery.is_loading());

        let second = submit_query(&mut gallery, "dogs", now());
        let Submission::Fetch(second) = second else {
            panic!("a search during a fetch should be accepted");
        };
        assert!(second.generation > first.generation);
        assert_eq!(gallery.search_term(), Some("dogs"));

        let stale = gallery
            .settle(first.generation, Ok::<_, String>(Default::default()));
        assert!(stale.is_empty());
        assert!(gallery.is_loading());
    }
}
