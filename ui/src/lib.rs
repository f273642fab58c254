use payloads::APIClient;
use secrecy::SecretString;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;
mod state;

pub use state::State;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{NotFoundPage, SearchPage};

const DEFAULT_SEARCH_API_URL: &str = "https://pixabay.com";

/// Image search API client, configured at build time.
///
/// `SEARCH_API_URL` points at the api host (the real service by default, or
/// the dev-server) and `SEARCH_API_KEY` holds the key sent with every search.
pub fn get_api_client() -> APIClient {
    let address = option_env!("SEARCH_API_URL")
        .unwrap_or(DEFAULT_SEARCH_API_URL)
        .trim_end_matches('/')
        .to_string();
    let api_key = option_env!("SEARCH_API_KEY").unwrap_or_default();

    APIClient {
        address,
        api_key: SecretString::from(api_key.to_string()),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[derive(Clone, Routable, PartialEq)]
enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <SearchPage /> },
        Route::NotFound => html! {
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <NotFoundPage />
            </main>
        },
    }
}
