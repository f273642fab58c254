use std::fmt::Display;

use jiff::Timestamp;
use payloads::{Image, PAGE_SIZE, responses::SearchResults};

use crate::{Notification, QueryToken, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Succeeded,
    Failed,
}

/// A fetch the caller should run, then hand back to
/// [`GalleryState::settle`] together with its `generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub term: String,
    pub page: u32,
}

/// True when `page` is the last page for a query with `total_hits` matches.
///
/// A partial final page still counts as the last page.
pub fn is_last_page(total_hits: u32, page: u32) -> bool {
    page == total_hits.div_ceil(PAGE_SIZE)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    query: Option<QueryToken>,
    page: u32,
    images: Vec<Image>,
    phase: Phase,
    all_results_loaded: bool,
    error: bool,
    /// Bumped for every fetch issued. Only the settle carrying the latest
    /// value is applied.
    generation: u64,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            query: None,
            page: 1,
            images: Vec::new(),
            phase: Phase::Idle,
            all_results_loaded: false,
            error: false,
            generation: 0,
        }
    }
}

impl GalleryState {
    pub fn query(&self) -> Option<&QueryToken> {
        self.query.as_ref()
    }

    /// The term of the current query, without its timestamp.
    pub fn search_term(&self) -> Option<&str> {
        self.query.as_ref().map(QueryToken::term)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn all_results_loaded(&self) -> bool {
        self.all_results_loaded
    }

    /// Always false outside of [`Self::settle`]: a failure sets the flag and
    /// the end of the same settle clears it.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Whether the load more control should be offered.
    pub fn can_load_more(&self) -> bool {
        !self.images.is_empty()
            && !self.all_results_loaded
            && !self.is_loading()
    }

    /// Start a new query from the raw form input.
    ///
    /// Blank input leaves the state untouched. Otherwise pagination resets to
    /// page 1 with no images, and the page 1 fetch is returned. A fetch still
    /// in flight for an older query is superseded.
    pub fn submit(
        &mut self,
        raw: &str,
        now: Timestamp,
    ) -> Result<FetchRequest, ValidationError> {
        let token = QueryToken::new(now, raw)?;
        tracing::debug!(query = %token, "new search");

        self.query = Some(token);
        self.page = 1;
        self.images.clear();
        self.error = false;
        self.all_results_loaded = false;
        Ok(self.begin_fetch())
    }

    /// Ask for the next page.
    ///
    /// Returns `None` and changes nothing while a fetch is in flight, before
    /// the first search, or once every page has been loaded.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if self.is_loading() {
            tracing::debug!(
                page = self.page,
                "fetch in flight, ignoring load more"
            );
            return None;
        }
        if self.query.is_none() || self.all_results_loaded {
            return None;
        }

        self.page += 1;
        Some(self.begin_fetch())
    }

    /// Fold the outcome of a fetch back into the state, returning the
    /// notifications to show in order.
    ///
    /// Outcomes for anything but the latest fetch are dropped.
    pub fn settle<E: Display>(
        &mut self,
        generation: u64,
        outcome: Result<SearchResults, E>,
    ) -> Vec<Notification> {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale search results"
            );
            return Vec::new();
        }

        let mut notifications = Vec::new();
        match outcome {
            Ok(results) if results.is_empty() => {
                notifications.push(Notification::NoResults);
                self.phase = Phase::Succeeded;
            }
            Ok(results) => {
                let page = self.page;
                let total_hits = results.total_hits;
                notifications.extend(self.merge(
                    page,
                    results.hits,
                    total_hits,
                ));
                notifications.extend(self.check_completion(total_hits, page));
                self.phase = Phase::Succeeded;
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    term = self.search_term().unwrap_or_default(),
                    page = self.page,
                    "image search failed"
                );
                self.error = true;
                notifications.push(Notification::FetchFailed);
                self.phase = Phase::Failed;
            }
        }

        // Cleared after every settle, including failed ones
        self.error = false;
        notifications
    }

    /// Merge one page of hits. Page 1 replaces whatever was held and reports
    /// the total; later pages append in arrival order.
    pub fn merge(
        &mut self,
        page: u32,
        hits: Vec<Image>,
        total_hits: u32,
    ) -> Option<Notification> {
        if page == 1 {
            self.images = hits;
            Some(Notification::Found { total_hits })
        } else {
            self.images.extend(hits);
            None
        }
    }

    /// Record whether `page` exhausted the results.
    pub fn check_completion(
        &mut self,
        total_hits: u32,
        page: u32,
    ) -> Option<Notification> {
        self.all_results_loaded = is_last_page(total_hits, page);
        self.all_results_loaded.then_some(Notification::AllLoaded)
    }

    fn begin_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.phase = Phase::Fetching;
        FetchRequest {
            generation: self.generation,
            term: self.search_term().unwrap_or_default().to_string(),
            page: self.page,
        }
    }
}
