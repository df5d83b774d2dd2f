// SPDX-License-Identifier: MPL-2.0
//! Gallery controller state and transitions.

use super::effect::{Effect, FetchRequest, Notice};
use crate::application::port::SearchError;
use crate::domain::gallery::{ImageRecord, PageNumber, SearchPage, SearchQuery};

/// Identifies one issued page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the raw sequence number.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// The active query and the last requested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: SearchQuery,
    pub page: PageNumber,
}

/// Records accumulated during the current query session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    items: Vec<ImageRecord>,
    total_available: usize,
}

impl ResultSet {
    /// Records in display order.
    #[must_use]
    pub fn items(&self) -> &[ImageRecord] {
        &self.items
    }

    /// Total reported by the provider for the current query.
    #[must_use]
    pub fn total_available(&self) -> usize {
        self.total_available
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether every available record has been loaded.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.items.len() >= self.total_available
    }

    /// Returns whether any record uses `url` as thumbnail or large rendition.
    #[must_use]
    pub fn references(&self, url: &str) -> bool {
        self.items
            .iter()
            .any(|record| record.thumbnail_url == url || record.large_url == url)
    }

    fn clear(&mut self) {
        self.items.clear();
        self.total_available = 0;
    }

    /// Appends a page and returns the newly added slice.
    fn append(&mut self, page: SearchPage) -> &[ImageRecord] {
        let start = self.items.len();
        self.items.extend(page.hits);
        // Keep `items.len() <= total_available` even if a provider
        // under-reports its total.
        self.total_available = page.total_hits.max(self.items.len());
        &self.items[start..]
    }
}

/// Preview overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub large_image_url: String,
}

/// Coarse lifecycle of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No query submitted yet.
    Idle,
    /// A page request is in flight.
    Loading,
    /// The last request appended records.
    Success,
    /// The last request reported zero matches.
    NoResults,
    /// The last request failed.
    Failed,
}

/// Which views are visible, derived from state.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    pub show_grid: bool,
    pub show_error: bool,
    pub show_loader: bool,
    pub show_load_more: bool,
    pub show_overlay: bool,
}

/// Messages understood by the gallery controller.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search field was submitted with this raw text.
    SubmitQuery(String),
    /// The load-more control was pressed.
    AdvancePage,
    /// A page request completed.
    PageFetched {
        request: RequestId,
        outcome: Result<SearchPage, SearchError>,
    },
    /// A grid item was selected; carries its large-rendition URL.
    SelectImage(String),
    /// The preview overlay was dismissed.
    DismissModal,
}

/// Gallery controller state.
#[derive(Debug, Clone)]
pub struct State {
    search: Option<SearchState>,
    results: ResultSet,
    loading: bool,
    /// Set by a failed fetch, cleared by the next successful one.
    failure: Option<SearchError>,
    modal: ModalState,
    /// Latest issued request still awaiting its outcome.
    pending: Option<RequestId>,
    next_request: u64,
    settled: Phase,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: None,
            results: ResultSet::default(),
            loading: false,
            failure: None,
            modal: ModalState::default(),
            pending: None,
            next_request: 0,
            settled: Phase::Idle,
        }
    }

    /// Applies `message` and returns the effects the shell must run.
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::SubmitQuery(raw) => self.submit_query(&raw),
            Message::AdvancePage => self.advance_page(),
            Message::PageFetched { request, outcome } => self.page_fetched(request, outcome),
            Message::SelectImage(url) => self.select_image(url),
            Message::DismissModal => {
                self.dismiss_modal();
                Vec::new()
            }
        }
    }

    fn submit_query(&mut self, raw: &str) -> Vec<Effect> {
        let Some(query) = SearchQuery::parse(raw) else {
            return vec![Effect::Notify(Notice::EmptyQuery)];
        };

        self.search = Some(SearchState {
            query,
            page: PageNumber::FIRST,
        });
        self.results.clear();
        self.begin_fetch().into_iter().collect()
    }

    /// Requests the next page of the current query.
    ///
    /// Callers must only dispatch this while the load-more control is shown
    /// (not loading, results not exhausted). The precondition is not
    /// re-checked here.
    fn advance_page(&mut self) -> Vec<Effect> {
        let Some(search) = self.search.as_mut() else {
            return Vec::new();
        };
        search.page = search.page.next();
        self.begin_fetch().into_iter().collect()
    }

    fn begin_fetch(&mut self) -> Option<Effect> {
        let search = self.search.as_ref()?;

        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.pending = Some(id);
        self.loading = true;

        Some(Effect::FetchPage(FetchRequest {
            id,
            query: search.query.clone(),
            page: search.page,
        }))
    }

    fn page_fetched(
        &mut self,
        request: RequestId,
        outcome: Result<SearchPage, SearchError>,
    ) -> Vec<Effect> {
        if self.pending != Some(request) {
            tracing::debug!(
                request = request.value(),
                "discarding response for a superseded request"
            );
            return Vec::new();
        }
        self.pending = None;
        self.loading = false;

        match outcome {
            Ok(page) if page.has_no_matches() => {
                self.failure = None;
                self.settled = Phase::NoResults;
                match &self.search {
                    Some(search) => vec![Effect::Notify(Notice::NoResults {
                        query: search.query.clone(),
                    })],
                    None => Vec::new(),
                }
            }
            Ok(page) => {
                self.failure = None;
                self.settled = Phase::Success;
                let thumbnails: Vec<String> = self
                    .results
                    .append(page)
                    .iter()
                    .map(|record| record.thumbnail_url.clone())
                    .collect();
                if thumbnails.is_empty() {
                    Vec::new()
                } else {
                    vec![Effect::LoadThumbnails(thumbnails)]
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "image search failed");
                self.failure = Some(err);
                self.settled = Phase::Failed;
                Vec::new()
            }
        }
    }

    fn select_image(&mut self, url: String) -> Vec<Effect> {
        self.modal = ModalState {
            is_open: true,
            large_image_url: url.clone(),
        };
        vec![Effect::LoadPreview(url)]
    }

    fn dismiss_modal(&mut self) {
        self.modal = ModalState::default();
    }

    /// The request whose outcome is awaited, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    /// The active query, if any has been submitted.
    #[must_use]
    pub fn search(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    #[must_use]
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.failure.is_some()
    }

    /// The error behind the banner, if the last fetch failed.
    #[must_use]
    pub fn failure(&self) -> Option<&SearchError> {
        self.failure.as_ref()
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else {
            self.settled
        }
    }

    /// Returns whether `url` is still shown somewhere (grid or preview).
    #[must_use]
    pub fn references(&self, url: &str) -> bool {
        (self.modal.is_open && self.modal.large_image_url == url) || self.results.references(url)
    }

    /// Derives which views should be visible.
    #[must_use]
    pub fn render_policy(&self) -> RenderPolicy {
        RenderPolicy {
            show_grid: !self.results.is_empty(),
            show_error: self.failure.is_some(),
            show_loader: self.loading,
            show_load_more: !self.loading && !self.results.is_exhausted(),
            show_overlay: self.modal.is_open,
        }
    }
}
