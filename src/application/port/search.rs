// SPDX-License-Identifier: MPL-2.0
//! Image search port definition.
//!
//! [`ImageSearch`] answers one page of a query; [`ImageSource`] downloads the
//! bytes behind a result URL so the UI can display it. Both are implemented
//! by the Pixabay adapter and by in-memory fakes in tests.

use crate::domain::gallery::{PageNumber, SearchPage, SearchQuery};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// SearchError
// =============================================================================

/// Errors that can occur while talking to the image provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No API key is configured; no request was sent.
    #[error("no API key configured")]
    MissingApiKey,

    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Returns the i18n message key describing this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SearchError::MissingApiKey => "error-search-missing-api-key",
            SearchError::Transport(_) => "error-search-transport",
            SearchError::Status(_) => "error-search-status",
            SearchError::Decode(_) => "error-search-decode",
        }
    }
}

// =============================================================================
// Ports
// =============================================================================

/// Future resolving to one page of results.
pub type SearchFuture = BoxFuture<'static, Result<SearchPage, SearchError>>;

/// Future resolving to the raw bytes of an image.
pub type FetchFuture = BoxFuture<'static, Result<Vec<u8>, SearchError>>;

/// Port for paginated image search.
///
/// # Example
///
/// ```ignore
/// use iced::Task;
///
/// let future = search.search(&query, PageNumber::FIRST);
/// Task::perform(future, Message::PageFetched)
/// ```
pub trait ImageSearch: Send + Sync {
    /// Requests one page of results for `query`.
    ///
    /// The returned future owns everything it needs, so it may outlive
    /// `self` and the arguments.
    ///
    /// # Errors
    ///
    /// The future resolves to a [`SearchError`] on transport failure, a
    /// non-success status, or an undecodable body.
    fn search(&self, query: &SearchQuery, page: PageNumber) -> SearchFuture;
}

/// Port for downloading image bytes by URL.
pub trait ImageSource: Send + Sync {
    /// Downloads the resource at `url`.
    ///
    /// # Errors
    ///
    /// The future resolves to a [`SearchError`] when the download fails.
    fn fetch(&self, url: &str) -> FetchFuture;
}

/// Port implementation that fails every call with the same error.
///
/// Stands in for the HTTP adapter when it cannot be constructed, so the UI
/// still starts and reports the problem through the error banner.
#[derive(Debug, Clone)]
pub struct Unavailable(pub SearchError);

impl ImageSearch for Unavailable {
    fn search(&self, _query: &SearchQuery, _page: PageNumber) -> SearchFuture {
        Box::pin(std::future::ready(Err(self.0.clone())))
    }
}

impl ImageSource for Unavailable {
    fn fetch(&self, _url: &str) -> FetchFuture {
        Box::pin(std::future::ready(Err(self.0.clone())))
    }
}
