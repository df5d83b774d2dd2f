// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by gallery transitions.

use super::state::RequestId;
use crate::domain::gallery::{PageNumber, SearchQuery};

/// Parameters of one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Tag echoed back in `Message::PageFetched`.
    pub id: RequestId,
    pub query: SearchQuery,
    pub page: PageNumber,
}

/// Non-fatal user notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The provider reported zero matches for the query.
    NoResults { query: SearchQuery },
    /// The user submitted a blank search field.
    EmptyQuery,
}

impl Notice {
    /// Returns the i18n message key for this notice.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Notice::NoResults { .. } => "notification-no-results",
            Notice::EmptyQuery => "notification-empty-query",
        }
    }

    /// Returns interpolation arguments for the message.
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Notice::NoResults { query } => vec![("query", query.to_string())],
            Notice::EmptyQuery => Vec::new(),
        }
    }
}

/// Work the shell must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request one page from the search provider.
    FetchPage(FetchRequest),
    /// Show a transient warning toast.
    Notify(Notice),
    /// Download the thumbnails of newly appended records.
    LoadThumbnails(Vec<String>),
    /// Download the large rendition shown in the preview overlay.
    LoadPreview(String),
}
