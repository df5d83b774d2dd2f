// SPDX-License-Identifier: MPL-2.0
//! Search result types.

/// Provider-assigned identifier of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

/// One image returned by a search.
///
/// Only `thumbnail_url` and `large_url` drive gallery behavior; the rest is
/// carried along for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: ImageId,
    /// Small rendition shown in the grid.
    pub thumbnail_url: String,
    /// Large rendition shown in the preview overlay.
    pub large_url: String,
    /// Comma-separated tags, used as a caption.
    pub tags: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRecord {
    /// Creates a record with only the fields the gallery needs.
    pub fn new(
        id: u64,
        thumbnail_url: impl Into<String>,
        large_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ImageId(id),
            thumbnail_url: thumbnail_url.into(),
            large_url: large_url.into(),
            tags: String::new(),
            width: 0,
            height: 0,
        }
    }

    /// Sets the caption tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    /// Records on this page, in provider order.
    pub hits: Vec<ImageRecord>,
    /// Number of records reachable through pagination for this query.
    pub total_hits: usize,
}

impl SearchPage {
    #[must_use]
    pub fn new(hits: Vec<ImageRecord>, total_hits: usize) -> Self {
        Self { hits, total_hits }
    }

    /// A page reporting no matches at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns whether the provider reported zero matches for the query.
    #[must_use]
    pub fn has_no_matches(&self) -> bool {
        self.total_hits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_builder_sets_caption() {
        let record = ImageRecord::new(7, "http://x/s.jpg", "http://x/l.jpg").with_tags("cat, pet");
        assert_eq!(record.id, ImageId(7));
        assert_eq!(record.tags, "cat, pet");
        assert_eq!(record.large_url, "http://x/l.jpg");
    }

    #[test]
    fn empty_page_has_no_matches() {
        assert!(SearchPage::empty().has_no_matches());
        let page = SearchPage::new(vec![ImageRecord::new(1, "a", "b")], 40);
        assert!(!page.has_no_matches());
    }
}
