// SPDX-License-Identifier: MPL-2.0
//! URL-keyed store of downloaded images.
//!
//! Each URL moves through `Pending -> Ready | Failed`; a failed URL goes back
//! to `Pending` when it is requested again. Entries are dropped
//! with [`ImageStore::retain`] once the gallery stops referencing them, so a
//! download finishing after its entry was dropped is ignored.
//!
//! # Usage
//!
//! ```ignore
//! let mut store = ImageStore::new();
//!
//! // Start downloads only for URLs not seen yet
//! for url in store.request(urls) {
//!     spawn_download(url);
//! }
//!
//! // Later, when a download finishes
//! store.insert(&url, result);
//! ```

use crate::application::port::SearchError;
use iced::widget::image::Handle;
use std::collections::HashMap;

/// Download state for one URL.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Download in flight.
    Pending,
    /// Encoded bytes ready for display.
    Ready(Handle),
    /// Download failed; the item renders a placeholder.
    Failed,
}

/// Counters describing store contents and activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of ready images.
    pub ready: usize,
    /// Total encoded bytes held by ready images.
    pub total_bytes: usize,
    /// Downloads that failed.
    pub failures: u64,
    /// Results ignored because their entry had been dropped.
    pub discarded: u64,
}

/// Downloaded images keyed by URL.
#[derive(Debug, Default)]
pub struct ImageStore {
    slots: HashMap<String, ImageSlot>,
    sizes: HashMap<String, usize>,
    stats: StoreStats,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks unseen or failed URLs as pending and returns them in input order.
    ///
    /// URLs already pending or ready are skipped, as are duplicates within
    /// `urls`.
    pub fn request<I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut started = Vec::new();
        for url in urls {
            match self.slots.get(&url) {
                Some(ImageSlot::Pending | ImageSlot::Ready(_)) => continue,
                Some(ImageSlot::Failed) => tracing::debug!(url = %url, "retrying image download"),
                None => {}
            }
            self.slots.insert(url.clone(), ImageSlot::Pending);
            started.push(url);
        }
        started
    }

    /// URLs whose last download failed.
    pub fn failed(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter(|(_, slot)| matches!(slot, ImageSlot::Failed))
            .map(|(url, _)| url.as_str())
    }

    /// Records the outcome of a download.
    ///
    /// Returns `false` if `url` is no longer tracked.
    pub fn insert(&mut self, url: &str, result: Result<Vec<u8>, SearchError>) -> bool {
        let Some(slot) = self.slots.get_mut(url) else {
            self.stats.discarded += 1;
            tracing::debug!(url, "dropping download for an image no longer shown");
            return false;
        };

        match result {
            Ok(bytes) => {
                let size = bytes.len();
                *slot = ImageSlot::Ready(Handle::from_bytes(bytes));
                if let Some(previous) = self.sizes.insert(url.to_string(), size) {
                    self.stats.total_bytes = self.stats.total_bytes.saturating_sub(previous);
                } else {
                    self.stats.ready += 1;
                }
                self.stats.total_bytes += size;
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "image download failed");
                *slot = ImageSlot::Failed;
                self.forget_size(url);
                self.stats.failures += 1;
            }
        }
        true
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageSlot> {
        self.slots.get(url)
    }

    /// Keeps only the URLs for which `keep` returns `true`.
    ///
    /// Returns the number of dropped entries.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.slots.len();
        let dropped: Vec<String> = self
            .slots
            .keys()
            .filter(|url| !keep(url))
            .cloned()
            .collect();
        for url in &dropped {
            self.slots.remove(url);
            self.forget_size(url);
        }
        before - self.slots.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> StoreStats {
        self.stats
    }

    fn forget_size(&mut self, url: &str) {
        if let Some(size) = self.sizes.remove(url) {
            self.stats.ready = self.stats.ready.saturating_sub(1);
            self.stats.total_bytes = self.stats.total_bytes.saturating_sub(size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| format!("https://cdn/{name}.jpg")).collect()
    }

    #[test]
    fn request_returns_only_unseen_urls() {
        let mut store = ImageStore::new();

        let first = store.request(urls(&["a", "b", "a"]));
        assert_eq!(first, urls(&["a", "b"]));

        let second = store.request(urls(&["b", "c"]));
        assert_eq!(second, urls(&["c"]));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn insert_success_makes_handle_available() {
        let mut store = ImageStore::new();
        let url = urls(&["a"]).remove(0);
        store.request([url.clone()]);
        assert!(matches!(store.get(&url), Some(ImageSlot::Pending)));

        assert!(store.insert(&url, Ok(vec![1, 2, 3])));

        assert!(matches!(store.get(&url), Some(ImageSlot::Ready(_))));
        assert_eq!(store.stats().ready, 1);
        assert_eq!(store.stats().total_bytes, 3);
    }

    #[test]
    fn insert_failure_marks_slot_failed() {
        let mut store = ImageStore::new();
        let url = urls(&["a"]).remove(0);
        store.request([url.clone()]);

        store.insert(&url, Err(SearchError::Status(404)));

        assert!(matches!(store.get(&url), Some(ImageSlot::Failed)));
        assert_eq!(store.stats().failures, 1);
    }

    #[test]
    fn insert_for_untracked_url_is_discarded() {
        let mut store = ImageStore::new();

        assert!(!store.insert("https://cdn/gone.jpg", Ok(vec![0; 8])));

        assert!(store.is_empty());
        assert_eq!(store.stats().discarded, 1);
    }

    #[test]
    fn retain_drops_unreferenced_entries_and_their_bytes() {
        let mut store = ImageStore::new();
        for url in store.request(urls(&["a", "b", "c"])) {
            store.insert(&url, Ok(vec![0; 10]));
        }
        let keep = urls(&["b"]).remove(0);

        let dropped = store.retain(|url| url == keep);

        assert_eq!(dropped, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().ready, 1);
        assert_eq!(store.stats().total_bytes, 10);
    }

    #[test]
    fn dropped_url_can_be_requested_again() {
        let mut store = ImageStore::new();
        store.request(urls(&["a"]));
        store.retain(|_| false);

        assert_eq!(store.request(urls(&["a"])), urls(&["a"]));
    }

    #[test]
    fn failed_url_is_downloaded_again_on_request() {
        let mut store = ImageStore::new();
        let url = urls(&["a"]).remove(0);
        store.request([url.clone()]);
        store.insert(&url, Err(SearchError::Transport("reset".into())));

        assert_eq!(store.request([url.clone()]), vec![url.clone()]);
        assert!(matches!(store.get(&url), Some(ImageSlot::Pending)));

        assert!(store.insert(&url, Ok(vec![7; 4])));
        assert!(matches!(store.get(&url), Some(ImageSlot::Ready(_))));
        assert_eq!(store.stats().failures, 1);
    }

    #[test]
    fn pending_and_ready_urls_are_not_restarted() {
        let mut store = ImageStore::new();
        let names = urls(&["ready", "pending"]);
        store.request(names.clone());
        store.insert(&names[0], Ok(vec![1]));

        assert!(store.request(names).is_empty());
    }

    #[test]
    fn failed_lists_only_failed_urls() {
        let mut store = ImageStore::new();
        let names = urls(&["ok", "bad"]);
        store.request(names.clone());
        store.insert(&names[0], Ok(vec![1]));
        store.insert(&names[1], Err(SearchError::Status(503)));

        let failed: Vec<&str> = store.failed().collect();
        assert_eq!(failed, vec![names[1].as_str()]);
    }
}
