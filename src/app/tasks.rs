// SPDX-License-Identifier: MPL-2.0
//! Futures that carry out controller effects against the ports.
//!
//! Each future resolves to the message fed back into `update`. They are
//! plain futures so they can be awaited directly outside of Iced.

use crate::application::port::{ImageSearch, ImageSource, SearchError};
use crate::gallery::{self, FetchRequest};
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::Arc;

/// Runs one page request and wraps the outcome with its request id.
pub fn fetch_page(
    search: &Arc<dyn ImageSearch>,
    request: FetchRequest,
) -> BoxFuture<'static, gallery::Message> {
    let FetchRequest { id, query, page } = request;
    search
        .search(&query, page)
        .map(move |outcome| gallery::Message::PageFetched {
            request: id,
            outcome,
        })
        .boxed()
}

/// Downloads one image and pairs the result with its URL.
pub fn fetch_image(
    source: &Arc<dyn ImageSource>,
    url: String,
) -> BoxFuture<'static, (String, Result<Vec<u8>, SearchError>)> {
    source.fetch(&url).map(move |result| (url, result)).boxed()
}
