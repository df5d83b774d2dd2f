// SPDX-License-Identifier: MPL-2.0
//! Pixabay JSON response model.

use crate::application::port::SearchError;
use crate::domain::gallery::{ImageId, ImageRecord, SearchPage};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Response {
    /// Number of reachable hits (Pixabay caps pagination at 500).
    total_hits: usize,
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    #[serde(default)]
    tags: String,
    #[serde(default, rename = "imageWidth")]
    image_width: u32,
    #[serde(default, rename = "imageHeight")]
    image_height: u32,
}

impl From<Hit> for ImageRecord {
    fn from(hit: Hit) -> Self {
        ImageRecord {
            id: ImageId(hit.id),
            thumbnail_url: hit.webformat_url,
            large_url: hit.large_image_url,
            tags: hit.tags,
            width: hit.image_width,
            height: hit.image_height,
        }
    }
}

/// Decodes a search response body into a [`SearchPage`].
///
/// # Errors
///
/// Returns [`SearchError::Decode`] when the body is not a valid response.
pub fn decode_page(body: &[u8]) -> Result<SearchPage, SearchError> {
    let response: Response =
        serde_json::from_slice(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    Ok(SearchPage {
        hits: response.hits.into_iter().map(ImageRecord::from).collect(),
        total_hits: response.total_hits,
    })
}
