// SPDX-License-Identifier: MPL-2.0
//! Pixabay REST API adapter.
//!
//! Implements [`ImageSearch`] with `GET {endpoint}?key=..&q=..&page=..` and
//! [`ImageSource`] with plain downloads of the returned CDN URLs. Both share a
//! single `reqwest` client.

mod response;

pub use response::decode_page;

use crate::application::port::{FetchFuture, ImageSearch, ImageSource, SearchError, SearchFuture};
use crate::domain::gallery::{PageNumber, SearchQuery};
use futures_util::future::{self, FutureExt};
use serde::{Deserialize, Serialize};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://pixabay.com/api/";

/// Kind of media to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    All,
    #[default]
    Photo,
    Illustration,
    Vector,
}

impl ImageType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ImageType::All => "all",
            ImageType::Photo => "photo",
            ImageType::Illustration => "illustration",
            ImageType::Vector => "vector",
        }
    }
}

/// Orientation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    All,
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::All => "all",
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Request parameters shared by every search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixabaySettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub per_page: u32,
    pub image_type: ImageType,
    pub orientation: Orientation,
    pub safe_search: bool,
}

impl Default for PixabaySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            per_page: crate::config::DEFAULT_PER_PAGE,
            image_type: ImageType::default(),
            orientation: Orientation::default(),
            safe_search: true,
        }
    }
}

impl PixabaySettings {
    /// Returns the configured key, ignoring blank values.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Builds the query string for one page request.
    #[must_use]
    pub fn query_params(
        &self,
        key: &str,
        query: &SearchQuery,
        page: PageNumber,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("key", key.to_string()),
            ("q", query.as_str().to_string()),
            ("page", page.get().to_string()),
            ("image_type", self.image_type.as_str().to_string()),
            ("orientation", self.orientation.as_str().to_string()),
            ("safesearch", self.safe_search.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// HTTP client for the Pixabay API.
#[derive(Debug, Clone)]
pub struct PixabayClient {
    http: reqwest::Client,
    settings: PixabaySettings,
}

impl PixabayClient {
    /// Creates a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Transport`] if the TLS backend cannot be
    /// initialized.
    pub fn new(settings: PixabaySettings) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(transport)?;
        Ok(Self { http, settings })
    }
}

impl ImageSearch for PixabayClient {
    fn search(&self, query: &SearchQuery, page: PageNumber) -> SearchFuture {
        let Some(key) = self.settings.api_key() else {
            return future::ready(Err(SearchError::MissingApiKey)).boxed();
        };

        tracing::info!(query = %query, page = page.get(), "searching pixabay");
        let request = self
            .http
            .get(&self.settings.endpoint)
            .query(&self.settings.query_params(key, query, page));

        async move {
            let response = request.send().await.map_err(transport)?;
            let status = response.status();
            if !status.is_success() {
                return Err(SearchError::Status(status.as_u16()));
            }
            let body = response.bytes().await.map_err(transport)?;
            decode_page(&body)
        }
        .boxed()
    }
}

impl ImageSource for PixabayClient {
    fn fetch(&self, url: &str) -> FetchFuture {
        tracing::debug!(url, "downloading image");
        let request = self.http.get(url);

        async move {
            let response = request.send().await.map_err(transport)?;
            let status = response.status();
            if !status.is_success() {
                return Err(SearchError::Status(status.as_u16()));
            }
            let body = response.bytes().await.map_err(transport)?;
            Ok(body.to_vec())
        }
        .boxed()
    }
}

fn transport(err: reqwest::Error) -> SearchError {
    SearchError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key(key: Option<&str>) -> PixabaySettings {
        PixabaySettings {
            api_key: key.map(String::from),
            ..PixabaySettings::default()
        }
    }

    #[test]
    fn query_params_include_paging_and_filters() {
        let settings = PixabaySettings {
            per_page: 24,
            image_type: ImageType::Illustration,
            orientation: Orientation::Vertical,
            safe_search: false,
            ..PixabaySettings::default()
        };
        let query = SearchQuery::parse("red fox").unwrap();
        let page = PageNumber::new(3).unwrap();

        let params = settings.query_params("secret", &query, page);

        assert!(params.contains(&("key", "secret".to_string())));
        assert!(params.contains(&("q", "red fox".to_string())));
        assert!(params.contains(&("page", "3".to_string())));
        assert!(params.contains(&("image_type", "illustration".to_string())));
        assert!(params.contains(&("orientation", "vertical".to_string())));
        assert!(params.contains(&("safesearch", "false".to_string())));
        assert!(params.contains(&("per_page", "24".to_string())));
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        assert_eq!(settings_with_key(None).api_key(), None);
        assert_eq!(settings_with_key(Some("  ")).api_key(), None);
        assert_eq!(settings_with_key(Some(" abc ")).api_key(), Some("abc"));
    }

    #[tokio::test]
    async fn search_without_key_fails_without_network() {
        let client = PixabayClient::new(settings_with_key(None)).expect("client builds");
        let query = SearchQuery::parse("cats").unwrap();

        let result = client.search(&query, PageNumber::FIRST).await;

        assert_eq!(result, Err(SearchError::MissingApiKey));
    }

    #[test]
    fn default_settings_match_config_defaults() {
        let settings = PixabaySettings::default();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.image_type, ImageType::Photo);
        assert_eq!(settings.orientation, Orientation::Horizontal);
        assert!(settings.safe_search);
    }
}
