// SPDX-License-Identifier: MPL-2.0
//! End-to-end flows through the gallery controller with in-memory ports.

use futures_util::future::{self, FutureExt};
use iced_gallery::app::tasks;
use iced_gallery::application::port::{
    FetchFuture, ImageSearch, ImageSource, SearchError, SearchFuture,
};
use iced_gallery::config::{self, Config};
use iced_gallery::domain::gallery::{ImageRecord, PageNumber, SearchPage, SearchQuery};
use iced_gallery::gallery::{Effect, FetchRequest, Message, Notice, Phase, State};
use iced_gallery::i18n::I18n;
use iced_gallery::media::{ImageSlot, ImageStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Search port answering from a fixed script keyed by `(query, page)`.
#[derive(Default)]
struct ScriptedSearch {
    responses: HashMap<(String, u32), Result<SearchPage, SearchError>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSearch {
    fn respond(mut self, query: &str, page: u32, outcome: Result<SearchPage, SearchError>) -> Self {
        self.responses.insert((query.to_string(), page), outcome);
        self
    }

    fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageSearch for ScriptedSearch {
    fn search(&self, query: &SearchQuery, page: PageNumber) -> SearchFuture {
        let key = (query.as_str().to_string(), page.get());
        self.calls.lock().unwrap().push(key.clone());
        let outcome = self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or(Err(SearchError::Status(404)));
        future::ready(outcome).boxed()
    }
}

/// Image source serving the URL itself as bytes, failing for `broken` URLs.
struct EchoSource;

impl ImageSource for EchoSource {
    fn fetch(&self, url: &str) -> FetchFuture {
        let outcome = if url.contains("broken") {
            Err(SearchError::Status(500))
        } else {
            Ok(url.as_bytes().to_vec())
        };
        future::ready(outcome).boxed()
    }
}

fn records(prefix: &str, range: std::ops::Range<u64>) -> Vec<ImageRecord> {
    range
        .map(|n| {
            ImageRecord::new(
                n,
                format!("http://x/{prefix}/{n}_thumb.jpg"),
                format!("http://x/{prefix}/{n}_large.jpg"),
            )
        })
        .collect()
}

fn fetch_request(effects: &[Effect]) -> FetchRequest {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchPage(request) => Some(request.clone()),
            _ => None,
        })
        .expect("transition should request a page")
}

/// Runs every fetch effect against `search` and feeds the outcomes back.
async fn settle(
    state: &mut State,
    search: &Arc<dyn ImageSearch>,
    effects: Vec<Effect>,
) -> Vec<Effect> {
    let mut follow_up = Vec::new();
    for effect in effects {
        match effect {
            Effect::FetchPage(request) => {
                let message = tasks::fetch_page(search, request).await;
                follow_up.extend(state.handle(message));
            }
            other => follow_up.push(other),
        }
    }
    follow_up
}

#[tokio::test]
async fn first_page_fills_grid_and_offers_more() {
    let script = ScriptedSearch::default()
        .respond("cats", 1, Ok(SearchPage::new(records("cats", 0..5), 60)));
    let script = Arc::new(script);
    let search: Arc<dyn ImageSearch> = script.clone();
    let mut state = State::new();

    let effects = state.handle(Message::SubmitQuery("cats".into()));
    assert!(state.render_policy().show_loader);
    let follow_up = settle(&mut state, &search, effects).await;

    assert_eq!(state.results().len(), 5);
    assert_eq!(state.results().total_available(), 60);
    let policy = state.render_policy();
    assert!(policy.show_grid);
    assert!(policy.show_load_more);
    assert!(!policy.show_loader);
    assert!(!policy.show_error);
    assert!(matches!(&follow_up[..], [Effect::LoadThumbnails(urls)] if urls.len() == 5));
    assert_eq!(script.calls(), vec![("cats".to_string(), 1)]);
}

#[tokio::test]
async fn load_more_appends_next_page_in_order() {
    let script = ScriptedSearch::default()
        .respond("cats", 1, Ok(SearchPage::new(records("p1", 0..5), 8)))
        .respond("cats", 2, Ok(SearchPage::new(records("p2", 5..8), 8)));
    let script = Arc::new(script);
    let search: Arc<dyn ImageSearch> = script.clone();
    let mut state = State::new();

    let effects = state.handle(Message::SubmitQuery("cats".into()));
    settle(&mut state, &search, effects).await;
    let effects = state.handle(Message::AdvancePage);
    settle(&mut state, &search, effects).await;

    let ids: Vec<u64> = state.results().items().iter().map(|r| r.id.0).collect();
    assert_eq!(ids, (0..8).collect::<Vec<_>>());
    assert!(state.results().is_exhausted());
    assert!(!state.render_policy().show_load_more);
    assert_eq!(
        script.calls(),
        vec![("cats".to_string(), 1), ("cats".to_string(), 2)]
    );
}

#[tokio::test]
async fn zero_hits_notify_without_error() {
    let script = ScriptedSearch::default()
        .respond("zzznotfound", 1, Ok(SearchPage::empty()));
    let search: Arc<dyn ImageSearch> = Arc::new(script);
    let mut state = State::new();

    let effects = state.handle(Message::SubmitQuery("zzznotfound".into()));
    let follow_up = settle(&mut state, &search, effects).await;

    assert_eq!(state.results().len(), 0);
    assert_eq!(state.phase(), Phase::NoResults);
    assert!(!state.render_policy().show_error);
    assert!(!state.render_policy().show_grid);
    assert_eq!(
        follow_up,
        vec![Effect::Notify(Notice::NoResults {
            query: SearchQuery::parse("zzznotfound").unwrap()
        })]
    );
}

#[tokio::test]
async fn failed_page_keeps_previous_items() {
    let script = ScriptedSearch::default()
        .respond("cats", 1, Ok(SearchPage::new(records("cats", 0..5), 60)))
        .respond("cats", 2, Err(SearchError::Transport("reset".into())));
    let search: Arc<dyn ImageSearch> = Arc::new(script);
    let mut state = State::new();

    let effects = state.handle(Message::SubmitQuery("cats".into()));
    settle(&mut state, &search, effects).await;
    let before = state.results().items().to_vec();
    let effects = state.handle(Message::AdvancePage);
    settle(&mut state, &search, effects).await;

    assert!(state.has_error());
    assert_eq!(state.failure(), Some(&SearchError::Transport("reset".into())));
    assert_eq!(state.results().items(), &before[..]);
    assert!(!state.render_policy().show_loader);
    assert!(state.render_policy().show_error);
}

#[tokio::test]
async fn selecting_and_dismissing_preview() {
    let source: Arc<dyn ImageSource> = Arc::new(EchoSource);
    let mut state = State::new();
    let mut images = ImageStore::new();

    let effects = state.handle(Message::SelectImage("http://x/large.jpg".into()));
    assert!(state.render_policy().show_overlay);
    assert_eq!(state.modal().large_image_url, "http://x/large.jpg");

    let [Effect::LoadPreview(url)] = &effects[..] else {
        panic!("expected a preview download, got {effects:?}");
    };
    for url in images.request([url.clone()]) {
        let (url, result) = tasks::fetch_image(&source, url).await;
        assert!(images.insert(&url, result));
    }
    assert!(matches!(
        images.get("http://x/large.jpg"),
        Some(ImageSlot::Ready(_))
    ));

    state.handle(Message::DismissModal);
    assert!(!state.render_policy().show_overlay);
    assert!(state.modal().large_image_url.is_empty());
}

#[tokio::test]
async fn broken_thumbnail_stays_local_to_its_tile() {
    let source: Arc<dyn ImageSource> = Arc::new(EchoSource);
    let mut images = ImageStore::new();
    let urls = vec![
        "http://x/ok_thumb.jpg".to_string(),
        "http://x/broken_thumb.jpg".to_string(),
    ];

    for url in images.request(urls) {
        let (url, result) = tasks::fetch_image(&source, url).await;
        images.insert(&url, result);
    }

    assert!(matches!(images.get("http://x/ok_thumb.jpg"), Some(ImageSlot::Ready(_))));
    assert!(matches!(images.get("http://x/broken_thumb.jpg"), Some(ImageSlot::Failed)));
    assert_eq!(images.stats().failures, 1);
}

#[tokio::test]
async fn stale_response_from_previous_query_is_ignored() {
    let script = ScriptedSearch::default()
        .respond("dogs", 1, Ok(SearchPage::new(records("dogs", 0..3), 3)))
        .respond("cats", 1, Ok(SearchPage::new(records("cats", 10..12), 2)));
    let search: Arc<dyn ImageSearch> = Arc::new(script);
    let mut state = State::new();

    let dogs = fetch_request(&state.handle(Message::SubmitQuery("dogs".into())));
    let cats = fetch_request(&state.handle(Message::SubmitQuery("cats".into())));

    // Newest answer first, then the slow answer for the abandoned query.
    let cats_done = tasks::fetch_page(&search, cats).await;
    state.handle(cats_done);
    let dogs_done = tasks::fetch_page(&search, dogs).await;
    let effects = state.handle(dogs_done);

    assert!(effects.is_empty());
    assert_eq!(state.search().map(|s| s.query.as_str()), Some("cats"));
    let ids: Vec<u64> = state.results().items().iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![10, 11]);
}

#[tokio::test]
async fn blank_submission_never_reaches_the_provider() {
    let script = Arc::new(ScriptedSearch::default());
    let search: Arc<dyn ImageSearch> = script.clone();
    let mut state = State::new();

    let effects = state.handle(Message::SubmitQuery("   ".into()));
    let follow_up = settle(&mut state, &search, effects).await;

    assert_eq!(follow_up, vec![Effect::Notify(Notice::EmptyQuery)]);
    assert!(script.calls().is_empty());
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("load-more-button"), "Load more");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn search_settings_roundtrip_through_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.search.api_key = Some("file-key".to_string());
    config.search.per_page = Some(30);
    config::save_with_override(&config, Some(dir.path().to_path_buf())).expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let settings = loaded.search.to_settings(None);
    assert_eq!(settings.api_key(), Some("file-key"));
    assert_eq!(settings.per_page, 30);

    let overridden = loaded.search.to_settings(Some("env-key".to_string()));
    assert_eq!(overridden.api_key(), Some("env-key"));
}
