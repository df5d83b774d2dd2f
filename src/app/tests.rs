// SPDX-License-Identifier: MPL-2.0
use super::*;
use crate::domain::gallery::{ImageRecord, SearchPage};
use crate::media::ImageSlot;

fn app() -> App {
    let port = Arc::new(Unavailable(SearchError::MissingApiKey));
    let search: Arc<dyn ImageSearch> = port.clone();
    let source: Arc<dyn ImageSource> = port;
    App::with_ports(
        I18n::new(Some("en-US".into()), &Config::default()),
        &Config::default(),
        search,
        source,
    )
}

fn record(n: u64) -> ImageRecord {
    ImageRecord::new(
        n,
        format!("https://cdn/thumb-{n}.jpg"),
        format!("https://cdn/large-{n}.jpg"),
    )
}

fn type_and_submit(app: &mut App, text: &str) {
    let _ = app.update(Message::SearchBar(search_bar::Message::InputChanged(
        text.to_string(),
    )));
    let _ = app.update(Message::SearchBar(search_bar::Message::Submit));
}

fn resolve(app: &mut App, outcome: Result<SearchPage, SearchError>) {
    let request = app
        .gallery()
        .pending_request()
        .expect("a request should be pending");
    let _ = app.update(Message::Gallery(gallery::Message::PageFetched {
        request,
        outcome,
    }));
}

fn has_toast(app: &App, key: &str) -> bool {
    app.notifications().visible().any(|n| n.message_key() == key)
}

#[test]
fn submitting_from_search_bar_starts_loading() {
    let mut app = app();

    type_and_submit(&mut app, "cats");

    assert!(app.gallery().is_loading());
    assert!(app.is_spinner_running());
    assert_eq!(app.title(), "cats - Iced Gallery");
}

#[test]
fn blank_submit_shows_info_toast() {
    let mut app = app();

    type_and_submit(&mut app, "   ");

    assert!(!app.gallery().is_loading());
    assert!(has_toast(&app, "notification-empty-query"));
}

#[test]
fn zero_hits_show_warning_toast() {
    let mut app = app();
    type_and_submit(&mut app, "zzznotfound");

    resolve(&mut app, Ok(SearchPage::empty()));

    assert!(has_toast(&app, "notification-no-results"));
    assert!(!app.is_spinner_running());
}

#[test]
fn hits_start_thumbnail_downloads() {
    let mut app = app();
    type_and_submit(&mut app, "cats");

    resolve(&mut app, Ok(SearchPage::new(vec![record(1), record(2)], 60)));

    assert_eq!(app.images().len(), 2);
    assert!(matches!(
        app.images().get("https://cdn/thumb-1.jpg"),
        Some(ImageSlot::Pending)
    ));
}

#[test]
fn finished_download_becomes_ready() {
    let mut app = app();
    type_and_submit(&mut app, "cats");
    resolve(&mut app, Ok(SearchPage::new(vec![record(1)], 1)));

    let _ = app.update(Message::ImageLoaded {
        url: "https://cdn/thumb-1.jpg".into(),
        result: Ok(vec![0xFF, 0xD8]),
    });

    assert!(matches!(
        app.images().get("https://cdn/thumb-1.jpg"),
        Some(ImageSlot::Ready(_))
    ));
}

#[test]
fn new_query_releases_previous_images_and_outcome_toasts() {
    let mut app = app();
    type_and_submit(&mut app, "zzznotfound");
    resolve(&mut app, Ok(SearchPage::empty()));
    type_and_submit(&mut app, "cats");
    resolve(&mut app, Ok(SearchPage::new(vec![record(1)], 1)));
    assert_eq!(app.images().len(), 1);

    type_and_submit(&mut app, "dogs");

    assert!(app.images().is_empty());
    assert!(!has_toast(&app, "notification-no-results"));
}

#[test]
fn selecting_image_requests_preview_and_escape_closes_it() {
    let mut app = app();
    let url = "http://x/large.jpg".to_string();

    let _ = app.update(Message::Gallery(gallery::Message::SelectImage(url.clone())));
    assert!(app.gallery().modal().is_open);
    assert!(app.images().get(&url).is_some());

    let _ = app.update(Message::EscapePressed);
    assert!(!app.gallery().modal().is_open);
    assert!(app.gallery().modal().large_image_url.is_empty());
}

#[test]
fn reselecting_after_failed_preview_downloads_again() {
    let mut app = app();
    let url = "https://cdn/large-1.jpg".to_string();
    let _ = app.update(Message::Gallery(gallery::Message::SelectImage(url.clone())));
    let _ = app.update(Message::ImageLoaded {
        url: url.clone(),
        result: Err(SearchError::Transport("connection reset".into())),
    });
    assert!(matches!(app.images().get(&url), Some(ImageSlot::Failed)));
    let _ = app.update(Message::Gallery(gallery::Message::DismissModal));

    let _ = app.update(Message::Gallery(gallery::Message::SelectImage(url.clone())));

    assert!(matches!(app.images().get(&url), Some(ImageSlot::Pending)));
    assert!(app.is_spinner_running());

    let _ = app.update(Message::ImageLoaded {
        url: url.clone(),
        result: Ok(vec![0xFF, 0xD8]),
    });
    assert!(matches!(app.images().get(&url), Some(ImageSlot::Ready(_))));
}

#[test]
fn failed_thumbnails_are_retried_with_next_page() {
    let mut app = app();
    type_and_submit(&mut app, "cats");
    resolve(&mut app, Ok(SearchPage::new(vec![record(1)], 2)));
    let _ = app.update(Message::ImageLoaded {
        url: "https://cdn/thumb-1.jpg".into(),
        result: Err(SearchError::Status(503)),
    });

    let _ = app.update(Message::Gallery(gallery::Message::AdvancePage));
    resolve(&mut app, Ok(SearchPage::new(vec![record(2)], 2)));

    assert!(matches!(
        app.images().get("https://cdn/thumb-1.jpg"),
        Some(ImageSlot::Pending)
    ));
    assert!(matches!(
        app.images().get("https://cdn/thumb-2.jpg"),
        Some(ImageSlot::Pending)
    ));
}

#[test]
fn spinner_runs_while_preview_downloads() {
    let mut app = app();
    let url = "https://cdn/large-1.jpg".to_string();

    let _ = app.update(Message::Gallery(gallery::Message::SelectImage(url.clone())));
    assert!(app.is_spinner_running());

    let before = app.loader.spinner_rotation();
    let _ = app.update(Message::Tick(std::time::Instant::now()));
    assert!(app.loader.spinner_rotation() > before);

    let _ = app.update(Message::ImageLoaded {
        url,
        result: Ok(vec![0xFF, 0xD8]),
    });
    assert!(!app.is_spinner_running());
}

#[test]
fn closing_pending_preview_stops_spinner() {
    let mut app = app();
    let _ = app.update(Message::Gallery(gallery::Message::SelectImage(
        "https://cdn/large-1.jpg".into(),
    )));

    let _ = app.update(Message::EscapePressed);

    assert!(!app.is_spinner_running());
}

#[test]
fn escape_without_preview_does_nothing() {
    let mut app = app();
    let _ = app.update(Message::EscapePressed);
    assert!(!app.gallery().modal().is_open);
}

#[test]
fn window_resize_is_recorded() {
    let mut app = app();
    let _ = app.update(Message::WindowResized(Size::new(500.0, 300.0)));
    assert_eq!(app.window_size, Size::new(500.0, 300.0));
}

#[test]
fn tick_expires_toasts() {
    let mut app = app();
    app.notifications
        .push(Notification::info("x").auto_dismiss(std::time::Duration::ZERO));

    let _ = app.update(Message::Tick(std::time::Instant::now()));

    assert!(!app.notifications().has_notifications());
}

#[test]
fn view_renders_every_phase() {
    let mut app = app();
    let _ = app.view();

    type_and_submit(&mut app, "cats");
    let _ = app.view();

    resolve(&mut app, Err(SearchError::Status(500)));
    let _ = app.view();

    let _ = app.update(Message::Gallery(gallery::Message::SelectImage(
        "http://x/large.jpg".into(),
    )));
    let _ = app.view();
}
