// SPDX-License-Identifier: MPL-2.0
//! Message handlers and effect execution.
//!
//! Gallery transitions are pure; this module turns the effects they return
//! into Iced tasks, toasts and image store updates.

use super::{tasks, Message};
use crate::application::port::{ImageSearch, ImageSource, SearchError};
use crate::gallery::{self, Effect};
use crate::media::{ImageSlot, ImageStore};
use crate::ui::loader;
use crate::ui::notifications::{self, Notification};
use crate::ui::search_bar::{self, Event as SearchBarEvent};
use iced::{Size, Task};
use std::sync::Arc;

/// Toasts that describe the outcome of a previous query.
const QUERY_OUTCOME_KEYS: [&str; 2] = ["notification-no-results", "notification-empty-query"];

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub search_bar: &'a mut search_bar::State,
    pub images: &'a mut ImageStore,
    pub notifications: &'a mut notifications::Manager,
    pub loader: &'a mut loader::State,
    pub search: &'a Arc<dyn ImageSearch>,
    pub source: &'a Arc<dyn ImageSource>,
    pub window_size: &'a mut Size,
}

pub fn handle_search_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: search_bar::Message,
) -> Task<Message> {
    match ctx.search_bar.update(message) {
        SearchBarEvent::None => Task::none(),
        SearchBarEvent::Submitted(raw) => {
            handle_gallery_message(ctx, gallery::Message::SubmitQuery(raw))
        }
    }
}

/// Feeds `message` to the controller and runs the resulting effects.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let submitted = matches!(message, gallery::Message::SubmitQuery(_));
    let effects = ctx.gallery.handle(message);

    let new_session = submitted
        && effects
            .iter()
            .any(|effect| matches!(effect, Effect::FetchPage(_)));
    if new_session {
        ctx.notifications.clear_keys(&QUERY_OUTCOME_KEYS);
        let gallery = &*ctx.gallery;
        let dropped = ctx.images.retain(|url| gallery.references(url));
        if dropped > 0 {
            let stats = ctx.images.stats();
            tracing::debug!(
                dropped,
                ready = stats.ready,
                bytes = stats.total_bytes,
                failures = stats.failures,
                "released images from the previous query"
            );
        }
    }

    let task = Task::batch(effects.into_iter().map(|effect| run_effect(ctx, effect)));
    sync_spinner(ctx);
    task
}

/// Keeps the spinner turning while a page or the preview image is loading.
fn sync_spinner(ctx: &mut UpdateContext<'_>) {
    ctx.loader.sync(ctx.gallery.is_loading());

    let modal = ctx.gallery.modal();
    let preview_pending = modal.is_open
        && !matches!(
            ctx.images.get(&modal.large_image_url),
            Some(ImageSlot::Ready(_) | ImageSlot::Failed)
        );
    ctx.loader.sync_preview(preview_pending);
}

fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::FetchPage(request) => {
            Task::perform(tasks::fetch_page(ctx.search, request), Message::Gallery)
        }
        Effect::Notify(notice) => {
            ctx.notifications.push(Notification::from(&notice));
            Task::none()
        }
        Effect::LoadThumbnails(mut urls) => {
            // Retry earlier thumbnails that failed along with the new page
            let gallery = &*ctx.gallery;
            urls.extend(
                ctx.images
                    .failed()
                    .filter(|url| gallery.results().references(url))
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            );
            load_images(ctx, urls)
        }
        Effect::LoadPreview(url) => load_images(ctx, vec![url]),
    }
}

/// Starts downloads for URLs the store has not seen yet.
fn load_images(ctx: &mut UpdateContext<'_>, urls: Vec<String>) -> Task<Message> {
    let started = ctx.images.request(urls);
    Task::batch(started.into_iter().map(|url| {
        Task::perform(tasks::fetch_image(ctx.source, url), |(url, result)| {
            Message::ImageLoaded { url, result }
        })
    }))
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<Vec<u8>, SearchError>,
) -> Task<Message> {
    ctx.images.insert(url, result);
    sync_spinner(ctx);
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    ctx.loader.handle(loader::Message::SpinnerTick);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    Task::none()
}

/// Escape closes the preview; otherwise it does nothing.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.gallery.modal().is_open {
        handle_gallery_message(ctx, gallery::Message::DismissModal)
    } else {
        Task::none()
    }
}
