// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SearchError;
use crate::gallery;
use crate::ui::notifications;
use crate::ui::search_bar;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Gallery(gallery::Message),
    /// A thumbnail or preview download finished.
    ImageLoaded {
        url: String,
        result: Result<Vec<u8>, SearchError>,
    },
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast expiry and spinner animation.
    Tick(Instant),
    WindowResized(Size),
    EscapePressed,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP47 format (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (overrides `ICED_GALLERY_CONFIG_DIR`).
    pub config_dir: Option<String>,
    /// Optional API key (overrides `PIXABAY_API_KEY` and the config file).
    pub api_key: Option<String>,
}
