// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the gallery controller to its views, the image
//! search ports, the downloaded image store and the toast manager. Controller
//! effects are executed in [`update`]; everything the views show is derived
//! from state on each render.

mod message;
pub mod paths;
mod subscription;
pub mod tasks;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{ImageSearch, ImageSource, SearchError, Unavailable};
use crate::config::{self, Config};
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::infrastructure::PixabayClient;
use crate::media::ImageStore;
use crate::ui::loader;
use crate::ui::notifications::{self, Notification};
use crate::ui::search_bar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    gallery: gallery::State,
    search_bar: search_bar::State,
    images: ImageStore,
    notifications: notifications::Manager,
    loader: loader::State,
    search: Arc<dyn ImageSearch>,
    source: Arc<dyn ImageSource>,
    theme_mode: ThemeMode,
    thumbnail_size: f32,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.gallery.phase())
            .field("items", &self.gallery.results().len())
            .field("images", &self.images.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config, config_warning: Option<String>) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the inputs are consumed once
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), Config::default(), None));
        App::new(flags, &config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the app with the given ports.
    pub fn with_ports(
        i18n: I18n,
        config: &Config,
        search: Arc<dyn ImageSearch>,
        source: Arc<dyn ImageSource>,
    ) -> Self {
        Self {
            i18n,
            gallery: gallery::State::new(),
            search_bar: search_bar::State::new(),
            images: ImageStore::new(),
            notifications: notifications::Manager::new(),
            loader: loader::State::default(),
            search,
            source,
            theme_mode: config.general.theme_mode,
            thumbnail_size: config.display.thumbnail_size(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        }
    }

    fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);

        let env_key = std::env::var(config::ENV_API_KEY).ok();
        let settings = config.search.to_settings(flags.api_key.or(env_key));
        let missing_key = settings.api_key().is_none();

        let (search, source) = match PixabayClient::new(settings) {
            Ok(client) => {
                let client = Arc::new(client);
                let search: Arc<dyn ImageSearch> = client.clone();
                let source: Arc<dyn ImageSource> = client;
                (search, source)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create HTTP client");
                let port = Arc::new(Unavailable(err));
                let search: Arc<dyn ImageSearch> = port.clone();
                let source: Arc<dyn ImageSource> = port;
                (search, source)
            }
        };

        let mut app = Self::with_ports(i18n, config, search, source);

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if missing_key {
            app.notifications
                .push(Notification::warning(SearchError::MissingApiKey.i18n_key()));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.search() {
            Some(search) => format!("{} - {app_name}", search.query),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.loader.is_spinning(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            search_bar: &mut self.search_bar,
            images: &mut self.images,
            notifications: &mut self.notifications,
            loader: &mut self.loader,
            search: &self.search,
            source: &self.source,
            window_size: &mut self.window_size,
        };

        match message {
            Message::SearchBar(msg) => update::handle_search_bar_message(&mut ctx, msg),
            Message::Gallery(msg) => update::handle_gallery_message(&mut ctx, msg),
            Message::ImageLoaded { url, result } => {
                update::handle_image_loaded(&mut ctx, &url, result)
            }
            Message::Notification(msg) => update::handle_notification_message(&mut ctx, &msg),
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            search_bar: &self.search_bar,
            images: &self.images,
            loader: &self.loader,
            notifications: &self.notifications,
            thumbnail_size: self.thumbnail_size,
            window_size: self.window_size,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn is_spinner_running(&self) -> bool {
        self.loader.is_spinning()
    }
}

#[cfg(test)]
mod tests;
