// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: search bar, error banner, grid, loader, load-more.
//! The preview overlay and the toasts are stacked above.

use super::Message;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::ui::error_banner::ErrorBanner;
use crate::ui::notifications::{self, Toast};
use crate::ui::{image_grid, load_more, loader, preview, search_bar};
use iced::{
    widget::{scrollable, Column, Stack},
    Element, Length, Size,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub search_bar: &'a search_bar::State,
    pub images: &'a ImageStore,
    pub loader: &'a loader::State,
    pub notifications: &'a notifications::Manager,
    pub thumbnail_size: f32,
    pub window_size: Size,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let policy = ctx.gallery.render_policy();
    let mut results = Column::new().width(Length::Fill);

    if policy.show_error {
        let mut banner = ErrorBanner::new()
            .title(ctx.i18n.tr("error-banner-title"))
            .message(ctx.i18n.tr("error-banner-message"));
        if let Some(err) = ctx.gallery.failure() {
            banner = banner.details(ctx.i18n.tr(err.i18n_key()));
        }
        results = results.push(banner.view());
    }

    if policy.show_grid {
        results = results.push(
            image_grid::view(image_grid::ViewContext {
                i18n: ctx.i18n,
                items: ctx.gallery.results().items(),
                images: ctx.images,
                thumbnail_size: ctx.thumbnail_size,
                window_width: ctx.window_size.width,
            })
            .map(Message::Gallery),
        );
    }

    if policy.show_loader {
        results = results.push(ctx.loader.view(ctx.i18n.tr("loading-label")));
    }

    if policy.show_load_more {
        results = results.push(load_more::view(ctx.i18n).map(Message::Gallery));
    }

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(ctx.search_bar.view(ctx.i18n).map(Message::SearchBar))
        .push(scrollable(results).width(Length::Fill).height(Length::Fill));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if policy.show_overlay {
        let modal = ctx.gallery.modal();
        layers = layers.push(
            preview::view(preview::ViewContext {
                i18n: ctx.i18n,
                slot: ctx.images.get(&modal.large_image_url),
                window: ctx.window_size,
                spinner_rotation: ctx.loader.spinner_rotation(),
            })
            .map(Message::Gallery),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
