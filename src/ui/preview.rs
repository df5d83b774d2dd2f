// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay showing the selected image's large rendition.
//!
//! Clicking the dimmed backdrop, the close button or pressing Escape
//! dismisses it. Clicks on the image itself are swallowed.

use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::media::ImageSlot;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, Column, Container, Image, Stack, Text},
    ContentFit, Element, Length, Size,
};

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slot: Option<&'a ImageSlot>,
    pub window: Size,
    /// Current angle of the shared loading spinner.
    pub spinner_rotation: f32,
}

/// Largest box the image may occupy inside a `window`-sized overlay.
#[must_use]
pub fn image_bounds(window: Size) -> Size {
    Size::new(
        (window.width * sizing::PREVIEW_MAX_FRACTION).max(1.0),
        (window.height * sizing::PREVIEW_MAX_FRACTION).max(1.0),
    )
}

/// Render the overlay. Only call while the render policy shows it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, gallery::Message> {
    let bounds = image_bounds(ctx.window);

    let body: Element<'_, gallery::Message> = match ctx.slot {
        Some(ImageSlot::Ready(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into(),
        Some(ImageSlot::Failed) => status_text(ctx.i18n.tr("preview-failed")),
        Some(ImageSlot::Pending) | None => Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element())
            .push(Text::new(ctx.i18n.tr("preview-loading")).size(typography::BODY))
            .into(),
    };

    let frame = Container::new(body)
        .max_width(bounds.width)
        .max_height(bounds.height)
        .padding(spacing::XXS)
        .style(styles::overlay::frame);

    let centered = Container::new(opaque(frame))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let backdrop = mouse_area(
        Container::new(centered)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(gallery::Message::DismissModal);

    let close = button(Text::new(ctx.i18n.tr("preview-close")).size(typography::BODY))
        .on_press(gallery::Message::DismissModal)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));

    let close_corner = Container::new(close)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(spacing::MD);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(close_corner)
        .into()
}

fn status_text<'a>(label: String) -> Element<'a, gallery::Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .padding(spacing::LG)
        .into()
}
