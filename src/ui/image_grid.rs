// SPDX-License-Identifier: MPL-2.0
//! Responsive thumbnail grid.
//!
//! The column count follows the window width and the configured thumbnail
//! size. Each tile shows the downloaded thumbnail, or a placeholder while it
//! is pending or after it failed. Pressing a tile selects its large rendition.

use crate::domain::gallery::ImageRecord;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::media::{ImageSlot, ImageStore};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, tooltip, Column, Container, Image, Row, Space, Text},
    ContentFit, Element, Length,
};

/// Gap between tiles, both directions.
pub const GAP: f32 = spacing::XS;

/// Horizontal padding around the grid.
pub const PADDING: f32 = spacing::MD;

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [ImageRecord],
    pub images: &'a ImageStore,
    pub thumbnail_size: f32,
    pub window_width: f32,
}

/// Number of tiles per row for a window `available_width` wide.
///
/// Always at least one.
#[must_use]
pub fn column_count(available_width: f32, thumbnail_size: f32) -> usize {
    let usable = (available_width - 2.0 * PADDING).max(0.0);
    let per_tile = thumbnail_size.max(1.0) + GAP;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Non-negative and bounded by window width / tile size
    let columns = ((usable + GAP) / per_tile).floor() as usize;
    columns.max(1)
}

/// Render the grid.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, gallery::Message> {
    let columns = column_count(ctx.window_width, ctx.thumbnail_size);

    let rows = ctx.items.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(GAP);
        for record in chunk {
            row = row.push(tile(&ctx, record));
        }
        // Keep the last row left-aligned with the others
        for _ in chunk.len()..columns {
            row = row.push(
                Space::new()
                    .width(Length::Fixed(ctx.thumbnail_size))
                    .height(Length::Fixed(ctx.thumbnail_size)),
            );
        }
        Element::from(row)
    });

    Container::new(Column::with_children(rows).spacing(GAP))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::MD, PADDING])
        .into()
}

fn tile<'a>(ctx: &ViewContext<'a>, record: &'a ImageRecord) -> Element<'a, gallery::Message> {
    let size = Length::Fixed(ctx.thumbnail_size);

    let content: Element<'a, gallery::Message> = match ctx.images.get(&record.thumbnail_url) {
        Some(ImageSlot::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Failed) => placeholder(Some(ctx.i18n.tr("thumbnail-failed"))),
        Some(ImageSlot::Pending) | None => placeholder(None),
    };

    let pressable = button(content)
        .on_press(gallery::Message::SelectImage(record.large_url.clone()))
        .width(size)
        .height(size)
        .padding(0.0)
        .style(styles::button::thumbnail);

    if record.tags.is_empty() {
        pressable.into()
    } else {
        tooltip(
            pressable,
            Container::new(Text::new(record.tags.as_str()).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into()
    }
}

fn placeholder<'a>(label: Option<String>) -> Element<'a, gallery::Message> {
    let inner: Element<'a, gallery::Message> = match label {
        Some(label) => Text::new(label).size(typography::CAPTION).into(),
        None => Space::new().into(),
    };

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}
