// SPDX-License-Identifier: MPL-2.0
//! "Load more" button under the grid.

use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Container, Text},
    Element, Length,
};

/// Renders the button. Only call while the render policy shows it.
pub fn view(i18n: &I18n) -> Element<'_, gallery::Message> {
    let label = Text::new(i18n.tr("load-more-button")).size(typography::BODY);

    let control = button(label)
        .on_press(gallery::Message::AdvancePage)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    Container::new(control)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::LG)
        .into()
}
