// SPDX-License-Identifier: MPL-2.0
//! Persistent banner shown after a failed page request.
//!
//! ```ignore
//! ErrorBanner::new()
//!     .title(i18n.tr("error-banner-title"))
//!     .message(i18n.tr("error-banner-message"))
//!     .details(i18n.tr(err.i18n_key()))
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

impl ErrorBanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Cause of the failure, shown in smaller text.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title) = self.title {
            body = body.push(
                Text::new(title)
                    .size(typography::TITLE_SM)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }
        if let Some(message) = self.message {
            body = body.push(Text::new(message).size(typography::BODY));
        }
        if let Some(details) = self.details {
            body = body.push(Text::new(details).size(typography::CAPTION));
        }

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new("!")
                    .size(typography::TITLE_MD)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            )
            .push(body);

        Container::new(Container::new(content).padding(spacing::SM).style(styles::container::error_banner))
            .width(Length::Fill)
            .padding([spacing::XS, spacing::MD])
            .into()
    }
}
