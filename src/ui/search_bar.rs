// SPDX-License-Identifier: MPL-2.0
//! Search field and submit button at the top of the window.
//!
//! Holds only the text being typed. Submitting hands the raw text to the
//! parent, which forwards it to the gallery controller for trimming and
//! validation.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub input: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The field was submitted with this raw, untrimmed text.
    Submitted(String),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Applies a search bar message. The typed text is kept after submit.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Event::None
            }
            Message::Submit => Event::Submitted(self.input.clone()),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view(ViewContext {
            i18n,
            input: &self.input,
        })
    }
}

/// Render the search bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let field = text_input(&ctx.i18n.tr("search-placeholder"), ctx.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let submit = button(
        Text::new(ctx.i18n.tr("search-button"))
            .size(typography::BODY)
            .align_y(Vertical::Center),
    )
    .on_press(Message::Submit)
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(field)
        .push(submit);

    Container::new(Container::new(row).max_width(sizing::SEARCH_FIELD_MAX_WIDTH))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_input_without_event() {
        let mut state = State::new();
        let event = state.update(Message::InputChanged("cats".into()));

        assert_eq!(event, Event::None);
        assert_eq!(state.input(), "cats");
    }

    #[test]
    fn submit_forwards_raw_text_and_keeps_it() {
        let mut state = State::new();
        state.update(Message::InputChanged("  red fox ".into()));

        let event = state.update(Message::Submit);

        assert_eq!(event, Event::Submitted("  red fox ".into()));
        assert_eq!(state.input(), "  red fox ");
    }

    #[test]
    fn submit_of_empty_field_still_reports() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Submit), Event::Submitted(String::new()));
    }
}
