// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown below the grid while a page is in flight.
//!
//! The state also drives the preview overlay's spinner, so a single rotation
//! advances while either a page or the preview image is loading.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Text},
    Element, Length,
};
use std::f32::consts::TAU;

/// Spinner rotation in radians per tick.
const SPINNER_SPEED: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    StartLoading,
    StopLoading,
    SpinnerTick,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    is_loading: bool,
    preview_pending: bool,
    /// Radians, kept within `0..TAU`.
    spinner_rotation: f32,
}

impl State {
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::StartLoading => self.is_loading = true,
            Message::StopLoading => {
                self.is_loading = false;
                self.reset_when_idle();
            }
            Message::SpinnerTick => {
                if self.is_spinning() {
                    self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;
                }
            }
        }
    }

    /// Starts or stops to match the controller's loading flag.
    pub fn sync(&mut self, loading: bool) {
        if loading != self.is_loading {
            self.handle(if loading {
                Message::StartLoading
            } else {
                Message::StopLoading
            });
        }
    }

    /// Records whether the preview overlay waits for its image.
    pub fn sync_preview(&mut self, pending: bool) {
        self.preview_pending = pending;
        self.reset_when_idle();
    }

    fn reset_when_idle(&mut self) {
        if !self.is_spinning() {
            self.spinner_rotation = 0.0;
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether any spinner is visible and needs ticks.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.is_loading || self.preview_pending
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Spinner with a caption, centered horizontally.
    pub fn view<'a, M: 'static>(&self, label: String) -> Element<'a, M> {
        let content = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(AnimatedSpinner::new(palette::PRIMARY_500, self.spinner_rotation).into_element())
            .push(Text::new(label).size(typography::CAPTION));

        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}
