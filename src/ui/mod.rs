// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each module
//! renders a slice of state and emits messages for the app shell.
//!
//! # Gallery Views
//!
//! - [`search_bar`] - Query field and submit button
//! - [`image_grid`] - Responsive thumbnail grid
//! - [`load_more`] - Next-page button
//! - [`loader`] - Spinner shown while a page is in flight
//! - [`error_banner`] - Persistent banner after a failed request
//! - [`preview`] - Overlay with the large rendition
//! - [`notifications`] - Toasts
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod error_banner;
pub mod image_grid;
pub mod load_more;
pub mod loader;
pub mod notifications;
pub mod preview;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod widgets;
