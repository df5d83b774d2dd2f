// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop image search gallery built with the Iced GUI
//! framework.
//!
//! It pages through Pixabay results for a query, shows them in a responsive
//! grid and opens a large preview on selection. The gallery controller in
//! [`gallery`] is a pure state machine; [`app`] executes its effects.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod observability;
pub mod ui;
