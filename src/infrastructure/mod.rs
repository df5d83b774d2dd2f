// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`pixabay`]: Pixabay REST API over `reqwest` (implements [`ImageSearch`]
//!   and [`ImageSource`])
//!
//! [`ImageSearch`]: crate::application::port::ImageSearch
//! [`ImageSource`]: crate::application::port::ImageSource

pub mod pixabay;

pub use pixabay::{PixabayClient, PixabaySettings};
