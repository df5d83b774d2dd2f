// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the gallery depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer receives port implementations as trait objects
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::port::ImageSearch;
//! use iced_gallery::infrastructure::pixabay::PixabayClient;
//! use std::sync::Arc;
//!
//! let search: Arc<dyn ImageSearch> = Arc::new(PixabayClient::new(settings)?);
//! ```

pub mod port;
