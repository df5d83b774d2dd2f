// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with no UI or network dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: Search values ([`SearchQuery`](gallery::SearchQuery),
//!   [`PageNumber`](gallery::PageNumber)) and results
//!   ([`ImageRecord`](gallery::ImageRecord), [`SearchPage`](gallery::SearchPage))

pub mod gallery;
