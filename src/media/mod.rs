// SPDX-License-Identifier: MPL-2.0
//! Downloaded image data for the grid and the preview overlay.
//!
//! Images are fetched over HTTP by the shell and kept here, keyed by URL,
//! until the gallery no longer shows them.

pub mod store;

pub use store::{ImageSlot, ImageStore, StoreStats};
