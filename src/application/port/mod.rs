// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, ensuring the gallery controller and the
//! UI remain independent of the HTTP client that backs them.
//!
//! # Available Ports
//!
//! - [`search`]: Paginated image search and image byte download
//!
//! # Design Notes
//!
//! - All traits are `Send + Sync` so they can be shared behind an `Arc`
//! - No `async fn` in traits: methods return boxed `'static` futures that
//!   callers hand directly to Iced's `Task::perform`
//! - Errors are `Clone` so they can travel inside Iced messages

pub mod search;

pub use search::{FetchFuture, ImageSearch, ImageSource, SearchError, SearchFuture, Unavailable};
