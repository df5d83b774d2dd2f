// SPDX-License-Identifier: MPL-2.0
//! Image search domain types.
//!
//! Search results are opaque records from an external provider; the gallery
//! only interprets their two URLs. The newtypes here carry the invariants the
//! controller relies on (non-empty queries, pages starting at 1).

pub mod newtypes;
pub mod types;

pub use newtypes::{PageNumber, SearchQuery};
pub use types::{ImageId, ImageRecord, SearchPage};
