// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Search**: Page size bounds for the search provider
//! - **Display**: Grid thumbnail size bounds

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Default number of results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Smallest page size accepted by Pixabay.
pub const MIN_PER_PAGE: u32 = 3;

/// Largest page size accepted by Pixabay.
pub const MAX_PER_PAGE: u32 = 200;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default edge length of a grid thumbnail (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 240.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 120.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 480.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Tracing filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PER_PAGE > 0);
    assert!(MAX_PER_PAGE >= MIN_PER_PAGE);
    assert!(DEFAULT_PER_PAGE >= MIN_PER_PAGE);
    assert!(DEFAULT_PER_PAGE <= MAX_PER_PAGE);

    assert!(MIN_THUMBNAIL_SIZE > 0.0);
    assert!(MAX_THUMBNAIL_SIZE > MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
};
