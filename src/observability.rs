// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter comes from `ICED_GALLERY_LOG` when set, otherwise from the
//! `[general] log_level` setting, otherwise `info`. Output goes to stderr.

use crate::config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const ENV_LOG: &str = "ICED_GALLERY_LOG";

/// Installs the global subscriber.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init(config_level: Option<&str>) {
    let directive = resolve_directive(std::env::var(ENV_LOG).ok(), config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    if subscriber.try_init().is_ok() {
        tracing::debug!(%directive, "tracing initialized");
    }
}

/// Picks the filter directive: environment, then config, then the default.
fn resolve_directive(env_level: Option<String>, config_level: Option<&str>) -> String {
    env_level
        .filter(|level| !level.trim().is_empty())
        .or_else(|| {
            config_level
                .map(str::trim)
                .filter(|level| !level.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
