// SPDX-License-Identifier: MPL-2.0
//! Notification data: id, severity, i18n key and arguments.

use crate::gallery::Notice;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// How prominent a toast is and how long it stays.
///
/// Request failures are not toasts; they use the persistent error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Outcome of the user's own input, such as a blank query (3s).
    Info,
    /// Something the user should act on, such as no matches or a missing key (5s).
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn auto_dismiss_duration(self) -> Duration {
        match self {
            Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }

    /// Single-character marker drawn in front of the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Warning => "!",
        }
    }
}

/// A toast waiting to be shown or on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Resolved through i18n at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    /// Overrides the severity's duration.
    lifetime: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            lifetime: None,
        }
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns whether the toast has outlived its display time.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        let lifetime = self
            .lifetime
            .unwrap_or_else(|| self.severity.auto_dismiss_duration());
        self.created_at.elapsed() >= lifetime
    }
}

impl From<&Notice> for Notification {
    fn from(notice: &Notice) -> Self {
        let severity = match notice {
            Notice::NoResults { .. } => Severity::Warning,
            Notice::EmptyQuery => Severity::Info,
        };
        notice
            .args()
            .into_iter()
            .fold(Self::new(severity, notice.i18n_key()), |n, (key, value)| {
                n.with_arg(key, value)
            })
    }
}
