// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Toasts report transient outcomes (no matches, a blank query, unreadable
//! settings, a missing API key) without blocking the gallery.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - `Manager` queuing and expiring notifications
//! - [`toast`] - rendering
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-no-results").with_arg("query", "cats"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! At most three toasts are visible; others wait in a queue. Info toasts
//! expire after 3s, warnings after 5s.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
