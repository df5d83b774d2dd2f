// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: search, pagination, loading, error and preview state.
//!
//! The controller is a plain state machine. [`State::handle`] applies one
//! [`Message`] and returns the [`Effect`]s the transition requires; it never
//! performs I/O itself. The application shell executes effects (HTTP calls,
//! toasts, image downloads) and feeds their outcomes back as messages.
//!
//! ```text
//! SubmitQuery ──► Loading ──PageFetched──► Success | NoResults | Failed
//!                   ▲                                  │
//!                   └──────────── AdvancePage ─────────┘
//! ```
//!
//! Each fetch is tagged with a [`RequestId`]. Outcomes for anything but the
//! latest request are discarded, so a slow response for an earlier query can
//! never overwrite the results of a newer one.

mod effect;
mod state;


pub use effect::{Effect, FetchRequest, Notice};
pub use state::{
    Message, ModalState, Phase, RenderPolicy, RequestId, ResultSet, SearchState, State,
};
