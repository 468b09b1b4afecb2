// Application-wide UI state shared through the Dioxus context.
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

/// Feedback line shown under the toolbar after an operator action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Signals every component can reach via `use_context::<AppState>()`.
///
/// `revision` is bumped after each write so views that read it re-query the store.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub revision: Signal<u64>,
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    pub fn new(revision: Signal<u64>, notice: Signal<Option<Notice>>) -> Self {
        Self { revision, notice }
    }

    /// Reading this inside a resource subscribes it to store changes.
    pub fn current_revision(&self) -> u64 {
        *self.revision.read()
    }

    pub fn refresh(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }

    pub fn success(&self, message: impl Into<String>) {
        let mut notice = self.notice;
        notice.set(Some(Notice::Success(message.into())));
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(message = %message, "Showing error to operator");
        let mut notice = self.notice;
        notice.set(Some(Notice::Error(message)));
    }

    pub fn clear_notice(&self) {
        let mut notice = self.notice;
        notice.set(None);
    }
}
