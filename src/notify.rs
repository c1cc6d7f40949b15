//! User-facing notification data.
//!
//! The core only decides what a banner says and how it is styled; painting
//! it and running the dismiss timer belongs to the renderer.

use std::time::Duration;

/// How long the renderer keeps a notification on screen before hiding it.
pub const AUTO_DISMISS: Duration = Duration::from_secs(3);

/// Visual style of a notification banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient banner message.
#[derive(Clone, Debug)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    /// Creates a new instance of [`Notification`] with success styling.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Creates a new instance of [`Notification`] with error styling.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
