//! # User Notices
//!
//! Maps domain errors to the short messages a dashboard shows in a toast,
//! and logs them on the way. Validation problems are the user's to fix and
//! are shown as warnings; failed calls are shown as errors and can be retried.

use serde::Serialize;
use slotdesk_core::errors::DeskError;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }
}

impl From<&DeskError> for Notice {
    fn from(err: &DeskError) -> Self {
        let level = match err {
            DeskError::Validation(_) | DeskError::LimitExceeded { .. } => NoticeLevel::Warning,
            DeskError::NotFound(_) | DeskError::Api(_) | DeskError::Internal(_) => {
                NoticeLevel::Error
            }
        };

        let message = match err {
            DeskError::Validation(message) => message.clone(),
            DeskError::LimitExceeded { kind, max, .. } => {
                format!("You can attach at most {max} {kind}")
            }
            DeskError::NotFound(what) => format!("{what} could not be found"),
            DeskError::Api(_) | DeskError::Internal(_) => {
                "Something went wrong, please try again".to_string()
            }
        };

        Notice { level, message }
    }
}

/// Logs `err` and returns the notice to show for it.
pub fn report(err: &DeskError) -> Notice {
    let notice = Notice::from(err);
    match notice.level {
        NoticeLevel::Warning => warn!(error = %err, "Rejected user action"),
        _ => error!(error = ?err, "Request failed"),
    }
    notice
}
