//! Domain events for the application.
//!
//! Sent via the event bus to notify connected clients of state changes
//! so a UI can surface them as toast notifications.

use serde::Serialize;

use crate::wizard::VerificationKind;

/// Events sent to connected clients via SSE (Server-Sent Events).
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum NotificationEvent {
    ResumeSaved {
        id: String,
        title: String,
        updated: bool,
    },
    ResumeDeleted {
        id: String,
    },

    VerificationRequested {
        session_id: String,
        kind: VerificationKind,
    },
    VerificationCompleted {
        session_id: String,
        kind: VerificationKind,
    },

    CodesReseeded {
        count: usize,
    },

    Error {
        message: String,
    },
    Info {
        message: String,
    },
}
