//! Simulated identity-verification collaborator.
//!
//! The real system would call out to an SMS/email verification provider.
//! Here the round trip is a timer: a request is immediately Pending and
//! unconditionally completes after a fixed delay, flipping the matching
//! verified flag on the session's résumé. The interface still exposes a
//! failure state so a real integration has a contract to implement
//! against; the only failure the simulation can produce is the session
//! disappearing before the round trip completes.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, broadcast};
use tracing::{info, warn};

use crate::domain::events::NotificationEvent;
use crate::wizard::{SessionRegistry, VerificationKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    NotRequested,
    Pending,
    Completed,
    Failed,
}

#[derive(Clone)]
pub struct VerificationService {
    sessions: SessionRegistry,
    event_bus: broadcast::Sender<NotificationEvent>,
    delay: Duration,
    statuses: Arc<RwLock<HashMap<(String, VerificationKind), VerificationStatus>>>,
}

impl VerificationService {
    #[must_use]
    pub fn new(
        sessions: SessionRegistry,
        event_bus: broadcast::Sender<NotificationEvent>,
        delay: Duration,
    ) -> Self {
        Self {
            sessions,
            event_bus,
            delay,
            statuses: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn status(&self, session_id: &str, kind: VerificationKind) -> VerificationStatus {
        self.statuses
            .read()
            .await
            .get(&(session_id.to_string(), kind))
            .copied()
            .unwrap_or_default()
    }

    /// Kick off the simulated round trip. Returns Pending immediately;
    /// the spawned task completes the verification after the delay.
    pub async fn request(&self, session_id: &str, kind: VerificationKind) -> VerificationStatus {
        self.set_status(session_id, kind, VerificationStatus::Pending)
            .await;
        let _ = self.event_bus.send(NotificationEvent::VerificationRequested {
            session_id: session_id.to_string(),
            kind,
        });
        info!("Verification requested: {kind} (session {session_id})");

        let service = self.clone();
        let session_id = session_id.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(service.delay).await;
            service.complete(&session_id, kind).await;
        });

        VerificationStatus::Pending
    }

    async fn complete(&self, session_id: &str, kind: VerificationKind) {
        let flipped = self
            .sessions
            .update(session_id, |session| session.mark_verified(kind))
            .await;

        if flipped.is_some() {
            self.set_status(session_id, kind, VerificationStatus::Completed)
                .await;
            let _ = self.event_bus.send(NotificationEvent::VerificationCompleted {
                session_id: session_id.to_string(),
                kind,
            });
            info!("Verification completed: {kind} (session {session_id})");
        } else {
            // Session was finished or abandoned before the round trip came back.
            self.set_status(session_id, kind, VerificationStatus::Failed)
                .await;
            warn!("Verification target session {session_id} no longer exists");
        }
    }

    async fn set_status(&self, session_id: &str, kind: VerificationKind, status: VerificationStatus) {
        self.statuses
            .write()
            .await
            .insert((session_id.to_string(), kind), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardSession;

    fn service(sessions: SessionRegistry, delay_ms: u64) -> VerificationService {
        let (event_bus, _) = broadcast::channel(16);
        VerificationService::new(sessions, event_bus, Duration::from_millis(delay_ms))
    }

    #[tokio::test]
    async fn request_flips_flag_after_delay() {
        let sessions = SessionRegistry::new();
        let id = sessions.insert(WizardSession::new()).await;
        let service = service(sessions.clone(), 10);

        let status = service.request(&id, VerificationKind::Phone).await;
        assert_eq!(status, VerificationStatus::Pending);
        assert!(!sessions.get(&id).await.unwrap().resume().basic_info.phone_verified);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            service.status(&id, VerificationKind::Phone).await,
            VerificationStatus::Completed
        );
        let resume = sessions.get(&id).await.unwrap().resume().clone();
        assert!(resume.basic_info.phone_verified);
        assert!(!resume.basic_info.email_verified);
    }

    #[tokio::test]
    async fn vanished_session_marks_failure() {
        let sessions = SessionRegistry::new();
        let id = sessions.insert(WizardSession::new()).await;
        let service = service(sessions.clone(), 10);

        service.request(&id, VerificationKind::Email).await;
        sessions.take(&id).await;

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(
            service.status(&id, VerificationKind::Email).await,
            VerificationStatus::Failed
        );
    }

    #[tokio::test]
    async fn unrequested_status_is_not_requested() {
        let service = service(SessionRegistry::new(), 10);
        assert_eq!(
            service.status("nobody", VerificationKind::Phone).await,
            VerificationStatus::NotRequested
        );
    }
}
