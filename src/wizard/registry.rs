//! In-memory registry of active wizard sessions.
//!
//! Each session is owned exclusively by one authoring flow; the registry
//! only hands out clones or applies closures under the lock.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::WizardSession;

#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, WizardSession>>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session and return its id.
    pub async fn insert(&self, session: WizardSession) -> String {
        let id = session.id().to_string();
        self.sessions.write().await.insert(id.clone(), session);
        id
    }

    pub async fn get(&self, id: &str) -> Option<WizardSession> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Apply a mutation to a session under the lock. Returns `None` when
    /// the session does not exist.
    pub async fn update<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut WizardSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(id).map(f)
    }

    /// Remove and return a session, ending the authoring flow.
    pub async fn take(&self, id: &str) -> Option<WizardSession> {
        self.sessions.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
