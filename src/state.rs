use std::sync::Arc;
use tokio::sync::broadcast;

use crate::config::Config;
use crate::domain::events::NotificationEvent;
use crate::services::VerificationService;
use crate::store::{CodeRepository, JsonStore, ResumeRepository};
use crate::wizard::SessionRegistry;

/// Everything the API handlers and CLI commands share: repositories
/// over the data directory, the wizard session registry, the simulated
/// verification collaborator and the notification event bus.
#[derive(Clone)]
pub struct SharedState {
    pub config: Config,

    pub resumes: ResumeRepository,

    pub codes: CodeRepository,

    pub sessions: SessionRegistry,

    pub verification: Arc<VerificationService>,

    pub event_bus: broadcast::Sender<NotificationEvent>,
}

impl SharedState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (event_bus, _) = broadcast::channel(config.general.event_bus_buffer_size);
        Self::with_event_bus(config, event_bus)
    }

    pub fn with_event_bus(
        config: Config,
        event_bus: broadcast::Sender<NotificationEvent>,
    ) -> anyhow::Result<Self> {
        let store = JsonStore::new(&config.general.data_dir);
        store.initialize()?;

        let resumes = ResumeRepository::new(store.clone());
        let codes = CodeRepository::new(store)?;
        let sessions = SessionRegistry::new();

        let verification = Arc::new(VerificationService::new(
            sessions.clone(),
            event_bus.clone(),
            std::time::Duration::from_secs(config.verification.delay_seconds),
        ));

        Ok(Self {
            config,
            resumes,
            codes,
            sessions,
            verification,
            event_bus,
        })
    }
}
