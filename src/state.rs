//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::db::{EntityStore, MemoryStore};
use crate::services::{MedicoService, PacienteService, ReferentialIntegrityMode};
use crate::{Error, Result};

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn EntityStore>,
    pub medico_service: Arc<MedicoService>,
    pub paciente_service: Arc<PacienteService>,
}

impl AppState {
    /// Initialize the application state: construct the store once and inject
    /// the handle into each service.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let mode = ReferentialIntegrityMode::parse(&config.registry.referential_integrity_mode)
            .ok_or_else(|| {
                Error::Internal(format!(
                    "invalid referential integrity mode '{}'",
                    config.registry.referential_integrity_mode
                ))
            })?;

        let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::new());
        let medico_service = Arc::new(MedicoService::new(store.clone(), mode));
        let paciente_service = Arc::new(PacienteService::new(store.clone(), mode));

        tracing::info!(referential_integrity = ?mode, "Application state initialized");

        Ok(Self {
            config,
            store,
            medico_service,
            paciente_service,
        })
    }
}
