//! Patient CRUD and the doctor-list query.

use std::sync::Arc;

use crate::db::EntityStore;
use crate::models::Paciente;
use crate::services::ReferentialIntegrityMode;
use crate::{Error, Result};

pub struct PacienteService {
    store: Arc<dyn EntityStore>,
    referential_integrity: ReferentialIntegrityMode,
}

impl PacienteService {
    pub fn new(store: Arc<dyn EntityStore>, referential_integrity: ReferentialIntegrityMode) -> Self {
        Self {
            store,
            referential_integrity,
        }
    }

    /// Store a new patient and index it under its doctor's patient list.
    /// In strict mode the referenced doctor must exist.
    pub async fn create(&self, paciente: Paciente) -> Result<()> {
        self.validate_medico_reference(&paciente).await?;

        let (id, medico_id) = (paciente.id, paciente.medico_id());
        self.store.insert_paciente(paciente).await?;
        tracing::debug!(paciente_id = id, medico_id, "paciente created");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Paciente> {
        self.store
            .get_paciente(id)
            .await?
            .ok_or(Error::PacienteNotFound { id })
    }

    /// All patients currently associated with the doctor id.
    ///
    /// Returns an empty list, never an error, when the doctor has no patients
    /// or does not exist: unlike `get_by_id`, this path does not check the
    /// parent's existence.
    pub async fn list_by_medico_id(&self, medico_id: i64) -> Result<Vec<Paciente>> {
        self.store.list_pacientes_by_medico(medico_id).await
    }

    /// Full replace of the record matching `paciente.id`. If the doctor
    /// reference changed, the patient moves between doctor lists.
    pub async fn update(&self, paciente: Paciente) -> Result<()> {
        self.validate_medico_reference(&paciente).await?;

        let id = paciente.id;
        if !self.store.update_paciente(paciente).await? {
            return Err(Error::PacienteNotFound { id });
        }
        tracing::debug!(paciente_id = id, "paciente updated");
        Ok(())
    }

    /// Remove the patient from both the by-id index and its doctor's patient
    /// list in one step.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        if !self.store.delete_paciente(id).await? {
            return Err(Error::PacienteNotFound { id });
        }
        tracing::debug!(paciente_id = id, "paciente deleted");
        Ok(())
    }

    async fn validate_medico_reference(&self, paciente: &Paciente) -> Result<()> {
        if !self.referential_integrity.is_strict() {
            return Ok(());
        }

        let medico_id = paciente.medico_id();
        if !self.store.medico_exists(medico_id).await? {
            return Err(Error::Conflict(format!(
                "paciente {} references missing medico {medico_id}",
                paciente.id
            )));
        }
        Ok(())
    }
}
