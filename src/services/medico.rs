//! Doctor CRUD.

use std::sync::Arc;

use crate::db::EntityStore;
use crate::models::Medico;
use crate::services::ReferentialIntegrityMode;
use crate::{Error, Result};

pub struct MedicoService {
    store: Arc<dyn EntityStore>,
    referential_integrity: ReferentialIntegrityMode,
}

impl MedicoService {
    pub fn new(store: Arc<dyn EntityStore>, referential_integrity: ReferentialIntegrityMode) -> Self {
        Self {
            store,
            referential_integrity,
        }
    }

    /// Store a new doctor, queryable by id and by dni afterwards.
    pub async fn create(&self, medico: Medico) -> Result<()> {
        let id = medico.id;
        self.store.insert_medico(medico).await?;
        tracing::debug!(medico_id = id, "medico created");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Medico> {
        self.store
            .get_medico(id)
            .await?
            .ok_or(Error::MedicoNotFound { id })
    }

    pub async fn get_by_dni(&self, dni: &str) -> Result<Medico> {
        self.store
            .get_medico_by_dni(dni)
            .await?
            .ok_or_else(|| Error::MedicoDniNotFound {
                dni: dni.to_string(),
            })
    }

    /// Full replace of the record matching `medico.id`. No partial merge.
    pub async fn update(&self, medico: Medico) -> Result<()> {
        let id = medico.id;
        if !self.store.update_medico(medico).await? {
            return Err(Error::MedicoNotFound { id });
        }
        tracing::debug!(medico_id = id, "medico updated");
        Ok(())
    }

    /// Remove the doctor. In strict mode a doctor who still has patients
    /// cannot be deleted.
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        if self.referential_integrity.is_strict() {
            let patients = self.store.paciente_count_for_medico(id).await?;
            if patients > 0 {
                return Err(Error::Conflict(format!(
                    "cannot delete medico {id}: {patients} paciente(s) still reference it"
                )));
            }
        }

        if !self.store.delete_medico(id).await? {
            return Err(Error::MedicoNotFound { id });
        }
        tracing::debug!(medico_id = id, "medico deleted");
        Ok(())
    }
}
