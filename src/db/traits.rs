//! Persistence seam for the registry.

use async_trait::async_trait;

use crate::models::{Medico, Paciente};
use crate::Result;

/// Storage backend for doctors, patients, and their relationship.
///
/// Reads return `Ok(None)` for missing records; services decide how absence
/// surfaces. Writes that touch more than one index (patient deletion, doctor
/// reassignment, dni changes) must be atomic with respect to concurrent
/// readers. Uniqueness of ids and of the doctor dni is enforced here, inside
/// the same critical section as the insert.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn insert_medico(&self, medico: Medico) -> Result<()>;
    async fn get_medico(&self, id: i64) -> Result<Option<Medico>>;
    async fn get_medico_by_dni(&self, dni: &str) -> Result<Option<Medico>>;
    /// Full replace of the record matching `medico.id`. Returns `false` if
    /// no such record exists.
    async fn update_medico(&self, medico: Medico) -> Result<bool>;
    /// Returns `false` if no such record exists. Never touches patients.
    async fn delete_medico(&self, id: i64) -> Result<bool>;
    async fn medico_exists(&self, id: i64) -> Result<bool>;

    async fn insert_paciente(&self, paciente: Paciente) -> Result<()>;
    async fn get_paciente(&self, id: i64) -> Result<Option<Paciente>>;
    /// All patients currently associated with the doctor id. Empty when the
    /// doctor has no patients or does not exist.
    async fn list_pacientes_by_medico(&self, medico_id: i64) -> Result<Vec<Paciente>>;
    /// Full replace of the record matching `paciente.id`, moving it between
    /// doctor sets when `medico.id` changed. Returns `false` if absent.
    async fn update_paciente(&self, paciente: Paciente) -> Result<bool>;
    /// Removes the record from the by-id map and its doctor's patient set in
    /// one step. Returns `false` if absent.
    async fn delete_paciente(&self, id: i64) -> Result<bool>;
    /// Number of patients currently associated with the doctor id.
    async fn paciente_count_for_medico(&self, medico_id: i64) -> Result<usize>;
}
