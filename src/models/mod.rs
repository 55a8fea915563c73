//! Wire types for the registry.
//!
//! Field names are the public JSON contract. `Paciente.medico` carries the
//! doctor object as supplied by the client; the store keys the relationship
//! by `medico.id` alone through an explicit secondary index.

use serde::{Deserialize, Serialize};

/// Doctor record. `dni` is an alternate, unique lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medico {
    pub id: i64,
    pub nombre: String,
    pub dni: String,
    pub especialidad: String,
}

/// Patient record, always associated with exactly one doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paciente {
    pub id: i64,
    pub nombre: String,
    pub dni: String,
    pub edad: u32,
    pub medico: Medico,
}

impl Paciente {
    /// Id of the doctor this patient is associated with.
    pub fn medico_id(&self) -> i64 {
        self.medico.id
    }
}
