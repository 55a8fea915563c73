//! Business logic layer.
//!
//! Services coordinate the entity store, enforce the doctor-patient
//! relationship rules, and map absence and conflicts onto the error taxonomy.

pub mod medico;
pub mod paciente;

pub use medico::MedicoService;
pub use paciente::PacienteService;

/// How strongly the doctor-to-patient relationship is enforced on writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialIntegrityMode {
    /// Dangling references are allowed: patients may point at a missing
    /// doctor, and doctors can be deleted while still referenced.
    Lenient,
    /// Patient writes must reference an existing doctor, and a doctor with
    /// patients cannot be deleted.
    Strict,
}

impl ReferentialIntegrityMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lenient" => Some(Self::Lenient),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}
