//! Request handlers: extraction, service calls, and status-code mapping.

pub mod medico;
pub mod paciente;
