//! Explicit route tables mapping (verb, path) to handler functions.

mod medico;
mod paciente;

pub use medico::medico_routes;
pub use paciente::paciente_routes;
