//! Clinic registry REST service.
//!
//! Manages `Medico` (doctor) and `Paciente` (patient) records with a
//! one-to-many doctor-to-patients relationship, exposed as an HTTP/JSON API.
//! The persistence seam is the [`db::EntityStore`] trait; the default backend
//! keeps both entity collections and the doctor-to-patients index behind a
//! single lock so relationship updates are atomic.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use error::{Error, Result};
