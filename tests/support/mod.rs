//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use clinica::api::create_router;
use clinica::config::Config;
use clinica::models::{Medico, Paciente};
use clinica::state::AppState;

/// A fully wired application with a fresh in-memory store, driven through
/// the router without a TCP listener.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let state = AppState::new(config)?;
        let router = create_router(state.clone());
        Ok(Self { state, router })
    }

    /// Send one request through the router and collect the response.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Vec<u8>)> {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bytes))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, headers, bytes.to_vec()))
    }
}

type TestBody = Pin<Box<dyn Future<Output = anyhow::Result<()>>>>;

/// Run a test body against a freshly wired app with default configuration.
pub async fn with_test_app<F>(f: F) -> anyhow::Result<()>
where
    F: FnOnce(TestApp) -> TestBody,
{
    with_test_app_with_config(|_| {}, f).await
}

/// Like [`with_test_app`], tweaking the configuration first.
pub async fn with_test_app_with_config<C, F>(configure: C, f: F) -> anyhow::Result<()>
where
    C: FnOnce(&mut Config),
    F: FnOnce(TestApp) -> TestBody,
{
    let mut config = Config::default();
    configure(&mut config);
    let app = TestApp::new(config)?;
    f(app).await
}

pub fn to_json_body<T: serde::Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "unexpected status for {context}");
}

pub fn assert_json_content_type(headers: &HeaderMap, context: &str) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "expected JSON content type for {context}, got '{content_type}'"
    );
}

pub fn sample_medico() -> Medico {
    Medico {
        id: 1,
        nombre: "Medico".to_string(),
        dni: "122".to_string(),
        especialidad: "Cardiologia".to_string(),
    }
}

pub fn sample_paciente(medico: &Medico) -> Paciente {
    Paciente {
        id: 1,
        nombre: "Paciente".to_string(),
        dni: "123".to_string(),
        edad: 96,
        medico: medico.clone(),
    }
}

/// POST a doctor and assert it was accepted.
pub async fn seed_medico(app: &TestApp, medico: &Medico) -> anyhow::Result<()> {
    let (status, _headers, _body) = app
        .request(Method::POST, "/medico", Some(to_json_body(medico)?))
        .await?;
    assert_status(status, StatusCode::CREATED, "seed medico");
    Ok(())
}
