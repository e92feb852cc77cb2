//! `POST /update/:kind/:name[/:value]`
//!
//! Responsibilities:
//! - Build a domain metric from the raw path segments
//! - Hand a single-element batch to the updater
//! - Map the outcome to a bare status (text/plain, empty body)

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use metrica_core::error::{ClientCode, MetricaError};
use metrica_core::model::Metric;

use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePath {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

fn plain(status: StatusCode) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")]).into_response()
}

fn status_for(err: &MetricaError) -> StatusCode {
    match err.client_code() {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::UnsupportedVersion | ClientCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub async fn update_metric(State(app): State<AppState>, Path(p): Path<UpdatePath>) -> Response {
    let metric = match Metric::from_path_parts(&p.kind, &p.name, p.value.as_deref()) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(kind = %p.kind, name = %p.name, error = %e, "rejected metric update");
            return plain(status_for(&e));
        }
    };

    // Any updater failure is a server-side fault, whatever its code.
    match app.updater().update(vec![Some(metric)]).await {
        Ok(_) => plain(StatusCode::OK),
        Err(e) => {
            tracing::error!(kind = %p.kind, name = %p.name, error = %e, "metric update failed");
            plain(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Router fallback: unknown paths, including an empty metric name segment.
pub async fn not_found() -> Response {
    plain(StatusCode::NOT_FOUND)
}
