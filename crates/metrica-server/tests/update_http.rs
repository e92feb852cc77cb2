//! HTTP boundary tests (router driven in-process) and server lifecycle tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tokio::sync::oneshot;
use tokio::time::Duration;
use tower::ServiceExt;

use metrica_core::error::{MetricaError, Result};
use metrica_core::model::{Metric, MetricId, MetricKind};
use metrica_server::app_state::AppState;
use metrica_server::config::ServerConfig;
use metrica_server::handlers::MetricUpdater;
use metrica_server::storage::{KeyValueStore, MemoryStore};
use metrica_server::{router, server};

fn app_with_store() -> (Arc<MemoryStore<MetricId, Metric>>, Router) {
    let mem: Arc<MemoryStore<MetricId, Metric>> = Arc::new(MemoryStore::new());
    let state = AppState::with_store(ServerConfig::default(), mem.clone());
    (mem, router::build_router(state))
}

async fn post(app: &Router, uri: &str) -> StatusCode {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap().status()
}

struct BrokenUpdater;

#[async_trait]
impl MetricUpdater for BrokenUpdater {
    async fn update(&self, _metrics: Vec<Option<Metric>>) -> Result<Vec<Metric>> {
        Err(MetricaError::Storage("deadline exceeded".into()))
    }
}

#[tokio::test]
async fn status_contract() {
    let (_mem, app) = app_with_store();
    let cases = [
        ("/update/counter/requests/42", StatusCode::OK),
        ("/update/gauge/temp/99.9", StatusCode::OK),
        ("/update/gauge/temp", StatusCode::BAD_REQUEST),
        ("/update/gauge/temp/", StatusCode::BAD_REQUEST),
        ("/update/counter/requests/", StatusCode::BAD_REQUEST),
        ("/update/bogus/x/1", StatusCode::BAD_REQUEST),
        ("/update/invalid_type/temp", StatusCode::BAD_REQUEST),
        ("/update/counter/requests/not_a_number", StatusCode::BAD_REQUEST),
        ("/update/counter/requests/1.5", StatusCode::BAD_REQUEST),
        ("/update/gauge/temp/invalidfloat", StatusCode::BAD_REQUEST),
        ("/update/counter//1", StatusCode::NOT_FOUND),
        ("/update/gauge", StatusCode::NOT_FOUND),
        ("/somewhere/else", StatusCode::NOT_FOUND),
    ];
    for (uri, want) in cases {
        assert_eq!(post(&app, uri).await, want, "POST {uri}");
    }
}

#[tokio::test]
async fn responses_are_plain_text() {
    let (_mem, app) = app_with_store();
    for uri in ["/update/counter/requests/42", "/update/bogus/x/1"] {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "text/plain", "{uri}");
    }
}

#[tokio::test]
async fn counters_accumulate_over_http() {
    let (mem, app) = app_with_store();
    assert_eq!(post(&app, "/update/counter/requests/40").await, StatusCode::OK);
    assert_eq!(post(&app, "/update/counter/requests/2").await, StatusCode::OK);
    assert_eq!(post(&app, "/update/gauge/requests/0.5").await, StatusCode::OK);

    assert_eq!(
        mem.get(&MetricId::new("requests", MetricKind::Counter)),
        Some(Metric::counter("requests", 42))
    );
    assert_eq!(
        mem.get(&MetricId::new("requests", MetricKind::Gauge)),
        Some(Metric::gauge("requests", 0.5))
    );
}

#[tokio::test]
async fn rejected_updates_never_reach_the_store() {
    let (mem, app) = app_with_store();
    post(&app, "/update/gauge/temp").await;
    post(&app, "/update/gauge/temp/").await;
    post(&app, "/update/bogus/x/1").await;
    post(&app, "/update/counter/c/nope").await;
    assert!(mem.is_empty());
}

#[tokio::test]
async fn updater_failure_is_internal_error() {
    let state = AppState::with_updater(ServerConfig::default(), Arc::new(BrokenUpdater));
    let app = router::build_router(state);
    assert_eq!(
        post(&app, "/update/counter/myMetric/123").await,
        StatusCode::INTERNAL_SERVER_ERROR
    );
    // validation still happens before the updater is consulted
    assert_eq!(post(&app, "/update/counter/myMetric/x").await, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn serve_returns_ok_after_shutdown() {
    let (_mem, app) = app_with_store();
    let listener = server::bind("127.0.0.1:0").await.unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(
        listener,
        app,
        async move {
            let _ = rx.await;
        },
        Duration::from_millis(500),
    ));

    tokio::time::sleep(Duration::from_millis(50)).await;
    tx.send(()).unwrap();

    let res = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("server must stop")
        .unwrap();
    assert!(res.is_ok());
}

#[tokio::test]
async fn bind_invalid_address_fails() {
    let err = server::bind("invalid_addr").await.expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[tokio::test]
async fn counter_overflow_wraps_over_http() {
    let (mem, app) = app_with_store();
    let max = format!("/update/counter/c/{}", i64::MAX);
    assert_eq!(post(&app, &max).await, StatusCode::OK);
    assert_eq!(post(&app, "/update/counter/c/1").await, StatusCode::OK);
    assert_eq!(
        mem.get(&MetricId::new("c", MetricKind::Counter)),
        Some(Metric::counter("c", i64::MIN))
    );
}
