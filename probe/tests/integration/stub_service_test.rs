//! Integration Test: axumで立てたスタブサービスに対するプローブ

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{http::StatusCode, routing::get, Json, Router};
use health_probe::{HealthProbe, ProbeConfig, ProbeError};
use serde_json::{json, Value};

use crate::support::http::spawn_stub;

#[tokio::test]
async fn test_probe_against_running_service() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/health",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({"status": "ok"}))
            }
        }),
    );
    let server = spawn_stub(app).await;

    let probe = HealthProbe::new(ProbeConfig::new(server.health_url())).unwrap();
    let report = probe.check().await.unwrap();

    assert_eq!(report.status_code, 200);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    server.stop().await;
}

#[tokio::test]
async fn test_probe_reports_service_unavailable() {
    let app = Router::new().route(
        "/health",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "ok"})),
            )
        }),
    );
    let server = spawn_stub(app).await;

    let probe = HealthProbe::new(ProbeConfig::new(server.health_url())).unwrap();
    let err = probe.check().await.unwrap_err();

    assert!(matches!(
        err,
        ProbeError::UnexpectedStatus { actual: 503, .. }
    ));

    server.stop().await;
}

#[tokio::test]
async fn test_probe_fails_after_service_stops() {
    let app = Router::new().route("/health", get(|| async { Json(json!({"status": "ok"})) }));
    let server = spawn_stub(app).await;
    let url = server.health_url();

    let probe = HealthProbe::new(ProbeConfig::new(url.clone())).unwrap();
    assert!(probe.check().await.is_ok());
    drop(probe);

    server.stop().await;

    // 新しいプローブ（新しい接続プール）で再チェック
    let probe = HealthProbe::new(ProbeConfig::new(url)).unwrap();
    let err = probe.check().await.unwrap_err();
    assert!(err.is_connection_failure());
}

#[tokio::test]
async fn test_probe_rejects_nested_status() {
    let app = Router::new().route(
        "/health",
        get(|| async { Json::<Value>(json!({"status": {"value": "ok"}})) }),
    );
    let server = spawn_stub(app).await;

    let probe = HealthProbe::new(ProbeConfig::new(server.health_url())).unwrap();
    let err = probe.check().await.unwrap_err();
    assert!(matches!(err, ProbeError::UnexpectedBody { .. }));

    server.stop().await;
}
