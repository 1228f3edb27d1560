//! Live Test: ローカルで稼働中のサービスの `/health` を確認
//!
//! `http://localhost:8000` でサービスが起動している必要があるため、
//! `cargo test -- --ignored` で明示的に実行する。

use health_probe::HealthProbe;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a service listening on http://localhost:8000"]
async fn test_health() {
    let probe = HealthProbe::local_default().unwrap();

    let report = probe.check().await.unwrap();

    assert_eq!(report.status_code, 200);
    assert_eq!(report.body, json!({"status": "ok"}));
}
