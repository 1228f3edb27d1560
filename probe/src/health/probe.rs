//! ヘルスプローブ本体
//!
//! connect → receive → ステータス検証 → ボディ検証 の直列処理。
//! ステータスが不一致ならボディは検証しない。

use super::error::ProbeError;
use crate::common::config::ProbeConfig;
use crate::common::error::CommonError;
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

/// 期待するステータスコード
pub const EXPECTED_STATUS: u16 = 200;

/// 期待するレスポンスボディ `{"status":"ok"}`
pub fn expected_body() -> Value {
    json!({ "status": "ok" })
}

/// プローブ成功時の結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    /// プローブしたURL
    pub url: String,
    /// 受信したステータスコード（常に200）
    pub status_code: u16,
    /// リクエスト送信からボディ受信完了までの時間（ミリ秒）
    pub latency_ms: u64,
    /// 受信したボディ
    pub body: Value,
}

/// ヘルスプローブ
///
/// 1回の `check()` で1リクエストのみ送信する。
#[derive(Debug, Clone)]
pub struct HealthProbe {
    config: ProbeConfig,
    url: Url,
    client: Client,
}

impl HealthProbe {
    /// 設定を検証してプローブを作成
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        config.validate()?;
        let url = config.parse_url()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CommonError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            url,
            client,
        })
    }

    /// デフォルト設定（`http://localhost:8000/health`, 5秒）でプローブを作成
    pub fn local_default() -> Result<Self, ProbeError> {
        Self::new(ProbeConfig::default())
    }

    /// プローブ設定
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// 検証済みのプローブ対象URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// ヘルスエンドポイントを1回チェックする
    pub async fn check(&self) -> Result<ProbeReport, ProbeError> {
        let url = self.url.as_str();
        debug!(url = %url, timeout_secs = self.config.timeout_secs, "Sending health probe");

        let result = self.fetch_and_verify(url).await;
        match &result {
            Ok(report) => info!(
                url = %url,
                latency_ms = report.latency_ms,
                "Health probe succeeded"
            ),
            Err(e) => warn!(
                url = %url,
                kind = e.kind(),
                error = %e,
                "Health probe failed"
            ),
        }
        result
    }

    async fn fetch_and_verify(&self, url: &str) -> Result<ProbeReport, ProbeError> {
        let request_error = |source| ProbeError::Request {
            url: url.to_string(),
            source,
        };

        let start = Instant::now();
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status().as_u16();
        if status != EXPECTED_STATUS {
            return Err(ProbeError::UnexpectedStatus {
                url: url.to_string(),
                expected: EXPECTED_STATUS,
                actual: status,
            });
        }

        let text = response.text().await.map_err(request_error)?;
        let latency_ms = start.elapsed().as_millis() as u64;

        let body: Value = serde_json::from_str(&text).map_err(|e| ProbeError::InvalidBody {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        verify_body(url, body).map(|body| ProbeReport {
            url: url.to_string(),
            status_code: status,
            latency_ms,
            body,
        })
    }
}

/// ボディが `{"status":"ok"}` と完全一致するか検証（余分なキーも不一致）
fn verify_body(url: &str, body: Value) -> Result<Value, ProbeError> {
    let expected = expected_body();
    if body == expected {
        Ok(body)
    } else {
        Err(ProbeError::UnexpectedBody {
            url: url.to_string(),
            expected,
            actual: body,
        })
    }
}
