//! 設定管理
//!
//! ProbeConfig 設定構造体

use super::error::CommonError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// プローブ対象のデフォルトURL
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:8000/health";

/// リクエストタイムアウトのデフォルト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// ヘルスプローブ設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// ヘルスエンドポイントURL (デフォルト: "http://localhost:8000/health")
    #[serde(default = "default_url")]
    pub url: String,

    /// リクエストタイムアウト（秒）(デフォルト: 5)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_HEALTH_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProbeConfig {
    /// 指定URLを対象とする設定を作成（タイムアウトはデフォルト、前後の空白は除去）
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into().trim().to_string(),
            ..Self::default()
        }
    }

    /// タイムアウトを設定
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// タイムアウトを`Duration`で返す
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URLを解析する
    ///
    /// スキームは `http` または `https`、ホストが必須。
    pub fn parse_url(&self) -> Result<Url, CommonError> {
        let url = Url::parse(&self.url)
            .map_err(|e| CommonError::Validation(format!("invalid url '{}': {}", self.url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CommonError::Validation(format!(
                "url must use http:// or https://: {}",
                self.url
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(CommonError::Validation(format!(
                "url has no host: {}",
                self.url
            )));
        }

        Ok(url)
    }

    /// 設定値を検証する
    ///
    /// URLは [`ProbeConfig::parse_url`] で解析できること。
    /// タイムアウトは0より大きいこと。
    pub fn validate(&self) -> Result<(), CommonError> {
        self.parse_url()?;

        if self.timeout_secs == 0 {
            return Err(CommonError::Validation(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
