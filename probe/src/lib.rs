//! Health Probe
//!
//! ローカルで稼働するサービスの `/health` エンドポイントを1回だけ叩き、
//! ステータスコードとJSONボディを検証する。

#![warn(missing_docs)]

/// 共通型定義（設定・エラー）
pub mod common;

/// ヘルスプローブ本体
pub mod health;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

pub use common::config::ProbeConfig;
pub use health::{HealthProbe, ProbeError, ProbeReport};
