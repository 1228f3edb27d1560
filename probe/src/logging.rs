//! ロギング初期化ユーティリティ
//!
//! `tracing-subscriber` の fmt レイヤーを標準エラー出力に設定する。
//! `RUST_LOG` が設定されていればそれを優先し、なければ指定レベルを使う。

use crate::config::get_env;
use tracing_subscriber::EnvFilter;

/// ログ出力形式を切り替える環境変数
pub const ENV_LOG_FORMAT: &str = "HEALTH_PROBE_LOG_FORMAT";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// 人間向けテキスト
    Text,
    /// 1行1JSON
    Json,
}

impl LogFormat {
    /// 文字列から出力形式を判定（未知の値はテキスト）
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }

    /// `HEALTH_PROBE_LOG_FORMAT` から出力形式を取得
    pub fn from_env() -> Self {
        get_env(ENV_LOG_FORMAT)
            .map(|v| Self::parse(&v))
            .unwrap_or(LogFormat::Text)
    }
}

/// `RUST_LOG` があればそれを、なければ `default_level` を使うフィルタを構築
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// グローバルsubscriberを初期化する
///
/// 既に初期化済みの場合はエラーを返す。
pub fn init(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false);

    match LogFormat::from_env() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
}
