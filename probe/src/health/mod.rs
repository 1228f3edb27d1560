//! ヘルスプローブ
//!
//! `/health` に対してGETを1回だけ送信し、ステータス200と
//! `{"status":"ok"}` ボディの完全一致を検証する。リトライはしない。

/// プローブ失敗の分類
pub mod error;

/// プローブ本体
pub mod probe;

pub use error::ProbeError;
pub use probe::{expected_body, HealthProbe, ProbeReport, EXPECTED_STATUS};
