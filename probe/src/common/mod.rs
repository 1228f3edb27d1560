//! 共通型定義
//!
//! プローブ設定と共通エラー型

/// プローブ設定
pub mod config;

/// エラー型
pub mod error;
