//! # Nayaruvi 共有ユーティリティ
//!
//! 複数クレートで使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は relay-service の責務）
//! - トレーシング関連は `observability` feature で有効化する

pub mod api_response;
pub mod health;
pub mod observability;

#[cfg(feature = "observability")]
pub mod canonical_log;

pub use api_response::RelayResponse;
pub use health::HealthResponse;
