//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! SMTP リレーへの疎通は確認しない。プロセスが応答できることだけを返す。

use axum::Json;
use nayaruvi_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
