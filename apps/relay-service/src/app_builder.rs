//! # Relay Service アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    routing::{get, post},
};
use nayaruvi_infra::NotificationSender;
use nayaruvi_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{NotificationState, health_check, send_aqi_status_email, send_registration_email},
    usecase::NotificationService,
};

/// ルーターを構築する
///
/// `from_address` は送信するすべてのメールの `From` に使われる。
pub fn build_app(sender: Arc<dyn NotificationSender>, from_address: impl Into<String>) -> Router {
    let notification_state = Arc::new(NotificationState {
        service: NotificationService::new(sender, from_address),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/send-email", post(send_registration_email))
        .route("/send-aqi-status", post(send_aqi_status_email))
        .with_state(notification_state)
        // レイヤー順序（下から上に適用、リクエストは上から下に通過）:
        // 1. CorsLayer（最外）: プリフライトに応答し、全レスポンスに CORS ヘッダーを付与
        // 2. SetRequestIdLayer: UUID v7 を生成（またはクライアント提供値を使用）
        // 3. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 4. CanonicalLogLineLayer: リクエスト完了時に1行サマリログを出力（スパン内）
        // 5. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
