//! # Relay Service エラー定義
//!
//! 通知エンドポイントで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスの `error` にはエンドポイントごとの固定文言のみを入れる。
//! 欠落項目や SMTP の失敗理由はログにだけ出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nayaruvi_domain::{
    DomainError,
    notification::{NotificationError, NotificationKind},
};
use nayaruvi_shared::RelayResponse;
use thiserror::Error;

/// Relay Service で発生するエラー
#[derive(Debug, Error)]
pub enum RelayError {
    /// リクエストボディが JSON として解釈できない
    #[error("リクエストボディが不正です: {detail}")]
    MalformedBody {
        kind:   NotificationKind,
        detail: String,
    },

    /// 必須項目の欠落
    #[error("入力検証エラー: {source}")]
    Validation {
        kind:   NotificationKind,
        source: DomainError,
    },

    /// SMTP 送信の失敗
    #[error("メール送信エラー: {source}")]
    Delivery {
        kind:   NotificationKind,
        source: NotificationError,
    },
}

/// 入力不備のときに返す文言
pub fn validation_message(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Registration => "Missing fields",
        NotificationKind::AqiStatus => "Missing AQI data",
    }
}

/// 送信失敗のときに返す文言
pub fn delivery_failure_message(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Registration => "Email sending failed",
        NotificationKind::AqiStatus => "AQI email sending failed",
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::MalformedBody { kind, detail } => {
                tracing::warn!(
                    notification.kind = %kind,
                    error = %detail,
                    "リクエストボディを解釈できません"
                );
                (StatusCode::BAD_REQUEST, validation_message(*kind))
            }
            RelayError::Validation { kind, source } => {
                tracing::warn!(
                    notification.kind = %kind,
                    error = %source,
                    "必須項目が不足しています"
                );
                (StatusCode::BAD_REQUEST, validation_message(*kind))
            }
            // 失敗理由は NotificationService が宛先付きで出力済み
            RelayError::Delivery { kind, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                delivery_failure_message(*kind),
            ),
        };

        (status, Json(RelayResponse::failure(message))).into_response()
    }
}
