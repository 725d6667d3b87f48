//! # 通知ハンドラ
//!
//! アラート通知メールの送信 API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /send-email` - アラート登録確認メール
//! - `POST /send-aqi-status` - AQI ステータス通知メール
//!
//! ## レスポンス
//!
//! | 状況 | ステータス | ボディ |
//! |------|-----------|--------|
//! | 送信成功 | 200 | `{"success": true, "message": "..."}` |
//! | 必須項目の欠落・ボディ不正 | 400 | `{"success": false, "error": "..."}` |
//! | SMTP 送信失敗 | 500 | `{"success": false, "error": "..."}` |

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nayaruvi_domain::{
    air_quality::{AqiReading, AqiStatusReport, Registration},
    notification::{AlertNotification, NotificationKind},
};
use nayaruvi_shared::RelayResponse;
use serde::Deserialize;

use crate::{error::RelayError, usecase::NotificationService};

/// 通知 API の共有状態
pub struct NotificationState {
    pub service: NotificationService,
}

// --- リクエスト型 ---

/// 登録確認メール送信リクエスト
///
/// 欠落項目をまとめて報告するため、すべて `Option` で受け取る。
#[derive(Debug, Deserialize)]
pub struct SendRegistrationRequest {
    pub name:    Option<String>,
    pub email:   Option<String>,
    pub pincode: Option<String>,
}

/// AQI ステータス通知メール送信リクエスト
#[derive(Debug, Deserialize)]
pub struct SendAqiStatusRequest {
    pub email:    Option<String>,
    pub location: Option<String>,
    pub aqi:      Option<AqiReading>,
    pub status:   Option<String>,
    pub advice:   Option<String>,
}

// --- ハンドラ ---

/// POST /send-email
///
/// アラート登録確認メールを送信する。
#[tracing::instrument(skip_all)]
pub async fn send_registration_email(
    State(state): State<Arc<NotificationState>>,
    payload: Result<Json<SendRegistrationRequest>, JsonRejection>,
) -> Result<Response, RelayError> {
    let kind = NotificationKind::Registration;
    let Json(req) = payload.map_err(|rejection| malformed(kind, rejection))?;

    let registration = Registration::new(req.name, req.email, req.pincode)
        .map_err(|source| RelayError::Validation { kind, source })?;

    state
        .service
        .send(AlertNotification::Registration(registration))
        .await
        .map_err(|source| RelayError::Delivery { kind, source })?;

    Ok((
        StatusCode::OK,
        Json(RelayResponse::success("Registration email sent")),
    )
        .into_response())
}

/// POST /send-aqi-status
///
/// AQI ステータス通知メールを送信する。
#[tracing::instrument(skip_all)]
pub async fn send_aqi_status_email(
    State(state): State<Arc<NotificationState>>,
    payload: Result<Json<SendAqiStatusRequest>, JsonRejection>,
) -> Result<Response, RelayError> {
    let kind = NotificationKind::AqiStatus;
    let Json(req) = payload.map_err(|rejection| malformed(kind, rejection))?;

    let report = AqiStatusReport::new(req.email, req.location, req.aqi, req.status, req.advice)
        .map_err(|source| RelayError::Validation { kind, source })?;

    state
        .service
        .send(AlertNotification::AqiStatus(report))
        .await
        .map_err(|source| RelayError::Delivery { kind, source })?;

    Ok((
        StatusCode::OK,
        Json(RelayResponse::success("AQI email sent successfully")),
    )
        .into_response())
}

fn malformed(kind: NotificationKind, rejection: JsonRejection) -> RelayError {
    RelayError::MalformedBody {
        kind,
        detail: rejection.body_text(),
    }
}
