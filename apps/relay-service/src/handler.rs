//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは入力の検証とレスポンス変換のみを行い、送信はユースケースに委譲

pub mod health;
pub mod notification;

pub use health::health_check;
pub use notification::{
    NotificationState,
    SendAqiStatusRequest,
    SendRegistrationRequest,
    send_aqi_status_email,
    send_registration_email,
};
