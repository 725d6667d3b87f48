//! # Nayaruvi インフラ層
//!
//! 外部システム（SMTP リレー）との通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール送信**: [`notification::NotificationSender`] trait とその実装
//! - **テスト用モック**: `test-utils` feature で [`mock`] を公開
//!
//! ## 依存関係
//!
//! ```text
//! relay-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信（SMTP / Noop）

pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use notification::{
    NoopNotificationSender,
    NotificationSender,
    SmtpCredentials,
    SmtpNotificationSender,
    is_valid_address,
};
