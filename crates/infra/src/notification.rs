//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（implicit TLS リレー）、Noop（開発・ログ出力のみ）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択
//! - **再送しない**: 失敗はそのまま呼び出し元へ返す

mod noop;
mod smtp;

use async_trait::async_trait;
use nayaruvi_domain::notification::{EmailMessage, NotificationError};
pub use noop::NoopNotificationSender;
pub use smtp::{SmtpCredentials, SmtpNotificationSender, is_valid_address};

/// メール送信トレイト
///
/// 1 回の呼び出しで 1 通を送信する。接続の確立から切断までを呼び出しの中で完結させる。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
