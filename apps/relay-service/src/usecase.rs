//! # ユースケース層
//!
//! Relay Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 送信クライアントを `Arc<dyn NotificationSender>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の検証とレスポンス変換のみを行う
//!
//! ## モジュール構成
//!
//! - `notification`: 通知メールの生成と送信

pub mod notification;

pub use notification::NotificationService;
