//! # 通知ユースケース
//!
//! アラート通知の本文生成と送信を統合する。
//!
//! ## モジュール構成
//!
//! - [`composer`] - 固定文面へのフィールド埋め込み
//! - [`service`] - 本文生成 + 送信 + ログ出力の統合サービス

pub mod composer;
pub mod service;

pub use composer::{ComposedEmail, compose};
pub use service::NotificationService;
