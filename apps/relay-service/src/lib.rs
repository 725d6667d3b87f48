//! # Nayaruvi Relay Service
//!
//! 大気質アラートのメール通知を中継する HTTP サービス。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---------|------|------|
//! | `GET` | `/health` | ヘルスチェック |
//! | `POST` | `/send-email` | アラート登録確認メール |
//! | `POST` | `/send-aqi-status` | AQI ステータス通知メール |
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State とルーターの構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP ハンドラ
//! - [`shutdown`] - グレースフルシャットダウン
//! - [`usecase`] - メール文面の生成と送信

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod shutdown;
pub mod usecase;
