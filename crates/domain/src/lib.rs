//! # Nayaruvi ドメイン層
//!
//! 大気質アラート通知のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **検証済みの値のみを保持**: 必須項目が揃っていない入力はここで弾き、
//!   後段（テンプレート生成・SMTP 送信）は常に完全な値を受け取る
//! - **永続化しない**: すべての値はリクエスト 1 回分の寿命しか持たない
//! - **インフラ非依存**: SMTP や HTTP の詳細は infra / relay-service 側に置く
//!
//! ## 依存関係の方向
//!
//! ```text
//! relay-service → infra → domain
//!        ↘          ↓
//!          shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`air_quality`] - 登録確認・AQI ステータス通知の入力モデル
//! - [`notification`] - メールメッセージと通知種別
//!
//! ## 使用例
//!
//! ```rust
//! use nayaruvi_domain::air_quality::Registration;
//!
//! let registration = Registration::new(
//!     Some("Asha".to_string()),
//!     Some("a@x.com".to_string()),
//!     Some("560001".to_string()),
//! )
//! .unwrap();
//! assert_eq!(registration.pincode(), "560001");
//! ```

pub mod air_quality;
pub mod error;
pub mod notification;

pub use error::DomainError;
