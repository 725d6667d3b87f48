//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`NotificationKind`] | 通知種別 | 登録確認 / AQI ステータス通知の 2 種類 |
//! | [`AlertNotification`] | アラート通知 | 種別と検証済み入力の組。テンプレート選択に使う |
//! | [`EmailMessage`] | メールメッセージ | 件名・送信元・宛先・本文。リクエストごとに生成 |
//! | [`NotificationError`] | 通知送信エラー | SMTP 交換のどこで失敗しても 1 種類に集約 |

use strum::IntoStaticStr;
use thiserror::Error;

use crate::air_quality::{AqiStatusReport, Registration};

/// 通知送信エラー
///
/// 接続・TLS・認証・リレー拒否のいずれも区別せずに呼び出し元へ返す。
/// 詳細はメッセージ文字列としてログにのみ出力する。
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}

/// 通知種別
///
/// どのエンドポイントから呼ばれたかを表し、テンプレートと
/// レスポンス文言の選択に使う。ログには snake_case で出力される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    /// アラート登録確認: `POST /send-email`
    Registration,
    /// AQI ステータス通知: `POST /send-aqi-status`
    AqiStatus,
}

/// アラート通知
///
/// 送信する通知の種別と、テンプレートに埋め込む検証済みの値を保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertNotification {
    Registration(Registration),
    AqiStatus(AqiStatusReport),
}

impl AlertNotification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Registration(_) => NotificationKind::Registration,
            Self::AqiStatus(_) => NotificationKind::AqiStatus,
        }
    }

    /// 送信先メールアドレス
    pub fn recipient(&self) -> &str {
        match self {
            Self::Registration(registration) => registration.email(),
            Self::AqiStatus(report) => report.email(),
        }
    }
}

/// メールメッセージ
///
/// テンプレートの出力に送信元を加えたもの。NotificationSender に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信元メールアドレス（SMTP アカウント）
    pub from:    String,
    /// 送信先メールアドレス
    pub to:      String,
    /// 件名
    pub subject: String,
    /// プレーンテキスト本文
    pub body:    String,
}
