//! # 通知サービス
//!
//! 本文生成 → メール送信 → ログ出力を統合するサービス。
//!
//! ## 設計方針
//!
//! - **1 リクエスト 1 送信**: リトライ・キューイング・重複排除は行わない
//! - **送信元は SMTP アカウント**: `From` は起動時に読み込んだ `EMAIL_USER`
//! - **依存性注入**: `NotificationSender` は trait で抽象化

use std::sync::Arc;

use nayaruvi_domain::notification::{AlertNotification, EmailMessage, NotificationError};
use nayaruvi_infra::NotificationSender;

use super::compose;

/// 通知サービス
pub struct NotificationService {
    sender:       Arc<dyn NotificationSender>,
    from_address: String,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn NotificationSender>, from_address: impl Into<String>) -> Self {
        Self {
            sender,
            from_address: from_address.into(),
        }
    }

    /// 通知メールを 1 通送信する
    ///
    /// # エラー
    ///
    /// 送信に失敗した場合は `NotificationError` をそのまま返す。
    /// 失敗理由はここでログに出力済みなので、呼び出し元は応答の生成だけを行えばよい。
    pub async fn send(&self, notification: AlertNotification) -> Result<(), NotificationError> {
        let kind: &str = notification.kind().into();
        let composed = compose(&notification);

        let email = EmailMessage {
            from:    self.from_address.clone(),
            to:      notification.recipient().to_string(),
            subject: composed.subject,
            body:    composed.body,
        };

        match self.sender.send_email(&email).await {
            Ok(()) => {
                tracing::info!(
                    notification.kind = kind,
                    notification.recipient = %email.to,
                    "通知メール送信成功"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    notification.kind = kind,
                    notification.recipient = %email.to,
                    error = %e,
                    "通知メール送信失敗"
                );
                Err(e)
            }
        }
    }
}
