//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 接続は implicit TLS（接続直後から TLS、既定ポート 465）で確立し、
//! パスワード認証を行う。
//!
//! ## 接続のライフサイクル
//!
//! lettre の `pool` feature は有効にしていないため、`send` のたびに
//! 接続 → TLS ハンドシェイク → 認証 → 送信 → 切断 を行う。
//! 接続は `send` の中でスコープを抜けた時点で必ず破棄されるので、
//! 認証や送信で失敗してもソケットは残らない。
//!
//! ## タイムアウト
//!
//! lettre のタイムアウトは接続・読み取り・書き込みの各操作に個別にかかる。
//! 応答を少しずつ返すリレーでも 1 通の送信が際限なく延びないよう、
//! 送信全体にも同じ長さの上限を `tokio::time::timeout` でかける。

use std::{fmt, time::Duration};

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use nayaruvi_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// SMTP 認証情報
///
/// 起動時に一度だけ読み込み、送信インスタンスの生成時に渡す。
#[derive(Clone)]
pub struct SmtpCredentials {
    /// SMTP アカウント（送信元アドレスを兼ねる）
    pub username: String,
    /// アプリケーションパスワード
    pub password: String,
}

impl SmtpCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// パスワードをログに出さない
impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// メールアドレスとして解釈できるかどうか
///
/// 送信時と同じ規則（lettre の `Mailbox`）で判定する。
pub fn is_valid_address(address: &str) -> bool {
    address.parse::<Mailbox>().is_ok()
}

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    timeout:   Duration,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP リレーのホスト名（例: "smtp.gmail.com"）
    /// - `port`: implicit TLS のポート番号（例: 465）
    /// - `credentials`: 認証情報
    /// - `timeout`: 各ネットワーク操作、および 1 通の送信全体の上限
    ///
    /// # エラー
    ///
    /// TLS パラメータの構築に失敗した場合は `NotificationError::SendFailed` を返す。
    pub fn new(
        host: &str,
        port: u16,
        credentials: SmtpCredentials,
        timeout: Duration,
    ) -> Result<Self, NotificationError> {
        // relay: implicit TLS（Tls::Wrapper）で接続する
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| NotificationError::SendFailed(format!("TLS 設定の構築に失敗: {e}")))?
            .port(port)
            .credentials(Credentials::new(credentials.username, credentials.password))
            .timeout(Some(timeout))
            .build();

        Ok(Self { transport, timeout })
    }

    /// `EmailMessage` から lettre のメッセージを構築する
    ///
    /// ヘッダーは型付きビルダー経由で設定するため、本文に含まれる改行や
    /// ヘッダー風の文字列はヘッダーとして解釈されない。
    fn build_message(email: &EmailMessage) -> Result<Message, NotificationError> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = Self::build_message(email)?;

        match tokio::time::timeout(self.timeout, self.transport.send(message)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(NotificationError::SendFailed(format!("SMTP 送信失敗: {e}"))),
            Err(_) => Err(NotificationError::SendFailed(format!(
                "SMTP 送信が {} 秒以内に完了しませんでした",
                self.timeout.as_secs_f64()
            ))),
        }
    }
}
