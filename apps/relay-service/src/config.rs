//! # Relay Service 設定
//!
//! 環境変数から Relay Service の設定を読み込む。
//!
//! 認証情報（`EMAIL_USER` / `EMAIL_PASS`）は起動時に一度だけ読み込み、
//! 送信クライアントの生成時に値として渡す。欠けている場合や
//! `EMAIL_USER` がメールアドレスとして解釈できない場合は、ポートを
//! バインドする前に起動を中止する。

use std::{env, time::Duration};

use nayaruvi_infra::{SmtpCredentials, is_valid_address};
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// SMTP 認証情報が未設定（または空）
    #[error("{0} が設定されていません（.env を確認してください）")]
    MissingCredential(&'static str),

    /// 値の形式が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Relay Service サーバーの設定
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBackend {
    /// SMTP リレー経由で送信
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// 通知機能の設定
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド（`NOTIFICATION_BACKEND`）
    pub backend:      NotificationBackend,
    /// SMTP リレーのホスト
    pub smtp_host:    String,
    /// SMTP リレーのポート（implicit TLS）
    pub smtp_port:    u16,
    /// SMTP の各ネットワーク操作と、1 通の送信全体にかける上限
    pub smtp_timeout: Duration,
    /// SMTP 認証情報。`username` は送信元アドレスを兼ねる
    pub credentials:  SmtpCredentials,
}

impl RelayConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう、
    /// 値の取得方法を外から差し込めるようにしている。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 送信元アドレスを兼ねるため、ここで弾かないと全リクエストが送信時に失敗する
        let username = required(&lookup, "EMAIL_USER")?;
        if !is_valid_address(&username) {
            return Err(ConfigError::Invalid {
                name:  "EMAIL_USER",
                value: username,
            });
        }
        let credentials = SmtpCredentials::new(username, required(&lookup, "EMAIL_PASS")?);

        let backend = match lookup("NOTIFICATION_BACKEND").as_deref() {
            None | Some("smtp") => NotificationBackend::Smtp,
            Some("noop") => NotificationBackend::Noop,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name:  "NOTIFICATION_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            host:         lookup("RELAY_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port:         parsed(&lookup, "RELAY_PORT", 5000)?,
            notification: NotificationConfig {
                backend,
                smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                smtp_port: parsed(&lookup, "SMTP_PORT", 465)?,
                smtp_timeout: Duration::from_secs(parsed(&lookup, "SMTP_TIMEOUT_SECS", 30)?),
                credentials,
            },
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingCredential(name))
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
