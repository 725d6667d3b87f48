//! # Relay Service サーバー
//!
//! 大気質アラートのメール通知を受け付け、SMTP リレー経由で送信する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Frontend   │────▶│Relay Service │────▶│  SMTP Relay  │
//! │  (browser)   │     │  port: 5000  │     │   port: 465  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `EMAIL_USER` | **Yes** | SMTP アカウント（送信元アドレスを兼ねる） |
//! | `EMAIL_PASS` | **Yes** | SMTP パスワード |
//! | `RELAY_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `RELAY_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `SMTP_HOST` | No | SMTP リレーのホスト（デフォルト: `smtp.gmail.com`） |
//! | `SMTP_PORT` | No | SMTP リレーのポート（デフォルト: `465`） |
//! | `SMTP_TIMEOUT_SECS` | No | SMTP 送信のタイムアウト秒数。各操作と送信全体の両方に適用（デフォルト: `30`） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` または `noop`（デフォルト: `smtp`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p nayaruvi-relay-service
//!
//! # 送信せずにログ出力のみ
//! NOTIFICATION_BACKEND=noop cargo run -p nayaruvi-relay-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use nayaruvi_infra::{NoopNotificationSender, NotificationSender, SmtpNotificationSender};
use nayaruvi_relay_service::{
    app_builder::build_app,
    config::{NotificationBackend, RelayConfig},
    shutdown::shutdown_signal,
};
use nayaruvi_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Relay Service サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み（認証情報が無ければここで終了）
/// 4. 送信クライアントとルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    init_tracing(TracingConfig::from_env("relay-service"));
    let _tracing_guard = tracing::info_span!("app", service = "relay-service").entered();

    // 設定読み込み
    let config = RelayConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Relay Service を起動します: {}:{}",
        config.host,
        config.port
    );

    let notification = config.notification;
    let from_address = notification.credentials.username.clone();
    let sender: Arc<dyn NotificationSender> = match notification.backend {
        NotificationBackend::Smtp => {
            tracing::info!(
                "SMTP リレーを使用します: {}:{}",
                notification.smtp_host,
                notification.smtp_port
            );
            Arc::new(
                SmtpNotificationSender::new(
                    &notification.smtp_host,
                    notification.smtp_port,
                    notification.credentials,
                    notification.smtp_timeout,
                )
                .context("SMTP クライアントの初期化に失敗しました")?,
            )
        }
        NotificationBackend::Noop => {
            tracing::warn!("NOTIFICATION_BACKEND=noop: メールは送信されません");
            Arc::new(NoopNotificationSender)
        }
    };

    let app = build_app(sender, from_address);

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("不正なバインドアドレスです: {}", config.host))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} へのバインドに失敗しました"))?;
    tracing::info!("Relay Service が起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
