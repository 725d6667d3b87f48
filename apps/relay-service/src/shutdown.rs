//! # グレースフルシャットダウン
//!
//! Ctrl+C または SIGTERM を受け取るまで待機する。
//! 受信後は新規接続の受け付けを止め、処理中のリクエストの完了を待つ。

use tokio::signal;

/// 終了シグナルを待機する
///
/// シグナルハンドラの登録に失敗した場合、そのシグナルでは終了しない。
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("終了シグナルを受信しました。シャットダウンします");
}
