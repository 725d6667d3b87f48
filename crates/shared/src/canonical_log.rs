//! # Canonical Log Line ミドルウェア
//!
//! HTTP リクエスト完了時に、そのリクエストの要点を1行に集約した
//! サマリログ（Canonical Log Line）を出力する tower Layer。
//!
//! - TraceLayer: スパン作成（method, path, request_id）
//! - CanonicalLogLineLayer: リクエスト完了サマリ（status, latency）
//!
//! TraceLayer のスパン内に配置することで、スパンフィールドが
//! JSON ログに自動的に含まれる。
//!
//! 5xx は SMTP 送信失敗を意味するため WARN に上げ、監視で拾えるようにする。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

/// ヘルスチェックパスかどうかを判定する
fn is_health_check_path(path: &str) -> bool {
    path.starts_with("/health")
}

/// Canonical Log Line を出力する Layer
///
/// ## レイヤー配置
///
/// ```text
/// SetRequestIdLayer → TraceLayer → CanonicalLogLineLayer → handler
/// ```
#[derive(Clone, Debug)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// Canonical Log Line を出力する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // clone-swap: poll_ready で readiness を得た inner を使う
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if is_health_check_path(req.uri().path()) {
            return Box::pin(async move { inner.call(req).await });
        }

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();
        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(response) if response.status().is_server_error() => {
                    tracing::warn!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = response.status().as_u16(),
                        http.latency_ms = latency_ms,
                        "リクエスト完了"
                    );
                }
                Ok(response) => {
                    tracing::info!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.status_code = response.status().as_u16(),
                        http.latency_ms = latency_ms,
                        "リクエスト完了"
                    );
                }
                Err(err) => {
                    tracing::error!(
                        log.r#type = "canonical",
                        http.method = %method,
                        http.path = %path,
                        http.latency_ms = latency_ms,
                        error.message = %err,
                        "リクエスト処理エラー"
                    );
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        convert::Infallible,
        sync::{Arc, Mutex},
    };

    use http::StatusCode;
    use rstest::rstest;
    use tower::{ServiceExt, service_fn};
    use tracing::{Level, field::Field};
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    /// 出力されたログのレベルと `http.status_code` を記録する
    #[derive(Clone, Default)]
    struct Recorded(Arc<Mutex<Vec<(Level, Option<u64>)>>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Recorded {
        fn on_event(&self, event: &tracing::Event<'_>, _: tracing_subscriber::layer::Context<'_, S>) {
            struct StatusCodeVisitor(Option<u64>);

            impl tracing::field::Visit for StatusCodeVisitor {
                fn record_u64(&mut self, field: &Field, value: u64) {
                    if field.name() == "http.status_code" {
                        self.0 = Some(value);
                    }
                }

                fn record_debug(&mut self, _: &Field, _: &dyn std::fmt::Debug) {}
            }

            let mut visitor = StatusCodeVisitor(None);
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    impl Recorded {
        fn events(&self) -> Vec<(Level, Option<u64>)> {
            self.0.lock().unwrap().clone()
        }
    }

    async fn call_with<S>(inner: S, path: &str) -> (Recorded, Result<Response<()>, S::Error>)
    where
        S: Service<Request<()>, Response = Response<()>> + Clone + Send + 'static,
        S::Future: Send + 'static,
        S::Error: std::fmt::Display + 'static,
    {
        let recorded = Recorded::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(recorded.clone()));

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .body(())
            .unwrap();
        let result = CanonicalLogLineLayer.layer(inner).oneshot(request).await;

        (recorded, result)
    }

    fn respond_with(
        status: StatusCode,
    ) -> impl Service<
        Request<()>,
        Response = Response<()>,
        Error = Infallible,
        Future = impl Future<Output = Result<Response<()>, Infallible>> + Send + 'static,
    > + Clone
    + Send
    + 'static {
        service_fn(move |_: Request<()>| async move {
            Ok(Response::builder().status(status).body(()).unwrap())
        })
    }

    #[rstest]
    #[case::送信成功(StatusCode::OK, Level::INFO)]
    #[case::入力不備(StatusCode::BAD_REQUEST, Level::INFO)]
    #[case::送信失敗(StatusCode::INTERNAL_SERVER_ERROR, Level::WARN)]
    #[tokio::test]
    async fn ステータスに応じたレベルで1行だけ出力される(
        #[case] status: StatusCode,
        #[case] expected: Level,
    ) {
        let (recorded, result) = call_with(respond_with(status), "/send-email").await;

        assert_eq!(result.unwrap().status(), status);
        assert_eq!(
            recorded.events(),
            vec![(expected, Some(u64::from(status.as_u16())))]
        );
    }

    #[tokio::test]
    async fn healthへのリクエストは出力しない() {
        let (recorded, _) = call_with(respond_with(StatusCode::OK), "/health").await;

        assert!(recorded.events().is_empty());
    }

    #[tokio::test]
    async fn サービスがエラーを返した場合はerrorで出力される() {
        let failing = service_fn(|_: Request<()>| async { Err::<Response<()>, _>("upstream closed") });

        let (recorded, result) = call_with(failing, "/send-aqi-status").await;

        assert!(result.is_err());
        assert_eq!(recorded.events(), vec![(Level::ERROR, None)]);
    }
}
