//! 通知 API の統合テスト
//!
//! ルーター全体（ミドルウェア込み）に対して `oneshot` でリクエストを送り、
//! ステータス・レスポンスボディ・送信記録を検証する。

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
};
use http::{Method, Request, StatusCode, header};
use nayaruvi_infra::mock::MockNotificationSender;
use nayaruvi_relay_service::app_builder::build_app;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

const FROM: &str = "alerts@nayaruvi.example";

fn create_test_app(sender: &MockNotificationSender) -> Router {
    build_app(Arc::new(sender.clone()), FROM)
}

fn json_request(path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn registration_body() -> Value {
    json!({ "name": "Asha", "email": "a@x.com", "pincode": "560001" })
}

fn aqi_body() -> Value {
    json!({
        "email": "a@x.com",
        "location": "Delhi",
        "aqi": "180",
        "status": "Unhealthy",
        "advice": "Avoid outdoor activity"
    })
}

// ===== POST /send-email =====

#[tokio::test]
async fn test_登録確認メールを送信すると200を返す() {
    let sender = MockNotificationSender::new();

    let (status, body) = send(
        create_test_app(&sender),
        json_request("/send-email", &registration_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Registration email sent" })
    );

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, FROM);
    assert_eq!(sent[0].to, "a@x.com");
    assert_eq!(
        sent[0].subject,
        "Nayaruvi – Air Quality Alert Registration Successful"
    );
    assert!(sent[0].body.contains("Asha"));
    assert!(sent[0].body.contains("560001"));
}

#[rstest]
#[case::name_なし(json!({ "email": "a@x.com", "pincode": "560001" }))]
#[case::email_が空文字(json!({ "name": "Asha", "email": "", "pincode": "560001" }))]
#[case::pincode_が_null(json!({ "name": "Asha", "email": "a@x.com", "pincode": null }))]
#[case::空オブジェクト(json!({}))]
#[tokio::test]
async fn test_登録確認で必須項目が欠けていると400を返し送信しない(
    #[case] request: Value,
) {
    let sender = MockNotificationSender::new();

    let (status, body) = send(
        create_test_app(&sender),
        json_request("/send-email", &request),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": "Missing fields" }));
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn test_登録確認の送信に失敗すると500を返し詳細を含まない() {
    let sender = MockNotificationSender::failing("535 5.7.8 Username and Password not accepted");

    let (status, body) = send(
        create_test_app(&sender),
        json_request("/send-email", &registration_body()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Email sending failed" })
    );
    assert!(!body.to_string().contains("535"));
}

#[tokio::test]
async fn test_同じリクエストを2回送ると2通送信される() {
    let sender = MockNotificationSender::new();
    let app = create_test_app(&sender);

    let (first, _) = send(
        app.clone(),
        json_request("/send-email", &registration_body()),
    )
    .await;
    let (second, _) = send(app, json_request("/send-email", &registration_body())).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(sender.sent_emails().len(), 2);
}

#[tokio::test]
async fn test_jsonでないボディは400を返す() {
    let sender = MockNotificationSender::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/send-email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("name=Asha"))
        .unwrap();

    let (status, body) = send(create_test_app(&sender), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": "Missing fields" }));
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn test_content_typeが無いリクエストは400を返す() {
    let sender = MockNotificationSender::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/send-email")
        .body(Body::from(registration_body().to_string()))
        .unwrap();

    let (status, _) = send(create_test_app(&sender), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(sender.sent_emails().is_empty());
}

// ===== POST /send-aqi-status =====

#[tokio::test]
async fn test_aqiステータスメールを送信すると200を返す() {
    let sender = MockNotificationSender::new();

    let (status, body) = send(
        create_test_app(&sender),
        json_request("/send-aqi-status", &aqi_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "AQI email sent successfully" })
    );

    let sent = sender.sent_emails();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@x.com");
    assert_eq!(sent[0].subject, "Nayaruvi – Live Air Quality Status Update");
    for expected in ["Delhi", "180", "Unhealthy", "Avoid outdoor activity"] {
        assert!(sent[0].body.contains(expected), "{expected} が本文に含まれること");
    }
}

#[rstest]
#[case::数値(json!(180), "📊 AQI Value : 180\n")]
#[case::ゼロ(json!(0), "📊 AQI Value : 0\n")]
#[tokio::test]
async fn test_数値のaqiを受け付ける(#[case] aqi: Value, #[case] expected_line: &str) {
    let sender = MockNotificationSender::new();
    let mut request = aqi_body();
    request["aqi"] = aqi;

    let (status, _) = send(
        create_test_app(&sender),
        json_request("/send-aqi-status", &request),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(sender.sent_emails()[0].body.contains(expected_line));
}

#[rstest]
#[case::location_なし("location")]
#[case::aqi_なし("aqi")]
#[case::status_なし("status")]
#[case::advice_なし("advice")]
#[case::email_なし("email")]
#[tokio::test]
async fn test_aqiステータスで必須項目が欠けていると400を返し送信しない(
    #[case] field: &str,
) {
    let sender = MockNotificationSender::new();
    let mut request = aqi_body();
    request.as_object_mut().unwrap().remove(field);

    let (status, body) = send(
        create_test_app(&sender),
        json_request("/send-aqi-status", &request),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "error": "Missing AQI data" }));
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn test_aqiが空文字の場合は400を返す() {
    let sender = MockNotificationSender::new();
    let mut request = aqi_body();
    request["aqi"] = json!("");

    let (status, _) = send(
        create_test_app(&sender),
        json_request("/send-aqi-status", &request),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(sender.sent_emails().is_empty());
}

#[tokio::test]
async fn test_aqiステータスの送信に失敗すると500を返す() {
    let sender = MockNotificationSender::failing("connection refused");

    let (status, body) = send(
        create_test_app(&sender),
        json_request("/send-aqi-status", &aqi_body()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "success": false, "error": "AQI email sending failed" })
    );
    assert!(!body.to_string().contains("connection refused"));
}

// ===== 共通 =====

#[tokio::test]
async fn test_レスポンスにcorsヘッダーが付与される() {
    let sender = MockNotificationSender::new();
    let mut request = json_request("/send-email", &registration_body());
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:3000".parse().unwrap());

    let response = create_test_app(&sender).oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_レスポンスにx_request_idが付与される() {
    let sender = MockNotificationSender::new();

    let response = create_test_app(&sender)
        .oneshot(json_request("/send-email", &registration_body()))
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_healthは200を返す() {
    let sender = MockNotificationSender::new();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(create_test_app(&sender), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(sender.sent_emails().is_empty());
}
