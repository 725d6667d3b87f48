//! # API レスポンスエンベロープ
//!
//! 通知エンドポイントの統一レスポンス形式を提供する。
//!
//! ```text
//! 成功: { "success": true,  "message": "..." }
//! 失敗: { "success": false, "error":   "..." }
//! ```
//!
//! 失敗時の `error` はエンドポイントごとの固定文言のみ。
//! 内部エラーの詳細をこのエンベロープに入れてはならない。

use serde::{Deserialize, Serialize};

/// 通知 API の統一レスポンス型
///
/// ## 使用例
///
/// ```
/// use nayaruvi_shared::RelayResponse;
///
/// let response = RelayResponse::success("Registration email sent");
/// assert!(response.success);
/// assert_eq!(response.error, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:   Option<String>,
}

impl RelayResponse {
    /// 成功レスポンスを作成する
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error:   None,
        }
    }

    /// 失敗レスポンスを作成する
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error:   Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successを正しいjson形状にする() {
        let response = RelayResponse::success("Registration email sent");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "Registration email sent" })
        );
    }

    #[test]
    fn test_failureを正しいjson形状にする() {
        let response = RelayResponse::failure("Missing fields");
        let json = serde_json::to_value(&response).unwrap();

        // message フィールドは出力されない
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "error": "Missing fields" })
        );
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let json = r#"{"success": false, "error": "AQI email sending failed"}"#;
        let response: RelayResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response, RelayResponse::failure("AQI email sending failed"));
    }
}
