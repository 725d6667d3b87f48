//! # 大気質アラート入力モデル
//!
//! 2 種類の通知リクエストを検証済みの値として表現する。
//!
//! | 型 | 用途 | 必須項目 |
//! |---|------|---------|
//! | [`Registration`] | アラート登録確認メール | `name`, `email`, `pincode` |
//! | [`AqiStatusReport`] | AQI ステータス通知メール | `email`, `location`, `aqi`, `status`, `advice` |
//!
//! ## 検証ルール
//!
//! - 値が存在しない・`null`・空文字の項目は欠落とみなす
//! - メールアドレスの書式や PIN コードの桁数は検証しない
//! - `aqi` は文字列・数値のどちらも受け付ける。数値の `0` は有効な測定値として扱う

use std::fmt;

use serde::Deserialize;

use crate::DomainError;

/// 必須項目の取り出しと欠落項目の収集を行うヘルパー
///
/// すべての欠落項目をまとめて報告するため、最初の欠落で中断しない。
#[derive(Debug, Default)]
struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    fn aqi(&mut self, value: Option<AqiReading>) -> AqiReading {
        match value.filter(|v| !v.is_blank()) {
            Some(v) => v,
            None => {
                self.missing.push("aqi");
                AqiReading::Text(String::new())
            }
        }
    }

    fn finish(self) -> Result<(), DomainError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingFields(self.missing))
        }
    }
}

// =========================================================================
// Registration（アラート登録）
// =========================================================================

/// アラート登録確認の入力（検証済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name:    String,
    email:   String,
    pincode: String,
}

impl Registration {
    /// 必須項目を検証して登録情報を作成する
    ///
    /// # エラー
    ///
    /// 欠落した項目があれば `DomainError::MissingFields` を返す。
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        pincode: Option<String>,
    ) -> Result<Self, DomainError> {
        let mut fields = RequiredFields::default();
        let name = fields.text("name", name);
        let email = fields.text("email", email);
        let pincode = fields.text("pincode", pincode);
        fields.finish()?;

        Ok(Self {
            name,
            email,
            pincode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 送信先メールアドレス
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn pincode(&self) -> &str {
        &self.pincode
    }
}

// =========================================================================
// AqiReading（AQI 値）
// =========================================================================

/// AQI 値
///
/// 呼び出し元は文字列（`"180"`）でも数値（`180`）でも送ってくるため、
/// どちらの表現もそのまま保持し、本文には受け取った形のまま埋め込む。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AqiReading {
    /// JSON 数値
    Number(serde_json::Number),
    /// JSON 文字列
    Text(String),
}

impl AqiReading {
    /// 値が空とみなされるかどうか
    ///
    /// 空文字のみが空。数値は `0` を含めて常に有効。
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.is_empty(),
        }
    }
}

impl fmt::Display for AqiReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

// =========================================================================
// AqiStatusReport（AQI ステータス通知）
// =========================================================================

/// AQI ステータス通知の入力（検証済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AqiStatusReport {
    email:    String,
    location: String,
    aqi:      AqiReading,
    status:   String,
    advice:   String,
}

impl AqiStatusReport {
    /// 必須項目を検証して AQI ステータス通知を作成する
    ///
    /// # エラー
    ///
    /// 欠落した項目があれば `DomainError::MissingFields` を返す。
    pub fn new(
        email: Option<String>,
        location: Option<String>,
        aqi: Option<AqiReading>,
        status: Option<String>,
        advice: Option<String>,
    ) -> Result<Self, DomainError> {
        let mut fields = RequiredFields::default();
        let email = fields.text("email", email);
        let location = fields.text("location", location);
        let aqi = fields.aqi(aqi);
        let status = fields.text("status", status);
        let advice = fields.text("advice", advice);
        fields.finish()?;

        Ok(Self {
            email,
            location,
            aqi,
            status,
            advice,
        })
    }

    /// 送信先メールアドレス
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn aqi(&self) -> &AqiReading {
        &self.aqi
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// 健康に関する注意事項
    pub fn advice(&self) -> &str {
        &self.advice
    }
}
