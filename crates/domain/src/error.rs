//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `MissingFields` | 400 Bad Request | 必須項目の欠落・空文字 |
//!
//! 呼び出し元に返すメッセージはエンドポイントごとに固定されているため、
//! 欠落項目の一覧はサーバー側のログにのみ出力する。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 必須項目が未入力
    ///
    /// 値が存在しない、`null`、または空文字の項目名を保持する。
    #[error("必須項目が未入力です: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
