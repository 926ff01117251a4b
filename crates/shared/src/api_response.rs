//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式
//! `{ "success": bool, "message"?: string, "user"?: T }` を提供する。

use serde::{Deserialize, Serialize};

/// 公開 API の統一レスポンス型
///
/// すべての公開 API エンドポイントはこのエンベロープでレスポンスを返す。
/// `message` と `user` は存在する場合のみシリアライズされる
/// （ID 検索の成功レスポンスは `message` を持たない、など）。
///
/// ## 使用例
///
/// ```
/// use origin_shared::ApiResponse;
///
/// let response = ApiResponse::user("profile");
/// assert!(response.success);
/// assert_eq!(response.user, Some("profile"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 成功レスポンス（ユーザーのみ）を作成する
    pub fn user(user: T) -> Self {
        Self {
            success: true,
            message: None,
            user: Some(user),
        }
    }

    /// 成功レスポンス（メッセージ付き）を作成する
    pub fn user_with_message(message: impl Into<String>, user: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            user: Some(user),
        }
    }

    /// 失敗レスポンスを作成する
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            user: None,
        }
    }
}
