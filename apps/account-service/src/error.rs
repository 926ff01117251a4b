//! # Account Service エラー定義
//!
//! アカウントサービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス |
//! |-----------|----------------|
//! | `Validation` | 400 Bad Request |
//! | `DuplicateEmail` | 400 Bad Request |
//! | `InvalidCredentials` | 401 Unauthorized |
//! | `NotFound` | 404 Not Found |
//! | `Persistence` | 500 Internal Server Error |
//!
//! レスポンスボディは `{ "success": false, "message": "..." }`。
//! `Persistence` はサーバー側で全詳細をログに記録し、
//! クライアントには汎用メッセージのみを返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use origin_domain::DomainError;
use origin_infra::InfraError;
use origin_shared::ApiResponse;
use thiserror::Error;

/// アカウントサービスで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 必須入力の欠落
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 認証失敗
    ///
    /// メールアドレス未登録とパスワード不一致は区別しない。
    /// エラーメッセージからアカウントの存在を推測されることを防ぐ。
    #[error("メールアドレスまたはパスワードが正しくありません")]
    InvalidCredentials,

    /// 登録済みメールアドレス
    #[error("このメールアドレスは既に登録されています")]
    DuplicateEmail,

    /// アカウントが見つからない
    #[error("アカウントが見つかりません: {0}")]
    NotFound(String),

    /// 永続化失敗
    #[error("ストアへの保存に失敗しました: {0}")]
    Persistence(#[source] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl From<InfraError> for ApiError {
    fn from(e: InfraError) -> Self {
        // 一意性違反はクライアント起因（登録済みメールアドレス）として扱う
        if e.as_conflict().is_some() {
            Self::DuplicateEmail
        } else {
            Self::Persistence(e)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "メールアドレスまたはパスワードが正しくありません".to_string(),
            ),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "このメールアドレスは既に登録されています".to_string(),
            ),
            ApiError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "ユーザーが見つかりません".to_string())
            }
            ApiError::Persistence(e) => {
                tracing::error!(error = %e, span_trace = %e.span_trace(), "永続化エラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "サーバーエラーが発生しました。しばらくしてからお試しください".to_string(),
                )
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn status_of(error: ApiError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_各エラーのステータスコード対応() {
        assert_eq!(
            status_of(ApiError::Validation("必須です".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(ApiError::DuplicateEmail), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(ApiError::NotFound("user_x".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflictのinfra_errorはduplicate_emailに変換される() {
        let err: ApiError = InfraError::conflict("Account", "dup@example.com").into();
        assert!(matches!(err, ApiError::DuplicateEmail));
    }

    #[test]
    fn test_conflict以外のinfra_errorはpersistenceに変換される() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "拒否");
        let err: ApiError = InfraError::from(io).into();
        assert!(matches!(err, ApiError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_persistenceのレスポンスは汎用メッセージのみを返す() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "secret-path");
        let response = ApiError::Persistence(InfraError::from(io)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert!(!json["message"].as_str().unwrap().contains("secret-path"));
    }
}
