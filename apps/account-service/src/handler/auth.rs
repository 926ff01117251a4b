//! # 認証ハンドラ
//!
//! ログインとアカウント登録のエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/login` - メール/パスワード認証
//! - `POST /api/register` - アカウント登録
//!
//! レスポンスの `user` は常に公開ビュー（パスワードなし）。

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use origin_domain::account::AccountView;
use origin_shared::ApiResponse;
use serde::Deserialize;

use crate::{error::ApiError, usecase::AuthUseCase};

/// 認証ハンドラの共有状態
pub struct AuthState {
    pub usecase: Arc<dyn AuthUseCase>,
}

// --- リクエスト型 ---

/// ログインリクエスト
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// アカウント登録リクエスト
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

// --- ハンドラ ---

/// POST /api/login
///
/// メールアドレスとパスワードでログインする。
///
/// ## レスポンス
///
/// - 200: `{ "success": true, "message": "...", "user": {...} }`
/// - 400: 必須フィールドの欠落
/// - 401: 認証失敗（未登録メールと誤パスワードは区別しない）
pub async fn login(
    State(state): State<Arc<AuthState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user: AccountView = state.usecase.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::user_with_message("ログインしました", user)))
}

/// POST /api/register
///
/// 新しいアカウントを登録する。
///
/// ## レスポンス
///
/// - 200: `{ "success": true, "message": "...", "user": {...} }`
/// - 400: 必須フィールドの欠落、または登録済みメールアドレス
/// - 500: 永続化失敗（未コミット）
pub async fn register(
    State(state): State<Arc<AuthState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user: AccountView = state
        .usecase
        .register(&req.email, &req.password, &req.name)
        .await?;

    Ok(Json(ApiResponse::user_with_message(
        "アカウントを登録しました",
        user,
    )))
}
