//! # アカウント検索ハンドラ
//!
//! ID 指定のアカウント取得エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/user/{id}` - アカウント取得

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use origin_shared::ApiResponse;

use crate::{error::ApiError, handler::AuthState};

/// GET /api/user/{id}
///
/// ID でアカウントを取得する。
///
/// ## レスポンス
///
/// - 200: `{ "success": true, "user": {...} }`（message なし）
/// - 404: 該当なし
pub async fn get_account(
    State(state): State<Arc<AuthState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.usecase.get_account(&id).await?;

    Ok(Json(ApiResponse::user(user)))
}
