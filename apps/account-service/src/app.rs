//! # アプリケーション構築
//!
//! State の注入とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中し、
//! 統合テストはこのモジュールからルーターを組み立てる。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use origin_shared::observability::make_request_span;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handler::{
    AuthState,
    ReadinessState,
    get_account,
    health_check,
    login,
    readiness_check,
    register,
};

/// ルーターを構築する
///
/// CORS はすべてのオリジン・メソッド・ヘッダを許可する。
pub fn build_router(auth_state: Arc<AuthState>, readiness_state: Arc<ReadinessState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/user/{id}", get(get_account))
        .with_state(auth_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
}
