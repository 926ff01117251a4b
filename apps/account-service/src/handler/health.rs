//! # ヘルスチェックハンドラ
//!
//! アカウントサービスの稼働状態を確認するためのエンドポイント。
//!
//! レスポンス型は [`origin_shared::HealthResponse`] を参照。

use std::{collections::HashMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode};
use origin_infra::AccountStore;
use origin_shared::{
    HealthResponse,
    health::{CheckStatus, ReadinessResponse, ReadinessStatus},
};

/// Readiness Check 用の共有状態
pub struct ReadinessState {
    pub store: AccountStore,
}

/// GET /health
///
/// プロセスの稼働確認。依存リソースは見ない。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
///
/// ストアファイルが利用可能かを確認する。
/// 利用不可の場合は 503 を返す。
pub async fn readiness_check(
    State(state): State<Arc<ReadinessState>>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let store_status = if state.store.is_ready() {
        CheckStatus::Ok
    } else {
        CheckStatus::Error
    };

    let mut checks = HashMap::new();
    checks.insert("store".to_string(), store_status.clone());

    match store_status {
        CheckStatus::Ok => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: ReadinessStatus::Ready,
                checks,
            }),
        ),
        CheckStatus::Error => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadinessResponse {
                status: ReadinessStatus::NotReady,
                checks,
            }),
        ),
    }
}
