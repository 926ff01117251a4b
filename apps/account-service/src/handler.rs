//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック / Readiness Check
//! - `auth`: 認証関連（login, register）
//! - `account`: アカウント検索（ID 指定）

pub mod account;
pub mod auth;
pub mod health;

pub use account::get_account;
pub use auth::{AuthState, login, register};
pub use health::{ReadinessState, health_check, readiness_check};
