//! # Origin Account Service
//!
//! メール/パスワード認証・アカウント登録・アカウント検索を提供する
//! HTTP サービス。
//!
//! ## レイヤ構成
//!
//! ```text
//! handler（HTTP アダプタ） → usecase（検証・業務ルール） → infra（永続化）
//! ```
//!
//! ハンドラは薄く保ち、検証・導出・サニタイズはユースケース層に集約する。
//! ライブラリとして公開するのは統合テストからルーターを組み立てるため。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
