//! # Origin インフラ層
//!
//! アカウントコレクションの永続化を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ストレージは単一の JSON ファイル（`{"users": [...]}`）であり、
//! 操作ごとに全件を読み込み、登録時に全件を書き戻す。
//! このクレートはその read-modify-write をカプセル化し、
//! ユースケース層にはリポジトリトレイトだけを見せる。
//!
//! ## 責務
//!
//! - **ファイルストア**: コレクション全体のロード・アトミックな保存・
//!   シードアカウントの初期投入（[`store::AccountStore`]）
//! - **リポジトリ実装**: 一意性検査付き挿入と各種検索
//!   （[`repository::AccountRepository`]）
//! - **排他制御**: load → 重複検査 → 追記 → save をひとつの
//!   クリティカルセクションとして直列化
//!
//! ## 依存関係
//!
//! ```text
//! account-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`store`] - JSON ファイルストア
//! - [`repository`] - リポジトリトレイトとファイル実装
//! - [`error`] - インフラ層エラー定義
//! - [`mock`] - テスト用インメモリリポジトリ（`test-utils` feature）

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod store;

pub use error::InfraError;
pub use repository::{AccountRepository, FileAccountRepository};
pub use store::AccountStore;
