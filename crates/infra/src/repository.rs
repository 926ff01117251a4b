//! # リポジトリ
//!
//! アカウントコレクションへの一意性検査付きアクセスを提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存し、
//!   ファイル実装・インメモリ実装を差し替え可能
//! - **都度ロード**: 各操作は永続化状態を読み直す。保存が失敗した登録は
//!   次のロードに現れない（未コミット扱い）
//! - **挿入の排他制御**: load → 重複検査 → 追記 → save を
//!   ひとつのクリティカルセクションとして直列化する

pub mod account_repository;

pub use account_repository::{AccountRepository, FileAccountRepository};
