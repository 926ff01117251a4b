//! # Origin ドメイン層
//!
//! アカウントディレクトリの中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`account::Account`]）
//! - **値オブジェクト**: 生成時にバリデーションを実行する不変オブジェクト
//!   （[`account::Email`], [`account::Password`], [`account::AccountName`]）
//! - **公開ビュー**: パスワードを構造的に持たない [`account::AccountView`]。
//!   外部へ返すアカウント情報はすべてこの型を経由する
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! account-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ファイルストア）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`account`] - アカウントエンティティと関連する値オブジェクト
//! - [`clock`] - 現在時刻の抽象化（テストで固定時刻を注入するため）
//! - [`error`] - ドメイン層で発生するエラーの定義

pub mod account;
pub mod clock;
pub mod error;

pub use error::DomainError;
