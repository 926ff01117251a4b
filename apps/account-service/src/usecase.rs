//! # ユースケース層
//!
//! アカウントサービスのビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: テスト可能性のためトレイトを定義
//! - **依存性注入**: リポジトリと Clock を外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//! - **サニタイズの強制**: 戻り値はすべて [`AccountView`]。
//!   パスワードを含む [`Account`](origin_domain::account::Account) は
//!   この層の外へ出ない

pub mod auth;

use async_trait::async_trait;
pub use auth::AuthUseCaseImpl;
use origin_domain::account::AccountView;

use crate::error::ApiError;

/// 認証ユースケーストレイト
///
/// アカウントサービスのビジネスロジックを定義する。
/// 具体的な実装は `AuthUseCaseImpl` で提供される。
#[async_trait]
pub trait AuthUseCase: Send + Sync {
    /// ログインする
    ///
    /// ## 戻り値
    ///
    /// - `Ok(AccountView)`: 認証成功（パスワードを除いた公開ビュー）
    /// - `Err(ApiError::Validation)`: メールアドレスまたはパスワードが空
    /// - `Err(ApiError::InvalidCredentials)`: 認証失敗
    async fn login(&self, email: &str, password: &str) -> Result<AccountView, ApiError>;

    /// アカウントを登録する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(AccountView)`: 登録されたアカウントの公開ビュー
    /// - `Err(ApiError::Validation)`: いずれかのフィールドが空
    /// - `Err(ApiError::DuplicateEmail)`: 登録済みメールアドレス
    /// - `Err(ApiError::Persistence)`: 保存失敗（未コミット）
    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AccountView, ApiError>;

    /// ID でアカウントを取得する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(AccountView)`: アカウントの公開ビュー
    /// - `Err(ApiError::NotFound)`: 該当なし
    async fn get_account(&self, id: &str) -> Result<AccountView, ApiError>;
}

/// AuthUseCaseImpl に AuthUseCase トレイトを実装
#[async_trait]
impl AuthUseCase for AuthUseCaseImpl {
    async fn login(&self, email: &str, password: &str) -> Result<AccountView, ApiError> {
        self.login(email, password).await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AccountView, ApiError> {
        self.register(email, password, name).await
    }

    async fn get_account(&self, id: &str) -> Result<AccountView, ApiError> {
        self.get_account(id).await
    }
}
