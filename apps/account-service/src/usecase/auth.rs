//! # 認証ユースケース
//!
//! ログイン・登録・ID 検索の検証と業務ルールを実装する。
//!
//! ## アカウント列挙対策
//!
//! ログイン失敗時、メールアドレス未登録とパスワード不一致は
//! どちらも同じ `InvalidCredentials` を返す。エラーの違いから
//! アカウントの存在を推測されることを防ぐ。

use std::sync::Arc;

use origin_domain::{
    account::{Account, AccountId, AccountName, AccountView, Email, Password},
    clock::Clock,
};
use origin_infra::AccountRepository;

use crate::error::ApiError;

/// 認証ユースケースの実装
pub struct AuthUseCaseImpl {
    repository: Arc<dyn AccountRepository>,
    clock: Arc<dyn Clock>,
}

impl AuthUseCaseImpl {
    /// 新しいユースケースインスタンスを作成
    pub fn new(repository: Arc<dyn AccountRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// ログインする
    ///
    /// メールアドレスとパスワードの完全一致でアカウントを検索し、
    /// 公開ビューを返す。
    pub async fn login(&self, email: &str, password: &str) -> Result<AccountView, ApiError> {
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "メールアドレスとパスワードを入力してください".to_string(),
            ));
        }

        let account = self.repository.find_by_credentials(email, password).await?;

        match account {
            Some(account) => {
                tracing::info!(account_id = %account.id(), "ログインしました");
                Ok(account.to_view())
            }
            None => Err(ApiError::InvalidCredentials),
        }
    }

    /// アカウントを登録する
    ///
    /// ID 生成・イニシャル導出・作成時刻の付与を行い、
    /// 一意性検査付きで挿入して同期的に永続化する。
    ///
    /// 保存に失敗した場合は未コミット扱い
    /// （次のロードに新しいアカウントは現れない）。
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AccountView, ApiError> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return Err(ApiError::Validation(
                "登録情報をすべて入力してください".to_string(),
            ));
        }

        if self.repository.find_by_email(email).await?.is_some() {
            return Err(ApiError::DuplicateEmail);
        }

        let account = Account::new(
            AccountId::generate(),
            Email::new(email)?,
            Password::new(password)?,
            AccountName::new(name)?,
            self.clock.now(),
        );
        let view = account.to_view();

        // 事前検査と挿入の間に並行登録が割り込んだ場合、
        // リポジトリの一意性検査が Conflict（→ DuplicateEmail）を返す
        self.repository.insert(account).await?;

        tracing::info!(account_id = %view.id, "アカウントを登録しました");
        Ok(view)
    }

    /// ID でアカウントを取得する
    pub async fn get_account(&self, id: &str) -> Result<AccountView, ApiError> {
        let id = AccountId::from_string(id);

        match self.repository.find_by_id(&id).await? {
            Some(account) => Ok(account.to_view()),
            None => Err(ApiError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use origin_domain::clock::FixedClock;
    use origin_infra::{InfraError, mock::MemoryAccountRepository};
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn sut_with(repository: Arc<dyn AccountRepository>) -> AuthUseCaseImpl {
        AuthUseCaseImpl::new(repository, Arc::new(FixedClock::new(fixed_now())))
    }

    // テスト用スタブ: 保存が常に失敗するリポジトリ

    struct FailingSaveRepository;

    #[async_trait]
    impl AccountRepository for FailingSaveRepository {
        async fn find_by_credentials(
            &self,
            _email: &str,
            _password: &str,
        ) -> Result<Option<Account>, InfraError> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, InfraError> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: &AccountId) -> Result<Option<Account>, InfraError> {
            Ok(None)
        }

        async fn insert(&self, _account: Account) -> Result<(), InfraError> {
            Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "満杯").into())
        }
    }

    // register のテスト

    #[tokio::test]
    async fn test_register_登録したアカウントで直後にログインできる() {
        // Given
        let repository = Arc::new(MemoryAccountRepository::new());
        let sut = sut_with(repository);

        // When
        let registered = sut
            .register("john@example.com", "secret", "John Doe")
            .await
            .unwrap();
        let logged_in = sut.login("john@example.com", "secret").await.unwrap();

        // Then
        assert_eq!(registered, logged_in);
        assert_eq!(logged_in.email.as_str(), "john@example.com");
        assert_eq!(logged_in.name.as_str(), "John Doe");
        assert_eq!(logged_in.initials, "JD");
        assert_eq!(logged_in.avatar, None);
        assert_eq!(logged_in.created_at, fixed_now());
    }

    #[tokio::test]
    async fn test_register_フィールドが欠けていると検証エラー() {
        let sut = sut_with(Arc::new(MemoryAccountRepository::new()));

        for (email, password, name) in [
            ("", "secret", "John Doe"),
            ("john@example.com", "", "John Doe"),
            ("john@example.com", "secret", ""),
        ] {
            let result = sut.register(email, password, name).await;
            assert!(matches!(result, Err(ApiError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_register_同じメールアドレスの二度目はduplicate_emailで失敗する() {
        // Given
        let repository = Arc::new(MemoryAccountRepository::new());
        let sut = sut_with(repository.clone());
        sut.register("dup@example.com", "pw1", "First User")
            .await
            .unwrap();

        // When
        let result = sut.register("dup@example.com", "pw2", "Second User").await;

        // Then
        assert!(matches!(result, Err(ApiError::DuplicateEmail)));
        assert_eq!(repository.accounts().len(), 1);
    }

    #[tokio::test]
    async fn test_register_保存に失敗するとpersistenceで失敗する() {
        let sut = sut_with(Arc::new(FailingSaveRepository));

        let result = sut.register("john@example.com", "secret", "John Doe").await;

        assert!(matches!(result, Err(ApiError::Persistence(_))));
    }

    #[tokio::test]
    async fn test_register_戻り値のserialize結果にpasswordキーは現れない() {
        let sut = sut_with(Arc::new(MemoryAccountRepository::new()));

        let view = sut
            .register("john@example.com", "secret", "John Doe")
            .await
            .unwrap();
        let json = serde_json::to_value(view).unwrap();

        assert!(!json.as_object().unwrap().contains_key("password"));
    }

    // login のテスト

    #[tokio::test]
    async fn test_login_フィールドが空だと検証エラー() {
        let sut = sut_with(Arc::new(MemoryAccountRepository::new()));

        assert!(matches!(
            sut.login("", "secret").await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            sut.login("john@example.com", "").await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_login_未登録メールと誤パスワードは同じエラーを返す() {
        // Given
        let sut = sut_with(Arc::new(MemoryAccountRepository::new()));
        sut.register("known@example.com", "secret", "Known User")
            .await
            .unwrap();

        // When
        let wrong_password = sut.login("known@example.com", "wrong").await;
        let unknown_email = sut.login("unknown@example.com", "secret").await;

        // Then: アカウント列挙を防ぐため区別しない
        assert!(matches!(wrong_password, Err(ApiError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(ApiError::InvalidCredentials)));
    }

    // get_account のテスト

    #[tokio::test]
    async fn test_get_account_登録済みidで公開ビューを返す() {
        // Given
        let sut = sut_with(Arc::new(MemoryAccountRepository::new()));
        let registered = sut
            .register("john@example.com", "secret", "John Doe")
            .await
            .unwrap();

        // When
        let found = sut.get_account(registered.id.as_str()).await.unwrap();

        // Then
        assert_eq!(found, registered);
    }

    #[tokio::test]
    async fn test_get_account_未登録idはnot_foundで失敗する() {
        let sut = sut_with(Arc::new(MemoryAccountRepository::new()));

        let result = sut.get_account("user_missing").await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
