//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! origin-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use origin_domain::account::{Account, AccountId};

use crate::{error::InfraError, repository::AccountRepository};

/// インメモリのアカウントリポジトリ
///
/// ファイル実装と同じ一意性検査を行うが、永続化はしない。
/// `Clone` しても同じベクタを共有する。
#[derive(Clone, Default)]
pub struct MemoryAccountRepository {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ付きで作成する
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    /// 現在保持しているアカウントのスナップショットを返す
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, InfraError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.matches_credentials(email, password))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, InfraError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.has_email(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, InfraError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id() == id)
            .cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), InfraError> {
        let mut accounts = self.accounts.lock().unwrap();

        if accounts.iter().any(|a| a.has_email(account.email().as_str())) {
            return Err(InfraError::conflict("Account", account.email().as_str()));
        }

        accounts.push(account);
        Ok(())
    }
}
