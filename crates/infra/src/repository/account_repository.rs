//! # AccountRepository
//!
//! アカウントの検索と一意性検査付き挿入を担当するリポジトリ。
//!
//! ## 並行性
//!
//! 検索は保存前か保存後のコレクションを読むだけなので同期不要
//! （保存は rename によるアトミック差し替え）。
//! 挿入は load → 重複検査 → 追記 → save を [`tokio::sync::Mutex`] で
//! 直列化し、同時登録で同じメールアドレスが二重にコミットされる
//! lost-update を防ぐ。ロックの範囲はひとつの挿入に限定され、
//! リクエストが無期限にブロックすることはない。

use async_trait::async_trait;
use origin_domain::account::{Account, AccountId};
use tokio::sync::Mutex;

use crate::{error::InfraError, store::AccountStore};

/// アカウントリポジトリトレイト
///
/// ユースケース層はこのトレイト経由でストレージにアクセスする。
/// 検索はいずれも先頭からの線形走査で、最初の一致を返す。
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// メールアドレスとパスワードの組が一致するアカウントを検索する（完全一致）
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, InfraError>;

    /// メールアドレスが一致するアカウントを検索する（完全一致）
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, InfraError>;

    /// ID が一致するアカウントを検索する
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, InfraError>;

    /// アカウントを挿入する
    ///
    /// メールアドレスの一意性を検査したうえで追記し、同期的に永続化する。
    ///
    /// # 戻り値
    ///
    /// - `Ok(())`: コミット済み
    /// - `Err(_)`: `InfraErrorKind::Conflict`（登録済みメールアドレス）、
    ///   または保存失敗。いずれも未コミット
    async fn insert(&self, account: Account) -> Result<(), InfraError>;
}

/// JSON ファイルストアを使ったリポジトリ実装
pub struct FileAccountRepository {
    store: AccountStore,
    write_lock: Mutex<()>,
}

impl FileAccountRepository {
    /// 新しいリポジトリを作成する
    pub fn new(store: AccountStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl AccountRepository for FileAccountRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Account>, InfraError> {
        let collection = self.store.load();
        Ok(collection.find_by_credentials(email, password).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, InfraError> {
        let collection = self.store.load();
        Ok(collection.find_by_email(email).cloned())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, InfraError> {
        let collection = self.store.load();
        Ok(collection.find_by_id(id).cloned())
    }

    async fn insert(&self, account: Account) -> Result<(), InfraError> {
        // クリティカルセクション: 検査と保存の間に他の挿入を挟ませない
        let _guard = self.write_lock.lock().await;

        let mut collection = self.store.load();

        if collection.contains_email(account.email().as_str()) {
            return Err(InfraError::conflict("Account", account.email().as_str()));
        }

        collection.push(account);
        self.store.save(&collection)
    }
}
