//! # アカウントストア
//!
//! アカウントコレクション全体を単一の JSON ファイルとして読み書きする。
//!
//! ## 永続化レイアウト
//!
//! ```json
//! {
//!   "users": [
//!     {
//!       "id": "user_1",
//!       "email": "admin@example.com",
//!       "password": "password123",
//!       "name": "管理员",
//!       "initials": "GL",
//!       "avatar": null,
//!       "created_at": 1700000000
//!     }
//!   ]
//! }
//! ```
//!
//! ## 設計方針
//!
//! - **パスの注入**: ファイルパスはコンストラクタで受け取る。
//!   プロセス全体のグローバルは持たず、テストごとに独立したストアを使える
//! - **フェイルオープンなロード**: 読み込み失敗（ファイルなし・読み取り不可・
//!   不正な JSON）は空のコレクションとして扱う。ただし WARN ログで
//!   全詳細を記録し、黙って握りつぶさない
//! - **アトミックな保存**: 一時ファイルへ書いてから rename することで、
//!   クラッシュ時にもファイルが途中まで書かれた状態にならない。
//!   読み手は常に保存前か保存後のどちらかの状態を観測する

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use origin_domain::account::{Account, AccountCollection, AccountId, AccountName, Email, Password};

use crate::error::InfraError;

/// シードアカウント（永続化状態が存在しない場合に一度だけ投入される管理者）
pub const SEED_ACCOUNT_ID: &str = "user_1";
pub const SEED_EMAIL: &str = "admin@example.com";
pub const SEED_PASSWORD: &str = "password123";
pub const SEED_NAME: &str = "管理员";
pub const SEED_INITIALS: &str = "GL";

/// JSON ファイルストア
///
/// コレクション全体をアトミックな単位としてロード・保存する。
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// 新しいストアを作成する
    ///
    /// ファイルの作成はこの時点では行わない。
    /// 初期投入は [`ensure_seed`](AccountStore::ensure_seed) で行う。
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ストアファイルのパスを取得する
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// コレクション全体をロードする
    ///
    /// ファイルが存在しない・読めない・パースできない場合は
    /// 空のコレクションを返す（フェイルオープン）。
    /// 破損は WARN ログに全詳細を記録する。
    pub fn load(&self) -> AccountCollection {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "ストアファイルが存在しません");
                return AccountCollection::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ストアファイルの読み込みに失敗しました。空のコレクションとして扱います"
                );
                return AccountCollection::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ストアファイルのパースに失敗しました。空のコレクションとして扱います"
                );
                AccountCollection::new()
            }
        }
    }

    /// コレクション全体を保存する
    ///
    /// 一時ファイルへ書き込んでから rename で差し替える。
    /// rename は同一ファイルシステム内でアトミックなため、
    /// 読み手が途中まで書かれたファイルを観測することはない。
    pub fn save(&self, collection: &AccountCollection) -> Result<(), InfraError> {
        let json = serde_json::to_vec_pretty(collection)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, &json)?;
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            accounts = collection.len(),
            "コレクションを保存しました"
        );
        Ok(())
    }

    /// 永続化状態が存在しない場合、シードアカウントで初期化する
    ///
    /// ファイルが既に存在する場合は何もしない（破損していても上書きしない）。
    pub fn ensure_seed(&self, now: DateTime<Utc>) -> Result<(), InfraError> {
        if self.path.exists() {
            return Ok(());
        }

        let seed = Account::from_parts(
            AccountId::from_string(SEED_ACCOUNT_ID),
            Email::new(SEED_EMAIL).map_err(|e| InfraError::unexpected(e.to_string()))?,
            Password::new(SEED_PASSWORD).map_err(|e| InfraError::unexpected(e.to_string()))?,
            AccountName::new(SEED_NAME).map_err(|e| InfraError::unexpected(e.to_string()))?,
            SEED_INITIALS.to_string(),
            None,
            now,
        );

        let collection = AccountCollection::from_accounts(vec![seed]);
        self.save(&collection)?;

        tracing::info!(
            path = %self.path.display(),
            "ストアをシードアカウントで初期化しました"
        );
        Ok(())
    }

    /// ストアが利用可能か判定する（Readiness Check 用）
    ///
    /// ファイルが存在して読み取れる状態であれば true を返す。
    pub fn is_ready(&self) -> bool {
        fs::metadata(&self.path).is_ok()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use super::*;

    /// テストごとに独立した一時ファイルパスを払い出す
    ///
    /// Drop 時にファイルを削除する。
    struct TempStorePath(PathBuf);

    impl TempStorePath {
        fn new() -> Self {
            let path = std::env::temp_dir().join(format!("origin-store-{}.json", Uuid::new_v4()));
            Self(path)
        }
    }

    impl Drop for TempStorePath {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    fn sample_account(email: &str) -> Account {
        Account::new(
            AccountId::generate(),
            Email::new(email).unwrap(),
            Password::new("secret").unwrap(),
            AccountName::new("Test User").unwrap(),
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        )
    }

    #[test]
    fn test_存在しないファイルのロードは空のコレクションを返す() {
        let path = TempStorePath::new();
        let store = AccountStore::new(&path.0);

        let collection = store.load();

        assert!(collection.is_empty());
    }

    #[test]
    fn test_保存とロードのラウンドトリップで全フィールドが保持される() {
        let path = TempStorePath::new();
        let store = AccountStore::new(&path.0);

        let mut collection = AccountCollection::new();
        collection.push(sample_account("a@example.com"));
        collection.push(sample_account("b@example.com"));
        store.save(&collection).unwrap();

        let restored = store.load();

        assert_eq!(restored, collection);
    }

    #[test]
    fn test_不正なjsonのロードは空のコレクションを返す() {
        let path = TempStorePath::new();
        fs::write(&path.0, b"{ not json").unwrap();
        let store = AccountStore::new(&path.0);

        let collection = store.load();

        assert!(collection.is_empty());
    }

    #[test]
    fn test_ensure_seedはシードアカウントだけを持つファイルを作成する() {
        let path = TempStorePath::new();
        let store = AccountStore::new(&path.0);
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        store.ensure_seed(now).unwrap();

        let collection = store.load();
        assert_eq!(collection.len(), 1);

        let seed = collection
            .find_by_id(&AccountId::from_string(SEED_ACCOUNT_ID))
            .unwrap();
        assert_eq!(seed.email().as_str(), SEED_EMAIL);
        assert_eq!(seed.initials(), SEED_INITIALS);
        assert_eq!(seed.created_at(), now);
        assert!(seed.matches_credentials(SEED_EMAIL, SEED_PASSWORD));
    }

    #[test]
    fn test_ensure_seedは既存のファイルを上書きしない() {
        let path = TempStorePath::new();
        let store = AccountStore::new(&path.0);

        let mut collection = AccountCollection::new();
        collection.push(sample_account("existing@example.com"));
        store.save(&collection).unwrap();

        store
            .ensure_seed(DateTime::from_timestamp(1_700_000_000, 0).unwrap())
            .unwrap();

        let restored = store.load();
        assert_eq!(restored.len(), 1);
        assert!(restored.contains_email("existing@example.com"));
    }

    #[test]
    fn test_保存後に一時ファイルは残らない() {
        let path = TempStorePath::new();
        let store = AccountStore::new(&path.0);

        store.save(&AccountCollection::new()).unwrap();

        assert!(store.is_ready());
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_is_readyはファイルが存在しない場合falseを返す() {
        let path = TempStorePath::new();
        let store = AccountStore::new(&path.0);

        assert!(!store.is_ready());
    }
}
