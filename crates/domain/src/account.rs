//! # アカウント
//!
//! アカウントエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 役割 |
//! |---|------------|------|
//! | [`Account`] | アカウント | 認証情報（平文パスワード）を含む完全なレコード |
//! | [`AccountView`] | 公開ビュー | パスワードを除いた、外部へ返してよいレコード |
//! | [`AccountCollection`] | アカウント一覧 | 永続化単位となる追記専用のリスト |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: AccountId / Email / Password / AccountName は
//!   プリミティブをラップし、型安全性を確保
//! - **構造的なサニタイズ**: パスワードの除去は実行時のフィルタではなく、
//!   `AccountView` がフィールドを持たないことで保証する
//! - **不変性**: アカウントは作成後に変更されない（追記のみ）
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use origin_domain::account::{Account, AccountId, AccountName, Email, Password};
//!
//! let account = Account::new(
//!     AccountId::generate(),
//!     Email::new("user@example.com")?,
//!     Password::new("secret")?,
//!     AccountName::new("John Doe")?,
//!     chrono::Utc::now(),
//! );
//!
//! assert_eq!(account.initials(), "JD");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// アカウント ID（一意識別子）
///
/// `user_` プレフィックス + ランダムな 16 進 8 文字。
/// UUID v4 から導出するため衝突耐性を持つ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AccountId(String);

/// ID プレフィックス（シードアカウントもこの形式に従う）
const ACCOUNT_ID_PREFIX: &str = "user_";

impl AccountId {
    /// 新しいアカウント ID を生成する
    pub fn generate() -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self(format!("{}{}", ACCOUNT_ID_PREFIX, &token[..8]))
    }

    /// 既存の文字列からアカウント ID を復元する
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// メールアドレス（値オブジェクト）
///
/// 比較は完全一致（正規化なし）。形式チェックは行わず、
/// 空文字列のみを拒否する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// パスワード（値オブジェクト）
///
/// 平文のまま保持し、ログインでは完全一致で比較する。
/// ハッシュ化はこのサービスのスコープ外。
/// `Debug` 出力はマスクされ、`Display` は提供しない（ログへの平文流出防止）。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// パスワードを作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation("パスワードは必須です".to_string()));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 表示名（値オブジェクト）
///
/// イニシャルの導出元。空文字列のみを拒否する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AccountName(String);

impl AccountName {
    /// 表示名を作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation("表示名は必須です".to_string()));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 表示名からイニシャルを導出する
    ///
    /// - 名前にスペースを含む場合: 先頭 2 トークンそれぞれの先頭 1 文字を
    ///   大文字化して連結する（`"John Doe"` → `"JD"`）
    /// - 含まない場合: 先頭 2 文字を大文字化する（`"Madonna"` → `"MA"`、
    ///   1 文字の名前は 1 文字のまま）
    pub fn initials(&self) -> String {
        if self.0.contains(' ') {
            self.0
                .split_whitespace()
                .take(2)
                .filter_map(|token| token.chars().next())
                .flat_map(char::to_uppercase)
                .collect()
        } else {
            self.0.chars().take(2).flat_map(char::to_uppercase).collect()
        }
    }
}

/// アカウントエンティティ
///
/// 登録済みユーザーの完全なレコード。認証情報（平文パスワード）を含むため、
/// このまま外部へ返してはならない。外部へは [`Account::to_view`] で
/// [`AccountView`] に変換して返す。
///
/// # 不変条件
///
/// - `id` はコレクション内で一意
/// - `email` はコレクション内で一意（完全一致比較、登録時に検査）
/// - `initials` は `name` から作成時に一度だけ導出され、以後再計算されない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    email: Email,
    password: Password,
    name: AccountName,
    initials: String,
    avatar: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    created_at: DateTime<Utc>,
}

impl Account {
    /// 新しいアカウントを作成する
    ///
    /// # 不変条件
    ///
    /// - `initials` は `name` から導出される
    /// - `avatar` は常に None（このサービスはアバターを設定しない）
    pub fn new(
        id: AccountId,
        email: Email,
        password: Password,
        name: AccountName,
        now: DateTime<Utc>,
    ) -> Self {
        let initials = name.initials();
        Self {
            id,
            email,
            password,
            name,
            initials,
            avatar: None,
            created_at: now,
        }
    }

    /// 既存のデータからアカウントを復元する
    ///
    /// シードアカウントのように、イニシャルが導出規則と独立に
    /// 確定しているレコードを組み立てる際に使用する。
    pub fn from_parts(
        id: AccountId,
        email: Email,
        password: Password,
        name: AccountName,
        initials: String,
        avatar: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password,
            name,
            initials,
            avatar,
            created_at,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &AccountName {
        &self.name
    }

    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // ビジネスロジックメソッド

    /// メールアドレスが一致するか判定する（完全一致）
    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_str() == email
    }

    /// メールアドレスとパスワードの組が一致するか判定する（完全一致）
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.has_email(email) && self.password.as_str() == password
    }

    /// パスワードを除いた公開ビューに変換する
    pub fn to_view(&self) -> AccountView {
        AccountView {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            initials: self.initials.clone(),
            avatar: self.avatar.clone(),
            created_at: self.created_at,
        }
    }
}

/// アカウントの公開ビュー
///
/// パスワードフィールドを構造的に持たないため、どのコードパスからも
/// 認証情報が流出しない。ハンドラが返すアカウント情報はすべてこの型。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    pub id: AccountId,
    pub email: Email,
    pub name: AccountName,
    pub initials: String,
    pub avatar: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// アカウント一覧（永続化単位）
///
/// 挿入順を保持する追記専用のリスト。削除・更新は存在しない。
/// 永続化レイアウト `{"users": [...]}` に合わせ、フィールド名は `users`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccountCollection {
    users: Vec<Account>,
}

impl AccountCollection {
    /// 空のコレクションを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のアカウント列からコレクションを作成する
    pub fn from_accounts(users: Vec<Account>) -> Self {
        Self { users }
    }

    /// アカウントを末尾に追加する
    ///
    /// メールアドレスの一意性検査は呼び出し元の責務。
    pub fn push(&mut self, account: Account) {
        self.users.push(account);
    }

    /// メールアドレスとパスワードの組が一致する最初のアカウントを返す
    pub fn find_by_credentials(&self, email: &str, password: &str) -> Option<&Account> {
        self.users
            .iter()
            .find(|a| a.matches_credentials(email, password))
    }

    /// メールアドレスが一致する最初のアカウントを返す
    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.users.iter().find(|a| a.has_email(email))
    }

    /// ID が一致する最初のアカウントを返す
    pub fn find_by_id(&self, id: &AccountId) -> Option<&Account> {
        self.users.iter().find(|a| a.id() == id)
    }

    /// メールアドレスが登録済みか判定する
    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.users
    }
}
