//! # Account Service 設定
//!
//! 環境変数からアカウントサービスの設定を読み込む。
//!
//! ストアファイルのパスも設定値として注入する（暗黙のグローバルを持たない）。
//! テストではテストごとに別のパスを渡すことでストアを分離できる。

use std::{env, path::PathBuf};

/// アカウントサービスの設定
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// アカウントストアのファイルパス
    pub accounts_file: PathBuf,
}

impl ServiceConfig {
    /// 環境変数から設定を読み込む
    ///
    /// | 変数名 | 必須 | 説明 |
    /// |--------|------|------|
    /// | `ACCOUNT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
    /// | `ACCOUNT_PORT` | **Yes** | ポート番号 |
    /// | `ACCOUNTS_FILE` | No | ストアファイルのパス（デフォルト: `users.json`） |
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("ACCOUNT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ACCOUNT_PORT")?
                .parse()
                .expect("ACCOUNT_PORT は有効なポート番号である必要があります"),
            accounts_file: env::var("ACCOUNTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("users.json")),
        })
    }
}
