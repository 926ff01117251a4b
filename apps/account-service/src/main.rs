//! # Account Service サーバー
//!
//! メール/パスワード認証とアカウント登録を担当する API サーバー。
//!
//! ## 役割
//!
//! - **ログイン**: メールアドレスとパスワードの完全一致による認証
//! - **アカウント登録**: 一意性検査付きの登録と JSON ファイルへの永続化
//! - **アカウント検索**: ID 指定の取得
//!
//! 認証に成功しても返すのは公開ビューのみで、パスワードは
//! どのレスポンスにも含まれない。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ACCOUNT_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ACCOUNT_PORT` | **Yes** | ポート番号 |
//! | `ACCOUNTS_FILE` | No | ストアファイルのパス（デフォルト: `users.json`） |
//!
//! ## 起動方法
//!
//! ```bash
//! ACCOUNT_PORT=15000 cargo run -p origin-account-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use origin_account_service::{
    app::build_router,
    config::ServiceConfig,
    handler::{AuthState, ReadinessState},
    usecase::AuthUseCaseImpl,
};
use origin_domain::clock::{Clock, SystemClock};
use origin_infra::{AccountRepository, AccountStore, FileAccountRepository};
use origin_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// Account Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("account-service");
    origin_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "account-service").entered();

    // 設定読み込み
    let config = ServiceConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "Account Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // 依存コンポーネントを初期化
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store = AccountStore::new(&config.accounts_file);

    // 永続化状態が存在しない場合はシードアカウントで初期化
    store
        .ensure_seed(clock.now())
        .expect("ストアの初期化に失敗しました");
    tracing::info!(path = %store.path().display(), "ストアを準備しました");

    let readiness_state = Arc::new(ReadinessState {
        store: store.clone(),
    });

    let repository: Arc<dyn AccountRepository> = Arc::new(FileAccountRepository::new(store));
    let auth_usecase = AuthUseCaseImpl::new(repository, clock);
    let auth_state = Arc::new(AuthState {
        usecase: Arc::new(auth_usecase),
    });

    // ルーター構築
    let app = build_router(auth_state, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Account Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
