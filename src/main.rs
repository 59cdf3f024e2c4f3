// region:    --- Imports
use auction_service::config::Config;
use auction_service::database::DatabaseManager;
use auction_service::handlers::{self, AppState};
use auction_service::identity::Identity;
use auction_service::service::AuctionRecordService;
use auction_service::store::{AuctionStore, InMemoryAuctionStore, PostgresAuctionStore};
use axum::extract::DefaultBodyLimit;
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    // 설정 로드 (인자 > 환경 변수 > 기본값)
    let config = Config::parse();

    // 저장소 생성
    let store: Arc<dyn AuctionStore> = match &config.database_url {
        Some(database_url) => {
            let db_manager =
                Arc::new(DatabaseManager::new(database_url, config.max_connections).await?);

            // 데이터베이스 초기화
            if let Err(e) = db_manager.initialize_database(config.reset_database).await {
                error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
                return Err(e.into());
            }
            info!("{:<12} --> 데이터베이스 초기화 성공", "Main");
            Arc::new(PostgresAuctionStore::new(db_manager))
        }
        None => {
            warn!(
                "{:<12} --> DATABASE_URL 미설정, 메모리 저장소로 실행",
                "Main"
            );
            Arc::new(InMemoryAuctionStore::new())
        }
    };

    let service = Arc::new(AuctionRecordService::new(store));
    let state = AppState::new(
        service,
        Identity::new(config.seller_placeholder.as_str()),
    );

    // 테스트 페이지를 위한 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 라우터 설정
    let routes_all = handlers::routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024));

    // 리스너 생성
    let listener = TcpListener::bind(config.listen_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}

/// Ctrl-C 수신 시 종료
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{:<12} --> 종료 신호 대기 실패: {}", "Main", e);
    }
    info!("{:<12} --> 서버 종료", "Main");
}
// endregion: --- Main
