/// 서버 설정 (명령행 인자 또는 환경 변수)
// region:    --- Imports
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::net::SocketAddr;

// endregion: --- Imports

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SELLER_PLACEHOLDER: &str = "Test";

// region:    --- Config
#[derive(Parser, Debug, Clone)]
#[command(name = "auction-service")]
#[command(about = "경매 레코드 REST 서버")]
pub struct Config {
    /// Postgres 접속 URL. 없으면 메모리 저장소로 동작
    #[arg(long = "database-url")]
    #[arg(env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// 커넥션 풀 최대 크기
    #[arg(long = "db-max-connections")]
    #[arg(env = "DB_MAX_CONNECTIONS")]
    #[arg(default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// 서버 바인드 주소
    #[arg(long = "listen-addr")]
    #[arg(env = "LISTEN_ADDR")]
    #[arg(default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// 인증 연동 전까지 판매자로 사용하는 값
    #[arg(long = "seller-placeholder")]
    #[arg(env = "SELLER_PLACEHOLDER")]
    #[arg(default_value = DEFAULT_SELLER_PLACEHOLDER)]
    pub seller_placeholder: String,

    /// 기동 시 테이블 재생성 여부
    #[arg(long = "reset-database")]
    #[arg(env = "RESET_DATABASE")]
    #[arg(action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub reset_database: bool,
}
// endregion: --- Config
