use async_trait::async_trait;
use auction_service::auction::dto::{AuctionDto, CreateAuctionDto};
use auction_service::auction::model::{self, Auction, ItemPatch};
use auction_service::database::DatabaseManager;
use auction_service::error::{StoreError, UnknownStatus};
use auction_service::handlers::{self, AppState};
use auction_service::identity::Identity;
use auction_service::service::AuctionRecordService;
use auction_service::store::{AuctionStore, InMemoryAuctionStore, PostgresAuctionStore};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

/// 트레이싱 초기화
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// 임의 포트로 서버를 띄우고 기본 주소를 돌려준다
async fn spawn_server(store: Arc<dyn AuctionStore>) -> String {
    init_tracing();
    let service = Arc::new(AuctionRecordService::new(store));
    let app = handlers::routes(AppState::new(service, Identity::new("Test")));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("리스너 생성 실패");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service()).await.unwrap();
    });
    format!("http://{}{}", addr, handlers::AUCTIONS_PATH)
}

async fn setup() -> (Client, String) {
    let base = spawn_server(Arc::new(InMemoryAuctionStore::new())).await;
    (Client::new(), base)
}

/// 테스트용 경매 생성 요청 본문
fn create_body(make: &str, reserve_price: i32) -> Value {
    json!({
        "make": make,
        "model": "Camry",
        "year": 2019,
        "color": "Grey",
        "mileage": 25000,
        "imageUrl": "https://cdn.example.com/camry.jpg",
        "reservePrice": reserve_price,
        "auctionEnd": (Utc::now() + Duration::days(10)).trunc_subsecs(0),
    })
}

async fn create_auction(client: &Client, base: &str, make: &str) -> AuctionDto {
    let response = client
        .post(base)
        .json(&create_body(make, 1000))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.unwrap()
}

/// 생성 → 조회 → 수정 → 삭제 시나리오
#[tokio::test]
async fn test_auction_lifecycle() {
    let (client, base) = setup().await;

    // 생성
    let response = client
        .post(&base)
        .json(&create_body("Toyota", 1000))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("Location 헤더 없음");
    let created: AuctionDto = response.json().await.unwrap();
    assert_eq!(created.make, "Toyota");
    assert_eq!(created.seller, "Test");
    assert_eq!(created.reserve_price, 1000);
    assert_eq!(location, format!("{}/{}", handlers::AUCTIONS_PATH, created.id));
    info!("생성된 경매 id: {}", created.id);

    // 조회
    let url = format!("{}/{}", base, created.id);
    let fetched: AuctionDto = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched, created);

    // 수정
    let response = client
        .put(&url)
        .json(&json!({ "mileage": 50000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: AuctionDto = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(updated.mileage, 50000);
    assert_eq!(updated.make, "Toyota");
    assert_eq!(updated.model, created.model);

    // 삭제
    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// 없는 경매는 404
#[tokio::test]
async fn test_missing_auction_is_not_found() {
    let (client, base) = setup().await;
    let url = format!("{}/{}", base, Uuid::new_v4());

    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .put(&url)
        .json(&json!({ "color": "Red" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// 목록은 제조사 오름차순
#[tokio::test]
async fn test_list_sorted_by_make() {
    let (client, base) = setup().await;
    for make in ["Porsche", "Audi", "Mazda", "Kia"] {
        create_auction(&client, &base, make).await;
    }

    let response = client.get(&base).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let auctions: Vec<AuctionDto> = response.json().await.unwrap();
    let makes: Vec<&str> = auctions.iter().map(|a| a.make.as_str()).collect();
    assert_eq!(makes, vec!["Audi", "Kia", "Mazda", "Porsche"]);
}

/// 빈 수정 요청은 상품을 바꾸지 않는다
#[tokio::test]
async fn test_empty_update_is_noop() {
    let (client, base) = setup().await;
    let created = create_auction(&client, &base, "Honda").await;
    let url = format!("{}/{}", base, created.id);

    let response = client.put(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: AuctionDto = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched.make, created.make);
    assert_eq!(fetched.model, created.model);
    assert_eq!(fetched.year, created.year);
    assert_eq!(fetched.color, created.color);
    assert_eq!(fetched.mileage, created.mileage);
}

/// 응답 본문은 camelCase
#[tokio::test]
async fn test_response_shape() {
    let (client, base) = setup().await;
    let created = create_auction(&client, &base, "Nissan").await;

    let body: Value = client
        .get(format!("{}/{}", base, created.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    for key in [
        "id",
        "reservePrice",
        "seller",
        "winner",
        "soldAmount",
        "currentHighBid",
        "createdAt",
        "updatedAt",
        "auctionEnd",
        "status",
        "make",
        "model",
        "year",
        "color",
        "mileage",
        "imageUrl",
    ] {
        assert!(body.get(key).is_some(), "응답에 {} 필드 없음", key);
    }
    assert_eq!(body["status"], "Live");
}

/// 커밋이 항상 0 행을 돌려주는 저장소
struct ZeroRowStore(InMemoryAuctionStore);

#[async_trait]
impl AuctionStore for ZeroRowStore {
    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError> {
        self.0.list_auctions().await
    }
    async fn get_auction(&self, id: Uuid) -> Result<Option<Auction>, StoreError> {
        self.0.get_auction(id).await
    }
    async fn auction_exists(&self, id: Uuid) -> Result<bool, StoreError> {
        self.0.auction_exists(id).await
    }
    async fn insert_auction(&self, _auction: &Auction) -> Result<u64, StoreError> {
        Ok(0)
    }
    async fn update_auction(
        &self,
        _id: Uuid,
        _patch: &ItemPatch,
        _updated_at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        Ok(0)
    }
    async fn delete_auction(&self, _id: Uuid) -> Result<u64, StoreError> {
        Ok(0)
    }
}

/// 손상된 상태 값을 읽어 오는 저장소
struct CorruptStore;

#[async_trait]
impl AuctionStore for CorruptStore {
    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError> {
        Err(corrupt(Uuid::new_v4()))
    }
    async fn get_auction(&self, id: Uuid) -> Result<Option<Auction>, StoreError> {
        Err(corrupt(id))
    }
    async fn auction_exists(&self, _id: Uuid) -> Result<bool, StoreError> {
        Ok(true)
    }
    async fn insert_auction(&self, _auction: &Auction) -> Result<u64, StoreError> {
        Ok(2)
    }
    async fn update_auction(
        &self,
        _id: Uuid,
        _patch: &ItemPatch,
        _updated_at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        Ok(2)
    }
    async fn delete_auction(&self, _id: Uuid) -> Result<u64, StoreError> {
        Ok(1)
    }
}

fn corrupt(id: Uuid) -> StoreError {
    StoreError::Corrupt {
        id,
        source: UnknownStatus("Sold".to_string()),
    }
}

/// 저장 실패는 400 과 오류 본문
#[tokio::test]
async fn test_save_failed_is_bad_request() {
    let inner = InMemoryAuctionStore::new();
    let dto: CreateAuctionDto = serde_json::from_value(create_body("Lexus", 2000)).unwrap();
    let existing = dto.into_auction("Test".to_string(), model::now());
    inner.insert_auction(&existing).await.unwrap();
    let base = spawn_server(Arc::new(ZeroRowStore(inner))).await;
    let client = Client::new();

    // 생성
    let response = client
        .post(&base)
        .json(&create_body("Toyota", 1000))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(reqwest::header::LOCATION).is_none());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Could not save the changes to the DB");

    // 수정
    let url = format!("{}/{}", base, existing.id);
    let response = client
        .put(&url)
        .json(&json!({ "mileage": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Could not save to db");

    // 삭제
    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Could not save to db");

    // 실패 후에도 기존 경매는 그대로
    let fetched: AuctionDto = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched.mileage, existing.item.mileage);
}

/// 저장소 오류는 500 과 오류 본문
#[tokio::test]
async fn test_store_error_is_internal_error() {
    let base = spawn_server(Arc::new(CorruptStore)).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/{}", base, Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Sold"));

    let response = client.get(&base).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

/// Postgres 저장소 왕복 테스트 (DATABASE_URL 필요)
#[tokio::test]
#[ignore]
async fn test_postgres_round_trip() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db_manager = Arc::new(DatabaseManager::new(&database_url, 5).await.unwrap());
    db_manager.initialize_database(false).await.unwrap();

    let base = spawn_server(Arc::new(PostgresAuctionStore::new(db_manager))).await;
    let client = Client::new();

    let created = create_auction(&client, &base, "Toyota").await;
    let url = format!("{}/{}", base, created.id);
    let fetched: AuctionDto = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched, created);

    let response = client
        .put(&url)
        .json(&json!({ "mileage": 50000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: AuctionDto = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(updated.mileage, 50000);
    assert_eq!(updated.make, "Toyota");

    let response = client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
