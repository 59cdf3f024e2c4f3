// region:    --- Imports
use crate::auction::dto::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
use crate::error::ServiceError;
use crate::identity::Identity;
use crate::service::AuctionRecordService;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

pub const AUCTIONS_PATH: &str = "/api/auctions";

// region:    --- State
/// 핸들러 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AuctionRecordService>,
    /// 인증 연동 전 판매자로 사용할 식별자
    pub seller_placeholder: Identity,
}

impl AppState {
    pub fn new(service: Arc<AuctionRecordService>, seller_placeholder: Identity) -> Self {
        Self {
            service,
            seller_placeholder,
        }
    }
}

/// 경매 라우터
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            AUCTIONS_PATH,
            get(handle_list_auctions).post(handle_create_auction),
        )
        .route(
            &format!("{AUCTIONS_PATH}/:id"),
            get(handle_get_auction)
                .put(handle_update_auction)
                .delete(handle_delete_auction),
        )
        .with_state(state)
}
// endregion: --- State

// region:    --- Query Handlers

/// 모든 경매 조회
pub async fn handle_list_auctions(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuctionDto>>, ServiceError> {
    info!("{:<12} --> 모든 경매 조회", "Handler");
    let auctions = state.service.list_auctions().await?;
    Ok(Json(auctions))
}

/// 경매 조회
pub async fn handle_get_auction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuctionDto>, ServiceError> {
    info!("{:<12} --> 경매 조회 id: {}", "Handler", id);
    let auction = state.service.get_auction(id).await?;
    Ok(Json(auction))
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 경매 생성
/// 201 과 함께 조회 경로를 Location 헤더로 돌려준다.
pub async fn handle_create_auction(
    State(state): State<AppState>,
    identity: Identity,
    Json(dto): Json<CreateAuctionDto>,
) -> Result<impl IntoResponse, ServiceError> {
    info!("{:<12} --> 경매 생성 요청", "Handler");
    let auction = state.service.create_auction(&identity, dto).await?;
    let location = format!("{AUCTIONS_PATH}/{}", auction.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(auction),
    ))
}

/// 경매 수정
pub async fn handle_update_auction(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateAuctionDto>,
) -> Result<StatusCode, ServiceError> {
    info!("{:<12} --> 경매 수정 요청 id: {}", "Handler", id);
    state.service.update_auction(&identity, id, dto).await?;
    Ok(StatusCode::OK)
}

/// 경매 삭제
pub async fn handle_delete_auction(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServiceError> {
    info!("{:<12} --> 경매 삭제 요청 id: {}", "Handler", id);
    state.service.delete_auction(&identity, id).await?;
    Ok(StatusCode::OK)
}

// endregion: --- Command Handlers
