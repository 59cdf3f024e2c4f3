/// 경매 레코드 서비스
/// 1. 조회: 목록, 단건
/// 2. 명령: 생성, 수정, 삭제
// region:    --- Imports
use crate::auction::dto::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
use crate::auction::model::{self, ItemPatch};
use crate::error::ServiceError;
use crate::identity::Identity;
use crate::store::AuctionStore;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

// endregion: --- Imports

const CREATE_SAVE_FAILED: &str = "Could not save the changes to the DB";
const SAVE_FAILED: &str = "Could not save to db";

// region:    --- Auction Record Service
pub struct AuctionRecordService {
    store: Arc<dyn AuctionStore>,
}

impl AuctionRecordService {
    pub fn new(store: Arc<dyn AuctionStore>) -> Self {
        Self { store }
    }

    // region:    --- Queries

    /// 모든 경매 조회 (제조사 오름차순)
    pub async fn list_auctions(&self) -> Result<Vec<AuctionDto>, ServiceError> {
        info!("{:<12} --> 모든 경매 조회", "Query");
        let auctions = self.store.list_auctions().await?;
        Ok(auctions.iter().map(AuctionDto::from).collect())
    }

    /// 경매 조회
    pub async fn get_auction(&self, id: Uuid) -> Result<AuctionDto, ServiceError> {
        info!("{:<12} --> 경매 조회 id: {}", "Query", id);
        self.store
            .get_auction(id)
            .await?
            .map(|auction| AuctionDto::from(&auction))
            .ok_or(ServiceError::NotFound(id))
    }

    // endregion: --- Queries

    // region:    --- Commands

    /// 경매 생성
    pub async fn create_auction(
        &self,
        seller: &Identity,
        dto: CreateAuctionDto,
    ) -> Result<AuctionDto, ServiceError> {
        info!("{:<12} --> 경매 생성 요청: {:?}", "Command", dto);
        let auction = dto.into_auction(seller.name().to_string(), model::now());

        if self.store.insert_auction(&auction).await? == 0 {
            warn!("{:<12} --> 경매 저장 실패 id: {}", "Command", auction.id);
            return Err(ServiceError::SaveFailed(CREATE_SAVE_FAILED));
        }

        info!("{:<12} --> 경매 생성 완료 id: {}", "Command", auction.id);
        Ok(AuctionDto::from(&auction))
    }

    /// 경매 수정 (값이 있는 필드만 반영)
    pub async fn update_auction(
        &self,
        identity: &Identity,
        id: Uuid,
        dto: UpdateAuctionDto,
    ) -> Result<(), ServiceError> {
        info!(
            "{:<12} --> 경매 수정 요청 id: {}, 요청자: {}",
            "Command", id, identity
        );
        // TODO: 인증 연동 후 판매자 본인 여부 확인
        if !self.store.auction_exists(id).await? {
            return Err(ServiceError::NotFound(id));
        }

        // 값이 있는 필드만 저장소에서 한 문장으로 반영
        let patch = ItemPatch::from(dto);
        if patch.is_empty() {
            debug!("{:<12} --> 변경 필드 없음 id: {}", "Command", id);
        }

        if self.store.update_auction(id, &patch, model::now()).await? == 0 {
            warn!("{:<12} --> 경매 수정 저장 실패 id: {}", "Command", id);
            return Err(ServiceError::SaveFailed(SAVE_FAILED));
        }
        Ok(())
    }

    /// 경매 삭제
    pub async fn delete_auction(&self, identity: &Identity, id: Uuid) -> Result<(), ServiceError> {
        info!(
            "{:<12} --> 경매 삭제 요청 id: {}, 요청자: {}",
            "Command", id, identity
        );
        // TODO: 인증 연동 후 판매자 본인 여부 확인
        if !self.store.auction_exists(id).await? {
            return Err(ServiceError::NotFound(id));
        }

        if self.store.delete_auction(id).await? == 0 {
            warn!("{:<12} --> 경매 삭제 저장 실패 id: {}", "Command", id);
            return Err(ServiceError::SaveFailed(SAVE_FAILED));
        }
        Ok(())
    }

    // endregion: --- Commands
}
// endregion: --- Auction Record Service

// endregion: --- Tests
