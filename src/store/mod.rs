/// 경매 저장소
/// 쓰기 메서드는 커밋된 변경 행 수를 반환한다. 0 이면 저장 실패로 해석한다.
// region:    --- Imports
use crate::auction::model::{Auction, ItemPatch};
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Modules
pub mod memory;
pub mod postgres;
mod queries;

pub use memory::InMemoryAuctionStore;
pub use postgres::PostgresAuctionStore;
// endregion: --- Modules

// region:    --- Auction Store Trait
/// 경매 저장소 트레이트
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// 상품 제조사(make) 오름차순으로 모든 경매 조회
    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError>;

    /// 상품을 포함한 경매 조회
    async fn get_auction(&self, id: Uuid) -> Result<Option<Auction>, StoreError>;

    /// 경매 존재 여부 (상품은 읽지 않음)
    async fn auction_exists(&self, id: Uuid) -> Result<bool, StoreError>;

    /// 경매와 상품 저장
    async fn insert_auction(&self, auction: &Auction) -> Result<u64, StoreError>;

    /// 값이 있는 상품 필드만 한 번에 반영하고 수정 시각 갱신
    async fn update_auction(
        &self,
        id: Uuid,
        patch: &ItemPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, StoreError>;

    /// 경매 삭제 (상품은 함께 삭제됨)
    async fn delete_auction(&self, id: Uuid) -> Result<u64, StoreError>;
}
// endregion: --- Auction Store Trait
