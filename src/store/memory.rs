// region:    --- Imports
use super::AuctionStore;
use crate::auction::model::{Auction, ItemPatch};
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- In-Memory Store
/// 메모리 경매 저장소
/// DATABASE_URL 이 없는 로컬 실행과 테스트에서 사용한다.
#[derive(Debug, Default)]
pub struct InMemoryAuctionStore {
    auctions: RwLock<HashMap<Uuid, Auction>>,
}

impl InMemoryAuctionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuctionStore for InMemoryAuctionStore {
    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError> {
        let mut auctions: Vec<Auction> = self.auctions.read().await.values().cloned().collect();
        // Postgres 쪽 COLLATE "C" 와 같은 바이트 순
        auctions.sort_by(|a, b| a.item.make.as_bytes().cmp(b.item.make.as_bytes()));
        Ok(auctions)
    }

    async fn get_auction(&self, id: Uuid) -> Result<Option<Auction>, StoreError> {
        Ok(self.auctions.read().await.get(&id).cloned())
    }

    async fn auction_exists(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.auctions.read().await.contains_key(&id))
    }

    async fn insert_auction(&self, auction: &Auction) -> Result<u64, StoreError> {
        let mut auctions = self.auctions.write().await;
        if auctions.contains_key(&auction.id) {
            debug!("{:<12} --> 이미 존재하는 경매 id: {}", "Store", auction.id);
            return Ok(0);
        }
        auctions.insert(auction.id, auction.clone());
        // 경매 + 상품
        Ok(2)
    }

    async fn update_auction(
        &self,
        id: Uuid,
        patch: &ItemPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        match self.auctions.write().await.get_mut(&id) {
            Some(stored) => {
                patch.clone().apply(&mut stored.item);
                stored.updated_at = updated_at;
                Ok(2)
            }
            None => Ok(0),
        }
    }

    async fn delete_auction(&self, id: Uuid) -> Result<u64, StoreError> {
        Ok(self.auctions.write().await.remove(&id).map_or(0, |_| 1))
    }
}
// endregion: --- In-Memory Store

// endregion: --- Tests
