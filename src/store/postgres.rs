// region:    --- Imports
use super::queries;
use super::AuctionStore;
use crate::auction::model::{Auction, Item, ItemPatch};
use crate::database::DatabaseManager;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Row Model
/// auctions + items 조인 결과
#[derive(Debug, FromRow)]
struct AuctionRow {
    id: Uuid,
    reserve_price: i32,
    seller: String,
    winner: Option<String>,
    sold_amount: Option<i32>,
    current_high_bid: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    auction_end: DateTime<Utc>,
    status: String,
    item_id: Uuid,
    make: String,
    model: String,
    year: i32,
    color: String,
    mileage: i32,
    image_url: String,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = StoreError;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse()
            .map_err(|source| StoreError::Corrupt { id: row.id, source })?;
        Ok(Auction {
            id: row.id,
            reserve_price: row.reserve_price,
            seller: row.seller,
            winner: row.winner,
            sold_amount: row.sold_amount,
            current_high_bid: row.current_high_bid,
            created_at: row.created_at,
            updated_at: row.updated_at,
            auction_end: row.auction_end,
            status,
            item: Item {
                id: row.item_id,
                make: row.make,
                model: row.model,
                year: row.year,
                color: row.color,
                mileage: row.mileage,
                image_url: row.image_url,
            },
        })
    }
}
// endregion: --- Row Model

// region:    --- Postgres Store
/// Postgres 경매 저장소
pub struct PostgresAuctionStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresAuctionStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

#[async_trait]
impl AuctionStore for PostgresAuctionStore {
    async fn list_auctions(&self) -> Result<Vec<Auction>, StoreError> {
        info!("{:<12} --> 모든 경매 조회", "Store");
        let rows = sqlx::query_as::<_, AuctionRow>(queries::LIST_AUCTIONS)
            .fetch_all(self.db_manager.pool())
            .await?;
        rows.into_iter().map(Auction::try_from).collect()
    }

    async fn get_auction(&self, id: Uuid) -> Result<Option<Auction>, StoreError> {
        info!("{:<12} --> 경매 조회 id: {}", "Store", id);
        sqlx::query_as::<_, AuctionRow>(queries::GET_AUCTION)
            .bind(id)
            .fetch_optional(self.db_manager.pool())
            .await?
            .map(Auction::try_from)
            .transpose()
    }

    async fn auction_exists(&self, id: Uuid) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(queries::AUCTION_EXISTS)
            .bind(id)
            .fetch_one(self.db_manager.pool())
            .await?;
        Ok(exists)
    }

    async fn insert_auction(&self, auction: &Auction) -> Result<u64, StoreError> {
        info!("{:<12} --> 경매 저장 id: {}", "Store", auction.id);
        let auction = auction.clone();
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let mut rows = sqlx::query(queries::INSERT_AUCTION)
                        .bind(auction.id)
                        .bind(auction.reserve_price)
                        .bind(&auction.seller)
                        .bind(&auction.winner)
                        .bind(auction.sold_amount)
                        .bind(auction.current_high_bid)
                        .bind(auction.created_at)
                        .bind(auction.updated_at)
                        .bind(auction.auction_end)
                        .bind(auction.status.as_str())
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    rows += sqlx::query(queries::INSERT_ITEM)
                        .bind(auction.item.id)
                        .bind(&auction.item.make)
                        .bind(&auction.item.model)
                        .bind(auction.item.year)
                        .bind(&auction.item.color)
                        .bind(auction.item.mileage)
                        .bind(&auction.item.image_url)
                        .bind(auction.id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    Ok::<u64, StoreError>(rows)
                })
            })
            .await
    }

    async fn update_auction(
        &self,
        id: Uuid,
        patch: &ItemPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        info!("{:<12} --> 경매 수정 id: {}", "Store", id);
        let patch = patch.clone();
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let mut rows = sqlx::query(queries::UPDATE_ITEM)
                        .bind(patch.make)
                        .bind(patch.model)
                        .bind(patch.year)
                        .bind(patch.color)
                        .bind(patch.mileage)
                        .bind(id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    rows += sqlx::query(queries::TOUCH_AUCTION)
                        .bind(updated_at)
                        .bind(id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    Ok::<u64, StoreError>(rows)
                })
            })
            .await
    }

    async fn delete_auction(&self, id: Uuid) -> Result<u64, StoreError> {
        info!("{:<12} --> 경매 삭제 id: {}", "Store", id);
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let rows = sqlx::query(queries::DELETE_AUCTION)
                        .bind(id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();
                    Ok::<u64, StoreError>(rows)
                })
            })
            .await
    }
}
// endregion: --- Postgres Store
