/// 요청/응답 DTO 와 엔티티 간 변환
// region:    --- Imports
use super::model::{Auction, Item, ItemPatch, Status};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- DTOs
/// 경매 조회 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDto {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

/// 경매 생성 요청
///
/// `auctionEnd` 는 저장 정밀도(마이크로초)로 절삭된다. 나노초 단위 입력은
/// 생성 응답과 이후 조회에서 마이크로초까지만 돌아온다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionDto {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
    pub reserve_price: i32,
    pub auction_end: DateTime<Utc>,
}

/// 경매 수정 요청 (모든 필드 선택)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAuctionDto {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub year: Option<i32>,
}
// endregion: --- DTOs

// region:    --- Mapping
impl From<&Auction> for AuctionDto {
    fn from(auction: &Auction) -> Self {
        Self {
            id: auction.id,
            reserve_price: auction.reserve_price,
            seller: auction.seller.clone(),
            winner: auction.winner.clone(),
            sold_amount: auction.sold_amount,
            current_high_bid: auction.current_high_bid,
            created_at: auction.created_at,
            updated_at: auction.updated_at,
            auction_end: auction.auction_end,
            status: auction.status.to_string(),
            make: auction.item.make.clone(),
            model: auction.item.model.clone(),
            year: auction.item.year,
            color: auction.item.color.clone(),
            mileage: auction.item.mileage,
            image_url: auction.item.image_url.clone(),
        }
    }
}

impl CreateAuctionDto {
    /// 새 경매와 상품 엔티티 생성. Id 는 여기서 한 번만 발급된다.
    pub fn into_auction(self, seller: String, now: DateTime<Utc>) -> Auction {
        Auction {
            id: Uuid::new_v4(),
            reserve_price: self.reserve_price,
            seller,
            winner: None,
            sold_amount: None,
            current_high_bid: None,
            created_at: now,
            updated_at: now,
            auction_end: self.auction_end.trunc_subsecs(6),
            status: Status::Live,
            item: Item {
                id: Uuid::new_v4(),
                make: self.make,
                model: self.model,
                year: self.year,
                color: self.color,
                mileage: self.mileage,
                image_url: self.image_url,
            },
        }
    }
}

impl From<UpdateAuctionDto> for ItemPatch {
    fn from(dto: UpdateAuctionDto) -> Self {
        Self {
            make: dto.make,
            model: dto.model,
            color: dto.color,
            mileage: dto.mileage,
            year: dto.year,
        }
    }
}
// endregion: --- Mapping

// endregion: --- Tests
