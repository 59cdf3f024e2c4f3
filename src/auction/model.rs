use crate::error::UnknownStatus;
use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// region:    --- Status
/// 경매 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Live,
    Finished,
    ReserveNotMet,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "Live",
            Status::Finished => "Finished",
            Status::ReserveNotMet => "ReserveNotMet",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(Status::Live),
            "Finished" => Ok(Status::Finished),
            "ReserveNotMet" => Ok(Status::ReserveNotMet),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
// endregion: --- Status

// region:    --- Entities
/// 경매 엔티티
#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: Option<i32>,
    pub current_high_bid: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: Status,
    pub item: Item,
}

/// 경매 상품 (경매에 종속)
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: String,
}

/// 상품 부분 수정
/// 값이 있는 필드만 덮어쓴다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub year: Option<i32>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.make.is_none()
            && self.model.is_none()
            && self.color.is_none()
            && self.mileage.is_none()
            && self.year.is_none()
    }

    pub fn apply(self, item: &mut Item) {
        if let Some(make) = self.make {
            item.make = make;
        }
        if let Some(model) = self.model {
            item.model = model;
        }
        if let Some(color) = self.color {
            item.color = color;
        }
        if let Some(mileage) = self.mileage {
            item.mileage = mileage;
        }
        if let Some(year) = self.year {
            item.year = year;
        }
    }
}
// endregion: --- Entities

/// 현재 시각 (Postgres TIMESTAMPTZ 정밀도에 맞춰 마이크로초 단위로 절삭)
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

// endregion: --- Tests
