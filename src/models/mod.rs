mod de;
pub mod ownership;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use ownership::{AddressInfo, ClaimRecord, ClaimStatus, Coordinates, UserProfile};

/// Pricing scheme of an offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum OfferType {
    /// Outright purchase (매매)
    Sale,
    /// Lump-sum deposit lease (전세)
    Jeonse,
    /// Deposit plus monthly rent (월세)
    Wolse,
    Unknown(String),
}

impl From<String> for OfferType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SALE" => Self::Sale,
            "JEONSE" => Self::Jeonse,
            "WOLSE" => Self::Wolse,
            _ => Self::Unknown(value),
        }
    }
}

impl From<OfferType> for String {
    fn from(value: OfferType) -> Self {
        match value {
            OfferType::Sale => "SALE".to_string(),
            OfferType::Jeonse => "JEONSE".to_string(),
            OfferType::Wolse => "WOLSE".to_string(),
            OfferType::Unknown(raw) => raw,
        }
    }
}

/// Building category of an offer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum HouseType {
    Apart,
    Billa,
    One,
    Other(String),
}

impl HouseType {
    /// Display label; unknown categories show their raw code
    pub fn label(&self) -> &str {
        match self {
            Self::Apart => "아파트",
            Self::Billa => "빌라",
            Self::One => "원룸",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for HouseType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "APART" => Self::Apart,
            "BILLA" => Self::Billa,
            "ONE" => Self::One,
            _ => Self::Other(value),
        }
    }
}

impl From<HouseType> for String {
    fn from(value: HouseType) -> Self {
        match value {
            HouseType::Apart => "APART".to_string(),
            HouseType::Billa => "BILLA".to_string(),
            HouseType::One => "ONE".to_string(),
            HouseType::Other(raw) => raw,
        }
    }
}

/// Who listed the property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ListingType {
    Owner,
    Broker,
    Other(String),
}

impl From<String> for ListingType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "OWNER" => Self::Owner,
            "BROKER" => Self::Broker,
            _ => Self::Other(value),
        }
    }
}

impl From<ListingType> for String {
    fn from(value: ListingType) -> Self {
        match value {
            ListingType::Owner => "OWNER".to_string(),
            ListingType::Broker => "BROKER".to_string(),
            ListingType::Other(raw) => raw,
        }
    }
}

/// Listing availability; anything other than AVAILABLE is kept verbatim
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum PropertyStatus {
    Available,
    Other(String),
}

impl From<String> for PropertyStatus {
    fn from(value: String) -> Self {
        if value == "AVAILABLE" {
            Self::Available
        } else {
            Self::Other(value)
        }
    }
}

impl From<PropertyStatus> for String {
    fn from(value: PropertyStatus) -> Self {
        match value {
            PropertyStatus::Available => "AVAILABLE".to_string(),
            PropertyStatus::Other(raw) => raw,
        }
    }
}

/// One pricing offer attached to a property
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    #[serde(rename = "type", default)]
    pub offer_type: Option<OfferType>,
    #[serde(default, deserialize_with = "de::amount")]
    pub total_price: Option<i64>,
    #[serde(default, deserialize_with = "de::amount")]
    pub deposit: Option<i64>,
    #[serde(default, deserialize_with = "de::amount")]
    pub monthly_rent: Option<i64>,
    #[serde(default)]
    pub housetype: Option<HouseType>,
    /// Floor number. The card details also derive a room count from it.
    #[serde(default, deserialize_with = "de::int")]
    pub floor: Option<i32>,
    /// Amenity bit-field, see [`crate::adapter::OptionTable`]
    #[serde(default, deserialize_with = "de::int")]
    pub oftion: Option<u32>,
    #[serde(default, deserialize_with = "de::flag")]
    pub is_active: bool,
}

/// Property record as delivered by the listing API, offers included
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub area_m2: Option<f64>,
    #[serde(default)]
    pub building_year: Option<i32>,
    #[serde(default)]
    pub listing_type: Option<ListingType>,
    #[serde(default)]
    pub status: Option<PropertyStatus>,
    #[serde(default, deserialize_with = "de::flag")]
    pub anomaly_alert: bool,
    #[serde(default, deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location_x: Option<f64>,
    #[serde(default)]
    pub location_y: Option<f64>,
    #[serde(default, deserialize_with = "de::list")]
    pub offers: Vec<OfferRecord>,
}

impl PropertyRecord {
    pub fn has_offers(&self) -> bool {
        !self.offers.is_empty()
    }

    pub fn is_available(&self) -> bool {
        self.status == Some(PropertyStatus::Available)
    }
}

/// Entry of the signed-in user's favorites list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub property_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Display model for a single property card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardViewModel {
    pub id: i64,
    pub image: String,
    pub price: String,
    pub location: String,
    pub details: String,
    pub tags: Vec<String>,
    pub is_recommended: bool,
    pub building_year: Option<i32>,
    pub options: Vec<String>,
    pub description: Option<String>,
    pub broker_name: String,
    pub broker_phone: String,
    pub status: Option<PropertyStatus>,
    pub area_m2: Option<f64>,
    pub listing_type: Option<ListingType>,
    pub location_x: Option<f64>,
    pub location_y: Option<f64>,
    pub anomaly_alert: bool,
}
