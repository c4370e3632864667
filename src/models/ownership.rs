use super::de;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review state of an ownership claim
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Unknown(String),
}

impl From<String> for ClaimStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => Self::Pending,
            "APPROVED" => Self::Approved,
            "REJECTED" => Self::Rejected,
            _ => Self::Unknown(value),
        }
    }
}

impl From<ClaimStatus> for String {
    fn from(value: ClaimStatus) -> Self {
        match value {
            ClaimStatus::Pending => "PENDING".to_string(),
            ClaimStatus::Approved => "APPROVED".to_string(),
            ClaimStatus::Rejected => "REJECTED".to_string(),
            ClaimStatus::Unknown(raw) => raw,
        }
    }
}

/// Ownership claim filed by the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    #[serde(alias = "claimId")]
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub property_address: Option<String>,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_phone: Option<String>,
    #[serde(default)]
    pub relationship_to_property: Option<String>,
    #[serde(default)]
    pub status: Option<ClaimStatus>,
    #[serde(default, deserialize_with = "de::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::timestamp")]
    pub deadline: Option<DateTime<Utc>>,
}

impl ClaimRecord {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("매물 제목 없음")
    }

    pub fn display_address(&self) -> &str {
        self.address
            .as_deref()
            .or(self.property_address.as_deref())
            .unwrap_or("주소 정보 없음")
    }
}

/// Result of a forward geocoding lookup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Result of a reverse geocoding lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    #[serde(default)]
    pub road_address: Option<String>,
    #[serde(default)]
    pub jibun_address: Option<String>,
    #[serde(default)]
    pub building_name: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl AddressInfo {
    /// Road-name address when known, else the lot-number address
    pub fn display_address(&self) -> &str {
        self.road_address
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.jibun_address.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_claim_display_fallbacks() {
        let claim: ClaimRecord = serde_json::from_value(json!({
            "claimId": 3,
            "propertyAddress": "서울시 마포구 합정동",
            "status": "PENDING"
        }))
        .unwrap();

        assert_eq!(claim.id, 3);
        assert_eq!(claim.display_title(), "매물 제목 없음");
        assert_eq!(claim.display_address(), "서울시 마포구 합정동");
        assert_eq!(claim.status, Some(ClaimStatus::Pending));
    }

    #[test]
    fn test_address_info_prefers_road_address() {
        let info = AddressInfo {
            road_address: Some("서울 강남구 테헤란로 152".into()),
            jibun_address: Some("서울 강남구 역삼동 737".into()),
            ..Default::default()
        };
        assert_eq!(info.display_address(), "서울 강남구 테헤란로 152");

        let jibun_only = AddressInfo {
            road_address: Some(String::new()),
            jibun_address: Some("서울 강남구 역삼동 737".into()),
            ..Default::default()
        };
        assert_eq!(jibun_only.display_address(), "서울 강남구 역삼동 737");
        assert_eq!(AddressInfo::default().display_address(), "");
    }
}
