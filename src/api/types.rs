use crate::models::PropertyRecord;
use serde::{Deserialize, Serialize};

/// Query parameters for the property list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListQuery {
    /// Zero-based page index
    pub page: u32,
    /// Page size
    pub size: u32,
    /// Sort expression, e.g. "createdAt,desc"
    pub sort: String,
    /// Only return listings in this status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort: "createdAt,desc".to_string(),
            status: Some("AVAILABLE".to_string()),
        }
    }
}

impl ListQuery {
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page + 1,
            ..self.clone()
        }
    }
}

pub const MAX_FAVORITES_PAGE: u32 = 200;

/// Paging for the favorites panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoritesQuery {
    pub limit: u32,
    pub offset: u32,
}

impl FavoritesQuery {
    /// Clamps `limit` into 1..=200 and negative offsets to 0
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_FAVORITES_PAGE as i64) as u32,
            offset: offset.clamp(0, u32::MAX as i64) as u32,
        }
    }
}

impl Default for FavoritesQuery {
    fn default() -> Self {
        Self::new(20, 0)
    }
}

/// The list endpoint answers with either a bare array or a Spring page
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PropertyListResponse {
    Items(Vec<PropertyRecord>),
    Page { content: Vec<PropertyRecord> },
}

impl PropertyListResponse {
    pub(crate) fn into_records(self) -> Vec<PropertyRecord> {
        match self {
            Self::Items(items) => items,
            Self::Page { content } => content,
        }
    }
}

/// Response of the favorite toggle endpoint: a bare flag or `{"favored": ..}`
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub(crate) enum FavoriteToggle {
    Flag(bool),
    Body { favored: bool },
}

impl FavoriteToggle {
    pub(crate) fn favored(self) -> bool {
        match self {
            Self::Flag(favored) | Self::Body { favored } => favored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_favorites_query_clamps() {
        assert_eq!(FavoritesQuery::new(0, -5), FavoritesQuery { limit: 1, offset: 0 });
        assert_eq!(FavoritesQuery::new(500, 40), FavoritesQuery { limit: 200, offset: 40 });
        assert_eq!(FavoritesQuery::new(50, 10), FavoritesQuery { limit: 50, offset: 10 });
    }

    #[test]
    fn test_list_response_shapes() {
        let bare: PropertyListResponse = serde_json::from_value(json!([{ "id": 1 }, { "id": 2 }])).unwrap();
        assert_eq!(bare.into_records().len(), 2);

        let page: PropertyListResponse = serde_json::from_value(json!({
            "content": [{ "id": 3, "offers": [] }],
            "totalElements": 1,
            "number": 0
        }))
        .unwrap();
        let records = page.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 3);
    }

    #[test]
    fn test_page_with_null_flags_still_adapts() {
        let page: PropertyListResponse = serde_json::from_value(json!({
            "content": [
                { "id": 1, "anomalyAlert": false, "offers": [{ "type": "SALE", "totalPrice": 150000000, "isActive": true }] },
                { "id": 2, "anomalyAlert": null, "offers": [{ "type": "WOLSE", "deposit": 10000000, "monthlyRent": 500000, "isActive": null, "oftion": -1 }] }
            ]
        }))
        .unwrap();

        let prices: Vec<String> = page
            .into_records()
            .iter()
            .map(|record| crate::adapter::to_card_model(record).price)
            .collect();
        assert_eq!(prices, vec!["매매 1억 5000", "월세 1000만/ 50만"]);
    }

    #[test]
    fn test_favorite_toggle_shapes() {
        let flag: FavoriteToggle = serde_json::from_value(json!(true)).unwrap();
        let body: FavoriteToggle = serde_json::from_value(json!({ "favored": false })).unwrap();
        assert!(flag.favored());
        assert!(!body.favored());
    }

    #[test]
    fn test_list_query_defaults_and_paging() {
        let query = ListQuery::default();
        assert_eq!(query.sort, "createdAt,desc");
        assert_eq!(query.status.as_deref(), Some("AVAILABLE"));
        assert_eq!(query.next_page().page, 1);
    }
}
