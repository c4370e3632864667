use crate::api::types::ListQuery;
use crate::models::{AddressInfo, Coordinates, PropertyRecord};
use anyhow::Result;
use async_trait::async_trait;

/// Anything that can hand out pages of property records.
/// The HTTP client implements it; tests and demos plug in fixed lists.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch one page of properties with their offers
    async fn fetch_properties(&self, query: &ListQuery) -> Result<Vec<PropertyRecord>>;

    /// Short name used in log lines
    fn source_name(&self) -> &'static str;
}

/// Forward and reverse address lookups
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinates>;

    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<AddressInfo>;
}
