use crate::api::traits::Geocoder;
use crate::models::{AddressInfo, Coordinates};
use anyhow::Result;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Outcome of a completed address search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub coordinates: Coordinates,
    /// Reverse-geocoded details; `None` when that second lookup failed
    pub address: Option<AddressInfo>,
}

/// Address search where each new query supersedes the one still in flight.
///
/// A superseded search resolves to `Ok(None)` instead of racing the newer
/// result back to the caller.
pub struct AddressSearch<G> {
    geocoder: G,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl<G: Geocoder> AddressSearch<G> {
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            in_flight: Mutex::new(None),
        }
    }

    pub async fn search(&self, address: &str) -> Result<Option<SearchHit>> {
        let address = address.trim();
        if address.is_empty() {
            anyhow::bail!("Address must not be empty");
        }

        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.lock().await.replace(token.clone()) {
            previous.cancel();
        }

        tokio::select! {
            _ = token.cancelled() => {
                debug!("Address search for '{}' superseded", address);
                Ok(None)
            }
            hit = self.lookup(address) => hit.map(Some),
        }
    }

    /// Cancel whatever search is still running
    pub async fn cancel(&self) {
        if let Some(token) = self.in_flight.lock().await.take() {
            token.cancel();
        }
    }

    async fn lookup(&self, address: &str) -> Result<SearchHit> {
        let coordinates = self.geocoder.geocode(address).await?;
        debug!(
            "Geocoded '{}' to ({}, {})",
            address, coordinates.latitude, coordinates.longitude
        );

        let address = match self
            .geocoder
            .reverse_geocode(coordinates.latitude, coordinates.longitude)
            .await
        {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Reverse geocoding failed: {:#}", e);
                None
            }
        };

        Ok(SearchHit {
            coordinates,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Notify;

    struct FakeGeocoder {
        started: Arc<Notify>,
    }

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn geocode(&self, address: &str) -> Result<Coordinates> {
            if address == "느린 주소" {
                self.started.notify_one();
                std::future::pending::<()>().await;
            }
            if address == "없는 주소" {
                anyhow::bail!("주소를 찾을 수 없습니다.");
            }
            Ok(Coordinates {
                latitude: 37.5,
                longitude: 127.03,
            })
        }

        async fn reverse_geocode(&self, latitude: f64, _longitude: f64) -> Result<AddressInfo> {
            if latitude > 90.0 {
                anyhow::bail!("out of range");
            }
            Ok(AddressInfo {
                road_address: Some("서울 강남구 테헤란로 152".into()),
                ..Default::default()
            })
        }
    }

    fn search() -> (Arc<AddressSearch<FakeGeocoder>>, Arc<Notify>) {
        let started = Arc::new(Notify::new());
        let search = AddressSearch::new(FakeGeocoder {
            started: started.clone(),
        });
        (Arc::new(search), started)
    }

    #[tokio::test]
    async fn test_search_resolves_coordinates_and_address() {
        let (search, _) = search();
        let hit = search.search("  강남역 ").await.unwrap().unwrap();

        assert_eq!(hit.coordinates.latitude, 37.5);
        assert_eq!(
            hit.address.as_ref().map(AddressInfo::display_address),
            Some("서울 강남구 테헤란로 152")
        );
    }

    #[tokio::test]
    async fn test_newer_search_supersedes_in_flight_one() {
        let (search, started) = search();

        let first = tokio::spawn({
            let search = search.clone();
            async move { search.search("느린 주소").await }
        });
        started.notified().await;

        let second = search.search("강남역").await.unwrap();
        assert!(second.is_some());
        assert!(first.await.unwrap().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cancel_stops_in_flight_search() {
        let (search, started) = search();

        let pending = tokio::spawn({
            let search = search.clone();
            async move { search.search("느린 주소").await }
        });
        started.notified().await;
        search.cancel().await;

        assert!(pending.await.unwrap().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_address_and_lookup_errors() {
        let (search, _) = search();

        assert!(search.search("   ").await.is_err());
        let err = search.search("없는 주소").await.unwrap_err();
        assert!(err.to_string().contains("주소를 찾을 수 없습니다."));
    }
}
