use crate::api::traits::{Geocoder, PropertySource};
use crate::api::types::{FavoriteToggle, FavoritesQuery, ListQuery, PropertyListResponse};
use crate::config::Config;
use crate::models::{
    AddressInfo, ClaimRecord, Coordinates, FavoriteRecord, PropertyRecord, UserProfile,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

const PROPERTIES_PATH: &str = "/api/properties";
const FAVORITES_PATH: &str = "/api/favorites";
const USERS_ME_PATH: &str = "/api/users/me";
const OWNERSHIP_PATH: &str = "/api/ownership";
const OWNERSHIP_MAP_PATH: &str = "/api/ownership/map";

/// Client for the listing platform's REST API
#[derive(Debug, Clone)]
pub struct PropertyApi {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl PropertyApi {
    /// Create a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = self
            .authorized(request)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", what))?;

        let response = ensure_success(response, what).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode {}", what))
    }

    /// One page of listings with their offers
    pub async fn fetch_property_list(&self, query: &ListQuery) -> Result<Vec<PropertyRecord>> {
        debug!("Fetching property list: {:?}", query);

        let request = self.client.get(self.url(PROPERTIES_PATH)).query(query);
        let page: PropertyListResponse = self.get_json(request, "property list").await?;
        let records = page.into_records();

        info!("Loaded {} properties (page {})", records.len(), query.page);
        Ok(records)
    }

    pub async fn my_favorites(&self, query: &FavoritesQuery) -> Result<Vec<FavoriteRecord>> {
        let request = self.client.get(self.url(FAVORITES_PATH)).query(query);
        self.get_json(request, "favorites").await
    }

    /// Flip the favorite flag; returns whether the property is now a favorite
    pub async fn toggle_favorite(&self, property_id: i64) -> Result<bool> {
        let url = self.url(&format!("{}/{}/toggle", FAVORITES_PATH, property_id));
        let toggle: FavoriteToggle = self.get_json(self.client.post(url), "favorite toggle").await?;

        debug!("Property {} favored={}", property_id, toggle.favored());
        Ok(toggle.favored())
    }

    pub async fn current_user(&self) -> Result<UserProfile> {
        self.get_json(self.client.get(self.url(USERS_ME_PATH)), "current user")
            .await
    }

    /// Ownership claims filed by the signed-in user
    pub async fn my_claims(&self) -> Result<Vec<ClaimRecord>> {
        let url = self.url(&format!("{}/my-claims", OWNERSHIP_PATH));
        let claims: Vec<ClaimRecord> = self.get_json(self.client.get(url), "ownership claims").await?;

        info!("Loaded {} ownership claims", claims.len());
        Ok(claims)
    }

    pub async fn claim_detail(&self, claim_id: i64) -> Result<ClaimRecord> {
        let url = self.url(&format!("{}/claims/{}", OWNERSHIP_PATH, claim_id));
        self.get_json(self.client.get(url), "claim detail").await
    }

    /// Address text to coordinates
    pub async fn geocode(&self, address: &str) -> Result<Coordinates> {
        let url = self.url(&format!("{}/coordinates", OWNERSHIP_MAP_PATH));
        let request = self.client.get(url).query(&[("address", address)]);
        self.get_json(request, "coordinates").await
    }

    /// Coordinates to address details
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<AddressInfo> {
        let url = self.url(&format!("{}/address", OWNERSHIP_MAP_PATH));
        let request = self
            .client
            .get(url)
            .query(&[("latitude", latitude), ("longitude", longitude)]);
        self.get_json(request, "address").await
    }
}

#[async_trait]
impl PropertySource for PropertyApi {
    async fn fetch_properties(&self, query: &ListQuery) -> Result<Vec<PropertyRecord>> {
        self.fetch_property_list(query).await
    }

    fn source_name(&self) -> &'static str {
        "listing-api"
    }
}

#[async_trait]
impl Geocoder for PropertyApi {
    async fn geocode(&self, address: &str) -> Result<Coordinates> {
        PropertyApi::geocode(self, address).await
    }

    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<AddressInfo> {
        PropertyApi::reverse_geocode(self, latitude, longitude).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Human-readable reason from an error body: its `message` field, else the raw text
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(message) }) if !message.is_empty() => Some(message),
        _ => Some(body.to_string()),
    }
}

async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Request for {} returned status: {}", what, status);
    match error_message(&body) {
        Some(reason) => anyhow::bail!("Failed to fetch {}: {} ({})", what, reason, status),
        None => anyhow::bail!("Failed to fetch {}: {}", what, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single canned response; the handle yields the request head
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&head).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    fn api(base_url: String, token: Option<&str>) -> PropertyApi {
        PropertyApi::new(&Config {
            base_url,
            access_token: token.map(str::to_string),
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"message":"권한 없음"}"#).as_deref(), Some("권한 없음"));
        assert_eq!(error_message("plain failure").as_deref(), Some("plain failure"));
        assert_eq!(error_message(r#"{"message":""}"#).as_deref(), Some(r#"{"message":""}"#));
        assert_eq!(error_message("  "), None);
    }

    #[tokio::test]
    async fn test_fetch_property_list_sends_query_and_token() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"content":[{"id":9,"offers":[{"type":"JEONSE","deposit":300000000}]}]}"#,
        )
        .await;

        let records = api(base_url, Some("tok"))
            .fetch_property_list(&ListQuery::default())
            .await
            .unwrap();
        let head = server.await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].offers[0].deposit, Some(300_000_000));
        assert!(head.starts_with("GET /api/properties?page=0&size=20&sort=createdAt%2Cdesc&status=AVAILABLE "));
        assert!(head.to_ascii_lowercase().contains("authorization: bearer tok"));
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let (base_url, server) =
            serve_once("404 Not Found", r#"{"message":"주소를 찾을 수 없습니다."}"#).await;

        let err = api(base_url, None).geocode("없는 주소").await.unwrap_err();
        let head = server.await.unwrap();

        assert!(err.to_string().contains("주소를 찾을 수 없습니다."));
        assert!(head.starts_with("GET /api/ownership/map/coordinates?address="));
        assert!(!head.to_ascii_lowercase().contains("authorization"));
    }
}
