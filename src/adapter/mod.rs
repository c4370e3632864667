//! Turns listing API records into card view models.
//!
//! Every function here is total: missing offers, missing optional fields and
//! zero amounts degrade to placeholder text instead of failing.

pub mod format;
pub mod options;
pub mod recommend;

use crate::models::{CardViewModel, OfferRecord, OfferType, PropertyRecord};
use chrono::{DateTime, Utc};
use tracing::debug;

pub use format::{format_currency, format_details, format_location, format_price, generate_tags};
pub use options::{parse_options, OptionTable};
pub use recommend::determine_recommended;

/// Shown when no image is known for a property
pub const NO_IMAGE_URL: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// Stock photo used until listing images are joined in
pub const DEFAULT_LISTING_IMAGE: &str =
    "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop";

/// Lookup of the lead image for a property
pub trait ImageResolver: Send + Sync {
    /// URL of the first image, if one is known
    fn first_image_url(&self, property: &PropertyRecord) -> Option<String>;
}

/// Resolver that answers every property with the same URL
#[derive(Debug, Clone)]
pub struct PlaceholderImages {
    url: String,
}

impl PlaceholderImages {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for PlaceholderImages {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_IMAGE)
    }
}

impl ImageResolver for PlaceholderImages {
    fn first_image_url(&self, _property: &PropertyRecord) -> Option<String> {
        Some(self.url.clone())
    }
}

/// An offer is usable when its type has every required amount.
///
/// SALE needs a positive total price, JEONSE a positive deposit, and WOLSE a
/// non-negative deposit plus a positive monthly rent.
pub fn is_valid_offer(offer: &OfferRecord) -> bool {
    match offer.offer_type {
        Some(OfferType::Sale) => offer.total_price.is_some_and(|p| p > 0),
        Some(OfferType::Jeonse) => offer.deposit.is_some_and(|d| d > 0),
        Some(OfferType::Wolse) => {
            offer.deposit.is_some_and(|d| d >= 0) && offer.monthly_rent.is_some_and(|r| r > 0)
        }
        _ => false,
    }
}

/// The valid offer flagged active, else the first valid offer
pub fn select_active_offer(offers: &[OfferRecord]) -> Option<&OfferRecord> {
    let mut first_valid = None;
    for offer in offers.iter().filter(|o| is_valid_offer(o)) {
        if offer.is_active {
            return Some(offer);
        }
        first_valid.get_or_insert(offer);
    }
    first_valid
}

/// Adapter with a configurable amenity table and image lookup
pub struct CardAdapter {
    options: OptionTable,
    images: Box<dyn ImageResolver>,
}

impl CardAdapter {
    pub fn new(options: OptionTable, images: Box<dyn ImageResolver>) -> Self {
        Self { options, images }
    }

    pub fn with_images(images: Box<dyn ImageResolver>) -> Self {
        Self::new(OptionTable::default(), images)
    }

    /// Adapt against the current clock
    pub fn adapt(&self, property: &PropertyRecord) -> CardViewModel {
        self.adapt_at(property, Utc::now())
    }

    /// Adapt with an explicit "now" for the recommendation window
    pub fn adapt_at(&self, property: &PropertyRecord, now: DateTime<Utc>) -> CardViewModel {
        let dropped = property.offers.iter().filter(|o| !is_valid_offer(o)).count();
        if dropped > 0 {
            debug!("Property {}: ignoring {} invalid offer(s)", property.id, dropped);
        }

        let active = select_active_offer(&property.offers);

        let image = self
            .images
            .first_image_url(property)
            .unwrap_or_else(|| NO_IMAGE_URL.to_string());

        CardViewModel {
            id: property.id,
            image,
            price: format_price(active),
            location: format_location(property.address.as_deref()),
            details: format_details(property, active),
            tags: generate_tags(property),
            is_recommended: determine_recommended(property, now),
            building_year: property.building_year,
            options: self.options.parse(active.and_then(|o| o.oftion)),
            description: property.title.clone(),
            broker_name: String::new(),
            broker_phone: String::new(),
            status: property.status.clone(),
            area_m2: property.area_m2,
            listing_type: property.listing_type.clone(),
            location_x: property.location_x,
            location_y: property.location_y,
            anomaly_alert: property.anomaly_alert,
        }
    }
}

impl Default for CardAdapter {
    fn default() -> Self {
        Self::with_images(Box::new(PlaceholderImages::default()))
    }
}

/// Adapt a record with the default amenity table and placeholder image
pub fn to_card_model(property: &PropertyRecord) -> CardViewModel {
    CardAdapter::default().adapt(property)
}
