pub mod client;
pub mod search;
pub mod traits;
pub mod types;

pub use client::PropertyApi;
pub use search::{AddressSearch, SearchHit};
pub use traits::{Geocoder, PropertySource};
pub use types::{FavoritesQuery, ListQuery};
