//! Card view models for a Korean real-estate listing site.
//!
//! Listing API records (a property plus its sale / jeonse / wolse offers) are
//! turned into display-ready cards by [`adapter`]; [`api`] talks to the
//! listing API and [`board`] keeps the per-page card state.

pub mod adapter;
pub mod api;
pub mod board;
pub mod chat;
pub mod claims;
pub mod config;
pub mod models;

pub use adapter::{to_card_model, CardAdapter};
pub use config::Config;
pub use models::{CardViewModel, OfferRecord, PropertyRecord};
