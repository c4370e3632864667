//! Page-scoped card state.
//!
//! Boards are plain values owned by whoever renders the page; nothing here is
//! global. A successful load replaces the previous contents.

use crate::adapter::CardAdapter;
use crate::api::{ListQuery, PropertySource};
use crate::models::CardViewModel;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How the last [`ListingBoard::load`] filled the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Cards came from the source; `skipped` records had no offers
    Loaded { cards: usize, skipped: usize },
    /// The source failed or had nothing tradable, fallback cards are shown
    Fallback { reason: String },
}

/// Property cards split into the recommended shelf and the main list
#[derive(Debug, Clone, Default)]
pub struct ListingBoard {
    recommended: Vec<CardViewModel>,
    regular: Vec<CardViewModel>,
    fallback: Vec<CardViewModel>,
}

impl ListingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards to show when the source cannot deliver any
    pub fn with_fallback(fallback: Vec<CardViewModel>) -> Self {
        Self {
            fallback,
            ..Self::default()
        }
    }

    pub fn recommended(&self) -> &[CardViewModel] {
        &self.recommended
    }

    pub fn regular(&self) -> &[CardViewModel] {
        &self.regular
    }

    /// Recommended cards first, then the rest
    pub fn cards(&self) -> impl Iterator<Item = &CardViewModel> {
        self.recommended.iter().chain(self.regular.iter())
    }

    pub fn len(&self) -> usize {
        self.recommended.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch a page, adapt every property that has offers, and shelve the cards
    pub async fn load(
        &mut self,
        source: &dyn PropertySource,
        query: &ListQuery,
        adapter: &CardAdapter,
    ) -> LoadOutcome {
        info!("Loading listings from {}...", source.source_name());

        let records = match source.fetch_properties(query).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to load listings: {:#}", e);
                return self.use_fallback(format!("fetch failed: {}", e));
            }
        };

        let total = records.len();
        let tradable: Vec<_> = records.into_iter().filter(|r| r.has_offers()).collect();
        info!("Tradable listings: {} (of {})", tradable.len(), total);

        if tradable.is_empty() {
            let reason = if total == 0 {
                "no listings returned"
            } else {
                "no listing has offers"
            };
            return self.use_fallback(reason.to_string());
        }

        let cards = tradable.iter().map(|record| adapter.adapt(record)).collect();
        self.shelve(cards);

        LoadOutcome::Loaded {
            cards: self.len(),
            skipped: total - tradable.len(),
        }
    }

    /// Replace the board contents with `cards`
    pub fn shelve(&mut self, cards: Vec<CardViewModel>) {
        let (recommended, regular): (Vec<_>, Vec<_>) = cards.into_iter().partition(|card| card.is_recommended);
        self.recommended = recommended;
        self.regular = regular;
    }

    /// Shelve the fallback cards; without any, the current cards stay up
    fn use_fallback(&mut self, reason: String) -> LoadOutcome {
        if self.fallback.is_empty() {
            info!("No fallback cards, keeping {} shown ({})", self.len(), reason);
        } else {
            info!("Showing {} fallback cards ({})", self.fallback.len(), reason);
            let fallback = self.fallback.clone();
            self.shelve(fallback);
        }
        LoadOutcome::Fallback { reason }
    }
}

/// A named set of cards picked for side-by-side comparison
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompareGroup {
    pub group_id: u32,
    pub items: Vec<CardViewModel>,
}

#[derive(Debug, Clone, Default)]
pub struct CompareBoard {
    groups: Vec<CompareGroup>,
}

impl CompareBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[CompareGroup] {
        &self.groups
    }

    /// Open an empty group and return its id, one past the highest so far
    pub fn add_group(&mut self) -> u32 {
        let group_id = self
            .groups
            .iter()
            .map(|g| g.group_id)
            .max()
            .map_or(1, |max| max + 1);
        self.groups.push(CompareGroup {
            group_id,
            items: Vec::new(),
        });
        group_id
    }

    /// Add a card to a group; false when the group does not exist
    pub fn add_item(&mut self, group_id: u32, card: CardViewModel) -> bool {
        match self.groups.iter_mut().find(|g| g.group_id == group_id) {
            Some(group) => {
                group.items.push(card);
                true
            }
            None => false,
        }
    }

    pub fn remove_group(&mut self, group_id: u32) -> Option<CompareGroup> {
        let index = self.groups.iter().position(|g| g.group_id == group_id)?;
        Some(self.groups.remove(index))
    }
}
