use listing_cards::adapter::{CardAdapter, PlaceholderImages};
use listing_cards::api::{ListQuery, PropertyApi};
use listing_cards::board::{ListingBoard, LoadOutcome};
use listing_cards::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Listing Cards");
    info!("==========================================");

    let config = Config::from_env()?;
    info!("Listing API: {}", config.base_url);

    let api = PropertyApi::new(&config)?;
    let adapter = match &config.placeholder_image {
        Some(url) => CardAdapter::with_images(Box::new(PlaceholderImages::new(url.clone()))),
        None => CardAdapter::default(),
    };

    let mut board = ListingBoard::new();
    match board.load(&api, &ListQuery::default(), &adapter).await {
        LoadOutcome::Loaded { cards, skipped } => {
            info!("\n✅ Built {} cards ({} listings without offers skipped)\n", cards, skipped);
        }
        LoadOutcome::Fallback { reason } => {
            info!("No cards to show: {}", reason);
        }
    }

    for (i, card) in board.cards().enumerate() {
        let star = if card.is_recommended { "★ " } else { "" };
        println!("{}. {}{} ({})", i + 1, star, card.price, card.location);
        println!("   {}", card.details);
        if let Some(description) = &card.description {
            println!("   {}", description);
        }
        if !card.tags.is_empty() {
            println!("   Tags: {}", card.tags.join(", "));
        }
        if !card.options.is_empty() {
            println!("   Options: {}", card.options.join(", "));
        }
        println!("   ID: {}", card.id);
        println!();
    }

    // Save all cards, recommended first
    let cards: Vec<_> = board.cards().collect();
    let json = serde_json::to_string_pretty(&cards)?;
    tokio::fs::write("cards.json", json).await?;
    info!("💾 Saved {} cards to cards.json", cards.len());

    Ok(())
}
