//! Shoe listing card - server-rendered HTML component.
//!
//! Renders a card per listing with:
//! - A "Sale" or "Just released!" flag chosen from the listing's variant
//! - Regular price, struck through when a sale price is present
//! - Color count label and sale price row
//!
//! Variant selection and formatting live in `shoe-commerce`; this crate only
//! turns resolved values into markup.

pub mod config;
pub mod sections;
pub mod styles;

use chrono::{DateTime, Utc};

use shoe_commerce::error::Result;
use shoe_commerce::ShoeListing;
use shoe_observability::{LogFormat, StructuredLogger};

pub use config::CardConfig;
pub use sections::*;
pub use styles::shoe_card_styles;

/// Renders listing cards with a fixed configuration.
#[derive(Debug, Clone)]
pub struct ShoeCardRenderer {
    config: CardConfig,
    logger: StructuredLogger,
}

impl ShoeCardRenderer {
    /// Create a renderer, rejecting a config that fails validation.
    pub fn new(config: CardConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            logger: default_logger(),
        })
    }

    /// Replace the logger (e.g., to attach a request's render ID).
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Render a single card.
    pub fn render(&self, listing: &ShoeListing, now: DateTime<Utc>) -> Result<String> {
        match CardView::build(listing, now, &self.config) {
            Ok(view) => {
                self.logger
                    .debug_builder("Rendering shoe card")
                    .field("slug", listing.slug.as_str())
                    .field("variant", view.variant.as_str())
                    .emit();
                Ok(render_card(&view))
            }
            Err(e) => {
                self.logger
                    .warn_builder("Shoe card rejected")
                    .field("slug", listing.slug.as_str())
                    .field("error", e.to_string())
                    .emit();
                Err(e)
            }
        }
    }

    /// Render a grid of cards. The first invalid listing aborts the grid.
    pub fn render_grid(&self, listings: &[ShoeListing], now: DateTime<Utc>) -> Result<String> {
        let cards = listings
            .iter()
            .map(|listing| self.render(listing, now))
            .collect::<Result<Vec<_>>>()?;

        self.logger
            .info_builder("Rendered shoe grid")
            .field_i64("cards", cards.len() as i64)
            .emit();
        Ok(render_shoe_grid(&cards))
    }
}

impl Default for ShoeCardRenderer {
    fn default() -> Self {
        Self {
            config: CardConfig::default(),
            logger: default_logger(),
        }
    }
}

fn default_logger() -> StructuredLogger {
    StructuredLogger::new("shoe-card")
        .with_component("shoe-card")
        .with_format(LogFormat::Human)
}
