//! Shoe listing as supplied by the catalog layer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ListingError, Result};
use crate::money::{Currency, Money};
use crate::recency::{new_release_window, parse_release_date};
use crate::slug::Slug;
use crate::variant::Variant;

/// A shoe shown in a listing grid.
///
/// Prices are numbers in the currency's minor unit. `sale_price` is expected
/// to be lower than `price`; that is not checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    /// URL slug, also the listing's identity.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Image URL or path.
    pub image_src: String,
    /// Regular price in minor units.
    pub price: f64,
    /// Promotional price in minor units, if on sale.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// Release date (RFC 3339 or `YYYY-MM-DD`).
    pub release_date: String,
    /// Number of colorways available.
    #[serde(default)]
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Parse a listing from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a list of listings from a JSON array.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed release date.
    pub fn released_at(&self) -> Result<DateTime<Utc>> {
        parse_release_date(&self.release_date)
    }

    /// Display variant at `now` with the default new-release window.
    pub fn variant(&self, now: DateTime<Utc>) -> Result<Variant> {
        self.variant_within(now, new_release_window())
    }

    /// Display variant at `now` with an explicit new-release window.
    pub fn variant_within(&self, now: DateTime<Utc>, window: Duration) -> Result<Variant> {
        let released_at = self.released_at()?;
        Ok(Variant::select_within(self.sale_price, released_at, now, window))
    }

    /// Regular price as money.
    pub fn regular_price(&self, currency: Currency) -> Result<Money> {
        Money::from_minor_units(self.price, currency)
    }

    /// Sale price as money, if any.
    pub fn sale_money(&self, currency: Currency) -> Result<Option<Money>> {
        self.sale_price
            .map(|amount| Money::from_minor_units(amount, currency))
            .transpose()
    }

    /// Check the fields needed to render a card.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ListingError::invalid(format!(
                "listing {} has an empty name",
                self.slug
            )));
        }
        self.regular_price(Currency::default())?;
        self.sale_money(Currency::default())?;
        self.released_at()?;
        Ok(())
    }
}
