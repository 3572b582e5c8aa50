//! Display variant selection for a listing card.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::recency::{is_new_shoe_within, new_release_window, parse_release_date};

/// How a listing card is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Listing has a sale price.
    OnSale,
    /// Listing was released inside the new-release window.
    NewRelease,
    /// Neither on sale nor recently released.
    #[default]
    Default,
}

impl Variant {
    /// Pick the variant from typed inputs.
    ///
    /// A sale price wins over a recent release date.
    pub fn select(sale_price: Option<f64>, released_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::select_within(sale_price, released_at, now, new_release_window())
    }

    /// Same as [`Variant::select`] with an explicit new-release window.
    pub fn select_within(
        sale_price: Option<f64>,
        released_at: DateTime<Utc>,
        now: DateTime<Utc>,
        window: Duration,
    ) -> Self {
        if sale_price.is_some() {
            Variant::OnSale
        } else if is_new_shoe_within(released_at, now, window) {
            Variant::NewRelease
        } else {
            Variant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(Variant::OnSale),
            "new-release" => Some(Variant::NewRelease),
            "default" => Some(Variant::Default),
            _ => None,
        }
    }

    /// Check if the regular price should be shown struck through.
    pub fn is_on_sale(&self) -> bool {
        *self == Variant::OnSale
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pick the variant from a raw release date string.
///
/// The release date is validated even when a sale price already decides
/// the outcome.
pub fn select_variant(
    sale_price: Option<f64>,
    release_date: &str,
    now: DateTime<Utc>,
) -> Result<Variant> {
    let released_at = parse_release_date(release_date)?;
    Ok(Variant::select(sale_price, released_at, now))
}
