//! Money type for listing prices.
//!
//! Prices arrive as numbers in the currency's minor unit (cents for USD) and
//! are kept as integers so formatting never goes through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ListingError, Result};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Build a price from a raw minor-unit number.
    ///
    /// Rejects negative and non-finite amounts. Fractional minor units are
    /// rounded to the nearest unit.
    ///
    /// ```
    /// use shoe_commerce::money::{Money, Currency};
    /// let price = Money::from_minor_units(1099.0, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 1099);
    /// ```
    pub fn from_minor_units(amount: f64, currency: Currency) -> Result<Self> {
        if !amount.is_finite() {
            return Err(ListingError::invalid(format!(
                "price must be a finite number, got {}",
                amount
            )));
        }
        if amount < 0.0 {
            return Err(ListingError::invalid(format!(
                "price must not be negative, got {}",
                amount
            )));
        }
        let rounded = amount.round();
        if rounded >= i64::MAX as f64 {
            return Err(ListingError::invalid(format!(
                "price is out of range: {}",
                amount
            )));
        }
        Ok(Self::new(rounded as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), self.display_amount())
    }

    /// Format the absolute amount without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let units = self.amount_cents.unsigned_abs();
        if places == 0 {
            return units.to_string();
        }
        let divisor = 10_u64.pow(places);
        format!(
            "{}.{:0width$}",
            units / divisor,
            units % divisor,
            width = places as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a minor-unit USD amount for display (e.g., `1099` -> `"$10.99"`).
pub fn format_price(amount: f64) -> Result<String> {
    format_price_in(amount, Currency::USD)
}

/// Format a minor-unit amount in the given currency.
pub fn format_price_in(amount: f64, currency: Currency) -> Result<String> {
    Money::from_minor_units(amount, currency).map(|m| m.display())
}
