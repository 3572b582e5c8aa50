//! Shoe listing domain types and display rules.
//!
//! - **Listing**: the `ShoeListing` record and its `Slug`
//! - **Money**: minor-unit prices and `format_price`
//! - **Variant**: on-sale / new-release / default selection
//! - **Recency**: release-date parsing and the 30-day new-release window
//! - **Text**: pluralized labels
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use shoe_commerce::prelude::*;
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
//! let variant = select_variant(Some(6000.0), "2019-06-15", now).unwrap();
//! assert_eq!(variant, Variant::OnSale);
//! assert_eq!(format_price(6000.0).unwrap(), "$60.00");
//! assert_eq!(pluralize("Color", 2), "Colors");
//! ```

pub mod error;
pub mod listing;
pub mod money;
pub mod recency;
pub mod slug;
pub mod text;
pub mod variant;

pub use error::ListingError;
pub use listing::ShoeListing;
pub use money::{Currency, Money};
pub use slug::Slug;
pub use variant::Variant;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ListingError;
    pub use crate::listing::ShoeListing;
    pub use crate::money::{format_price, format_price_in, Currency, Money};
    pub use crate::recency::{
        is_new_shoe, is_new_shoe_within, parse_release_date, NEW_RELEASE_WINDOW_DAYS,
    };
    pub use crate::slug::Slug;
    pub use crate::text::{count_label, pluralize};
    pub use crate::variant::{select_variant, Variant};
}
