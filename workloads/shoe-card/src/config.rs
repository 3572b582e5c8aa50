//! Card configuration.

use anyhow::{bail, Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use shoe_commerce::recency::NEW_RELEASE_WINDOW_DAYS;
use shoe_commerce::{Currency, ListingError};

/// Largest accepted new-release window, in days.
pub const MAX_NEW_RELEASE_WINDOW_DAYS: i64 = 36_500;

/// Presentation settings for shoe cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Currency used to format prices.
    #[serde(default)]
    pub currency: Currency,

    /// Days a release counts as new.
    #[serde(default = "default_window_days")]
    pub new_release_window_days: i64,

    /// Path prefix for card links (default: /shoe).
    #[serde(default = "default_link_prefix")]
    pub link_prefix: String,

    /// Flag text for on-sale cards.
    #[serde(default = "default_sale_label")]
    pub sale_label: String,

    /// Flag text for new releases.
    #[serde(default = "default_new_release_label")]
    pub new_release_label: String,

    /// Noun used for the color count.
    #[serde(default = "default_color_noun")]
    pub color_noun: String,
}

fn default_window_days() -> i64 {
    NEW_RELEASE_WINDOW_DAYS
}

fn default_link_prefix() -> String {
    "/shoe".to_string()
}

fn default_sale_label() -> String {
    "Sale".to_string()
}

fn default_new_release_label() -> String {
    "Just released!".to_string()
}

fn default_color_noun() -> String {
    "Color".to_string()
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            new_release_window_days: default_window_days(),
            link_prefix: default_link_prefix(),
            sale_label: default_sale_label(),
            new_release_label: default_new_release_label(),
            color_noun: default_color_noun(),
        }
    }
}

impl CardConfig {
    /// Load config from a TOML file, or JSON when the path ends in `.json`.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config = if path.ends_with(".json") {
            Self::from_json(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))?
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path))?;
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse config from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reject settings that cannot produce a sensible card.
    pub fn validate(&self) -> Result<()> {
        self.new_release_window()?;
        if self.sale_label.trim().is_empty() {
            bail!("sale_label must not be empty");
        }
        if self.new_release_label.trim().is_empty() {
            bail!("new_release_label must not be empty");
        }
        if self.color_noun.trim().is_empty() {
            bail!("color_noun must not be empty");
        }
        Ok(())
    }

    /// The new-release window as a duration.
    ///
    /// Fails unless the window is between 1 and
    /// [`MAX_NEW_RELEASE_WINDOW_DAYS`] days.
    pub fn new_release_window(&self) -> shoe_commerce::error::Result<Duration> {
        let days = self.new_release_window_days;
        if !(1..=MAX_NEW_RELEASE_WINDOW_DAYS).contains(&days) {
            return Err(ListingError::invalid(format!(
                "new_release_window_days must be between 1 and {}, got {}",
                MAX_NEW_RELEASE_WINDOW_DAYS, days
            )));
        }
        Duration::try_days(days).ok_or_else(|| {
            ListingError::invalid(format!("new_release_window_days out of range: {}", days))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CardConfig::default();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.new_release_window_days, 30);
        assert_eq!(config.link_prefix, "/shoe");
        assert_eq!(config.sale_label, "Sale");
        assert_eq!(config.new_release_label, "Just released!");
        assert_eq!(config.color_noun, "Color");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CardConfig::from_toml(
            r#"
currency = "EUR"
new_release_window_days = 14
"#,
        )
        .unwrap();
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.new_release_window().unwrap(), Duration::days(14));
        assert_eq!(config.link_prefix, "/shoe");
    }

    #[test]
    fn test_json_config() {
        let config =
            CardConfig::from_json(r#"{"link_prefix": "/sneakers", "sale_label": "Deal"}"#).unwrap();
        assert_eq!(
            config,
            CardConfig {
                link_prefix: "/sneakers".into(),
                sale_label: "Deal".into(),
                ..CardConfig::default()
            }
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = CardConfig {
            new_release_window_days: 0,
            ..CardConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CardConfig {
            new_release_window_days: -7,
            ..CardConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CardConfig {
            sale_label: " ".to_string(),
            ..CardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_window_is_rejected() {
        let config =
            CardConfig::from_toml("new_release_window_days = 9223372036854775807\n").unwrap();
        assert!(config.validate().is_err());
        assert!(matches!(
            config.new_release_window(),
            Err(ListingError::InvalidInput(_))
        ));

        let config = CardConfig {
            new_release_window_days: MAX_NEW_RELEASE_WINDOW_DAYS,
            ..CardConfig::default()
        };
        assert!(config.validate().is_ok());

        let config = CardConfig {
            new_release_window_days: MAX_NEW_RELEASE_WINDOW_DAYS + 1,
            ..CardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_rejects_huge_window() {
        let path = std::env::temp_dir().join(format!("shoe-card-huge-{}.toml", std::process::id()));
        std::fs::write(&path, "new_release_window_days = 9223372036854775807\n").unwrap();
        let result = CardConfig::load(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = CardConfig::load("/nonexistent/shoe-card.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("shoe-card-{}.toml", std::process::id()));
        std::fs::write(&path, "link_prefix = \"/kicks\"\n").unwrap();
        let config = CardConfig::load(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.link_prefix, "/kicks");
    }
}
