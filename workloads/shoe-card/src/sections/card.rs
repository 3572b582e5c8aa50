//! Shoe card renderer.

use chrono::{DateTime, Utc};

use shoe_commerce::error::Result;
use shoe_commerce::text::count_label;
use shoe_commerce::{ShoeListing, Variant};

use super::html_escape;
use crate::config::CardConfig;

/// Badge shown over the card image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub class: &'static str,
    pub label: String,
}

/// Everything the card markup needs, resolved from a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub variant: Variant,
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub price: String,
    pub sale_price: Option<String>,
    pub colors: String,
    pub flag: Option<Flag>,
}

impl CardView {
    /// Resolve a listing into display values at `now`.
    pub fn build(listing: &ShoeListing, now: DateTime<Utc>, config: &CardConfig) -> Result<Self> {
        let variant = listing.variant_within(now, config.new_release_window()?)?;
        let price = listing.regular_price(config.currency)?.display();
        let sale_price = match variant {
            Variant::OnSale => listing.sale_money(config.currency)?.map(|m| m.display()),
            _ => None,
        };

        Ok(Self {
            variant,
            href: listing.slug.href(&config.link_prefix),
            name: listing.name.clone(),
            image_src: listing.image_src.clone(),
            price,
            sale_price,
            colors: count_label(&config.color_noun, listing.num_of_colors),
            flag: flag_for(variant, config),
        })
    }

    /// CSS class for the regular price; struck through when on sale.
    pub fn price_class(&self) -> &'static str {
        if self.variant.is_on_sale() {
            "shoe-card-price shoe-card-price--struck"
        } else {
            "shoe-card-price"
        }
    }
}

/// Badge for a variant, if it gets one.
pub fn flag_for(variant: Variant, config: &CardConfig) -> Option<Flag> {
    match variant {
        Variant::OnSale => Some(Flag {
            class: "shoe-card-flag shoe-card-flag--sale",
            label: config.sale_label.clone(),
        }),
        Variant::NewRelease => Some(Flag {
            class: "shoe-card-flag shoe-card-flag--new",
            label: config.new_release_label.clone(),
        }),
        Variant::Default => None,
    }
}

/// Render a resolved card.
pub fn render_card(view: &CardView) -> String {
    let flag = view
        .flag
        .as_ref()
        .map(|f| format!(r#"<div class="{}">{}</div>"#, f.class, html_escape(&f.label)))
        .unwrap_or_default();

    let sale_price = view
        .sale_price
        .as_ref()
        .map(|p| format!(r#"<span class="shoe-card-sale-price">{}</span>"#, html_escape(p)))
        .unwrap_or_default();

    format!(
        r#"<a class="shoe-card-link" href="{href}">
    <article class="shoe-card shoe-card--{variant}" data-variant="{variant}">
        <div class="shoe-card-image-wrapper">
            {flag}
            <img class="shoe-card-image" alt="" src="{image_src}">
        </div>
        <div class="shoe-card-spacer"></div>
        <div class="shoe-card-row">
            <h3 class="shoe-card-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="shoe-card-row">
            <p class="shoe-card-colors">{colors}</p>
            {sale_price}
        </div>
    </article>
</a>"#,
        href = html_escape(&view.href),
        variant = view.variant,
        flag = flag,
        image_src = html_escape(&view.image_src),
        name = html_escape(&view.name),
        price_class = view.price_class(),
        price = html_escape(&view.price),
        colors = html_escape(&view.colors),
        sale_price = sale_price,
    )
}

/// Resolve and render a listing in one step.
pub fn render_shoe_card(
    listing: &ShoeListing,
    now: DateTime<Utc>,
    config: &CardConfig,
) -> Result<String> {
    CardView::build(listing, now, config).map(|view| render_card(&view))
}
