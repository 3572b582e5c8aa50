use chrono::{DateTime, Duration, TimeZone, Utc};

use shoe_card::{CardConfig, ShoeCardRenderer};
use shoe_commerce::{ListingError, ShoeListing, Slug};
use shoe_observability::{LogLevel, StructuredLogger};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn renderer() -> ShoeCardRenderer {
    ShoeCardRenderer::default()
        .with_logger(StructuredLogger::new("test").with_min_level(LogLevel::Error))
}

fn shoe(slug: &str, sale_price: Option<f64>, released: DateTime<Utc>) -> ShoeListing {
    ShoeListing {
        slug: Slug::parse(slug).unwrap(),
        name: "Tree Runner".to_string(),
        image_src: format!("/assets/{}.jpg", slug),
        price: 10000.0,
        sale_price,
        release_date: released.to_rfc3339(),
        num_of_colors: 2,
    }
}

#[test]
fn sale_five_years_after_release_strikes_regular_price() {
    let listing = shoe("old-runner", Some(6000.0), now() - Duration::days(365 * 5));
    let html = renderer().render(&listing, now()).unwrap();

    assert!(html.contains(r#"data-variant="on-sale""#));
    assert!(html.contains(r#"<div class="shoe-card-flag shoe-card-flag--sale">Sale</div>"#));
    assert!(html.contains(
        r#"<span class="shoe-card-price shoe-card-price--struck">$100.00</span>"#
    ));
    assert!(html.contains(r#"<span class="shoe-card-sale-price">$60.00</span>"#));
    assert!(!html.contains("Just released!"));
}

#[test]
fn sale_beats_new_release() {
    let listing = shoe("fresh-deal", Some(8000.0), now() - Duration::days(2));
    let html = renderer().render(&listing, now()).unwrap();

    assert!(html.contains(r#"data-variant="on-sale""#));
    assert!(!html.contains("shoe-card-flag--new"));
}

#[test]
fn recent_release_gets_new_flag() {
    let listing = shoe("fresh", None, now() - Duration::days(5));
    let html = renderer().render(&listing, now()).unwrap();

    assert!(html.contains(r#"data-variant="new-release""#));
    assert!(html.contains(
        r#"<div class="shoe-card-flag shoe-card-flag--new">Just released!</div>"#
    ));
    assert!(html.contains(r#"<span class="shoe-card-price">$100.00</span>"#));
    assert!(!html.contains("shoe-card-sale-price"));
}

#[test]
fn release_exactly_thirty_days_ago_is_default() {
    let listing = shoe("boundary", None, now() - Duration::days(30));
    let html = renderer().render(&listing, now()).unwrap();

    assert!(html.contains(r#"data-variant="default""#));
    assert!(!html.contains("shoe-card-flag"));
}

#[test]
fn card_links_to_slug() {
    let listing = shoe("lucky-sneaker", None, now() - Duration::days(90));
    let html = renderer().render(&listing, now()).unwrap();
    assert!(html.contains(r#"href="/shoe/lucky-sneaker""#));
    assert!(html.contains(r#"src="/assets/lucky-sneaker.jpg""#));
    assert!(html.contains("2 Colors"));

    let config = CardConfig {
        link_prefix: "/sneakers/".to_string(),
        ..CardConfig::default()
    };
    let html = ShoeCardRenderer::new(config)
        .unwrap()
        .render(&listing, now())
        .unwrap();
    assert!(html.contains(r#"href="/sneakers/lucky-sneaker""#));
}

#[test]
fn unparseable_release_date_is_rejected() {
    let mut listing = shoe("broken", None, now());
    listing.release_date = "last spring".to_string();

    let err = renderer().render(&listing, now()).unwrap_err();
    assert!(matches!(err, ListingError::InvalidInput(_)));
}

#[test]
fn grid_from_json_renders_every_card() {
    let json = r#"[
        {"slug": "a", "name": "A", "imageSrc": "/a.jpg", "price": 12000,
         "salePrice": 9000, "releaseDate": "2024-01-01", "numOfColors": 3},
        {"slug": "b", "name": "B", "imageSrc": "/b.jpg", "price": 11000,
         "salePrice": null, "releaseDate": "2024-06-12", "numOfColors": 1},
        {"slug": "c", "name": "C", "imageSrc": "/c.jpg", "price": 9500,
         "releaseDate": "2023-06-12", "numOfColors": 0}
    ]"#;
    let listings = ShoeListing::list_from_json(json).unwrap();
    let html = renderer().render_grid(&listings, now()).unwrap();

    assert_eq!(html.matches("shoe-grid-item").count(), 3);
    assert!(html.contains(r#"data-variant="on-sale""#));
    assert!(html.contains(r#"data-variant="new-release""#));
    assert!(html.contains(r#"data-variant="default""#));
    assert!(html.contains("$90.00"));
    assert!(html.contains("1 Color<"));
    assert!(html.contains("0 Colors"));
}

#[test]
fn grid_fails_on_first_invalid_listing() {
    let mut bad = shoe("bad", None, now());
    bad.price = -100.0;
    let listings = vec![shoe("good", None, now()), bad];

    assert!(renderer().render_grid(&listings, now()).is_err());
}

#[test]
fn empty_grid_renders_empty_state() {
    let html = renderer().render_grid(&[], now()).unwrap();
    assert!(html.contains("No shoes found."));
}

#[test]
fn renderer_refuses_out_of_range_window() {
    for days in [0, -30, i64::MAX] {
        let config = CardConfig {
            new_release_window_days: days,
            ..CardConfig::default()
        };
        assert!(ShoeCardRenderer::new(config).is_err());
    }
}

#[test]
fn huge_window_in_config_file_is_rejected_not_panicking() {
    let path = std::env::temp_dir().join(format!("shoe-card-window-{}.toml", std::process::id()));
    std::fs::write(&path, "new_release_window_days = 9223372036854775807\n").unwrap();
    let loaded = CardConfig::load(path.to_str().unwrap());
    std::fs::remove_file(&path).unwrap();
    assert!(loaded.is_err());

    let parsed = CardConfig::from_toml("new_release_window_days = 9223372036854775807\n").unwrap();
    let listing = shoe("any", None, now());
    let html = shoe_card::render_shoe_card(&listing, now(), &parsed);
    assert!(matches!(html, Err(ListingError::InvalidInput(_))));
}
