//! Stylesheet for the shoe card classes.

/// Brand palette.
pub mod colors {
    pub const PRIMARY: &str = "hsl(340deg 65% 47%)";
    pub const SECONDARY: &str = "hsl(240deg 60% 63%)";
    pub const GRAY_700: &str = "hsl(220deg 5% 40%)";
    pub const GRAY_900: &str = "hsl(220deg 3% 20%)";
}

/// CSS for shoe cards and the grid, built from [`colors`].
pub fn shoe_card_styles() -> String {
    format!(
        r#"
.shoe-grid {{ display: flex; flex-wrap: wrap; gap: 32px; }}
.shoe-grid-item {{ flex: 1 1 340px; }}
.shoe-grid--empty {{ color: {gray_700}; }}

.shoe-card-link {{ text-decoration: none; color: inherit; }}
.shoe-card-image-wrapper {{ position: relative; }}
.shoe-card-image {{ border-radius: 16px 16px 4px 4px; display: block; width: 100%; }}
.shoe-card-spacer {{ height: 12px; }}
.shoe-card-row {{ font-size: 1rem; display: flex; flex-wrap: wrap; justify-content: space-between; }}
.shoe-card-name {{ font-weight: 600; color: {gray_900}; }}
.shoe-card-price--struck {{ color: {gray_700}; text-decoration: line-through; }}
.shoe-card-colors {{ color: {gray_700}; }}
.shoe-card-sale-price {{ font-weight: 600; color: {primary}; }}

/* Flags */
.shoe-card-flag {{
    position: absolute; top: 12px; right: -4px;
    height: 32px; line-height: 32px; padding: 0 10px;
    border-radius: 2px; font-size: 0.875rem; font-weight: 800; color: white;
}}
.shoe-card-flag--sale {{ background: {primary}; }}
.shoe-card-flag--new {{ background: {secondary}; }}
"#,
        primary = colors::PRIMARY,
        secondary = colors::SECONDARY,
        gray_700 = colors::GRAY_700,
        gray_900 = colors::GRAY_900,
    )
}
