//! Grid section - rendered cards laid out in a listing grid.

/// Wrap rendered cards in the grid section.
pub fn render_shoe_grid(cards: &[String]) -> String {
    if cards.is_empty() {
        return render_grid_empty();
    }

    let cards_html: String = cards
        .iter()
        .map(|card| format!(r#"<div class="shoe-grid-item">{}</div>"#, card))
        .collect();

    format!(
        r#"<section class="shoe-grid" data-section="shoes">
    {}
</section>"#,
        cards_html
    )
}

/// Render the empty state for a grid with no listings.
pub fn render_grid_empty() -> String {
    r#"<section class="shoe-grid shoe-grid--empty" data-section="shoes">
    <p class="shoe-grid-empty">No shoes found.</p>
</section>"#
        .to_string()
}
