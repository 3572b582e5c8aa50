//! Section renderers for shoe listings.

mod card;
mod grid;

pub use card::*;
pub use grid::*;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
