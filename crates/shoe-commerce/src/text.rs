//! Display text helpers.

/// Return `noun` for a count of one, otherwise the `+s` plural.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        return noun.to_string();
    }
    format!("{}s", noun)
}

/// Count followed by the pluralized noun (e.g., "3 Colors").
pub fn count_label(noun: &str, count: u32) -> String {
    format!("{} {}", count, pluralize(noun, count))
}
