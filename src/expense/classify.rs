//! Keyword-based expense classification.
//!
//! Maps a free-text description to a fixed category label by
//! case-insensitive substring matching. The first category whose keyword
//! list matches wins, in table-declaration order.

pub const DEFAULT_CATEGORY: &str = "Other";

const KEYWORDS: &[(&str, &[&str])] = &[
    ("Food", &["food", "restaurant", "lunch", "breakfast", "dinner"]),
    ("Transport", &["transport", "fuel", "bus", "cab"]),
    ("Utility", &["electricity", "water", "internet", "utilities", "data"]),
    ("Entertainment", &["movie", "game", "netflix", "entertainment"]),
];

pub fn classify(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|word| lower.contains(word)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
