//! Utilities for records output format
//!
//! ```text
//! H tagmatch=1 records=1 mode=recommend item="Red Shoes" results=2
//! I 1 score=0.4142 "Blue Shoes" brand="Bolt" rating=4.5 reviews=10 image="https://..."
//! ```

use crate::catalog::ItemSummary;

/// Escape a value for a quoted field; the result never spans lines.
pub fn escape_field(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

fn optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Header line for a records block
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H tagmatch=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// One item line; `score` is omitted for plain listings
pub fn item_line(rank: usize, item: &ItemSummary, score: Option<f64>) -> String {
    let score = score.map(|s| format!(" score={:.4}", s)).unwrap_or_default();
    format!(
        "I {}{} \"{}\" brand=\"{}\" rating={} reviews={} image=\"{}\"",
        rank,
        score,
        escape_field(&item.name),
        escape_field(&item.brand),
        optional_number(item.rating),
        optional_number(item.review_count),
        escape_field(&item.image_url),
    )
}
