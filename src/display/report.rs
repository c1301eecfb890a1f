//! Shared text helpers for the terminal views
//!
//! The dashboard and analytics views draw their charts as rows of
//! block characters; every bar is scaled against the largest value shown in
//! the same view.

/// Percentage with fewer decimals as the share grows (0.05%, 5.5%, 50%)
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A `width`-wide bar filled in proportion to `value / max_value`
///
/// A non-positive value or maximum renders as blank padding so columns
/// after the bar stay aligned.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Heavier rule used under view titles
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Shorten to `max_len` characters (not bytes), ending in "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
