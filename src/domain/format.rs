//! Display Formatting
//!
//! Number formatting for the terminal board. Large USD amounts are
//! compacted with K/M/B suffixes; non-finite input renders as zero
//! instead of leaking NaN into the display.

/// Format a USD amount with K/M/B suffixes
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    if value >= 1_000_000_000.0 {
        format!("${:.1}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}

/// Format a unit price with enough precision for sub-cent tokens
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00000000".to_string();
    }
    format!("${:.8}", value)
}

/// Format a count (holders) with K/M/B suffixes, no currency sign
pub fn format_count(value: u64) -> String {
    let v = value as f64;
    if v >= 1_000_000_000.0 {
        format!("{:.1}B", v / 1_000_000_000.0)
    } else if v >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v >= 1_000.0 {
        format!("{:.1}K", v / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Format a signed percentage change
pub fn format_change(value: f64) -> String {
    if !value.is_finite() {
        return "+0.00%".to_string();
    }
    format!("{:+.2}%", value)
}
