//! Terminal Display Board
//!
//! Owns the most recent snapshot for one tracked token and renders the
//! market block shown in the terminal. With no data yet it renders a
//! placeholder state instead of failing.

use chrono::{DateTime, Utc};

use super::format::{format_change, format_count, format_price, format_usd};
use super::snapshot::TokenSnapshot;

const RULE: &str = "==============================================";
const THIN_RULE: &str = "----------------------------------------------";

/// Display state for one tracked token
#[derive(Debug, Clone)]
pub struct DisplayBoard {
    headline_symbol: String,
    snapshot: Option<TokenSnapshot>,
    last_updated: Option<DateTime<Utc>>,
}

impl DisplayBoard {
    /// Create an empty board. The headline symbol is shown until live
    /// data with a known identity arrives.
    pub fn new(headline_symbol: impl Into<String>) -> Self {
        Self {
            headline_symbol: headline_symbol.into(),
            snapshot: None,
            last_updated: None,
        }
    }

    /// Replace the board contents with a fresh snapshot
    pub fn apply(&mut self, snapshot: TokenSnapshot) {
        self.last_updated = Some(Utc::now());
        self.snapshot = Some(snapshot);
    }

    /// Most recent snapshot, if any arrived yet
    pub fn snapshot(&self) -> Option<&TokenSnapshot> {
        self.snapshot.as_ref()
    }

    /// Headline line: real identity when known, configured symbol otherwise
    pub fn headline(&self) -> String {
        match &self.snapshot {
            Some(s) if s.has_known_identity() => {
                format!("{} ({})", s.name.to_uppercase(), s.symbol)
            }
            _ => self.headline_symbol.clone(),
        }
    }

    /// Render the full market block
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push(RULE.to_string());
        lines.push(format!("  {}", self.headline()));
        lines.push(THIN_RULE.to_string());

        match &self.snapshot {
            Some(s) => {
                lines.push(format!("  Price:       {}", format_price(s.price)));
                lines.push(format!("  Market Cap:  {}", format_usd(s.market_cap)));
                lines.push(format!("  Volume:      {}", format_usd(s.volume)));
                lines.push(format!("  Liquidity:   {}", format_usd(s.liquidity)));
                lines.push(format!("  Holders:     {}", format_count(s.holders)));
                lines.push(format!("  Change 24h:  {}", format_change(s.change_24h)));
                lines.push(THIN_RULE.to_string());
                let updated = self
                    .last_updated
                    .map(|t| t.format("%H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| "-".to_string());
                lines.push(format!("  Source: {} | Updated: {}", s.source, updated));
            }
            None => {
                lines.push("  Price:       -".to_string());
                lines.push("  Market Cap:  -".to_string());
                lines.push("  Volume:      -".to_string());
                lines.push("  Liquidity:   -".to_string());
                lines.push("  Holders:     -".to_string());
                lines.push("  Change 24h:  -".to_string());
                lines.push(THIN_RULE.to_string());
                lines.push("  Awaiting data...".to_string());
            }
        }

        lines.push(RULE.to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::{UNKNOWN_NAME, UNKNOWN_SYMBOL};

    fn sample_snapshot(name: &str, symbol: &str) -> TokenSnapshot {
        TokenSnapshot {
            price: 0.000456,
            market_cap: 1_200_000.0,
            volume: 345_600.0,
            holders: 1234,
            liquidity: 89_000.0,
            change_24h: 12.34,
            name: name.to_string(),
            symbol: symbol.to_string(),
            source: "SolanaTracker".to_string(),
        }
    }

    #[test]
    fn test_placeholder_render_before_data() {
        let board = DisplayBoard::new("PONZI");
        let rendered = board.render();

        assert!(rendered.contains("PONZI"));
        assert!(rendered.contains("Awaiting data"));
        assert!(rendered.contains("Price:       -"));
    }

    #[test]
    fn test_render_with_snapshot() {
        let mut board = DisplayBoard::new("PONZI");
        board.apply(sample_snapshot("Moon Token", "MOON"));
        let rendered = board.render();

        assert!(rendered.contains("MOON TOKEN (MOON)"));
        assert!(rendered.contains("$0.00045600"));
        assert!(rendered.contains("$1.2M"));
        assert!(rendered.contains("1.2K"));
        assert!(rendered.contains("+12.34%"));
        assert!(rendered.contains("Source: SolanaTracker"));
    }

    #[test]
    fn test_unknown_identity_keeps_configured_headline() {
        let mut board = DisplayBoard::new("PONZI");
        board.apply(sample_snapshot(UNKNOWN_NAME, UNKNOWN_SYMBOL));

        assert_eq!(board.headline(), "PONZI");
    }

    #[test]
    fn test_apply_replaces_previous_snapshot() {
        let mut board = DisplayBoard::new("PONZI");
        board.apply(sample_snapshot("First", "ONE"));
        board.apply(sample_snapshot("Second", "TWO"));

        assert_eq!(board.snapshot().unwrap().name, "Second");
    }
}
