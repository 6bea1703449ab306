//! Quote snapshots
//!
//! An owned, serializable copy of the engine's live pricing, used by the
//! headless `quote` command and by the review screen.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One priced line of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub id: String,
    pub title: String,
    pub price: u64,
}

/// Priced breakdown of a configuration. Amounts are whole pesos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub package: QuoteLine,
    /// Selected add-ons in catalog order
    pub addons: Vec<QuoteLine>,
    pub addons_total: u64,
    pub grand_total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_reference: Option<String>,
}

impl QuoteSummary {
    /// Pretty-printed JSON for the headless `quote --json` output.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text rendering with a caller-supplied price formatter.
    pub fn to_lines(&self, format_price: impl Fn(u64) -> String) -> Vec<String> {
        let mut lines = vec![format!(
            "Base     {:<32} {:>12}",
            self.package.title,
            format_price(self.package.price)
        )];

        if self.addons.is_empty() {
            lines.push("Add-ons  No add-ons selected".to_string());
        } else {
            for line in &self.addons {
                lines.push(format!(
                    "Add-on   {:<32} {:>12}",
                    line.title,
                    format!("+{}", format_price(line.price))
                ));
            }
        }

        lines.push(format!("Total estimate {:>39}", format_price(self.grand_total)));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuoteSummary {
        QuoteSummary {
            package: QuoteLine {
                id: "brand-starter".to_string(),
                title: "Brand Starter".to_string(),
                price: 8000,
            },
            addons: vec![],
            addons_total: 0,
            grand_total: 8000,
            order_reference: None,
        }
    }

    #[test]
    fn test_lines_mention_empty_addons() {
        let lines = sample().to_lines(|n| n.to_string());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("No add-ons selected"));
        assert!(lines[2].ends_with("8000"));
    }

    #[test]
    fn test_json_omits_missing_reference() {
        let json = sample().to_json().unwrap();
        assert!(!json.contains("order_reference"));
        assert!(json.contains("\"grand_total\": 8000"));
    }
}
