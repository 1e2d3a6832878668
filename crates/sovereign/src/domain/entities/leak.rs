//! ResourceLeak - A recorded recurring cost

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::ResourceCategory;

/// A recurring cost item, an "illusion" until it is sealed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLeak {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub category: ResourceCategory,
    pub sealed: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date_created: DateTime<Utc>,
}

impl ResourceLeak {
    /// Create a new unsealed leak with generated ID and timestamp
    pub fn new(name: impl Into<String>, amount: f64, category: ResourceCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount: finite_or_zero(amount),
            category,
            sealed: false,
            // Stored with millisecond precision
            date_created: Utc::now().trunc_subsecs(3),
        }
    }

    /// Sealed copy of this leak. Sealing is one-way.
    pub fn sealed(&self) -> Self {
        Self {
            sealed: true,
            ..self.clone()
        }
    }
}

/// Raw form input for a new leak, as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeakDraft {
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub category: ResourceCategory,
}

impl LeakDraft {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: ResourceCategory,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category,
        }
    }

    /// Both required fields are present
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.amount.is_empty()
    }

    /// Turn the draft into a leak, or `None` when a required field is empty
    pub fn into_leak(self) -> Option<ResourceLeak> {
        if !self.is_complete() {
            return None;
        }
        let amount = parse_amount(&self.amount);
        Some(ResourceLeak::new(self.name, amount, self.category))
    }
}

/// Parse a user-typed number, defaulting to 0 when it is not a finite number
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// `value`, or 0 when it is NaN or infinite. Non-finite numbers do not
/// survive a JSON round trip.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50"), 50.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_new_leak_drops_non_finite_amount() {
        let leak = ResourceLeak::new("Ghost", f64::NAN, ResourceCategory::Empire);
        assert_eq!(leak.amount, 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(-3.5), -3.5);
    }

    #[test]
    fn test_incomplete_draft_yields_nothing() {
        assert!(LeakDraft::new("", "10", ResourceCategory::Empire)
            .into_leak()
            .is_none());
        assert!(LeakDraft::new("Gym", "", ResourceCategory::Empire)
            .into_leak()
            .is_none());
    }

    #[test]
    fn test_draft_becomes_unsealed_leak() {
        let leak = LeakDraft::new("Gym", "50", ResourceCategory::Maintenance)
            .into_leak()
            .unwrap();
        assert_eq!(leak.name, "Gym");
        assert_eq!(leak.amount, 50.0);
        assert_eq!(leak.category, ResourceCategory::Maintenance);
        assert!(!leak.sealed);
        assert!(!leak.id.is_empty());
    }

    #[test]
    fn test_non_numeric_amount_defaults_to_zero() {
        let leak = LeakDraft::new("Mystery", "lots", ResourceCategory::TraitorTax)
            .into_leak()
            .unwrap();
        assert_eq!(leak.amount, 0.0);
    }

    #[test]
    fn test_stored_layout_uses_camel_case_and_millis() {
        let json = r#"{"id":"a","name":"Netflix","amount":15.99,"category":"TRAITOR_TAX","sealed":false,"dateCreated":1700000000000}"#;
        let leak: ResourceLeak = serde_json::from_str(json).unwrap();
        assert_eq!(leak.date_created.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(leak.category, ResourceCategory::TraitorTax);

        let back = serde_json::to_value(&leak).unwrap();
        assert_eq!(back["dateCreated"], 1_700_000_000_000_i64);
    }
}
