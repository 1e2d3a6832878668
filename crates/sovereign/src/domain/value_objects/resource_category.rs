//! ResourceCategory - Classification of a recorded leak

use serde::{Deserialize, Serialize};

/// Leak category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceCategory {
    /// Spending that builds something
    Empire,
    /// Upkeep costs
    Maintenance,
    /// Drains that serve someone else
    #[default]
    TraitorTax,
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceCategory::Empire => write!(f, "EMPIRE"),
            ResourceCategory::Maintenance => write!(f, "MAINTENANCE"),
            ResourceCategory::TraitorTax => write!(f, "TRAITOR_TAX"),
        }
    }
}

impl std::str::FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMPIRE" => Ok(ResourceCategory::Empire),
            "MAINTENANCE" => Ok(ResourceCategory::Maintenance),
            "TRAITOR_TAX" => Ok(ResourceCategory::TraitorTax),
            _ => Err(format!("Unknown resource category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form() {
        let json = serde_json::to_string(&ResourceCategory::TraitorTax).unwrap();
        assert_eq!(json, "\"TRAITOR_TAX\"");

        let parsed: ResourceCategory = serde_json::from_str("\"MAINTENANCE\"").unwrap();
        assert_eq!(parsed, ResourceCategory::Maintenance);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(
            "empire".parse::<ResourceCategory>().unwrap(),
            ResourceCategory::Empire
        );
        assert!("luxury".parse::<ResourceCategory>().is_err());
    }
}
