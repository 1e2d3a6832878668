//! WarChest - Savings and asset buckets

use serde::{Deserialize, Serialize};

use super::finite_or_zero;

/// The three-field savings record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarChest {
    /// Cash on hand
    pub total_liquid: f64,
    /// Equity and other held assets
    pub fortified_assets: f64,
    /// Reach, valued in currency
    pub strategic_influence: f64,
}

/// Editable field of the war chest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WarChestField {
    TotalLiquid,
    FortifiedAssets,
    StrategicInfluence,
}

impl WarChest {
    /// Copy with one field replaced. A non-finite value becomes 0.
    pub fn with_field(mut self, field: WarChestField, value: f64) -> Self {
        let value = finite_or_zero(value);
        match field {
            WarChestField::TotalLiquid => self.total_liquid = value,
            WarChestField::FortifiedAssets => self.fortified_assets = value,
            WarChestField::StrategicInfluence => self.strategic_influence = value,
        }
        self
    }

    /// Copy with every NaN or infinite field set to 0
    pub fn finite(self) -> Self {
        Self {
            total_liquid: finite_or_zero(self.total_liquid),
            fortified_assets: finite_or_zero(self.fortified_assets),
            strategic_influence: finite_or_zero(self.strategic_influence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_independent() {
        let chest = WarChest::default()
            .with_field(WarChestField::TotalLiquid, 1000.0)
            .with_field(WarChestField::StrategicInfluence, 5.0);

        assert_eq!(chest.total_liquid, 1000.0);
        assert_eq!(chest.fortified_assets, 0.0);
        assert_eq!(chest.strategic_influence, 5.0);
    }

    #[test]
    fn test_non_finite_fields_become_zero() {
        let chest = WarChest {
            total_liquid: 500.0,
            fortified_assets: f64::INFINITY,
            strategic_influence: f64::NAN,
        }
        .finite();
        assert_eq!(chest.total_liquid, 500.0);
        assert_eq!(chest.fortified_assets, 0.0);
        assert_eq!(chest.strategic_influence, 0.0);

        let chest = chest.with_field(WarChestField::TotalLiquid, f64::NEG_INFINITY);
        assert_eq!(chest.total_liquid, 0.0);
    }
}
