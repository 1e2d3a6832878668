//! Derived Metrics
//!
//! Aggregates computed from the raw entity lists. Every function here is
//! pure: same input, same output, no hidden state.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{finite_or_zero, ResourceLeak, TimeBlock, WarChest};

/// Hours in the day the freedom index is measured against
pub const HOURS_PER_DAY: f64 = 24.0;

/// Months per year, used to annualize the monthly reclaimed amount
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Ten years of monthly contributions at roughly 8% compounding, folded
/// into a single multiplier
pub const PROJECTION_MULTIPLIER: f64 = 180.0;

/// Sum of sealed leak amounts
pub fn total_reclaimed(leaks: &[ResourceLeak]) -> f64 {
    leaks.iter().filter(|l| l.sealed).map(|l| l.amount).sum()
}

/// Sum of unsealed leak amounts
pub fn total_illusions(leaks: &[ResourceLeak]) -> f64 {
    leaks.iter().filter(|l| !l.sealed).map(|l| l.amount).sum()
}

pub fn sealed_count(leaks: &[ResourceLeak]) -> usize {
    leaks.iter().filter(|l| l.sealed).count()
}

/// Percentage of the day covered by time blocks, within [0, 100].
///
/// The hour total itself is not checked: a schedule over 24h saturates at 100.
/// A NaN or infinite duration counts as 0.
pub fn freedom_index(blocks: &[TimeBlock]) -> f64 {
    let hours: f64 = blocks.iter().map(|b| finite_or_zero(b.duration_hours)).sum();
    (100.0 * hours / HOURS_PER_DAY).clamp(0.0, 100.0)
}

/// Hours of the day represented by a freedom index
pub fn freedom_hours(index: f64) -> f64 {
    index * HOURS_PER_DAY / 100.0
}

/// Annualized reclaimed amount
pub fn truth_potential(reclaimed: f64) -> f64 {
    reclaimed * MONTHS_PER_YEAR
}

/// Ten-year projection of the reclaimed amount
pub fn reclamation_projection(reclaimed: f64) -> f64 {
    reclaimed * PROJECTION_MULTIPLIER
}

/// Liquid plus fortified assets
pub fn net_worth(chest: &WarChest) -> f64 {
    chest.total_liquid + chest.fortified_assets
}

/// Net worth plus strategic influence
pub fn total_valuation(chest: &WarChest) -> f64 {
    net_worth(chest) + chest.strategic_influence
}

/// Every derived metric, computed at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_reclaimed: f64,
    pub total_illusions: f64,
    pub sealed_count: usize,
    pub freedom_index: f64,
    pub freedom_hours: f64,
    pub truth_potential: f64,
    pub reclamation_projection: f64,
    pub net_worth: f64,
    pub total_valuation: f64,
}

impl MetricsSnapshot {
    pub fn compute(leaks: &[ResourceLeak], blocks: &[TimeBlock], chest: &WarChest) -> Self {
        let reclaimed = total_reclaimed(leaks);
        let index = freedom_index(blocks);
        Self {
            total_reclaimed: reclaimed,
            total_illusions: total_illusions(leaks),
            sealed_count: sealed_count(leaks),
            freedom_index: index,
            freedom_hours: freedom_hours(index),
            truth_potential: truth_potential(reclaimed),
            reclamation_projection: reclamation_projection(reclaimed),
            net_worth: net_worth(chest),
            total_valuation: total_valuation(chest),
        }
    }

    /// Freedom index rounded to the nearest whole percent, as displayed
    pub fn freedom_percent(&self) -> u32 {
        self.freedom_index.round() as u32
    }
}
