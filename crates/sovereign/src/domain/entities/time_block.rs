//! TimeBlock - A scheduled block of the day

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::finite_or_zero;
use crate::domain::value_objects::BlockKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub label: String,
    /// "HH:MM"
    pub start_time: String,
    pub duration_hours: f64,
}

impl TimeBlock {
    /// Create a new block with a generated ID. A non-finite duration becomes 0.
    pub fn new(
        kind: BlockKind,
        label: impl Into<String>,
        start_time: impl Into<String>,
        duration_hours: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            label: label.into(),
            start_time: start_time.into(),
            duration_hours: finite_or_zero(duration_hours),
        }
    }

    /// Schedule seeded on first run
    pub fn default_schedule() -> Vec<TimeBlock> {
        vec![
            TimeBlock {
                id: "1".to_string(),
                kind: BlockKind::Mission,
                label: "Manifestation".to_string(),
                start_time: "06:00".to_string(),
                duration_hours: 6.0,
            },
            TimeBlock {
                id: "2".to_string(),
                kind: BlockKind::Recovery,
                label: "Luminous Rest".to_string(),
                start_time: "22:00".to_string(),
                duration_hours: 8.0,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_stored_as_type() {
        let json = serde_json::to_value(&TimeBlock::default_schedule()[0]).unwrap();
        assert_eq!(json["type"], "MISSION");
        assert_eq!(json["startTime"], "06:00");
        assert_eq!(json["durationHours"], 6.0);
    }

    #[test]
    fn test_non_finite_duration_becomes_zero() {
        let block = TimeBlock::new(BlockKind::Conquest, "Deep work", "09:00", f64::NAN);
        assert_eq!(block.duration_hours, 0.0);

        let block = TimeBlock::new(BlockKind::Conquest, "Deep work", "09:00", f64::INFINITY);
        assert_eq!(block.duration_hours, 0.0);
    }
}
