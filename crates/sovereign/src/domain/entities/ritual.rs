//! DailyRitual - Morning/evening checklist

use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRitual {
    pub date: String,
    pub morning_invocation: bool,
    pub evening_audit: bool,
    /// Names of sealed leaks, in seal order. Not reset when the date changes.
    pub leaks_sealed_today: Vec<String>,
}

impl DailyRitual {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            morning_invocation: false,
            evening_audit: false,
            leaks_sealed_today: Vec::new(),
        }
    }

    /// Fresh ritual dated with the local calendar day
    pub fn for_today() -> Self {
        Self::new(Local::now().format("%Y-%m-%d").to_string())
    }

    /// Copy with `name` appended to the sealed list
    pub fn with_sealed(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.leaks_sealed_today.push(name.into());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_sealed_appends_without_dedup() {
        let ritual = DailyRitual::new("2026-10-17")
            .with_sealed("Gym")
            .with_sealed("Gym");
        assert_eq!(ritual.leaks_sealed_today, vec!["Gym", "Gym"]);
        assert_eq!(ritual.date, "2026-10-17");
    }

    #[test]
    fn test_for_today_starts_unchecked() {
        let ritual = DailyRitual::for_today();
        assert_eq!(ritual.date.len(), 10);
        assert!(!ritual.morning_invocation);
        assert!(!ritual.evening_audit);
        assert!(ritual.leaks_sealed_today.is_empty());
    }
}
