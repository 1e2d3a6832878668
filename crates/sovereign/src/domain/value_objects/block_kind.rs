//! BlockKind - What a scheduled time block is spent on

use serde::{Deserialize, Serialize};

/// Time block type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockKind {
    Mission,
    Recovery,
    Conquest,
    Leak,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Mission => write!(f, "MISSION"),
            BlockKind::Recovery => write!(f, "RECOVERY"),
            BlockKind::Conquest => write!(f, "CONQUEST"),
            BlockKind::Leak => write!(f, "LEAK"),
        }
    }
}

impl std::str::FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MISSION" => Ok(BlockKind::Mission),
            "RECOVERY" => Ok(BlockKind::Recovery),
            "CONQUEST" => Ok(BlockKind::Conquest),
            "LEAK" => Ok(BlockKind::Leak),
            _ => Err(format!("Unknown block kind: {}", s)),
        }
    }
}
