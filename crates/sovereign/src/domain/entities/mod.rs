//! Domain Entities
//!
//! Plain records owned by the persistent state cells.
//! - ResourceLeak: A recurring cost, unresolved until sealed
//! - WarChest: The three savings buckets
//! - TimeBlock: A scheduled block of the day
//! - DailyRitual: Morning/evening checklist and today's sealed leaks
//! - ChatEntry: One line of the Oversoul transcript

mod chat;
mod leak;
mod ritual;
mod time_block;
mod war_chest;

pub use chat::*;
pub use leak::*;
pub use ritual::*;
pub use time_block::*;
pub use war_chest::*;
