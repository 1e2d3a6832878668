//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! persistent state and the Oversoul.

pub mod ledger;
pub mod oversoul;

pub use ledger::{LedgerConfig, LedgerService, ResponseOrdering};
pub use oversoul::Oversoul;
