//! Sovereign Domain Library
//!
//! Core domain types and interfaces for the Sovereign ledger: leaks to
//! seal, a war chest to grow, a schedule to inhabit, and the Oversoul to
//! consult.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core records (ResourceLeak, WarChest, TimeBlock, DailyRitual, ChatEntry)
//!   - `value_objects/`: Enumerations (ResourceCategory, BlockKind, ChatRole)
//!   - `services/`: Derived metrics
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Durable key-value storage
//!   - `services/`: Remote text generation
//!
//! - **State** (`state/`): Persistent cells that write through to storage
//!
//! # Usage
//!
//! ```rust,ignore
//! use sovereign::{PersistentCell, ResourceLeak, MetricsSnapshot};
//! use sovereign::ports::KeyValueStore;
//! ```

pub mod domain;
pub mod ports;
pub mod state;

// Re-export commonly used types
pub use domain::{
    metrics, BlockKind, ChatEntry, ChatRole, DailyRitual, DomainError, LeakDraft,
    MetricsSnapshot, ResourceCategory, ResourceLeak, TimeBlock, WarChest, WarChestField,
};
pub use ports::{
    GenerationOptions, GenerationRequest, GenerationResponse, KeyValueStore, TextGenerator,
};
pub use state::PersistentCell;
