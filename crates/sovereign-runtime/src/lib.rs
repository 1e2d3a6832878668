//! Sovereign Runtime
//!
//! Infrastructure and use cases around the `sovereign` domain crate:
//!
//! - `adapters/`: `FileStore` / `MemoryStore` key-value stores and the
//!   Gemini text generator
//! - `application/`: the ledger service and the Oversoul advisory client
//! - `config`, `telemetry`, `bootstrap`: environment, logging and wiring
//!
//! # Usage
//!
//! ```rust,ignore
//! let ledger = sovereign_runtime::open_from_env()?;
//! ledger.submit_leak(LeakDraft::new("Gym", "50", ResourceCategory::Maintenance))?;
//! let answer = ledger.consult("Where do I start?").await?;
//! ```

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod telemetry;

pub use adapters::{FileStore, GeminiGenerator, MemoryStore};
pub use application::{LedgerConfig, LedgerService, Oversoul, ResponseOrdering};
pub use bootstrap::{open_from_env, open_ledger};
pub use config::SovereignConfig;
pub use telemetry::init_tracing;
