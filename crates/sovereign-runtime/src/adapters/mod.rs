//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod gemini;
pub mod storage;

// Re-exports
pub use gemini::GeminiGenerator;
pub use storage::{FileStore, MemoryStore};
