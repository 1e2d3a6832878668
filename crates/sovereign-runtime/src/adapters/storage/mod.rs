//! Key-Value Store Adapters
//!
//! - `MemoryStore`: process-local map, for tests and throwaway sessions
//! - `FileStore`: one JSON document per key under a data directory

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
