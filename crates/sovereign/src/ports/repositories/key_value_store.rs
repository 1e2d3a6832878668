//! Key-Value Store Port
//!
//! Synchronous string-keyed storage holding one serialized document per key.

use crate::domain::errors::DomainError;

/// Durable key-value storage
///
/// Calls are synchronous and expected to be fast (local disk or memory).
/// Implementations report faults as [`DomainError::Storage`].
pub trait KeyValueStore: Send + Sync {
    /// Read the document stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replace the document stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
