//! Application State
//!
//! Durable state containers that hydrate from a [`KeyValueStore`] and write
//! back on every change.
//!
//! [`KeyValueStore`]: crate::ports::KeyValueStore

mod cell;

pub use cell::PersistentCell;
