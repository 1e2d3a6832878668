//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod key_value_store;

pub use key_value_store::*;
