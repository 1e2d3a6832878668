//! Domain Services
//!
//! Stateless computations over domain entities.

pub mod metrics;

pub use metrics::MetricsSnapshot;
