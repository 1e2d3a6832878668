//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod block_kind;
mod chat_role;
mod resource_category;

pub use block_kind::*;
pub use chat_role::*;
pub use resource_category::*;
