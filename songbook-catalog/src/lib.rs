//! Music catalog record types and query ordering.
//!
//! This crate defines the plain records produced by the data access layer
//! without any database dependencies. Consumers can use these types directly
//! for display, or receive them from `songbook-db` queries.

pub mod order;
pub mod types;

pub use order::{SortOrder, SortOrderParseError};
pub use types::*;
