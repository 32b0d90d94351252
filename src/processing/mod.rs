//! Subnet calculation logic.
//!
//! - [`parse`] - validate a raw `address/prefix` string
//! - [`calc`] - derive masks, addresses and host counts

mod calc;
mod parse;

// Re-export public functions
pub use calc::{compute, compute_with_policy, EdgePolicy};
pub use parse::parse;
