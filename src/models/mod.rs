//! Domain models for the subnet calculator.
//!
//! - IPv4 helpers - mask arithmetic and the dotted-quad mapping
//! - [`SubnetInput`], [`SubnetResult`] and [`SubnetReport`]
//! - [`ParseError`] - why an input was rejected
//! - [`Language`] - report and message language

mod error;
mod ipv4;
mod lang;
mod subnet;

// Re-export public types
pub use error::ParseError;
pub use ipv4::{
    broadcast_addr, cut_addr, format_dotted_quad, get_cidr_mask, get_wildcard_mask,
    num_addresses, parse_dotted_quad, MAX_LENGTH,
};
pub use lang::{Labels, Language};
pub use subnet::{SubnetInput, SubnetReport, SubnetResult};
