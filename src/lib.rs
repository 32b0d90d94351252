//! IPv4 subnet calculator.
//!
//! Parses `address/prefix`, derives the subnet mask, wildcard mask, network
//! and broadcast addresses, usable host range and usable host count, and
//! renders the result as text, CSV or JSON.
//!
//! ```
//! use ipv4_subnet_calc::{calculate, format, EdgePolicy};
//! let report = calculate("192.168.1.10/24", EdgePolicy::Classic).unwrap();
//! assert!(format(&report.result).contains("Broadcast address: 192.168.1.255"));
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use models::{
    format_dotted_quad, parse_dotted_quad, Language, ParseError, SubnetInput, SubnetReport,
    SubnetResult,
};
pub use output::{format, format_localized, render, OutputFormat};
pub use processing::{compute, compute_with_policy, parse, EdgePolicy};

/// Parse `raw` and compute its subnet in one step.
pub fn calculate(raw: &str, policy: EdgePolicy) -> Result<SubnetReport, ParseError> {
    let input = parse(raw)?;
    let result = compute_with_policy(input, policy);
    Ok(SubnetReport { input, result })
}
