//! Subnet arithmetic.
//!
//! Derives masks, network/broadcast addresses and the usable host range from a
//! validated [`SubnetInput`]. Nothing here can fail.

use crate::models::{
    broadcast_addr, cut_addr, get_cidr_mask, get_wildcard_mask, num_addresses, SubnetInput,
    SubnetResult, MAX_LENGTH,
};
use std::fmt;
use std::str::FromStr;

/// How /31 and /32 subnets report their usable hosts.
///
/// Prefixes up to /30 are the same under every policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Network and broadcast are always reserved: /31 and /32 have no usable
    /// range and a host count of 0.
    #[default]
    Classic,
    /// RFC 3021 point-to-point links: /31 has two usable hosts, /32 has one.
    PointToPoint,
}

impl FromStr for EdgePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(EdgePolicy::Classic),
            "point-to-point" | "p2p" | "rfc3021" => Ok(EdgePolicy::PointToPoint),
            other => Err(format!(
                "unknown edge policy '{other}' (expected classic, point-to-point)"
            )),
        }
    }
}

impl fmt::Display for EdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EdgePolicy::Classic => write!(f, "classic"),
            EdgePolicy::PointToPoint => write!(f, "point-to-point"),
        }
    }
}

/// Compute the subnet for `input` with the [`EdgePolicy::Classic`] policy.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::{compute, parse, format_dotted_quad};
/// let result = compute(parse("10.0.0.0/30").unwrap());
/// assert_eq!(format_dotted_quad(result.broadcast_address), "10.0.0.3");
/// assert_eq!(result.usable_host_count, 2);
/// ```
pub fn compute(input: SubnetInput) -> SubnetResult {
    compute_with_policy(input, EdgePolicy::Classic)
}

/// Compute the subnet for `input`, applying `policy` to /31 and /32.
pub fn compute_with_policy(input: SubnetInput, policy: EdgePolicy) -> SubnetResult {
    let prefix = input.prefix();
    let subnet_mask = get_cidr_mask(prefix);
    let wildcard_mask = get_wildcard_mask(prefix);
    let network_address = cut_addr(input.addr(), prefix);
    let broadcast_address = broadcast_addr(input.addr(), prefix);

    let (first_usable, last_usable, usable_host_count) = if prefix <= MAX_LENGTH - 2 {
        (
            Some(network_address + 1),
            Some(broadcast_address - 1),
            num_addresses(prefix) - 2,
        )
    } else {
        match policy {
            EdgePolicy::Classic => (None, None, 0),
            EdgePolicy::PointToPoint => (
                Some(network_address),
                Some(broadcast_address),
                num_addresses(prefix),
            ),
        }
    };

    log::debug!(
        "compute({input}, {policy}) network={network_address:#010x} hosts={usable_host_count}"
    );

    SubnetResult {
        subnet_mask,
        wildcard_mask,
        network_address,
        first_usable,
        last_usable,
        broadcast_address,
        usable_host_count,
    }
}
