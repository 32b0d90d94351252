//! IPv4 address and prefix utilities.
//!
//! Addresses are carried as `u32` (octet 0 most significant). The dotted-quad
//! mapping in this module ([`format_dotted_quad`] / [`parse_dotted_quad`]) is
//! the only place octets are packed or unpacked.

use super::ParseError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serializer;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// One dotted-quad group: 0-255, one to three digits, leading zeros allowed.
const OCTET: &str = r"([01]?[0-9][0-9]?|2[0-4][0-9]|25[0-5])";

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(&format!(r"^{o}\.{o}\.{o}\.{o}$", o = OCTET)).expect("Invalid Regex?");
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths past [`MAX_LENGTH`] saturate to a full mask.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let len = len.min(MAX_LENGTH);
    if len == 0 {
        // u32 << 32 overflows
        0
    } else {
        u32::MAX << (MAX_LENGTH - len)
    }
}

/// Host bits of a prefix, the bitwise complement of [`get_cidr_mask`].
pub fn get_wildcard_mask(len: u8) -> u32 {
    !get_cidr_mask(len)
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: u32, len: u8) -> u32 {
    addr & get_cidr_mask(len)
}

/// Calculate the broadcast address for a given address and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> u32 {
    cut_addr(addr, len) | get_wildcard_mask(len)
}

/// Number of addresses covered by a prefix (2^(32 - len)).
pub fn num_addresses(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Render a packed address as `a.b.c.d`.
pub fn format_dotted_quad(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Parse `a.b.c.d` into a packed address.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::models::parse_dotted_quad;
/// assert_eq!(parse_dotted_quad("192.168.1.10").unwrap(), 0xC0A8010A);
/// assert!(parse_dotted_quad("192.168.1").is_err());
/// ```
pub fn parse_dotted_quad(s: &str) -> Result<u32, ParseError> {
    let caps = DOTTED_QUAD
        .captures(s)
        .ok_or_else(|| ParseError::InvalidAddress(s.to_string()))?;

    let mut addr = 0u32;
    for group in caps.iter().skip(1) {
        let octet: u8 = group
            .map(|m| m.as_str())
            .unwrap_or_default()
            .parse()
            .map_err(|_| ParseError::InvalidAddress(s.to_string()))?;
        addr = (addr << 8) | u32::from(octet);
    }
    Ok(addr)
}

pub(crate) fn serialize_addr<S>(addr: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_dotted_quad(*addr))
}

pub(crate) fn serialize_opt_addr<S>(addr: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match addr {
        Some(addr) => serialize_addr(addr, serializer),
        None => serializer.serialize_none(),
    }
}
