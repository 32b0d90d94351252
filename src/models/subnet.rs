//! Subnet request and derived result.

use super::ipv4::{format_dotted_quad, serialize_addr, serialize_opt_addr, MAX_LENGTH};
use super::ParseError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated `address/prefix` pair.
///
/// Fields are private so a prefix past 32 can never reach the arithmetic.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct SubnetInput {
    addr: u32,
    prefix: u8,
}

impl SubnetInput {
    pub fn new(addr: u32, prefix: u8) -> Result<SubnetInput, ParseError> {
        if prefix > MAX_LENGTH {
            return Err(ParseError::InvalidPrefix(prefix.to_string()));
        }
        Ok(SubnetInput { addr, prefix })
    }

    /// Packed address, octet 0 most significant.
    pub fn addr(&self) -> u32 {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl fmt::Display for SubnetInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", format_dotted_quad(self.addr), self.prefix)
    }
}

impl Serialize for SubnetInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Everything derived from a [`SubnetInput`].
///
/// Serializes with dotted-quad strings; an absent usable host becomes `null`.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    #[serde(serialize_with = "serialize_addr")]
    pub subnet_mask: u32,
    #[serde(serialize_with = "serialize_addr")]
    pub wildcard_mask: u32,
    #[serde(serialize_with = "serialize_addr")]
    pub network_address: u32,
    /// None when the subnet has no distinct host range.
    #[serde(serialize_with = "serialize_opt_addr")]
    pub first_usable: Option<u32>,
    #[serde(serialize_with = "serialize_opt_addr")]
    pub last_usable: Option<u32>,
    #[serde(serialize_with = "serialize_addr")]
    pub broadcast_address: u32,
    pub usable_host_count: u64,
}

/// Input and result together, as rendered by the output formats.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub input: SubnetInput,
    #[serde(flatten)]
    pub result: SubnetResult,
}
