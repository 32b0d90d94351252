//! CIDR input parsing and validation.

use crate::models::{parse_dotted_quad, ParseError, SubnetInput, MAX_LENGTH};
use std::str::FromStr;

/// Parse `address/prefix` into a validated [`SubnetInput`].
///
/// Surrounding whitespace is ignored; nothing else is.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::{parse, ParseError};
/// let input = parse(" 192.168.1.10/24 ").unwrap();
/// assert_eq!(input.prefix(), 24);
/// assert!(matches!(parse("10.0.0.1"), Err(ParseError::MalformedInput(_))));
/// ```
pub fn parse(raw: &str) -> Result<SubnetInput, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 2 {
        log::debug!("parse({raw}) expected one '/', got {} parts", parts.len());
        return Err(ParseError::MalformedInput(raw.to_string()));
    }

    let addr = parse_dotted_quad(parts[0])?;
    let prefix = parse_prefix(parts[1])?;
    log::trace!("parse({raw}) addr={addr:#010x} prefix={prefix}");

    SubnetInput::new(addr, prefix)
}

/// Base-10 digits only, value 0-32.
fn parse_prefix(s: &str) -> Result<u8, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPrefix(s.to_string()));
    }
    match s.parse::<u8>() {
        Ok(prefix) if prefix <= MAX_LENGTH => Ok(prefix),
        _ => Err(ParseError::InvalidPrefix(s.to_string())),
    }
}

impl FromStr for SubnetInput {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok() {
        let input = parse("192.168.1.10/24").unwrap();
        assert_eq!(input.addr(), 0xC0A8010A);
        assert_eq!(input.prefix(), 24);

        let input = parse("\t0.0.0.0/0\n").unwrap();
        assert_eq!(input.addr(), 0);
        assert_eq!(input.prefix(), 0);

        let input = parse("255.255.255.255/32").unwrap();
        assert_eq!(input.addr(), u32::MAX);
        assert_eq!(input.prefix(), 32);
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse("010.0.0.1/08").unwrap(), parse("10.0.0.1/8").unwrap());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
        assert_eq!(parse("   \t"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_malformed() {
        for bad in ["10.0.0.1", "10.0.0.1/24/1", "//"] {
            assert!(
                matches!(parse(bad), Err(ParseError::MalformedInput(_))),
                "{bad:?} should be malformed"
            );
        }
        assert_eq!(parse("/").unwrap_err().kind(), "InvalidAddress");
    }

    #[test]
    fn test_parse_invalid_address() {
        for bad in [
            "256.1.1.1/24",
            "1.1.1/24",
            "a.b.c.d/24",
            "10.0.0.1 /24",
            "/24",
            "x10.0.0.1/24",
        ] {
            assert!(
                matches!(parse(bad), Err(ParseError::InvalidAddress(_))),
                "{bad:?} should be an invalid address"
            );
        }
    }

    #[test]
    fn test_parse_invalid_prefix() {
        for bad in [
            "10.0.0.1/33",
            "10.0.0.1/",
            "10.0.0.1/-1",
            "10.0.0.1/+8",
            "10.0.0.1/ 8",
            "10.0.0.1/8a",
            "10.0.0.1/999",
        ] {
            assert!(
                matches!(parse(bad), Err(ParseError::InvalidPrefix(_))),
                "{bad:?} should be an invalid prefix"
            );
        }
    }

    #[test]
    fn test_parse_address_checked_before_prefix() {
        assert_eq!(
            parse("300.0.0.1/99"),
            Err(ParseError::InvalidAddress("300.0.0.1".to_string()))
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for raw in ["192.168.1.10/24", "0.0.0.0/0", "10.255.0.7/31", "1.2.3.4/32"] {
            let input = parse(raw).unwrap();
            assert_eq!(parse(&input.to_string()).unwrap(), input);
            assert_eq!(input.to_string(), raw);
        }
    }

    #[test]
    fn test_from_str() {
        let input: SubnetInput = "172.16.5.4/12".parse().unwrap();
        assert_eq!(input.to_string(), "172.16.5.4/12");
    }
}
