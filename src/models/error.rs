//! Parse error types.

use super::Language;
use thiserror::Error;

/// Why a CIDR string was rejected.
///
/// The `Display` text is English; use [`ParseError::localized`] for other
/// languages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Enter an IP address with a network prefix")]
    EmptyInput,

    #[error("Invalid IP or prefix: {0}")]
    MalformedInput(String),

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Invalid network prefix (expected 0-32): {0}")]
    InvalidPrefix(String),
}

impl ParseError {
    /// Short variant name, stable across languages.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "EmptyInput",
            ParseError::MalformedInput(_) => "MalformedInput",
            ParseError::InvalidAddress(_) => "InvalidAddress",
            ParseError::InvalidPrefix(_) => "InvalidPrefix",
        }
    }

    /// User-facing message in the requested language.
    pub fn localized(&self, lang: Language) -> String {
        match lang {
            Language::English => self.to_string(),
            Language::Portuguese => match self {
                ParseError::EmptyInput => "Insira um endereço IP com prefixo de rede.".to_string(),
                ParseError::MalformedInput(s) => {
                    format!("Endereço IP ou prefixo de rede inválido: {s}")
                }
                ParseError::InvalidAddress(s) => format!("Endereço IP inválido: {s}"),
                ParseError::InvalidPrefix(s) => {
                    format!("Prefixo de rede inválido (esperado 0-32): {s}")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseError::EmptyInput.to_string(),
            "Enter an IP address with a network prefix"
        );
        assert_eq!(
            ParseError::MalformedInput("10.0.0.1".into()).to_string(),
            "Invalid IP or prefix: 10.0.0.1"
        );
        assert_eq!(
            ParseError::InvalidPrefix("33".into()).to_string(),
            "Invalid network prefix (expected 0-32): 33"
        );
    }

    #[test]
    fn test_localized_portuguese() {
        assert_eq!(
            ParseError::EmptyInput.localized(Language::Portuguese),
            "Insira um endereço IP com prefixo de rede."
        );
        assert_eq!(
            ParseError::InvalidAddress("256.1.1.1".into()).localized(Language::Portuguese),
            "Endereço IP inválido: 256.1.1.1"
        );
    }

    #[test]
    fn test_kind_ignores_language() {
        let err = ParseError::InvalidPrefix("x".into());
        assert_eq!(err.kind(), "InvalidPrefix");
        assert_ne!(
            err.localized(Language::English),
            err.localized(Language::Portuguese)
        );
    }
}
