//! Report languages and their labels.

use std::fmt;
use std::str::FromStr;

/// Labels used by the text and CSV reports.
#[derive(Debug)]
pub struct Labels {
    pub subnet_mask: &'static str,
    pub wildcard_mask: &'static str,
    pub network_address: &'static str,
    pub first_usable: &'static str,
    pub last_usable: &'static str,
    pub broadcast_address: &'static str,
    pub usable_hosts: &'static str,
    /// Placeholder for an absent usable host.
    pub none: &'static str,
}

static ENGLISH: Labels = Labels {
    subnet_mask: "Subnet mask",
    wildcard_mask: "Wildcard mask",
    network_address: "Network address",
    first_usable: "First usable IP",
    last_usable: "Last usable IP",
    broadcast_address: "Broadcast address",
    usable_hosts: "Usable hosts",
    none: "none",
};

static PORTUGUESE: Labels = Labels {
    subnet_mask: "Máscara de rede",
    wildcard_mask: "Wildcard mask",
    network_address: "IP da rede",
    first_usable: "Primeiro IP utilizável",
    last_usable: "Último IP utilizável",
    broadcast_address: "IP de broadcast",
    usable_hosts: "Quantidade de IPs utilizáveis",
    none: "nenhum",
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Portuguese,
}

impl Language {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Portuguese => &PORTUGUESE,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "pt" | "pt-br" | "portuguese" => Ok(Language::Portuguese),
            other => Err(format!("unknown language '{other}' (expected en, pt)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Language::English => write!(f, "en"),
            Language::Portuguese => write!(f, "pt"),
        }
    }
}
