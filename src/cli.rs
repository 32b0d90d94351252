//! Command line interface.

use crate::config::Config;
use crate::models::Language;
use crate::output::OutputFormat;
use crate::processing::EdgePolicy;
use clap::Parser;

/// IPv4 subnet calculator
///
/// Prints the subnet mask, wildcard mask, network and broadcast addresses,
/// usable host range and usable host count for an address/prefix pair.
#[derive(Parser, Debug)]
#[command(name = "ipv4-subnet-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address and prefix, e.g. 192.168.1.10/24
    pub cidr: String,

    /// Output format: text, json, csv [env: SUBNET_CALC_FORMAT]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Report language: en, pt [env: SUBNET_CALC_LANG]
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Host counting for /31 and /32: classic, point-to-point [env: SUBNET_CALC_EDGE_POLICY]
    #[arg(short, long)]
    pub edge_policy: Option<EdgePolicy>,

    /// Plain text report without terminal styling
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags given on the command line win over `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(lang) = self.lang {
            config.lang = lang;
        }
        if let Some(policy) = self.edge_policy {
            config.edge_policy = policy;
        }
        if self.no_color {
            config.color = false;
        }
        config
    }
}
