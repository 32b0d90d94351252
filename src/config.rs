//! Runtime configuration.
//!
//! Defaults, overridden by environment variables (a `.env` file is loaded by
//! `main`), overridden in turn by command line flags.

use crate::models::Language;
use crate::output::OutputFormat;
use crate::processing::EdgePolicy;
use std::error::Error;
use std::str::FromStr;

pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LANG: &str = "SUBNET_CALC_LANG";
pub const ENV_EDGE_POLICY: &str = "SUBNET_CALC_EDGE_POLICY";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub lang: Language,
    pub edge_policy: EdgePolicy,
    /// Bold labels in the text report.
    pub color: bool,
    /// log4rs yaml file, used when it exists.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::default(),
            lang: Language::default(),
            edge_policy: EdgePolicy::default(),
            color: true,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(format) = env_value(&lookup, ENV_FORMAT)? {
            config.format = format;
        }
        if let Some(lang) = env_value(&lookup, ENV_LANG)? {
            config.lang = lang;
        }
        if let Some(policy) = env_value(&lookup, ENV_EDGE_POLICY)? {
            config.edge_policy = policy;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = path;
        }
        if lookup(ENV_NO_COLOR).is_some() {
            config.color = false;
        }

        log::debug!("Config from env: {config:?}");
        Ok(config)
    }
}

fn env_value<T, F>(lookup: &F, key: &str) -> Result<Option<T>, Box<dyn Error>>
where
    T: FromStr<Err = String>,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .parse()
            .map(Some)
            .map_err(|e| format!("Invalid {key}: {e}").into()),
        _ => Ok(None),
    }
}
