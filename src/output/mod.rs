//! Output formatting for subnet reports.
//!
//! - [`terminal`] - plain and colored text reports
//! - [`csv`] - header plus one quoted row
//! - [`json`] - serde JSON

mod csv;
mod json;
mod terminal;

use crate::config::Config;
use crate::models::SubnetReport;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub use csv::format_csv;
pub use json::format_json;
pub use terminal::{format, format_colored, format_field, format_localized};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown format '{other}' (expected text, json, csv)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Render `report` in the format and language chosen by `config`.
pub fn render(report: &SubnetReport, config: &Config) -> Result<String, Box<dyn Error>> {
    log::debug!("render({}) format={}", report.input, config.format);
    let out = match config.format {
        OutputFormat::Text if config.color => format_colored(&report.result, config.lang),
        OutputFormat::Text => format_localized(&report.result, config.lang),
        OutputFormat::Json => format_json(report)?,
        OutputFormat::Csv => format_csv(report, config.lang),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;
    use crate::models::Language;
    use crate::processing::EdgePolicy;

    fn plain(format: OutputFormat) -> Config {
        Config {
            format,
            color: false,
            ..Config::default()
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text() {
        let report = calculate("10.0.0.0/30", EdgePolicy::Classic).unwrap();
        let out = render(&report, &plain(OutputFormat::Text)).unwrap();
        assert_eq!(out, format(&report.result));
    }

    #[test]
    fn test_render_respects_language() {
        let report = calculate("10.0.0.0/30", EdgePolicy::Classic).unwrap();
        let config = Config {
            lang: Language::Portuguese,
            ..plain(OutputFormat::Text)
        };
        let out = render(&report, &config).unwrap();
        assert!(out.starts_with("Máscara de rede: 255.255.255.252"));
    }

    #[test]
    fn test_render_json_and_csv() {
        let report = calculate("10.0.0.0/30", EdgePolicy::Classic).unwrap();
        let json = render(&report, &plain(OutputFormat::Json)).unwrap();
        assert!(json.contains("\"broadcast_address\": \"10.0.0.3\""));
        let csv = render(&report, &plain(OutputFormat::Csv)).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }
}
