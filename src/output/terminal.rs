//! Text report and terminal output utilities.

use crate::models::{format_dotted_quad, Language, SubnetResult};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.chars().count();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// The English text report, one value per line.
///
/// # Examples
/// ```
/// use ipv4_subnet_calc::{compute, format, parse};
/// let report = format(&compute(parse("10.0.0.5/32").unwrap()));
/// assert!(report.contains("First usable IP: none"));
/// ```
pub fn format(result: &SubnetResult) -> String {
    format_localized(result, Language::English)
}

/// The text report with labels in `lang`.
pub fn format_localized(result: &SubnetResult, lang: Language) -> String {
    report_lines(result, lang)
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<String>>()
        .join("\n")
}

/// The text report with bold labels, for a terminal.
pub fn format_colored(result: &SubnetResult, lang: Language) -> String {
    report_lines(result, lang)
        .iter()
        .map(|(label, value)| format!("{}: {}", label.bold(), value.green()))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Label/value pairs in report order.
pub(crate) fn report_lines(result: &SubnetResult, lang: Language) -> Vec<(&'static str, String)> {
    let labels = lang.labels();
    let usable = |addr: Option<u32>| addr.map_or(labels.none.to_string(), format_dotted_quad);
    vec![
        (labels.subnet_mask, format_dotted_quad(result.subnet_mask)),
        (labels.wildcard_mask, format_dotted_quad(result.wildcard_mask)),
        (labels.network_address, format_dotted_quad(result.network_address)),
        (labels.first_usable, usable(result.first_usable)),
        (labels.last_usable, usable(result.last_usable)),
        (labels.broadcast_address, format_dotted_quad(result.broadcast_address)),
        (labels.usable_hosts, result.usable_host_count.to_string()),
    ]
}
