//! CSV output formatting for a subnet report.

use super::terminal::{format_field, report_lines};
use crate::models::{Language, SubnetReport};

const CIDR_WIDTH: usize = 20;
const FIELD_WIDTH: usize = 18;

/// Header plus one data row, every field quoted and right-aligned.
pub fn format_csv(report: &SubnetReport, lang: Language) -> String {
    let lines = report_lines(&report.result, lang);

    let mut header = vec![format_field("cidr", CIDR_WIDTH)];
    let mut row = vec![format_field(report.input, CIDR_WIDTH)];
    for (label, value) in lines {
        let width = FIELD_WIDTH.max(label.chars().count() + 2);
        header.push(format_field(label, width));
        row.push(format_field(value, width));
    }

    format!("{}\n{}", header.join(","), row.join(","))
}
