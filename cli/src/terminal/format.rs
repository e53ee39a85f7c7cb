use colored::*;

use crate::terminal::colors;
use ipcast_common::addr::report::Report;

pub type Row = (&'static str, ColoredString);

/// Colors each report row by the notation it renders.
pub fn to_rows(report: &Report) -> Vec<Row> {
    report
        .entries()
        .iter()
        .map(|(label, value)| {
            let value: ColoredString = match *label {
                "Original Input" => value.as_str().italic(),
                "32-bit Integer" => value.as_str().color(colors::ACCENT).bold(),
                "Dotted Decimal" | "Partial 4" => value.as_str().color(colors::IPV4_ADDR),
                "Hexadecimal" => value.as_str().color(colors::HEX_VALUE),
                "Octal" => value.as_str().color(colors::OCTAL_VALUE),
                _ => value.as_str().color(colors::TEXT_DEFAULT),
            };
            (*label, value)
        })
        .collect()
}
