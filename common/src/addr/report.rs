//! # Conversion Report
//!
//! Re-renders a canonical address value into every notation the parser
//! accepts, as a fixed ten-row labeled report.

use std::net::Ipv4Addr;

/// One rendered notation, labeled.
pub type Entry = (&'static str, String);

/// The full conversion report, in display order.
///
/// Rows repeat on purpose: the layout is a fixed ten-row table, and
/// the decimal value earns three of them.
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Width of the widest label, for aligned rendering.
    pub fn key_width(&self) -> usize {
        self.entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0)
    }
}

/// Builds the report for `value`, echoing the original input verbatim.
///
/// Infallible: every 32-bit value is representable in every notation.
pub fn build(value: u32, original: &str) -> Report {
    let [a, b, c, d] = value.to_be_bytes();
    let dotted = Ipv4Addr::from(value).to_string();

    // Tails of the partial forms: everything below the octets kept.
    let rest2 = (u32::from(b) << 16) | (u32::from(c) << 8) | u32::from(d);
    let rest3 = (u32::from(c) << 8) | u32::from(d);

    let entries = vec![
        ("Original Input", original.to_string()),
        ("32-bit Integer", format!("{value} (unsigned)")),
        ("Dotted Decimal", dotted.clone()),
        ("Decimal (full)", value.to_string()),
        ("Hexadecimal", format!("0x{value:X}")),
        ("Octal", format!("0o{value:o}")),
        ("Partial 1", value.to_string()),
        ("Partial 2", format!("{a}.{rest2}")),
        ("Partial 3", format!("{a}.{b}.{rest3}")),
        ("Partial 4", dotted),
    ];

    Report { entries }
}
