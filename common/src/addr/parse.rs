//! # Address Parsing
//!
//! Resolves a textual IPv4 address into its canonical 32-bit value.
//!
//! Accepted notations, tried in this order:
//! * **Standard dotted-quad** (e.g., `192.168.1.1`).
//! * **Hex literal**: `0x` / `0X` prefix (e.g., `0xC0A80101`).
//! * **Octal literal**: `0o` / `0O` prefix, or a bare leading zero
//!   (e.g., `0o30052000401`, `0300`).
//! * **Dot-segmented decimal forms**: `A`, `A.B`, `A.B.C`, `A.B.C.D`,
//!   where the last segment absorbs the remaining low-order bits.
//!
//! The order matters: inputs like `"010"` or `"0.1"` fit more than one
//! notation, and the winner is whichever rule comes first in the
//! ladder, never a guess at intent.

use std::net::IpAddr;
use std::num::IntErrorKind;

use thiserror::Error;
use tracing::debug;

/// Ways a textual address can fail to resolve.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A literal contains a character that is not a digit of its base.
    #[error("invalid digit in '{literal}' (base {radix})")]
    InvalidDigit { literal: String, radix: u32 },
    /// A literal parsed, but its value does not fit in 32 bits.
    #[error("'{0}' does not fit in 32 bits")]
    Overflow(String),
    /// More than four dot-separated segments.
    #[error("too many segments: {0} (at most 4)")]
    TooManySegments(usize),
    /// The standard parser recognized the input, but not as IPv4.
    #[error("only IPv4 addresses are supported")]
    UnsupportedFamily,
}

/// Resolves `input` into the canonical 32-bit address value.
///
/// The first rule whose syntax matches wins. Once a rule has matched,
/// its failure is final: an invalid hex literal is never retried as a
/// dotted form.
pub fn parse(input: &str) -> Result<u32, ParseError> {
    // Full dotted-quad, or an IPv6 literal (rejected outright).
    if let Ok(addr) = input.parse::<IpAddr>() {
        return match addr {
            IpAddr::V4(ipv4_addr) => {
                debug!("'{input}' matched standard dotted-quad");
                Ok(u32::from(ipv4_addr))
            }
            IpAddr::V6(_) => Err(ParseError::UnsupportedFamily),
        };
    }

    if let Some(digits) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        debug!("'{input}' matched hex literal");
        return parse_literal(digits, 16);
    }

    if let Some(digits) = input.strip_prefix("0o").or_else(|| input.strip_prefix("0O")) {
        debug!("'{input}' matched octal literal");
        return parse_literal(digits, 8);
    }

    // Legacy octal: a bare leading zero sends the whole literal to the
    // base-8 parser, dots included. "0.1" therefore dies on the '.'
    // instead of being read as a partial form.
    if input.starts_with('0') && input.len() > 1 {
        debug!("'{input}' matched legacy octal literal");
        return parse_literal(input, 8);
    }

    parse_dotted(input)
}

/// Parses the dot-segmented decimal forms `A`, `A.B`, `A.B.C`, `A.B.C.D`.
///
/// The last segment absorbs the remaining low-order bits: `A.B` places
/// `A` in the top octet and the low 24 bits of `B` below it; `A.B.C`
/// gives `C` the low 16 bits. An oversized trailing segment is
/// truncated to its slot, never rejected.
fn parse_dotted(input: &str) -> Result<u32, ParseError> {
    let segments: Vec<&str> = input.split('.').collect();

    match segments.as_slice() {
        [value] => parse_literal(value, 10),
        [a, b] => {
            let a = parse_literal(a, 10)?;
            let b = parse_literal(b, 10)?;
            Ok((a << 24) | (b & 0x00FF_FFFF))
        }
        [a, b, c] => {
            let a = parse_literal(a, 10)? & 0xFF;
            let b = parse_literal(b, 10)? & 0xFF;
            let c = parse_literal(c, 10)? & 0xFFFF;
            Ok((a << 24) | (b << 16) | c)
        }
        [a, b, c, d] => {
            let a = parse_literal(a, 10)? & 0xFF;
            let b = parse_literal(b, 10)? & 0xFF;
            let c = parse_literal(c, 10)? & 0xFF;
            let d = parse_literal(d, 10)? & 0xFF;
            Ok((a << 24) | (b << 16) | (c << 8) | d)
        }
        more => Err(ParseError::TooManySegments(more.len())),
    }
}

/// Parses one unsigned literal in the given base.
///
/// Every numeric parse in this module funnels through here, so the
/// error classification is uniform: anything past 32 bits is
/// [`ParseError::Overflow`], everything else a bad digit. Signs are
/// rejected with the digits (the value space is unsigned throughout).
fn parse_literal(digits: &str, radix: u32) -> Result<u32, ParseError> {
    u32::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ParseError::Overflow(digits.to_string()),
        _ => ParseError::InvalidDigit {
            literal: digits.to_string(),
            radix,
        },
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
