//! # Address Conversion
//!
//! Turns a textual IPv4 address in any accepted notation into its
//! canonical 32-bit value, and re-renders that value into every
//! notation the parser understands.
//!
//! The two halves are independent:
//! * **[`parse`]**: text in, `u32` out. Leaf module, no dependencies.
//! * **[`report`]**: `u32` (plus the original text) in, a fixed
//!   ten-row labeled report out. Never fails.

pub mod parse;
pub mod report;
