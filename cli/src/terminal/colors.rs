use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const HEX_VALUE: Color = Color::BrightMagenta;
pub const OCTAL_VALUE: Color = Color::Yellow;
