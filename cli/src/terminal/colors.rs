use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 96, g: 119, b: 103 };
pub const ACCENT: Color = Color::TrueColor { r: 214, g: 170, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MUTED: Color = Color::BrightBlack;

pub const IPV4_ADDR: Color = Color::TrueColor { r: 120, g: 200, b: 160 };
pub const IPV6_ADDR: Color = Color::TrueColor { r: 130, g: 170, b: 230 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 200, g: 150, b: 220 };

pub const STATUS_UP: Color = Color::Green;
pub const STATUS_DOWN: Color = Color::Red;
pub const ERROR: Color = Color::Red;
