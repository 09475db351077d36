use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 110,
    g: 190,
    b: 255,
};
pub const ACCENT: Color = Color::TrueColor {
    r: 255,
    g: 200,
    b: 90,
};
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const REPOSITORY: Color = Color::Cyan;
pub const WILDCARD: Color = Color::Magenta;
pub const SKIPPED: Color = Color::Yellow;
