//! # Routing Record Grammar
//!
//! ```text
//! record  := section (';' section)*
//! section := key '=' value        ; split on the first '=' only
//! ```
//!
//! Keys are matched case-insensitively. Values are handed on untouched, so
//! they may contain further `=` characters.

pub const SECTION_SEPARATOR: char = ';';
pub const KEY_SEPARATOR: char = '=';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    Mirrors,
    Groups,
    /// Anything else. Ignored so that newer records keep working with older clients.
    Unknown,
}

impl SectionKey {
    pub fn classify(key: &str) -> Self {
        if key.eq_ignore_ascii_case("mirrors") {
            SectionKey::Mirrors
        } else if key.eq_ignore_ascii_case("groups") {
            SectionKey::Groups
        } else {
            SectionKey::Unknown
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    Entry { key: &'a str, value: &'a str },
    /// No `=`, or nothing after it.
    Malformed(&'a str),
}

/// Splits a raw record into its sections, left to right.
pub fn sections(record: &str) -> impl Iterator<Item = Section<'_>> {
    record.split(SECTION_SEPARATOR).map(section)
}

fn section(raw: &str) -> Section<'_> {
    match raw.split_once(KEY_SEPARATOR) {
        Some((key, value)) if !value.is_empty() => Section::Entry { key, value },
        _ => Section::Malformed(raw),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
