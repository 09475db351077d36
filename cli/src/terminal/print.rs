//! Terminal output. Every line goes out as a `tracing` event on
//! [`PRINT_TARGET`] so it stays above the spinner.

use std::fmt::Display;

use colored::*;
use tracing::info;

use crate::terminal::colors;
use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 9;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::terminal::print::success(&format!($($arg)*));
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn success(msg: &str) {
    print(&format!("{} {}", "[+]".green().bold(), msg));
}

/// `label` centred in a line of `fill`.
fn rule(fill: &str, label: &str) -> (String, String) {
    let free: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(label));
    (fill.repeat(free / 2), fill.repeat(free - free / 2))
}

/// Dots padding `key` up to the value column, then the colon.
fn leader(key: &str) -> String {
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
    format!("{}", format!("{dots}:").color(colors::SEPARATOR))
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let label: String = format!(" routem {} ", env!("CARGO_PKG_VERSION"));
    let (left, right) = rule("═", &label);
    print(&format!(
        "{}{}{}",
        left.bright_black(),
        label.bright_green().bold(),
        right.bright_black()
    ));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let label: String = format!("[ {} ]", msg.to_uppercase());
    let (left, right) = rule("─", &label);
    print(&format!(
        "{}{}{}",
        left.bright_black(),
        label.bright_green(),
        right.bright_black()
    ));
}

pub fn fat_separator() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
}

pub fn centerln(msg: &str) {
    let (left, _) = rule(" ", msg);
    print(&format!("{left}{msg}"));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

pub fn aligned_line(key: &str, value: impl Display) {
    print_status(format!(
        "{}{} {}",
        key.color(colors::PRIMARY),
        leader(key),
        value
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let last: usize = details.len().saturating_sub(1);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        print(&format!(
            " {} {}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            leader(key),
            value
        ));
    }
}

const NO_RECORD: &[&str] = &[
    "┌──────────────────────────────────────┐",
    "│   no routing record published here   │",
    "│   fetches go to configured remotes   │",
    "└──────────────────────────────────────┘",
];

pub fn no_results() {
    for line in NO_RECORD {
        centerln(&format!("{}", line.red().bold()));
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
