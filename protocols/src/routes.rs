//! # Route List Grammar
//!
//! Decodes the value of a `mirrors` or `groups` section:
//!
//! ```text
//! mirror-list := mirror ('|' mirror)*
//! mirror      := repo-id (',' repo-id)* '=>' url
//! group-list  := group ('|' group)*
//! group       := name '=>' member (',' member)*
//! ```
//!
//! Whitespace around every token is ignored. URLs are taken as written.

use routem_common::error::LoadError;
use routem_common::router::{GroupRoute, MirrorRoute};

pub const ENTRY_SEPARATOR: char = '|';
pub const LIST_SEPARATOR: char = ',';
pub const ROUTE_ARROW: &str = "=>";

pub fn parse_mirrors(value: &str) -> Result<Vec<MirrorRoute>, LoadError> {
    entries(value)
        .map(|entry| {
            let (ids, url) = split_entry(entry)?;
            let url: &str = non_empty(url, entry)?;
            Ok(MirrorRoute::new(split_list(ids, entry)?, url))
        })
        .collect()
}

pub fn parse_groups(value: &str) -> Result<Vec<GroupRoute>, LoadError> {
    entries(value)
        .map(|entry| {
            let (name, members) = split_entry(entry)?;
            let name: &str = non_empty(name, entry)?;
            Ok(GroupRoute::new(name, split_list(members, entry)?))
        })
        .collect()
}

fn entries(value: &str) -> impl Iterator<Item = &str> {
    value.split(ENTRY_SEPARATOR).map(str::trim)
}

fn split_entry(entry: &str) -> Result<(&str, &str), LoadError> {
    entry
        .split_once(ROUTE_ARROW)
        .map(|(left, right)| (left.trim(), right.trim()))
        .ok_or_else(|| LoadError::MissingArrow {
            entry: entry.to_string(),
        })
}

fn split_list(list: &str, entry: &str) -> Result<Vec<String>, LoadError> {
    list.split(LIST_SEPARATOR)
        .map(|item| non_empty(item.trim(), entry).map(str::to_string))
        .collect()
}

fn non_empty<'a>(token: &'a str, entry: &str) -> Result<&'a str, LoadError> {
    if token.is_empty() {
        return Err(LoadError::EmptyComponent {
            entry: entry.to_string(),
        });
    }
    Ok(token)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
