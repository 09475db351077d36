//! Domain name helpers for building the TXT query names.

/// Strips the root label (`host.example.com.` -> `host.example.com`).
pub fn relative_name(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// The domain a host lives in: everything after the first `.` of its name.
///
/// Returns `None` for unqualified names such as `localhost` and for names
/// whose suffix is empty.
pub fn domain_suffix(hostname: &str) -> Option<&str> {
    let (_, domain) = relative_name(hostname).split_once('.')?;
    if domain.is_empty() {
        return None;
    }
    Some(domain)
}

/// `<label>.<domain>`, the name whose TXT record carries the routing policy.
pub fn record_name(label: &str, domain: &str) -> String {
    let label: &str = label.trim_end_matches('.');
    if label.is_empty() {
        return domain.to_string();
    }
    format!("{label}.{domain}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
