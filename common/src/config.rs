use std::net::SocketAddr;
use std::time::Duration;

/// Label prepended to every candidate domain when building the TXT query name.
pub const DEFAULT_RECORD_LABEL: &str = "_maven";

/// Where the local addresses used to derive candidate domains come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressSource {
    /// Resolve the machine's own hostname and use every address bound to it.
    #[default]
    Hostname,
    /// Use the addresses of every up, non-loopback network interface.
    Interfaces,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Label of the TXT record, queried as `<label>.<domain>`.
    pub record_label: String,

    pub address_source: AddressSource,

    /// Nameservers to query instead of the system resolver configuration.
    ///
    /// Empty means "use whatever the operating system is configured with".
    pub nameservers: Vec<SocketAddr>,

    /// Upper bound for a whole discovery run, enforced by the caller.
    ///
    /// Individual DNS queries keep the resolver's default timeouts.
    pub deadline: Option<Duration>,

    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            record_label: DEFAULT_RECORD_LABEL.to_string(),
            address_source: AddressSource::default(),
            nameservers: Vec::new(),
            deadline: None,
            quiet: 0,
        }
    }
}
