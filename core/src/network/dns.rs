//! DNS access used by discovery: reverse lookups for canonical hostnames and
//! TXT lookups for routing records.
//!
//! Queries go through hickory's blocking [`Resolver`]. It drives its own
//! runtime, so callers inside an async context must move discovery onto a
//! blocking thread first.

use std::io;
use std::net::{IpAddr, SocketAddr};

use hickory_resolver::Resolver;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use routem_common::config::Config;
use routem_common::error::LookupError;
use routem_protocols::dns::relative_name;
use routem_protocols::txt::TxtRecord;
use tracing::debug;

/// An open DNS session. Lives for one discovery run.
pub trait NameLookup {
    /// Canonical (reverse DNS) hostname of `addr`.
    fn canonical_name(&self, addr: IpAddr) -> Result<String, LookupError>;

    /// All TXT records published at `name`, in answer order.
    fn txt_records(&self, name: &str) -> Result<Vec<TxtRecord>, LookupError>;
}

/// Opens a fresh [`NameLookup`] for every discovery run.
pub trait DnsProvider: Send + Sync {
    fn open(&self) -> io::Result<Box<dyn NameLookup>>;
}

/// [`DnsProvider`] backed by hickory-resolver.
#[derive(Debug, Clone, Default)]
pub struct HickoryProvider {
    nameservers: Vec<SocketAddr>,
}

impl HickoryProvider {
    /// Uses the operating system's resolver configuration.
    pub fn system() -> Self {
        Self::default()
    }

    pub fn with_nameservers(nameservers: Vec<SocketAddr>) -> Self {
        Self { nameservers }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::with_nameservers(cfg.nameservers.clone())
    }

    fn build(&self) -> io::Result<Resolver> {
        if self.nameservers.is_empty() {
            debug!("using system DNS configuration");
            return Resolver::from_system_conf();
        }

        let mut config: ResolverConfig = ResolverConfig::new();
        for addr in &self.nameservers {
            config.add_name_server(NameServerConfig::new(*addr, Protocol::Udp));
        }
        debug!(nameservers = ?self.nameservers, "using configured nameservers");
        Resolver::new(config, ResolverOpts::default())
    }
}

impl DnsProvider for HickoryProvider {
    fn open(&self) -> io::Result<Box<dyn NameLookup>> {
        let resolver: Resolver = self.build()?;
        Ok(Box::new(HickoryLookup { resolver }))
    }
}

struct HickoryLookup {
    resolver: Resolver,
}

impl NameLookup for HickoryLookup {
    fn canonical_name(&self, addr: IpAddr) -> Result<String, LookupError> {
        let lookup = self.resolver.reverse_lookup(addr).map_err(lookup_error)?;
        lookup
            .iter()
            .next()
            .map(|ptr| ptr.to_utf8())
            .ok_or(LookupError::NoRecords)
    }

    fn txt_records(&self, name: &str) -> Result<Vec<TxtRecord>, LookupError> {
        // Always absolute, search domains must not be appended.
        let fqdn: String = format!("{}.", relative_name(name));
        let lookup = self
            .resolver
            .txt_lookup(fqdn.as_str())
            .map_err(lookup_error)?;

        Ok(lookup
            .iter()
            .map(|txt| TxtRecord::new(txt.txt_data().iter().map(|s| s.to_vec()).collect()))
            .collect())
    }
}

fn lookup_error(err: ResolveError) -> LookupError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
        _ => LookupError::Failed(err.to_string()),
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
