use std::net::IpAddr;

use routem_common::diagnostics::Diagnostics;
use routem_common::error::DiscoveryError;
use routem_protocols::dns::{domain_suffix, relative_name};
use tracing::debug;

use crate::network::dns::NameLookup;
use crate::system::LocalHost;

/// A domain worth probing, together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDomain {
    pub address: IpAddr,
    /// Canonical hostname of `address`, without the root label.
    pub hostname: String,
    /// Everything after the first `.` of `hostname`.
    pub domain: String,
}

/// Derives the ordered list of candidate domains from the local machine's identity.
pub struct HostCandidateResolver {
    host: Box<dyn LocalHost>,
    diagnostics: Diagnostics,
}

impl HostCandidateResolver {
    pub fn new(host: Box<dyn LocalHost>) -> Self {
        Self {
            host,
            diagnostics: Diagnostics::silent(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// One candidate per local address whose canonical hostname is qualified,
    /// in address order.
    ///
    /// Only failing to obtain the local addresses is fatal; an address without
    /// a usable canonical hostname is skipped.
    pub fn resolve(&self, dns: &dyn NameLookup) -> Result<Vec<CandidateDomain>, DiscoveryError> {
        self.diagnostics.scope(|| -> Result<Vec<CandidateDomain>, DiscoveryError> {
            let addresses: Vec<IpAddr> = self
                .host
                .addresses()
                .map_err(DiscoveryError::HostResolutionFailed)?;
            debug!(count = addresses.len(), "resolved local addresses");

            Ok(addresses
                .into_iter()
                .filter_map(|address| candidate(dns, address))
                .collect())
        })
    }
}

fn candidate(dns: &dyn NameLookup, address: IpAddr) -> Option<CandidateDomain> {
    let hostname: String = match dns.canonical_name(address) {
        Ok(name) => relative_name(&name).to_string(),
        Err(e) => {
            debug!(%address, error = %e, "no canonical hostname, skipping address");
            return None;
        }
    };

    let Some(domain) = domain_suffix(&hostname).map(str::to_string) else {
        debug!(%address, %hostname, "canonical hostname is unqualified, skipping address");
        return None;
    };

    Some(CandidateDomain {
        address,
        hostname,
        domain,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
