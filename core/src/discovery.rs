//! # DNS Route Discovery
//!
//! Locates the routing policy for this machine without any local configuration:
//!
//! 1. [`candidates`]: every local address is reverse-resolved and the domain
//!    part of its canonical hostname becomes a candidate.
//! 2. [`txt`]: `_maven.<candidate>` is queried for TXT until one answers.
//! 3. [`parser`]: the first answer is parsed into an [`ArtifactRouter`].
//!
//! Everything runs sequentially on the calling thread and blocks on the network.
//! Nothing is cached between runs.

pub mod candidates;
pub mod parser;
pub mod txt;

use routem_common::config::Config;
use routem_common::diagnostics::Diagnostics;
use routem_common::error::DiscoveryError;
use routem_common::router::ArtifactRouter;
use tracing::{debug, info};

use crate::network::dns::{DnsProvider, HickoryProvider, NameLookup};
use crate::system::{LocalHost, SystemHost};
use candidates::{CandidateDomain, HostCandidateResolver};
use parser::RouteRecordParser;
use txt::{Probe, TxtRecordDiscoverer};

/// A way of finding the router to use when none is configured locally.
pub trait RouterDiscoveryStrategy: Send + Sync {
    /// `Ok(None)` when nothing was discovered; the caller decides whether that is fatal.
    fn find_router(&self) -> Result<Option<ArtifactRouter>, DiscoveryError>;
}

/// Everything one discovery run saw.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    pub candidates: Vec<CandidateDomain>,
    pub probes: Vec<Probe>,
    pub router: Option<ArtifactRouter>,
}

impl DiscoveryReport {
    /// The probe whose record produced the router.
    pub fn source(&self) -> Option<&Probe> {
        self.router.as_ref()?;
        self.probes.last()
    }
}

pub struct DnsDiscovery {
    dns: Box<dyn DnsProvider>,
    candidates: HostCandidateResolver,
    txt: TxtRecordDiscoverer,
    parser: RouteRecordParser,
    diagnostics: Diagnostics,
}

impl DnsDiscovery {
    pub fn new(host: Box<dyn LocalHost>, dns: Box<dyn DnsProvider>) -> Self {
        Self {
            dns,
            candidates: HostCandidateResolver::new(host),
            txt: TxtRecordDiscoverer::default(),
            parser: RouteRecordParser::default(),
            diagnostics: Diagnostics::silent(),
        }
    }

    /// System host and hickory resolver, set up from `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Box::new(SystemHost::new(cfg.address_source)),
            Box::new(HickoryProvider::from_config(cfg)),
        )
        .with_record_label(cfg.record_label.clone())
    }

    pub fn with_record_label(mut self, label: impl Into<String>) -> Self {
        self.txt = TxtRecordDiscoverer::new(label).with_diagnostics(self.diagnostics.clone());
        self
    }

    pub fn with_parser(mut self, parser: RouteRecordParser) -> Self {
        self.parser = parser.with_diagnostics(self.diagnostics.clone());
        self
    }

    /// Routes every component's events to `diagnostics`.
    pub fn with_diagnostics(self, diagnostics: Diagnostics) -> Self {
        Self {
            dns: self.dns,
            candidates: self.candidates.with_diagnostics(diagnostics.clone()),
            txt: self.txt.with_diagnostics(diagnostics.clone()),
            parser: self.parser.with_diagnostics(diagnostics.clone()),
            diagnostics,
        }
    }

    /// Candidate domains only, without any TXT query.
    pub fn candidates(&self) -> Result<Vec<CandidateDomain>, DiscoveryError> {
        self.diagnostics.scope(|| -> Result<Vec<CandidateDomain>, DiscoveryError> {
            let dns: Box<dyn NameLookup> = self.open()?;
            self.candidates.resolve(dns.as_ref())
        })
    }

    pub fn discover(&self) -> Result<DiscoveryReport, DiscoveryError> {
        self.diagnostics.scope(|| -> Result<DiscoveryReport, DiscoveryError> {
            let dns: Box<dyn NameLookup> = self.open()?;
            let candidates: Vec<CandidateDomain> = self.candidates.resolve(dns.as_ref())?;
            if candidates.is_empty() {
                info!("no candidate domains for this host");
            }

            let search = self
                .txt
                .search(dns.as_ref(), candidates.iter().map(|c| c.domain.as_str()));

            let router: Option<ArtifactRouter> = match search.value() {
                Some(record) => Some(self.parser.parse(record)?),
                None => {
                    debug!(probes = search.probes.len(), "no routing record found");
                    None
                }
            };

            Ok(DiscoveryReport {
                candidates,
                probes: search.probes,
                router,
            })
        })
    }

    fn open(&self) -> Result<Box<dyn NameLookup>, DiscoveryError> {
        self.dns.open().map_err(DiscoveryError::ResolverInitFailed)
    }
}

impl RouterDiscoveryStrategy for DnsDiscovery {
    fn find_router(&self) -> Result<Option<ArtifactRouter>, DiscoveryError> {
        Ok(self.discover()?.router)
    }
}
