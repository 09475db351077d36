use std::fmt;

use routem_common::config::DEFAULT_RECORD_LABEL;
use routem_common::diagnostics::Diagnostics;
use routem_common::error::LookupError;
use routem_protocols::dns::record_name;
use routem_protocols::txt::TxtRecord;
use tracing::{debug, info};

use crate::network::dns::NameLookup;

/// Why a candidate domain did not produce a routing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// NXDOMAIN, or the name has no TXT record.
    NoRecord,
    /// Timeout, refused, malformed answer, ...
    QueryFailed(String),
    /// The record value is not valid UTF-8.
    Unreadable,
    Empty,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoRecord => write!(f, "no TXT record"),
            SkipReason::QueryFailed(reason) => write!(f, "query failed: {reason}"),
            SkipReason::Unreadable => write!(f, "TXT value is not valid UTF-8"),
            SkipReason::Empty => write!(f, "TXT value is empty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(String),
    Skipped(SkipReason),
}

/// One TXT query and what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub domain: String,
    /// The queried name, `<label>.<domain>`.
    pub name: String,
    pub outcome: ProbeOutcome,
}

impl Probe {
    pub fn value(&self) -> Option<&str> {
        match &self.outcome {
            ProbeOutcome::Found(value) => Some(value),
            ProbeOutcome::Skipped(_) => None,
        }
    }
}

/// All probes of one search, in query order. Only the last one can be a hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxtSearch {
    pub probes: Vec<Probe>,
}

impl TxtSearch {
    pub fn found(&self) -> Option<&Probe> {
        self.probes.last().filter(|probe| probe.value().is_some())
    }

    pub fn value(&self) -> Option<&str> {
        self.found().and_then(Probe::value)
    }
}

/// Walks the candidate domains until one publishes a routing record.
#[derive(Debug, Clone)]
pub struct TxtRecordDiscoverer {
    label: String,
    diagnostics: Diagnostics,
}

impl Default for TxtRecordDiscoverer {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_LABEL)
    }
}

impl TxtRecordDiscoverer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            diagnostics: Diagnostics::silent(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Probes `domains` in order and stops at the first non-empty TXT value.
    ///
    /// Failed probes never abort the walk.
    pub fn search<I, S>(&self, dns: &dyn NameLookup, domains: I) -> TxtSearch
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.diagnostics.scope(|| {
            let mut search: TxtSearch = TxtSearch::default();
            for domain in domains {
                let probe: Probe = self.probe(dns, domain.as_ref());
                let hit: bool = probe.value().is_some();
                search.probes.push(probe);
                if hit {
                    break;
                }
            }
            search
        })
    }

    fn probe(&self, dns: &dyn NameLookup, domain: &str) -> Probe {
        let name: String = record_name(&self.label, domain);
        let outcome: ProbeOutcome = match dns.txt_records(&name) {
            Ok(records) => select(records),
            Err(LookupError::NoRecords) => ProbeOutcome::Skipped(SkipReason::NoRecord),
            Err(LookupError::Failed(reason)) => {
                ProbeOutcome::Skipped(SkipReason::QueryFailed(reason))
            }
        };

        match &outcome {
            ProbeOutcome::Found(_) => info!(%name, "found routing record"),
            ProbeOutcome::Skipped(reason) => debug!(%name, %reason, "skipping candidate"),
        }

        Probe {
            domain: domain.to_string(),
            name,
            outcome,
        }
    }
}

/// The first record answers the query; any further ones are ignored.
fn select(records: Vec<TxtRecord>) -> ProbeOutcome {
    let Some(record) = records.into_iter().next() else {
        return ProbeOutcome::Skipped(SkipReason::NoRecord);
    };

    match record.value() {
        Ok(value) if value.is_empty() => ProbeOutcome::Skipped(SkipReason::Empty),
        Ok(value) => ProbeOutcome::Found(value),
        Err(_) => ProbeOutcome::Skipped(SkipReason::Unreadable),
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
