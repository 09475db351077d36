//! In-memory stand-ins for the machine and the DNS.

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use routem_common::diagnostics::Diagnostics;
use routem_common::error::LookupError;
use routem_core::network::dns::{DnsProvider, NameLookup};
use routem_core::system::LocalHost;
use routem_protocols::txt::TxtRecord;
use tracing::span::{Attributes, Id, Record};
use tracing::{Dispatch, Event, Metadata, Subscriber};

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub struct FakeHost {
    addresses: Result<Vec<IpAddr>, String>,
}

impl FakeHost {
    pub fn with_addresses(addrs: &[&str]) -> Self {
        Self {
            addresses: Ok(addrs.iter().map(|a| ip(a)).collect()),
        }
    }

    pub fn unresolvable() -> Self {
        Self {
            addresses: Err("unknown local host".to_string()),
        }
    }
}

impl LocalHost for FakeHost {
    fn addresses(&self) -> io::Result<Vec<IpAddr>> {
        self.addresses
            .clone()
            .map_err(|msg| io::Error::new(io::ErrorKind::NotFound, msg))
    }
}

#[derive(Default)]
struct Zone {
    ptr: HashMap<IpAddr, String>,
    txt: HashMap<String, Result<Vec<TxtRecord>, LookupError>>,
    queries: Vec<String>,
}

/// A DNS that answers from tables and remembers every TXT query it was asked.
#[derive(Clone, Default)]
pub struct FakeDns {
    zone: Arc<Mutex<Zone>>,
    opens: Arc<AtomicUsize>,
    broken: bool,
}

impl FakeDns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every attempt to open a session fails.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn ptr(self, addr: &str, hostname: &str) -> Self {
        self.zone
            .lock()
            .unwrap()
            .ptr
            .insert(ip(addr), hostname.to_string());
        self
    }

    pub fn txt(self, name: &str, value: &str) -> Self {
        self.answer(name, Ok(vec![TxtRecord::from_text(value)]))
    }

    pub fn answer(self, name: &str, answer: Result<Vec<TxtRecord>, LookupError>) -> Self {
        self.zone
            .lock()
            .unwrap()
            .txt
            .insert(name.to_string(), answer);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.zone.lock().unwrap().queries.clone()
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl DnsProvider for FakeDns {
    fn open(&self) -> io::Result<Box<dyn NameLookup>> {
        if self.broken {
            return Err(io::Error::other("no nameservers configured"));
        }
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(self.clone()))
    }
}

impl NameLookup for FakeDns {
    fn canonical_name(&self, addr: IpAddr) -> Result<String, LookupError> {
        self.zone
            .lock()
            .unwrap()
            .ptr
            .get(&addr)
            .cloned()
            .ok_or(LookupError::NoRecords)
    }

    fn txt_records(&self, name: &str) -> Result<Vec<TxtRecord>, LookupError> {
        let mut zone = self.zone.lock().unwrap();
        zone.queries.push(name.to_string());
        zone.txt.get(name).cloned().unwrap_or(Err(LookupError::NoRecords))
    }
}

/// Subscriber that only counts the events it receives.
#[derive(Clone, Default)]
pub struct EventCounter {
    count: Arc<AtomicUsize>,
}

impl EventCounter {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn dispatch(&self) -> Dispatch {
        Dispatch::new(self.clone())
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics::new(self.dispatch())
    }
}

impl Subscriber for EventCounter {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }
    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }
    fn record(&self, _span: &Id, _values: &Record<'_>) {}
    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}
    fn event(&self, _event: &Event<'_>) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
    fn enter(&self, _span: &Id) {}
    fn exit(&self, _span: &Id) {}
}
