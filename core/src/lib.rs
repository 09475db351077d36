//! Discovery of the artifact routing policy published in DNS.
//!
//! * [`discovery`]: the candidate walk, TXT search and record parsing.
//! * [`network`]: DNS access (hickory-resolver).
//! * [`system`]: the local machine's addresses.

pub mod discovery;
pub mod network;
pub mod system;

pub use discovery::{DiscoveryReport, DnsDiscovery, RouterDiscoveryStrategy};
