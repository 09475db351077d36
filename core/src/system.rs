//! The local machine's network identity.

use std::io;
use std::net::{IpAddr, ToSocketAddrs};

use routem_common::config::AddressSource;
use routem_common::network::interface;
use tracing::debug;

/// Source of the addresses that identify this machine on the network.
pub trait LocalHost: Send + Sync {
    /// Addresses in enumeration order. Duplicates are allowed.
    ///
    /// An error, or an empty list, means the machine's identity could not be
    /// determined at all.
    fn addresses(&self) -> io::Result<Vec<IpAddr>>;
}

/// [`LocalHost`] backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost {
    source: AddressSource,
}

impl SystemHost {
    pub fn new(source: AddressSource) -> Self {
        Self { source }
    }
}

impl LocalHost for SystemHost {
    fn addresses(&self) -> io::Result<Vec<IpAddr>> {
        match self.source {
            AddressSource::Hostname => hostname_addresses(),
            AddressSource::Interfaces => {
                let addrs: Vec<IpAddr> = interface::local_addresses();
                if addrs.is_empty() {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        "no usable network interface addresses",
                    ));
                }
                Ok(addrs)
            }
        }
    }
}

fn hostname_addresses() -> io::Result<Vec<IpAddr>> {
    let hostname: String = sys_info::hostname()
        .map_err(|e| io::Error::other(format!("cannot read local hostname: {e}")))?;
    debug!(%hostname, "resolving local hostname");

    let addrs: Vec<IpAddr> = (hostname.as_str(), 0)
        .to_socket_addrs()?
        .map(|socket_addr| socket_addr.ip())
        .collect();

    if addrs.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no addresses bound to {hostname}"),
        ));
    }
    Ok(addrs)
}
