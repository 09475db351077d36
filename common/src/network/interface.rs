use std::net::IpAddr;

use pnet::datalink::{self, NetworkInterface};

/// Addresses bound to the local network interfaces, in interface order.
///
/// Down and loopback interfaces are left out since their names never lead to a
/// routing domain.
pub fn local_addresses() -> Vec<IpAddr> {
    usable_addresses(&datalink::interfaces())
}

fn usable_addresses(interfaces: &[NetworkInterface]) -> Vec<IpAddr> {
    interfaces
        .iter()
        .filter(|i| i.is_up() && !i.is_loopback())
        .flat_map(|i| i.ips.iter().map(|net| net.ip()))
        .filter(|ip| !ip.is_loopback() && !ip.is_unspecified())
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
