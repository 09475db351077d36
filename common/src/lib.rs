//! Types shared across the routem workspace: the routing model the discovery
//! fills in, its error types, configuration and the diagnostics capability.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod network;
pub mod router;
