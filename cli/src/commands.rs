pub mod candidates;
pub mod discover;
pub mod parse;

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use routem_common::config::{AddressSource, Config, DEFAULT_RECORD_LABEL};
use routem_common::error::DiscoveryError;

#[derive(Parser)]
#[command(name = "routem")]
#[command(about = "Discovers the artifact routing policy published in DNS.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Label of the TXT record, queried as <LABEL>.<domain>
    #[arg(long, global = true, default_value = DEFAULT_RECORD_LABEL)]
    pub label: String,

    /// Nameserver to query instead of the system configuration (repeatable)
    #[arg(long = "nameserver", global = true, value_name = "ADDR:PORT")]
    pub nameservers: Vec<SocketAddr>,

    /// Derive candidates from interface addresses instead of the hostname
    #[arg(long, global = true)]
    pub interfaces: bool,

    /// Give up after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print less (-q hides headers, -qq prints results only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find and print the routing record for this host
    #[command(alias = "d")]
    Discover,
    /// List the domains that would be probed
    #[command(alias = "c")]
    Candidates,
    /// Parse a routing record given on the command line
    #[command(alias = "p")]
    Parse { record: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            record_label: self.label.clone(),
            address_source: if self.interfaces {
                AddressSource::Interfaces
            } else {
                AddressSource::Hostname
            },
            nameservers: self.nameservers.clone(),
            deadline: self.timeout.map(Duration::from_secs),
            quiet: self.quiet,
        }
    }
}

/// Runs blocking discovery work off the async runtime, bounded by `deadline`.
pub async fn run_blocking<T, F>(deadline: Option<Duration>, work: F) -> anyhow::Result<T>
where
    F: FnOnce() -> Result<T, DiscoveryError> + Send + 'static,
    T: Send + 'static,
{
    let task = tokio::task::spawn_blocking(work);
    let joined = match deadline {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .with_context(|| format!("discovery did not finish within {}s", limit.as_secs()))?,
        None => task.await,
    };
    let outcome: Result<T, DiscoveryError> = joined.context("discovery task failed")?;
    Ok(outcome?)
}

/// Drives `command` on a fresh runtime and returns as soon as it completes.
///
/// Blocking work still running at that point (a DNS query past the deadline)
/// is left behind instead of being waited for.
pub fn run_to_completion<T, F>(command: F) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    let runtime: tokio::runtime::Runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let result: anyhow::Result<T> = runtime.block_on(command);
    runtime.shutdown_background();
    result
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
