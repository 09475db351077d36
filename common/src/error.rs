//! Error types shared by the discovery crates.

use std::io;

use thiserror::Error;

/// Fatal discovery failures. Anything not listed here is absorbed during discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The local hostname, or the addresses bound to it, could not be resolved.
    #[error("failed to retrieve local hostnames for artifact router: {0}")]
    HostResolutionFailed(#[source] io::Error),

    /// The DNS resolver could not be created.
    #[error("failed to initialize DNS resolver for artifact router lookups: {0}")]
    ResolverInitFailed(#[source] io::Error),

    /// A recognized section of the routing record could not be decoded.
    #[error("failed to load routes from `{section}` section: {source}")]
    LoaderFailed {
        section: String,
        #[source]
        source: LoadError,
    },
}

/// Raised by mirror and group list loaders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("route entry `{entry}` is missing `=>`")]
    MissingArrow { entry: String },

    #[error("route entry `{entry}` has an empty component")]
    EmptyComponent { entry: String },

    #[error("{0}")]
    Unsupported(String),
}

/// Outcome of a single failed DNS query. Never fatal on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The name exists but has no record of the requested type, or does not exist at all.
    #[error("no records found")]
    NoRecords,

    /// Timeout, refused, malformed answer, ...
    #[error("{0}")]
    Failed(String),
}
