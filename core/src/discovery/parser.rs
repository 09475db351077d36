use routem_common::diagnostics::Diagnostics;
use routem_common::error::{DiscoveryError, LoadError};
use routem_common::router::{ArtifactRouter, GroupRoute, MirrorRoute};
use routem_protocols::record::{self, Section, SectionKey};
use routem_protocols::routes;
use tracing::{debug, trace};

/// Decodes the value of a `mirrors` section.
pub trait MirrorListLoader: Send + Sync {
    fn load_mirrors(&self, value: &str) -> Result<Vec<MirrorRoute>, LoadError>;
}

/// Decodes the value of a `groups` section.
pub trait GroupListLoader: Send + Sync {
    fn load_groups(&self, value: &str) -> Result<Vec<GroupRoute>, LoadError>;
}

/// Loader for the `id,id=>target|...` route list grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteListLoader;

impl MirrorListLoader for RouteListLoader {
    fn load_mirrors(&self, value: &str) -> Result<Vec<MirrorRoute>, LoadError> {
        routes::parse_mirrors(value)
    }
}

impl GroupListLoader for RouteListLoader {
    fn load_groups(&self, value: &str) -> Result<Vec<GroupRoute>, LoadError> {
        routes::parse_groups(value)
    }
}

/// Turns a raw routing record into an [`ArtifactRouter`].
pub struct RouteRecordParser {
    mirrors: Box<dyn MirrorListLoader>,
    groups: Box<dyn GroupListLoader>,
    diagnostics: Diagnostics,
}

impl Default for RouteRecordParser {
    fn default() -> Self {
        Self::new(Box::new(RouteListLoader), Box::new(RouteListLoader))
    }
}

impl RouteRecordParser {
    pub fn new(mirrors: Box<dyn MirrorListLoader>, groups: Box<dyn GroupListLoader>) -> Self {
        Self {
            mirrors,
            groups,
            diagnostics: Diagnostics::silent(),
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Parses every section left to right, appending what each recognized one yields.
    ///
    /// Malformed sections are skipped and unknown keys ignored. A loader error
    /// fails the whole record: no partially filled router is returned.
    pub fn parse(&self, record: &str) -> Result<ArtifactRouter, DiscoveryError> {
        self.diagnostics.scope(|| -> Result<ArtifactRouter, DiscoveryError> {
            let mut router: ArtifactRouter = ArtifactRouter::new();

            for section in record::sections(record) {
                let (key, value) = match section {
                    Section::Entry { key, value } => (key, value),
                    Section::Malformed(raw) => {
                        debug!("Skipping DNS TXT section '{raw}': it is not a valid key-value pair");
                        continue;
                    }
                };

                match SectionKey::classify(key) {
                    SectionKey::Mirrors => {
                        let mirrors = self
                            .mirrors
                            .load_mirrors(value)
                            .map_err(|source| loader_failed(key, source))?;
                        router.add_mirrors(mirrors);
                    }
                    SectionKey::Groups => {
                        let groups = self
                            .groups
                            .load_groups(value)
                            .map_err(|source| loader_failed(key, source))?;
                        router.add_groups(groups);
                    }
                    SectionKey::Unknown => trace!(key, "ignoring unrecognized section"),
                }
            }

            Ok(router)
        })
    }
}

fn loader_failed(key: &str, source: LoadError) -> DiscoveryError {
    DiscoveryError::LoaderFailed {
        section: key.to_string(),
        source,
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
