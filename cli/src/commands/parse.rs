use anyhow::Context;
use routem_common::diagnostics::Diagnostics;
use routem_common::router::ArtifactRouter;
use routem_core::discovery::parser::RouteRecordParser;

use crate::commands::discover::print_router;

/// Parses a record offline, the same way a discovered one would be.
pub fn parse(record: &str, diagnostics: Diagnostics) -> anyhow::Result<()> {
    let router: ArtifactRouter = RouteRecordParser::default()
        .with_diagnostics(diagnostics)
        .parse(record)
        .context("record could not be parsed")?;

    print_router(&router);
    Ok(())
}
