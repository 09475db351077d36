use routem_common::config::Config;
use routem_common::diagnostics::Diagnostics;
use routem_core::DnsDiscovery;
use routem_core::discovery::candidates::CandidateDomain;

use crate::commands::run_blocking;
use crate::mprint;
use crate::terminal::{format, print, spinner};

pub async fn candidates(cfg: &Config, diagnostics: Diagnostics) -> anyhow::Result<()> {
    let strategy: DnsDiscovery = DnsDiscovery::from_config(cfg).with_diagnostics(diagnostics);

    if cfg.quiet == 0 {
        spinner::start("Resolving local addresses...");
    }
    let result: anyhow::Result<Vec<CandidateDomain>> =
        run_blocking(cfg.deadline, move || strategy.candidates()).await;
    spinner::stop();

    let candidates: Vec<CandidateDomain> = result?;
    if candidates.is_empty() {
        print::print_status("No local address has a fully qualified name");
        return Ok(());
    }

    for (idx, candidate) in candidates.iter().enumerate() {
        if cfg.quiet >= 2 {
            mprint!(&format!("{}.{}", cfg.record_label, candidate.domain));
            continue;
        }
        print::tree_head(idx, &candidate.domain);
        print::as_tree_one_level(format::candidate_to_details(candidate));
    }
    Ok(())
}
