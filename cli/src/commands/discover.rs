use std::time::{Duration, Instant};

use colored::*;
use routem_common::config::Config;
use routem_common::diagnostics::Diagnostics;
use routem_common::router::ArtifactRouter;
use routem_core::{DiscoveryReport, DnsDiscovery};

use crate::commands::run_blocking;
use crate::terminal::format::{self, Detail};
use crate::terminal::{colors, print, spinner};
use crate::{mprint, success};

pub async fn discover(cfg: &Config, diagnostics: Diagnostics) -> anyhow::Result<()> {
    let strategy: DnsDiscovery = DnsDiscovery::from_config(cfg).with_diagnostics(diagnostics);

    if cfg.quiet == 0 {
        spinner::start(&format!(
            "Looking for {} records...",
            cfg.record_label.color(colors::ACCENT)
        ));
    }

    let start_time: Instant = Instant::now();
    let result: anyhow::Result<DiscoveryReport> =
        run_blocking(cfg.deadline, move || strategy.discover()).await;
    spinner::stop();

    discovery_ends(&result?, start_time.elapsed(), cfg);
    Ok(())
}

fn discovery_ends(report: &DiscoveryReport, total_time: Duration, cfg: &Config) {
    if cfg.quiet < 2 {
        print_probes(report, cfg);
    }

    let router: &ArtifactRouter = match &report.router {
        Some(router) => router,
        None => {
            no_router_found(report, cfg);
            return;
        }
    };

    if cfg.quiet == 1 {
        mprint!();
    }

    print::header("Artifact Routes", cfg.quiet);
    print_router(router);
    print_summary(report, router, total_time, cfg);
}

fn print_probes(report: &DiscoveryReport, cfg: &Config) {
    if report.probes.is_empty() {
        return;
    }

    print::header("TXT Probes", cfg.quiet);
    let details: Vec<Detail> = report.probes.iter().map(format::probe_to_detail).collect();
    print::as_tree_one_level(details);
}

fn no_router_found(report: &DiscoveryReport, cfg: &Config) {
    print::header("No Routing Record", cfg.quiet);
    if cfg.quiet == 0 {
        print::no_results();
    }
    print::aligned_line("Label", cfg.record_label.as_str());
    print::aligned_line("Probed", format!("{} domains", report.probes.len()));
    if report.candidates.is_empty() {
        print::print_status("This host has no fully qualified name to derive a domain from");
    }
}

pub fn print_router(router: &ArtifactRouter) {
    if router.is_empty() {
        print::print_status("The record declares no mirrors or groups");
        return;
    }

    for (idx, mirror) in router.mirrors().iter().enumerate() {
        print::tree_head(idx, &mirror.url);
        print::as_tree_one_level(format::mirror_to_details(mirror));
    }

    if !router.mirrors().is_empty() && !router.groups().is_empty() {
        mprint!();
    }

    for (idx, group) in router.groups().iter().enumerate() {
        print::tree_head(idx, &group.name);
        print::as_tree_one_level(format::group_to_details(group));
    }
}

fn print_summary(report: &DiscoveryReport, router: &ArtifactRouter, total_time: Duration, cfg: &Config) {
    let mirrors: ColoredString = format!("{} mirrors", router.mirrors().len()).bold().green();
    let groups: ColoredString = format!("{} groups", router.groups().len()).bold().green();
    let source: String = report
        .source()
        .map(|probe| probe.name.clone())
        .unwrap_or_default();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!(
        "{mirrors} and {groups} from {} in {total_time}",
        source.color(colors::PRIMARY)
    )
    .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            success!("{}", output);
        }
    }
}
