use colored::*;
use routem_common::router::{ANY_REPOSITORY, GroupRoute, MirrorRoute};
use routem_core::discovery::candidates::CandidateDomain;
use routem_core::discovery::txt::{Probe, ProbeOutcome};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn candidate_to_details(candidate: &CandidateDomain) -> Vec<Detail> {
    vec![
        (
            String::from("Address"),
            candidate.address.to_string().color(colors::ACCENT),
        ),
        (
            String::from("Hostname"),
            candidate.hostname.color(colors::TEXT_DEFAULT),
        ),
    ]
}

pub fn probe_to_detail(probe: &Probe) -> Detail {
    let value: ColoredString = match &probe.outcome {
        ProbeOutcome::Found(_) => "record found".green().bold(),
        ProbeOutcome::Skipped(reason) => reason.to_string().color(colors::SKIPPED),
    };
    (probe.name.clone(), value)
}

pub fn repositories(ids: &[String]) -> String {
    ids.iter()
        .map(|id| {
            if id == ANY_REPOSITORY {
                format!("{}", "any".color(colors::WILDCARD).italic())
            } else {
                format!("{}", id.color(colors::REPOSITORY))
            }
        })
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn mirror_to_details(mirror: &MirrorRoute) -> Vec<Detail> {
    vec![(String::from("Mirror of"), repositories(&mirror.mirror_of).normal())]
}

pub fn group_to_details(group: &GroupRoute) -> Vec<Detail> {
    let members: String = group.members.join(", ");
    vec![(String::from("Members"), members.color(colors::REPOSITORY))]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
