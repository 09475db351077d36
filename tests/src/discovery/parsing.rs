use routem_common::diagnostics::Diagnostics;
use routem_common::error::{DiscoveryError, LoadError};
use routem_common::router::ArtifactRouter;
use routem_core::discovery::parser::RouteRecordParser;

fn parse(record: &str) -> Result<ArtifactRouter, DiscoveryError> {
    RouteRecordParser::default()
        .with_diagnostics(Diagnostics::silent())
        .parse(record)
}

fn urls(router: &ArtifactRouter) -> Vec<&str> {
    router.mirrors().iter().map(|m| m.url.as_str()).collect()
}

#[test]
fn mirrors_and_groups_are_aggregated() {
    let router = parse("mirrors=central=>http://a.example;groups=compile=>g1").unwrap();
    assert_eq!(urls(&router), vec!["http://a.example"]);
    assert_eq!(router.groups()[0].members, vec!["g1"]);
}

#[test]
fn unknown_and_malformed_sections_do_not_break_parsing() {
    let router = parse("v=2;badsection;;mirrors=central=>http://a.example;").unwrap();
    assert_eq!(urls(&router), vec!["http://a.example"]);
    assert!(router.groups().is_empty());
}

#[test]
fn repeated_sections_append_in_order() {
    let router = parse(
        "mirrors=central=>http://a.example;groups=g=>x;mirrors=*=>http://b.example|snap=>http://c.example",
    )
    .unwrap();
    assert_eq!(
        urls(&router),
        vec!["http://a.example", "http://b.example", "http://c.example"]
    );
}

#[test]
fn empty_section_value_is_skipped() {
    let router = parse("mirrors=;groups=compile=>g1").unwrap();
    assert!(router.mirrors().is_empty());
    assert_eq!(router.groups().len(), 1);
}

#[test]
fn record_without_sections_yields_empty_router() {
    assert!(parse("").unwrap().is_empty());
    assert!(parse("nothing here").unwrap().is_empty());
}

#[test]
fn bad_mirror_list_names_section_and_entry() {
    let err = parse("mirrors=central=>http://a.example|central").unwrap_err();
    match err {
        DiscoveryError::LoaderFailed { section, source } => {
            assert_eq!(section, "mirrors");
            assert_eq!(
                source,
                LoadError::MissingArrow {
                    entry: "central".into()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}
