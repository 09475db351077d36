use std::sync::Arc;
use std::thread;

use tracing::dispatcher;

use routem_common::error::{DiscoveryError, LookupError};
use routem_core::discovery::parser::RouteRecordParser;
use routem_core::discovery::txt::{ProbeOutcome, SkipReason};
use routem_core::{DiscoveryReport, DnsDiscovery, RouterDiscoveryStrategy};

use crate::support::{EventCounter, FakeDns, FakeHost};

const RECORD: &str = "mirrors=central=>http://mirror.example/repo;groups=compile=>g1,g2";

fn discovery(host: FakeHost, dns: &FakeDns) -> DnsDiscovery {
    DnsDiscovery::new(Box::new(host), Box::new(dns.clone()))
}

/// Three addresses in three different domains.
fn three_domains() -> (FakeHost, FakeDns) {
    let host = FakeHost::with_addresses(&["10.0.0.1", "10.0.1.1", "10.0.2.1"]);
    let dns = FakeDns::new()
        .ptr("10.0.0.1", "ws1.alpha.example.")
        .ptr("10.0.1.1", "ws1.beta.example.")
        .ptr("10.0.2.1", "ws1.gamma.example.");
    (host, dns)
}

#[test]
fn no_record_anywhere_returns_no_router() {
    let (host, dns) = three_domains();

    let report: DiscoveryReport = discovery(host, &dns).discover().unwrap();

    assert!(report.router.is_none());
    assert!(report.source().is_none());
    assert_eq!(
        dns.queries(),
        vec![
            "_maven.alpha.example",
            "_maven.beta.example",
            "_maven.gamma.example"
        ]
    );
    assert_eq!(report.probes.len(), 3);
}

#[test]
fn failed_candidate_does_not_abort_the_walk() {
    let (host, dns) = three_domains();
    let dns = dns
        .answer(
            "_maven.alpha.example",
            Err(LookupError::Failed("request timed out".into())),
        )
        .txt("_maven.beta.example", "mirrors=central=>http://beta.example/repo")
        .txt("_maven.gamma.example", "mirrors=central=>http://gamma.example/repo");

    let report = discovery(host, &dns).discover().unwrap();

    let router = report.router.as_ref().expect("router from second candidate");
    let urls: Vec<&str> = router.mirrors().iter().map(|m| m.url.as_str()).collect();
    assert_eq!(urls, vec!["http://beta.example/repo"]);
    assert_eq!(dns.queries().len(), 2);
    assert_eq!(report.source().unwrap().domain, "beta.example");
    assert!(matches!(
        report.probes[0].outcome,
        ProbeOutcome::Skipped(SkipReason::QueryFailed(_))
    ));
}

#[test]
fn unqualified_hostnames_are_not_probed() {
    let host = FakeHost::with_addresses(&["127.0.0.1", "10.0.0.1"]);
    let dns = FakeDns::new()
        .ptr("127.0.0.1", "localhost")
        .ptr("10.0.0.1", "build.corp.example")
        .txt("_maven.corp.example", RECORD);

    let report = discovery(host, &dns).discover().unwrap();

    assert_eq!(report.candidates.len(), 1);
    assert_eq!(dns.queries(), vec!["_maven.corp.example"]);
    assert!(report.router.is_some());
}

#[test]
fn only_unqualified_hostnames_is_not_an_error() {
    let host = FakeHost::with_addresses(&["127.0.0.1"]);
    let dns = FakeDns::new().ptr("127.0.0.1", "localhost");

    let report = discovery(host, &dns).discover().unwrap();

    assert!(report.candidates.is_empty());
    assert!(report.router.is_none());
    assert!(dns.queries().is_empty());
}

#[test]
fn example_record_is_decoded_end_to_end() {
    let host = FakeHost::with_addresses(&["10.0.0.1"]);
    let dns = FakeDns::new()
        .ptr("10.0.0.1", "ws1.corp.example.")
        .txt("_maven.corp.example", RECORD);

    let router = discovery(host, &dns)
        .find_router()
        .unwrap()
        .expect("router");

    let central: Vec<&str> = router
        .mirrors_for("central")
        .map(|m| m.url.as_str())
        .collect();
    assert_eq!(central, vec!["http://mirror.example/repo"]);
    assert_eq!(router.groups().len(), 1);
    assert_eq!(router.groups()[0].name, "compile");
    assert_eq!(router.groups()[0].members, vec!["g1", "g2"]);
}

#[test]
fn loader_failure_is_fatal() {
    let host = FakeHost::with_addresses(&["10.0.0.1", "10.0.1.1"]);
    let dns = FakeDns::new()
        .ptr("10.0.0.1", "ws1.alpha.example")
        .ptr("10.0.1.1", "ws1.beta.example")
        .txt("_maven.alpha.example", "mirrors=central=>http://a;groups=broken")
        .txt("_maven.beta.example", RECORD);

    let result = discovery(host, &dns).find_router();

    match result {
        Err(DiscoveryError::LoaderFailed { section, .. }) => assert_eq!(section, "groups"),
        other => panic!("expected loader failure, got {other:?}"),
    }
    assert_eq!(dns.queries(), vec!["_maven.alpha.example"]);
}

#[test]
fn resolver_init_failure_happens_before_any_query() {
    let (host, _) = three_domains();
    let dns = FakeDns::broken();

    let result = discovery(host, &dns).discover();

    assert!(matches!(result, Err(DiscoveryError::ResolverInitFailed(_))));
    assert!(dns.queries().is_empty());
}

#[test]
fn host_resolution_failure_is_fatal() {
    let dns = FakeDns::new();

    let result = discovery(FakeHost::unresolvable(), &dns).discover();

    assert!(matches!(result, Err(DiscoveryError::HostResolutionFailed(_))));
    assert!(dns.queries().is_empty());
}

#[test]
fn custom_label_and_parser_are_used() {
    let host = FakeHost::with_addresses(&["10.0.0.1"]);
    let dns = FakeDns::new()
        .ptr("10.0.0.1", "ws1.corp.example")
        .txt("_routes.corp.example", "MIRRORS=*=>http://any.example");

    let router = discovery(host, &dns)
        .with_record_label("_routes")
        .with_parser(RouteRecordParser::default())
        .find_router()
        .unwrap()
        .expect("router");

    assert_eq!(router.mirrors_for("anything").count(), 1);
}

#[test]
fn candidates_do_not_query_txt() {
    let (host, dns) = three_domains();

    let candidates = discovery(host, &dns).candidates().unwrap();

    let domains: Vec<&str> = candidates.iter().map(|c| c.domain.as_str()).collect();
    assert_eq!(domains, vec!["alpha.example", "beta.example", "gamma.example"]);
    assert!(dns.queries().is_empty());
}

#[test]
fn every_run_opens_its_own_session() {
    let (host, dns) = three_domains();
    let dns = dns.txt("_maven.gamma.example", RECORD);
    let strategy: Arc<DnsDiscovery> = Arc::new(discovery(host, &dns));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let strategy = Arc::clone(&strategy);
            thread::spawn(move || strategy.find_router())
        })
        .collect();

    for handle in handles {
        let router = handle.join().unwrap().unwrap();
        assert!(router.is_some());
    }
    assert_eq!(dns.opens(), 4);
    assert_eq!(dns.queries().len(), 12);
}

#[test]
fn events_go_only_to_the_given_diagnostics() {
    let (host, dns) = three_domains();
    let dns = dns.txt("_maven.beta.example", RECORD);
    let ambient = EventCounter::default();

    let strategy: DnsDiscovery =
        dispatcher::with_default(&ambient.dispatch(), || discovery(host, &dns));
    dispatcher::with_default(&ambient.dispatch(), || strategy.find_router()).unwrap();
    assert_eq!(ambient.count(), 0);

    let given = EventCounter::default();
    let strategy = strategy.with_diagnostics(given.diagnostics());
    dispatcher::with_default(&ambient.dispatch(), || strategy.find_router()).unwrap();

    assert_eq!(ambient.count(), 0);
    assert!(given.count() > 0);
}
