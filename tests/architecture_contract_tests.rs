//! Architecture contract tests.

mod support;

use support::architecture::{find_lines_containing, find_non_export_lines_in_mod_files};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "reqwest::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn ports_do_not_depend_on_adapters_or_infrastructure() {
    let hits = find_lines_containing(
        "src/port",
        &[
            "crate::adapter::",
            "crate::infrastructure::",
            "crate::application",
        ],
    );
    assert!(
        hits.is_empty(),
        "ports should only depend on the domain: {hits:#?}"
    );
}

#[test]
fn outbound_adapters_do_not_reach_into_the_cli() {
    let hits = find_lines_containing("src/adapter/outbound", &["crate::adapter::inbound"]);
    assert!(
        hits.is_empty(),
        "outbound adapters should not import inbound adapters: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_export_only() {
    let violations = find_non_export_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-export content in mod.rs files: {violations:#?}"
    );
}
