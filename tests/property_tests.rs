//! Property-based tests for the catalog, analyzer and generator.

use proptest::prelude::*;
use rmcp::model::ResourceContents;

use tca_mcp::catalog;
use tca_mcp::lint;
use tca_mcp::mcp::resources::read_resource;
use tca_mcp::mcp::tools::{handle_get_template, handle_search_docs};
use tca_mcp::scaffold::generate_reducer;

fn arb_doc_key() -> impl Strategy<Value = &'static str> {
    let keys: Vec<&'static str> = catalog::list_docs().iter().map(|d| d.key).collect();
    proptest::sample::select(keys)
}

fn arb_swift_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("struct State {".to_string()),
        Just("struct State: Equatable {".to_string()),
        Just("return .run { send in".to_string()),
        Just("  state.count += 1".to_string()),
        Just("}".to_string()),
        Just("let now = Date()".to_string()),
        Just("for await _ in clock.timer(interval: .seconds(1)) {".to_string()),
        Just("Task { await work() }".to_string()),
        Just("struct Feature: Reducer {".to_string()),
        "[ -~]{0,40}",
    ]
}

proptest! {
    #[test]
    fn search_by_exact_key_finds_that_doc(key in arb_doc_key()) {
        prop_assert!(catalog::search_docs(key).iter().any(|d| d.key == key));
    }

    #[test]
    fn search_is_case_insensitive(key in arb_doc_key()) {
        prop_assert_eq!(
            catalog::search_docs(&key.to_uppercase()),
            catalog::search_docs(key)
        );
    }

    #[test]
    fn search_results_are_a_subset_in_catalog_order(query in "[a-z ]{0,6}") {
        let all: Vec<_> = catalog::list_docs().iter().map(|d| d.key).collect();
        let hits: Vec<_> = catalog::search_docs(&query).iter().map(|d| d.key).collect();
        let filtered: Vec<_> = all.iter().copied().filter(|k| hits.contains(k)).collect();
        prop_assert_eq!(hits, filtered);
    }

    #[test]
    fn search_output_is_idempotent(query in ".{0,12}") {
        prop_assert_eq!(handle_search_docs(&query), handle_search_docs(&query));
    }

    #[test]
    fn read_resource_matches_catalog(key in arb_doc_key()) {
        let uri = format!("tca://docs/{key}");
        let result = read_resource(&uri).unwrap();
        prop_assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, uri: got, .. } => {
                prop_assert_eq!(text.as_str(), catalog::read_doc(key).unwrap().content);
                prop_assert_eq!(got.as_str(), uri.as_str());
            }
            other => prop_assert!(false, "expected text contents, got {:?}", other),
        }
    }

    #[test]
    fn unknown_doc_uri_never_resolves(suffix in "[a-z]{1,8}") {
        let uri = format!("tca://docs/zz-{suffix}");
        prop_assert!(read_resource(&uri).is_err());
    }

    #[test]
    fn lint_never_panics_and_lines_in_range(source in ".{0,400}") {
        let line_count = source.lines().count();
        for finding in lint::lint(&source) {
            prop_assert!(finding.line >= 1);
            prop_assert!(finding.line <= line_count);
        }
    }

    #[test]
    fn lint_findings_ascend_within_each_rule(
        lines in proptest::collection::vec(arb_swift_line(), 0..30)
    ) {
        let source = lines.join("\n");
        let findings = lint::lint(&source);
        for pair in findings.windows(2) {
            if pair[0].rule == pair[1].rule {
                prop_assert!(pair[0].line < pair[1].line);
            }
        }
        prop_assert_eq!(findings.clone(), lint::lint(&source));
    }

    #[test]
    fn unknown_template_is_always_soft(name in "[a-z]{1,10}") {
        prop_assume!(!["counter", "list", "timer"].contains(&name.as_str()));
        prop_assert!(handle_get_template(&name).starts_with("Unknown template"));
    }

    #[test]
    fn generated_reducer_names_the_feature(
        name in "[A-Z][a-zA-Z0-9]{0,15}",
        effects in any::<bool>()
    ) {
        let code = generate_reducer(&name, effects);
        let expected_struct = format!("struct {}Feature {{", name);
        prop_assert!(code.contains(&expected_struct));
        prop_assert_eq!(code.contains("@Dependency("), effects);
    }
}
