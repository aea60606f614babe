//! Laws that hold for any input: no rules means no change, disjoint rules
//! commute, and repeated runs agree.

use rstest::rstest;

use crate::helpers::replacer_helpers::*;
use crate::helpers::source_fixtures::*;

#[rstest]
#[case(SHADOWED_LOCALS)]
#[case(NESTED_FUNCTIONS)]
#[case(CLASSES)]
#[case(MODERN_SYNTAX)]
fn test_no_rules_is_identity(#[case] source: &str) {
    assert_eq!(rewritten(source, &[]), source);
}

#[rstest]
#[case(SHADOWED_LOCALS, "console")]
#[case(CLASSES, "window")]
#[case(MODERN_SYNTAX, "registry")]
fn test_self_mapping_is_identity(#[case] source: &str, #[case] name: &str) {
    assert_eq!(rewritten(source, &[(name, name)]), source);
}

#[rstest]
#[case("a.x; b.y; f(a, b);", ("a", "a2"), ("b", "b2"))]
#[case(SHADOWED_LOCALS, ("console", "_console"), ("risky", "safe"))]
#[case(CLASSES, ("window.root", "window.r"), ("document", "doc"))]
#[case(MODERN_SYNTAX, ("fetch", "request"), ("registry", "table"))]
fn test_disjoint_rules_commute(
    #[case] source: &str,
    #[case] first: (&str, &str),
    #[case] second: (&str, &str),
) {
    let forward = rewritten(source, &[first, second]);
    let backward = rewritten(source, &[second, first]);
    assert_eq!(forward, backward);
    assert_ne!(forward, source);
}

#[test]
fn test_rewrite_is_deterministic() {
    let rules = [("window", "_window"), ("document", "_document")];
    let first = rewritten(CLASSES, &rules);
    for _ in 0..3 {
        assert_eq!(rewritten(CLASSES, &rules), first);
    }
}

#[test]
fn test_renamed_names_are_no_longer_global() {
    let output = rewritten(CLASSES, &[("window", "_window")]);
    let names = global_names(&output);
    assert!(names.iter().any(|n| n == "_window"));
    assert!(names.iter().all(|n| n != "window"));
}

#[test]
fn test_independent_runs_do_not_share_offsets() {
    // A long rename followed by a short one on unrelated inputs
    let long = rewritten("a; a; a;", &[("a", "aaaaaaaa")]);
    let short = rewritten("b; b;", &[("b", "c")]);
    assert_eq!(long, "aaaaaaaa; aaaaaaaa; aaaaaaaa;");
    assert_eq!(short, "c; c;");
}
