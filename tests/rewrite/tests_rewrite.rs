//! Renaming globals and their property chains in place.

use replacer::{ReplacerError, Replacer, rewrite};
use rstest::rstest;

use crate::helpers::replacer_helpers::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// HEAD RENAMES
// =============================================================================

#[test]
fn test_rename_global() {
    assert_eq!(
        rewritten(WINDOW_ASSIGNMENT, &[("window", "_window")]),
        "_window.blah = 1;"
    );
}

#[test]
fn test_rename_two_globals_in_order() {
    assert_eq!(
        rewritten(WINDOW_AND_LOCATION, &[("window", "_window"), ("location", "_l_ocation")]),
        "_window.location.href;\n_l_ocation;"
    );
}

#[test]
fn test_rename_head_only_where_property_follows() {
    let source = "window.location.href; window.document; window.locationbar; window;";
    assert_eq!(
        rewritten(source, &[("window.location", "w.location")]),
        "w.location.href; window.document; window.locationbar; window;"
    );
}

#[test]
fn test_rename_head_keeps_tail_segments() {
    assert_eq!(
        rewritten("window.location.href;", &[("window.location", "w.loc")]),
        "w.location.href;"
    );
}

#[test]
fn test_locals_are_left_alone() {
    let source = "function f(window) { return window.a; }\nwindow.a;";
    assert_eq!(
        rewritten(source, &[("window", "_window")]),
        "function f(window) { return window.a; }\n_window.a;"
    );
}

#[test]
fn test_length_changes_shift_later_spans() {
    let source = "a; a.x; f(a, a);";
    assert_eq!(
        rewritten(source, &[("a", "longer_name")]),
        "longer_name; longer_name.x; f(longer_name, longer_name);"
    );
    assert_eq!(rewritten("abc + abc", &[("abc", "z")]), "z + z");
}

#[test]
fn test_formatting_and_comments_are_preserved() {
    let source = "/* window */ window  // window\n  .blah\t=\n  window;";
    assert_eq!(
        rewritten(source, &[("window", "_w")]),
        "/* window */ _w  // window\n  .blah\t=\n  _w;"
    );
}

#[rstest]
#[case("/* window */ window.blah = 1;", "/* window */ _window.blah = 1;")]
#[case("/** doc **/\nwindow.blah = 1;", "/** doc **/\n_window.blah = 1;")]
#[case("window /* * */ .blah = /*\n*/ 1;", "_window /* * */ .blah = /*\n*/ 1;")]
fn test_block_comments_are_skipped(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(rewritten(source, &[("window", "_window")]), expected);
}

#[test]
fn test_regex_after_statement_head() {
    assert_eq!(
        rewritten("if (window.ok) /x/.test(window.name);", &[("window", "_w")]),
        "if (_w.ok) /x/.test(_w.name);"
    );
    assert_eq!(
        rewritten("while (f(window)) /a\\/b/g.exec(window);", &[("window", "_w")]),
        "while (f(_w)) /a\\/b/g.exec(_w);"
    );
}

#[test]
fn test_top_level_this() {
    assert_eq!(
        rewritten("this.a; function f() { this.a }", &[("this", "self")]),
        "self.a; function f() { this.a }"
    );
}

// =============================================================================
// PROPERTY RENAMES
// =============================================================================

#[test]
fn test_rename_first_property() {
    assert_eq!(
        rewritten(WINDOW_LOCATION_HREF, &[("window.location", "window._l_ocation")]),
        "window._l_ocation.href;"
    );
}

#[test]
fn test_rename_aliased_property() {
    assert_eq!(
        rewritten(ALIASED_WINDOW, &[("window.location", "window._l_ocation")]),
        "(function (w) {\n  w._l_ocation.href = \"x\";\n}) (window);"
    );
}

#[test]
fn test_property_rename_skips_other_objects() {
    let source = "window.location; other.location; window['location']; ({ location: 1 });";
    assert_eq!(
        rewritten(source, &[("window.location", "window.loc")]),
        "window.loc; other.location; window['location']; ({ location: 1 });"
    );
}

#[test]
fn test_property_on_optional_chain() {
    assert_eq!(
        rewritten("window?.location?.href", &[("window.location", "window.loc")]),
        "window?.loc?.href"
    );
}

#[test]
fn test_head_then_property_in_sequence() {
    // The second rule only sees the head the first one produced
    let rules = [("window.location", "_w.location"), ("_w.location", "_w._l")];
    assert_eq!(
        rewritten("window.location.href; window.top;", &rules),
        "_w._l.href; window.top;"
    );
}

// =============================================================================
// NO-OPS AND FAILURES
// =============================================================================

#[rstest]
#[case("window.blah = 1;")]
#[case(MODERN_SYNTAX)]
#[case("this is not javascript")]
fn test_empty_rules_return_source(#[case] source: &str) {
    assert_eq!(rewrite(source, &options(&[])).unwrap(), source);
}

#[rstest]
#[case("window")]
#[case("window.location")]
#[case("a.b.c")]
fn test_identity_rule_is_noop(#[case] path: &str) {
    let source = "window.location.href; a.b.c;";
    assert_eq!(rewritten(source, &[(path, path)]), source);
}

#[test]
fn test_missing_global_is_noop() {
    assert_eq!(rewritten("var window; window.a;", &[("window", "_w")]), "var window; window.a;");
}

#[rstest]
#[case("a.b", "c")]
#[case("a", "b.c")]
#[case("window.location", "window.a.b")]
fn test_path_arity_mismatch(#[case] from: &str, #[case] to: &str) {
    let options = options(&[(from, to)]);
    let mut replacer = Replacer::new("a.b; window.location;", &options);
    let err = replacer.apply().unwrap_err();
    assert!(matches!(err, ReplacerError::PathArity { .. }), "{err:?}");
    assert_eq!(replacer.buffer(), "a.b; window.location;");
}

#[test]
fn test_failure_keeps_earlier_rules() {
    let options = options(&[("a", "x"), ("b.c", "d"), ("e", "y")]);
    let mut replacer = Replacer::new("a; e;", &options);
    assert!(replacer.apply().is_err());
    assert_eq!(replacer.buffer(), "x; e;");
}

#[test]
fn test_rule_producing_invalid_source_stops_the_rest() {
    let options = options(&[("a", "1 +"), ("b", "c")]);
    let mut replacer = Replacer::new("a; b;", &options);
    let err = replacer.apply().unwrap_err();
    assert!(matches!(err, ReplacerError::SyntaxError { .. }), "{err:?}");
    assert_eq!(replacer.buffer(), "1 +; b;");
}

#[test]
fn test_empty_segment_is_invalid_input() {
    let err = rewrite("a;", &options(&[("a..b", "a..c")])).unwrap_err();
    assert!(matches!(err, ReplacerError::InvalidInput(_)), "{err:?}");
}
