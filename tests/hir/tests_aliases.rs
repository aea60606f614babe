//! Property accesses made through the parameter of an inline function
//! expression that receives a global. Only one level is resolved; anything
//! deeper is left alone.

use replacer::hir::GlobalGroup;

use crate::helpers::replacer_helpers::*;
use crate::helpers::source_fixtures::*;

fn aliased(groups: &[GlobalGroup], name: &str) -> Vec<String> {
    group(groups, name)
        .aliased_properties
        .iter()
        .map(|p| p.name.to_string())
        .collect()
}

#[test]
fn test_iife_parameter_aliases_global() {
    let groups = groups(ALIASED_WINDOW);
    let window = group(&groups, "window");
    assert_eq!(window.references.len(), 1);
    assert!(window.direct_properties.is_empty());
    assert_eq!(aliased(&groups, "window"), vec!["location"]);
}

#[test]
fn test_alias_positions_follow_arguments() {
    let source = "(function (a, b, c) { a.x; b.y; c.z; })(first, 2, third);";
    let groups = groups(source);
    assert_eq!(aliased(&groups, "first"), vec!["x"]);
    assert_eq!(aliased(&groups, "third"), vec!["z"]);
}

#[test]
fn test_alias_inside_nested_blocks_and_closures() {
    let source = "!function (w) { if (w) { [1].map(function () { return w.doc; }); } }(window);";
    let groups = groups(source);
    assert_eq!(aliased(&groups, "window"), vec!["doc"]);
}

#[test]
fn test_alias_ends_at_inner_rebinding() {
    let source = "(function (w) { w.a; function g(w) { w.b; } var h = () => { let w; w.c; }; })(window);";
    let groups = groups(source);
    assert_eq!(aliased(&groups, "window"), vec!["a"]);
}

#[test]
fn test_deeper_indirection_is_not_followed() {
    let cases = [
        // passed on to a second function
        "(function (w) { (function (v) { v.a; })(w); })(window);",
        // reassigned
        "(function (w) { var v = w; v.a; })(window);",
        // callee is a reference, not a literal
        "var f = function (w) { w.a; }; f(window);",
        // callee is an arrow
        "((w) => w.a)(window);",
        // destructured parameter
        "(function ({ location }) { location.a; })(window);",
        // computed access
        "(function (w) { w['a']; })(window);",
    ];
    for source in cases {
        let groups = groups(source);
        assert!(aliased(&groups, "window").is_empty(), "{source}");
    }
}

#[test]
fn test_local_argument_is_not_an_alias() {
    let source = "var window = {}; (function (w) { w.a; })(window);";
    assert!(groups(source).is_empty());
}

#[test]
fn test_direct_and_aliased_properties_merge_in_source_order() {
    let source = "window.z;\n(function (w) { w.y; })(window);\nwindow.x;";
    let groups = groups(source);
    let merged: Vec<_> = group(&groups, "window")
        .properties()
        .iter()
        .map(|p| p.name.to_string())
        .collect();
    assert_eq!(merged, vec!["z", "y", "x"]);
}
