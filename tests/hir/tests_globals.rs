//! Which identifiers are free, and how they are grouped.

use replacer::SourceType;
use replacer::hir::THIS_NAME;
use rstest::rstest;

use crate::helpers::replacer_helpers::*;
use crate::helpers::source_fixtures::*;

// =============================================================================
// SCOPING
// =============================================================================

#[test]
fn test_shadowed_locals_are_not_globals() {
    assert_eq!(global_names(SHADOWED_LOCALS), vec!["console", "report", "risky"]);
}

#[test]
fn test_inner_declaration_does_not_leak() {
    assert_eq!(global_names(NESTED_FUNCTIONS), vec!["hidden", "inner"]);
}

#[test]
fn test_module_imports_bind_at_root() {
    let groups = groups_with(MODULE_IMPORTS, SourceType::Module);
    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["document", "window"]);
    assert_eq!(group(&groups, "window").direct_properties[0].name, "origin");
}

#[test]
fn test_class_members_and_this() {
    let groups = groups(CLASSES);
    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Base", "document", "globalThis", "window"]);
    assert!(groups.iter().all(|g| g.name != THIS_NAME));
}

#[test]
fn test_modern_syntax_globals() {
    assert_eq!(
        global_names(MODERN_SYNTAX),
        vec!["base", "fallback", "fetch", "queueMicrotask", "registry", "source", "text"]
    );
}

#[rstest]
#[case("let x = 1; x;", &[])]
#[case("{ let x = 1; } x;", &["x"])]
#[case("if (a) { var v; } v;", &["a"])]
#[case("const f = function g() { g(); }; g();", &["g"])]
#[case("for (var i of list) { i; } i;", &["list"])]
#[case("try {} catch (e) {} e;", &["e"])]
#[case("(a, b = a) => b + c;", &["c"])]
#[case("x => fn(x, undefined);", &["fn"])]
fn test_binding_rules(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(global_names(source), expected, "{source}");
}

// =============================================================================
// THIS AND ARGUMENTS
// =============================================================================

#[test]
fn test_top_level_this_is_grouped() {
    let groups = groups("this.a = this.b;");
    let this = group(&groups, THIS_NAME);
    assert_eq!(this.references.len(), 2);
    let props: Vec<_> = this.direct_properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(props, vec!["a", "b"]);
}

#[test]
fn test_this_inside_functions_is_bound() {
    assert!(global_names("function f() { return this; }").is_empty());
    assert!(global_names("({ m() { return this; } })").is_empty());
    assert_eq!(global_names("const f = () => this;"), vec![THIS_NAME]);
}

#[test]
fn test_arguments_binding() {
    assert!(global_names("function f() { return arguments[0]; }").is_empty());
    assert_eq!(global_names("arguments.length;"), vec!["arguments"]);
}

// =============================================================================
// GROUPING
// =============================================================================

#[test]
fn test_references_keep_source_order() {
    let source = "b.x; a; b; a.y;";
    assert_eq!(
        summarize(&groups(source)),
        vec![
            ("a".to_string(), vec![5, 11], vec!["y".to_string()]),
            ("b".to_string(), vec![0, 8], vec!["x".to_string()]),
        ]
    );
}

#[test]
fn test_reference_ancestors_are_snapshots() {
    let groups = groups("if (ok) { run(); }");
    let run = group(&groups, "run");
    let reference = &run.references[0];
    assert_eq!(reference.ancestors.first(), reference.node.parent().as_ref());
    assert_eq!(
        reference.ancestors.last().map(|n| n.text_range()),
        Some(reference.node.ancestors().last().unwrap().text_range())
    );
}

#[test]
fn test_analysis_is_deterministic() {
    for source in [SHADOWED_LOCALS, CLASSES, MODERN_SYNTAX, ALIASED_WINDOW] {
        assert_eq!(summarize(&groups(source)), summarize(&groups(source)));
    }
}
