//! Syntax errors surface as `ReplacerError::SyntaxError` with a 1-based line
//! and 0-based column.

use replacer::{ReplacerError, ReplacerOptions, SourceType, analyze, rewrite};
use rstest::rstest;

fn syntax_error(source: &str, source_type: SourceType) -> (String, u32, u32) {
    let options = ReplacerOptions::new().with_source_type(source_type);
    match analyze(source, &options) {
        Err(ReplacerError::SyntaxError {
            message,
            line,
            column,
            ..
        }) => (message, line, column),
        other => panic!("expected a syntax error for {source:?}, got {other:?}"),
    }
}

#[test]
fn test_error_position_is_one_based_line() {
    let (message, line, column) = syntax_error("a;\nvar b = ;", SourceType::Script);
    assert_eq!(message, "Unexpected token");
    assert_eq!((line, column), (2, 8));
}

#[rstest]
#[case("try { a() }", "Missing catch or finally clause")]
#[case("throw\nerr;", "Illegal newline after throw")]
#[case("function f() { import x from 'x'; }", "may only appear at the top level")]
#[case("var = 1;", "expected identifier")]
fn test_script_errors(#[case] source: &str, #[case] fragment: &str) {
    let (message, _, _) = syntax_error(source, SourceType::Script);
    assert!(
        message.contains(fragment),
        "{source:?}: {message:?} should mention {fragment:?}"
    );
}

#[rstest]
#[case("import x from 'x'; x.a;")]
#[case("export const a = window.a;")]
#[case("export { b as c };\nimport * as ns from 'n';")]
fn test_script_with_module_declarations_is_analyzed_as_module(#[case] source: &str) {
    assert!(analyze(source, &ReplacerOptions::new()).is_ok(), "{source}");
}

#[test]
fn test_module_errors_surface_after_fallback() {
    let (message, line, _) = syntax_error("import x from 'x';\nlet = ;", SourceType::Script);
    assert_eq!(line, 2);
    assert!(!message.contains("sourceType"), "{message}");
}

#[test]
fn test_imports_parse_as_module() {
    let options = ReplacerOptions::new().with_source_type(SourceType::Module);
    assert!(analyze("import x from 'x'; export { x };", &options).is_ok());
}

#[test]
fn test_rewrite_propagates_syntax_error() {
    let options = ReplacerOptions::new().with_replacement("window", "_window");
    let err = rewrite("window.a = (;", &options).unwrap_err();
    assert!(matches!(err, ReplacerError::SyntaxError { .. }));
    assert!(err.to_string().ends_with("(1:12)"), "{err}");
}
