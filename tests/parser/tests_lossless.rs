//! Every byte of the input is kept in the tree, comments and whitespace
//! included, so node ranges can be spliced back into the original text.

use replacer::parser::{SourceType, SyntaxKind, parse, tokenize};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

fn assert_lossless(source: &str, source_type: SourceType) {
    let parse = parse(source, source_type);
    assert!(parse.ok(), "errors for {source:?}: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[rstest]
#[case(WINDOW_ASSIGNMENT)]
#[case(ALIASED_WINDOW)]
#[case(SHADOWED_LOCALS)]
#[case(NESTED_FUNCTIONS)]
#[case(CLASSES)]
#[case(MODERN_SYNTAX)]
fn test_script_fixtures_round_trip(#[case] source: &str) {
    assert_lossless(source, SourceType::Script);
}

#[test]
fn test_module_fixture_round_trips() {
    assert_lossless(MODULE_IMPORTS, SourceType::Module);
}

#[test]
fn test_comments_and_line_endings_are_kept() {
    let source = "/* header */\r\nwindow . blah // trailing\r\n  = 1 ;\t\n";
    assert_lossless(source, SourceType::Script);
}

#[test]
fn test_tree_is_lossless_even_with_errors() {
    let source = "var a = ;\nfunction ( {";
    let parse = parse(source, SourceType::Script);
    assert!(!parse.ok());
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn test_tokens_cover_the_input() {
    let source = "a = `x${b}y` / 2; /re/g.test(c)";
    let tokens = tokenize(source);
    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, source);
    let mut offset = 0u32;
    for token in &tokens {
        assert_eq!(u32::from(token.offset), offset);
        offset += token.text.len() as u32;
    }
}

#[test]
fn test_reference_ranges_exclude_trivia() {
    let source = "  /* c */ window  .blah;";
    let parse = parse(source, SourceType::Script);
    let name_ref = parse
        .syntax()
        .descendants()
        .find(|n| n.kind() == SyntaxKind::NAME_REF)
        .unwrap();
    let range = name_ref.text_range();
    assert_eq!(&source[usize::from(range.start())..usize::from(range.end())], "window");
}
