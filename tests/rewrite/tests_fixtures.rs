//! Runs every `tests/fixtures/*.js` file through the replacer and compares
//! the result with the sibling `*.expected.js` file. The first line of each
//! input lists its rules, e.g. `// rules: window -> _window, a.b -> a.c`.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::helpers::replacer_helpers::rewritten;

const RULES_PREFIX: &str = "// rules:";

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn is_input(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "js")
        && !path.to_string_lossy().ends_with(".expected.js")
}

fn parse_rules(source: &str) -> Vec<(String, String)> {
    let header = source
        .lines()
        .next()
        .and_then(|line| line.strip_prefix(RULES_PREFIX))
        .unwrap_or_else(|| panic!("fixture must start with {RULES_PREFIX:?}"));
    header
        .split(',')
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .map(|rule| {
            let (from, to) = rule
                .split_once("->")
                .unwrap_or_else(|| panic!("malformed rule {rule:?}"));
            (from.trim().to_string(), to.trim().to_string())
        })
        .collect()
}

#[test]
fn test_fixtures_match_expected_output() {
    let mut checked = 0;
    for entry in WalkDir::new(fixtures_dir()).sort_by_file_name() {
        let entry = entry.unwrap();
        let path = entry.path();
        if !entry.file_type().is_file() || !is_input(path) {
            continue;
        }

        let source = fs::read_to_string(path).unwrap();
        let expected = fs::read_to_string(path.with_extension("expected.js"))
            .unwrap_or_else(|e| panic!("{}: missing expected output: {e}", path.display()));
        let rules = parse_rules(&source);
        let rules: Vec<(&str, &str)> = rules.iter().map(|(f, t)| (f.as_str(), t.as_str())).collect();

        assert_eq!(rewritten(&source, &rules), expected, "{}", path.display());
        checked += 1;
    }
    assert!(checked > 0, "no fixtures found in {}", fixtures_dir().display());
}
