//! Helpers for building options and inspecting analysis results.

use replacer::{GlobalGroup, ReplacerOptions, SourceType, analyze, rewrite};

/// Options holding `rules` in order
pub fn options(rules: &[(&str, &str)]) -> ReplacerOptions {
    rules.iter().copied().collect()
}

/// Rewrites `source` and asserts it succeeds.
pub fn rewritten(source: &str, rules: &[(&str, &str)]) -> String {
    match rewrite(source, &options(rules)) {
        Ok(output) => output,
        Err(err) => panic!("rewrite failed for {source:?}: {err}"),
    }
}

/// Analyzes a script and asserts it parses.
pub fn groups(source: &str) -> Vec<GlobalGroup> {
    groups_with(source, SourceType::Script)
}

pub fn groups_with(source: &str, source_type: SourceType) -> Vec<GlobalGroup> {
    let options = ReplacerOptions::new().with_source_type(source_type);
    match analyze(source, &options) {
        Ok(groups) => groups,
        Err(err) => panic!("analysis failed for {source:?}: {err}"),
    }
}

/// Names of every global group, in group order
pub fn global_names(source: &str) -> Vec<String> {
    groups(source).iter().map(|g| g.name.to_string()).collect()
}

/// The group named `name`; panics when it is missing
pub fn group<'a>(groups: &'a [GlobalGroup], name: &str) -> &'a GlobalGroup {
    groups
        .iter()
        .find(|g| g.name == name)
        .unwrap_or_else(|| panic!("no global named {name}"))
}

/// `(name, [reference starts], [property names])` for each group
pub fn summarize(groups: &[GlobalGroup]) -> Vec<(String, Vec<u32>, Vec<String>)> {
    groups
        .iter()
        .map(|g| {
            (
                g.name.to_string(),
                g.references.iter().map(|r| r.range().start().into()).collect(),
                g.properties().iter().map(|p| p.name.to_string()).collect(),
            )
        })
        .collect()
}
