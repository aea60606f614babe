//! Rewrite planning: which nodes one rule touches and what they become.

use super::path::RewriteRule;
use super::splice::ReplacementSpan;
use crate::hir::GlobalGroup;

/// Plan the spans for `rule` against one analysis of `source`.
///
/// Returns spans in ascending source order; an empty plan means the rule is
/// a no-op for this text.
pub fn plan_rule(rule: &RewriteRule, groups: &[GlobalGroup], source: &str) -> Vec<ReplacementSpan> {
    if rule.is_identity() {
        return Vec::new();
    }
    let Some(group) = groups.iter().find(|g| g.name == rule.from.head()) else {
        return Vec::new();
    };

    let mut spans: Vec<ReplacementSpan> = if rule.from.head() != rule.to.head() {
        let to = rule.to.head();
        match rule.from.segment(1) {
            None => group
                .references
                .iter()
                .map(|r| ReplacementSpan::new(r.range(), to))
                .collect(),
            // Only references that are followed by `.<property>`
            Some(property) => group
                .references
                .iter()
                .filter(|r| followed_by_property(source, usize::from(r.range().end()), property))
                .map(|r| ReplacementSpan::new(r.range(), to))
                .collect(),
        }
    } else {
        // Head unchanged: rename the first property
        let (Some(from), Some(to)) = (rule.from.segment(1), rule.to.segment(1)) else {
            return Vec::new();
        };
        group
            .properties()
            .into_iter()
            .filter(|p| p.name == from)
            .map(|p| ReplacementSpan::new(p.range(), to))
            .collect()
    };

    spans.sort_by_key(|s| s.range.start());
    spans.dedup_by_key(|s| s.range);
    spans
}

/// Whether `source[at..]` starts with `.property` that is not just the prefix
/// of a longer identifier
fn followed_by_property(source: &str, at: usize, property: &str) -> bool {
    let Some(rest) = source.get(at..).and_then(|s| s.strip_prefix('.')) else {
        return false;
    };
    let Some(after) = rest.strip_prefix(property) else {
        return false;
    };
    !after.chars().next().is_some_and(is_identifier_part)
}

fn is_identifier_part(c: char) -> bool {
    c == '$' || c == '\\' || c == '\u{200C}' || c == '\u{200D}' || unicode_ident::is_xid_continue(c)
}
