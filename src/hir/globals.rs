//! Global reference collection and property/alias resolution.
//!
//! A reference is global when no ancestor binds its name. Collected
//! references are grouped by name; each group then gathers the property
//! accesses made directly on its references and, one level deep, through the
//! parameter of an inline function expression the global is passed into.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::scope::ScopeMap;
use crate::base::TextRange;
use crate::parser::{
    AstNode, CallExpr, Function, MemberExpr, Name, NameRef, SyntaxKind, SyntaxNode,
};

/// Name that `this` references are grouped under
pub const THIS_NAME: &str = "this";

/// One unresolved identifier or `this` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalReference {
    pub name: SmolStr,
    /// The `NAME_REF` or `THIS_EXPR` node
    pub node: SyntaxNode,
    /// Ancestors at collection time, innermost first
    pub ancestors: Vec<SyntaxNode>,
}

impl GlobalReference {
    pub fn range(&self) -> TextRange {
        self.node.text_range()
    }
}

/// The property-name node of a non-computed member access (`b` in `a.b`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccess {
    pub name: SmolStr,
    pub node: SyntaxNode,
}

impl PropertyAccess {
    pub fn range(&self) -> TextRange {
        self.node.text_range()
    }
}

/// Everything known about one global name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalGroup {
    pub name: SmolStr,
    /// Source order
    pub references: Vec<GlobalReference>,
    /// `name.prop` accesses on the references themselves
    pub direct_properties: Vec<PropertyAccess>,
    /// `param.prop` accesses inside `(function (param) { ... })(name)`
    pub aliased_properties: Vec<PropertyAccess>,
}

impl GlobalGroup {
    fn new(name: SmolStr) -> Self {
        Self {
            name,
            references: Vec::new(),
            direct_properties: Vec::new(),
            aliased_properties: Vec::new(),
        }
    }

    /// Direct and aliased property accesses in ascending source order
    pub fn properties(&self) -> Vec<&PropertyAccess> {
        let mut all: Vec<_> = self
            .direct_properties
            .iter()
            .chain(&self.aliased_properties)
            .collect();
        all.sort_by_key(|p| p.range().start());
        all
    }
}

/// Collect global groups of the tree rooted at `root`, sorted by name
pub fn collect_globals(root: &SyntaxNode, scopes: &ScopeMap) -> Vec<GlobalGroup> {
    let mut groups: IndexMap<SmolStr, GlobalGroup> = IndexMap::new();
    // Reference node -> its group's name
    let mut reference_names: FxHashMap<SyntaxNode, SmolStr> = FxHashMap::default();

    for reference in root.descendants().filter_map(|node| resolve(node, scopes)) {
        reference_names.insert(reference.node.clone(), reference.name.clone());
        groups
            .entry(reference.name.clone())
            .or_insert_with(|| GlobalGroup::new(reference.name.clone()))
            .references
            .push(reference);
    }

    for node in root.descendants() {
        match node.kind() {
            SyntaxKind::MEMBER_EXPR => {
                let Some(member) = MemberExpr::cast(node) else {
                    continue;
                };
                let Some(name) = member.object().and_then(|o| reference_names.get(&o)) else {
                    continue;
                };
                if let (Some(access), Some(group)) = (property_access(&member), groups.get_mut(name)) {
                    group.direct_properties.push(access);
                }
            }
            SyntaxKind::CALL_EXPR => {
                let Some(call) = CallExpr::cast(node) else {
                    continue;
                };
                for (name, access) in aliased_accesses(&call, &reference_names, scopes) {
                    if let Some(group) = groups.get_mut(&name) {
                        group.aliased_properties.push(access);
                    }
                }
            }
            _ => {}
        }
    }

    let mut groups: Vec<_> = groups.into_values().collect();
    groups.sort_by(|a, b| a.name.cmp(&b.name));
    groups
}

/// A global reference for `node`, or `None` if it is not a reference or is
/// locally bound
fn resolve(node: SyntaxNode, scopes: &ScopeMap) -> Option<GlobalReference> {
    let name = match node.kind() {
        SyntaxKind::NAME_REF => NameRef::cast(node.clone())?.text(),
        SyntaxKind::THIS_EXPR => SmolStr::new_static(THIS_NAME),
        _ => return None,
    };
    if node.kind() == SyntaxKind::NAME_REF && name == "undefined" {
        return None;
    }

    let ancestors: Vec<SyntaxNode> = node.ancestors().skip(1).collect();
    let bound = if node.kind() == SyntaxKind::THIS_EXPR {
        ancestors.iter().any(|a| a.kind().binds_this())
    } else {
        ancestors.iter().any(|a| {
            (name == "arguments" && a.kind().binds_arguments()) || scopes.declares(a, &name)
        })
    };
    if bound {
        return None;
    }

    Some(GlobalReference {
        name,
        node,
        ancestors,
    })
}

fn property_access(member: &MemberExpr) -> Option<PropertyAccess> {
    let property = member.property()?;
    Some(PropertyAccess {
        name: property.text(),
        node: property.syntax().clone(),
    })
}

/// `(function (a, b) { a.x; b.y })(g1, g2)`: the accesses on each parameter
/// that receives a global, paired with that global's name
fn aliased_accesses(
    call: &CallExpr,
    reference_names: &FxHashMap<SyntaxNode, SmolStr>,
    scopes: &ScopeMap,
) -> Vec<(SmolStr, PropertyAccess)> {
    let Some(callee) = call.callee() else {
        return Vec::new();
    };
    if callee.kind() != SyntaxKind::FUNCTION_EXPR {
        return Vec::new();
    }
    let Some(function) = Function::cast(callee.clone()) else {
        return Vec::new();
    };
    let (Some(params), Some(body)) = (function.param_list(), function.body()) else {
        return Vec::new();
    };
    let params: Vec<SyntaxNode> = params.params().collect();

    let mut accesses = Vec::new();
    for (index, arg) in call.args().iter().enumerate() {
        let Some(global) = reference_names.get(arg) else {
            continue;
        };
        // Only plain identifier parameters alias the argument
        let Some(param) = params.get(index).filter(|p| p.kind() == SyntaxKind::NAME) else {
            continue;
        };
        let Some(param_name) = Name::cast(param.clone()).map(|n| n.text()) else {
            continue;
        };

        for member in body.descendants().filter_map(MemberExpr::cast) {
            let Some(object) = member.object() else {
                continue;
            };
            let Some(object_ref) = NameRef::cast(object.clone()) else {
                continue;
            };
            if object_ref.text() != param_name || is_shadowed(&object, &callee, &param_name, scopes) {
                continue;
            }
            if let Some(access) = property_access(&member) {
                tracing::trace!(global = %global, param = %param_name, property = %access.name, "aliased property");
                accesses.push((global.clone(), access));
            }
        }
    }
    accesses
}

/// Whether a scope strictly between `reference` and `function` rebinds `name`
fn is_shadowed(reference: &SyntaxNode, function: &SyntaxNode, name: &str, scopes: &ScopeMap) -> bool {
    reference
        .ancestors()
        .skip(1)
        .take_while(|a| a != function)
        .any(|a| scopes.declares(&a, name) || (name == "arguments" && a.kind().binds_arguments()))
}
