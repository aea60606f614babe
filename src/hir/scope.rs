//! Scope annotation: which names each scope-introducing node binds.
//!
//! The tree itself is immutable, so the `locals` of every scope live in a side
//! table keyed by node identity. The table is filled by a single preorder walk
//! and only read afterwards.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::parser::{
    AstNode, CatchClause, Class, Function, Name, SyntaxKind, SyntaxNode, VarDecl, VarKind,
    bound_names,
};

/// Names bound by each scope node of one tree
#[derive(Debug, Clone, Default)]
pub struct ScopeMap {
    locals: FxHashMap<SyntaxNode, FxHashSet<SmolStr>>,
}

impl ScopeMap {
    /// Annotate every scope of the tree rooted at `root`
    pub fn build(root: &SyntaxNode) -> Self {
        let mut map = Self::default();
        for node in root.descendants() {
            match node.kind() {
                SyntaxKind::VAR_DECL => map.declare_var(&node),
                SyntaxKind::FUNCTION_DECL
                | SyntaxKind::FUNCTION_EXPR
                | SyntaxKind::ARROW_FUNCTION
                | SyntaxKind::METHOD => map.declare_function(&node),
                SyntaxKind::CLASS_DECL | SyntaxKind::CLASS_EXPR => map.declare_class(&node),
                SyntaxKind::CATCH_CLAUSE => map.declare_catch(&node),
                SyntaxKind::IMPORT_DEFAULT_SPECIFIER
                | SyntaxKind::IMPORT_SPECIFIER
                | SyntaxKind::IMPORT_NAMESPACE_SPECIFIER => {
                    for name in node.children().filter_map(Name::cast) {
                        map.declare(root.clone(), name.text());
                    }
                }
                _ => {}
            }
        }
        map
    }

    /// The names `scope` binds, if it binds any
    pub fn locals(&self, scope: &SyntaxNode) -> Option<&FxHashSet<SmolStr>> {
        self.locals.get(scope)
    }

    /// Whether `scope` itself binds `name`
    pub fn declares(&self, scope: &SyntaxNode, name: &str) -> bool {
        self.locals
            .get(scope)
            .is_some_and(|names| names.contains(name))
    }

    /// Number of nodes carrying at least one binding
    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }

    fn declare(&mut self, scope: SyntaxNode, name: SmolStr) {
        self.locals.entry(scope).or_default().insert(name);
    }

    fn declare_all(&mut self, scope: &SyntaxNode, pattern: &SyntaxNode) {
        for name in bound_names(pattern) {
            self.declare(scope.clone(), name.text());
        }
    }

    fn declare_var(&mut self, node: &SyntaxNode) {
        let Some(decl) = VarDecl::cast(node.clone()) else {
            return;
        };
        let scope = match decl.kind() {
            VarKind::Var => enclosing(node, SyntaxKind::is_function_scope),
            VarKind::Let | VarKind::Const => enclosing(node, SyntaxKind::is_block_scope),
        };
        let Some(scope) = scope else {
            return;
        };
        for target in decl.targets() {
            self.declare_all(&scope, &target);
        }
    }

    /// Parameters and own name inside the function; a declaration's name also
    /// in the enclosing function scope
    fn declare_function(&mut self, node: &SyntaxNode) {
        let Some(function) = Function::cast(node.clone()) else {
            return;
        };
        if let Some(params) = function.param_list() {
            self.declare_all(node, params.syntax());
        }
        if let Some(name) = function.name() {
            self.declare(node.clone(), name.text());
            if node.kind() == SyntaxKind::FUNCTION_DECL {
                if let Some(scope) = enclosing(node, SyntaxKind::is_function_scope) {
                    self.declare(scope, name.text());
                }
            }
        }
    }

    /// A class declaration binds like `let`; a class expression binds its
    /// name only inside itself
    fn declare_class(&mut self, node: &SyntaxNode) {
        let Some(name) = Class::cast(node.clone()).and_then(|class| class.name()) else {
            return;
        };
        if node.kind() == SyntaxKind::CLASS_EXPR {
            self.declare(node.clone(), name.text());
        } else if let Some(scope) = enclosing(node, SyntaxKind::is_block_scope) {
            self.declare(scope, name.text());
        }
    }

    /// The error binding is visible only inside the catch body
    fn declare_catch(&mut self, node: &SyntaxNode) {
        let Some(clause) = CatchClause::cast(node.clone()) else {
            return;
        };
        if let (Some(param), Some(body)) = (clause.param(), clause.body()) {
            self.declare_all(&body, &param);
        }
    }
}

/// Nearest strict ancestor whose kind satisfies `is_scope`
fn enclosing(node: &SyntaxNode, is_scope: fn(SyntaxKind) -> bool) -> Option<SyntaxNode> {
    node.ancestors().skip(1).find(|n| is_scope(n.kind()))
}
