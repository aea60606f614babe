//! Typed AST wrappers over the untyped rowan CST.
//!
//! Only the nodes the global analysis inspects get a wrapper; everything else
//! is walked as plain [`SyntaxNode`]s.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use smol_str::SmolStr;

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// First non-trivia token of a node
fn first_significant_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| !t.kind().is_trivia())
}

/// Text of a single-token node (`NAME`, `NAME_REF`, `PROPERTY_NAME`)
fn token_text(node: &SyntaxNode) -> SmolStr {
    first_significant_token(node)
        .map(|t| SmolStr::new(t.text()))
        .unwrap_or_default()
}

/// Strip any number of enclosing parentheses: `((a))` -> `a`
pub fn skip_parens(node: SyntaxNode) -> SyntaxNode {
    let mut node = node;
    while node.kind() == SyntaxKind::PAREN_EXPR {
        match node.first_child() {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

// ============================================================================
// Root
// ============================================================================

ast_node!(Program, PROGRAM);

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    pub fn text(&self) -> SmolStr {
        token_text(&self.0)
    }
}

ast_node!(NameRef, NAME_REF);

impl NameRef {
    pub fn text(&self) -> SmolStr {
        token_text(&self.0)
    }
}

ast_node!(PropertyName, PROPERTY_NAME);

impl PropertyName {
    pub fn text(&self) -> SmolStr {
        token_text(&self.0)
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// `var` / `let` / `const`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

ast_node!(VarDecl, VAR_DECL);

impl VarDecl {
    pub fn kind(&self) -> VarKind {
        match first_significant_token(&self.0).as_ref().map(|t| t.text()) {
            Some("let") => VarKind::Let,
            Some("const") => VarKind::Const,
            _ => VarKind::Var,
        }
    }

    /// Binding patterns of every declarator
    pub fn targets(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::VAR_DECLARATOR)
            .filter_map(|d| d.first_child())
    }
}

/// Any function-like node: declaration, expression, arrow, method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Function(SyntaxNode);

impl AstNode for Function {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::FUNCTION_DECL
                | SyntaxKind::FUNCTION_EXPR
                | SyntaxKind::ARROW_FUNCTION
                | SyntaxKind::METHOD
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl Function {
    /// Own name of a function declaration or expression
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn param_list(&self) -> Option<ParamList> {
        self.0.children().find_map(ParamList::cast)
    }

    /// Block body; `None` for concise arrow bodies
    pub fn body(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::BLOCK_STMT)
    }
}

ast_node!(ParamList, PARAM_LIST);

impl ParamList {
    /// Parameter nodes in position order
    pub fn params(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children()
    }
}

ast_node!(CatchClause, CATCH_CLAUSE);

impl CatchClause {
    /// The error binding, absent for `catch { ... }`
    pub fn param(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() != SyntaxKind::BLOCK_STMT)
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::BLOCK_STMT)
    }
}

/// Class declaration or class expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Class(SyntaxNode);

impl AstNode for Class {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::CLASS_DECL | SyntaxKind::CLASS_EXPR)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl Class {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

// ============================================================================
// Expressions
// ============================================================================

ast_node!(MemberExpr, MEMBER_EXPR);

impl MemberExpr {
    /// The object being accessed, parentheses removed
    pub fn object(&self) -> Option<SyntaxNode> {
        self.0.first_child().map(skip_parens)
    }

    pub fn property(&self) -> Option<PropertyName> {
        self.0.children().find_map(PropertyName::cast)
    }
}

ast_node!(CallExpr, CALL_EXPR);

impl CallExpr {
    /// The callee, parentheses removed
    pub fn callee(&self) -> Option<SyntaxNode> {
        self.0.first_child().map(skip_parens)
    }

    /// Argument nodes in position order, parentheses removed
    pub fn args(&self) -> Vec<SyntaxNode> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::ARG_LIST)
            .map(|list| list.children().map(skip_parens).collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Patterns
// ============================================================================

fn is_binding_target(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::NAME
            | SyntaxKind::OBJECT_PATTERN
            | SyntaxKind::ARRAY_PATTERN
            | SyntaxKind::ASSIGN_PATTERN
            | SyntaxKind::REST_PATTERN
    )
}

/// Every identifier a binding pattern (or a whole parameter list) introduces.
///
/// Default values and computed keys are skipped: they hold references, not
/// bindings.
pub fn bound_names(pattern: &SyntaxNode) -> Vec<Name> {
    let mut names = Vec::new();
    collect_bound_names(pattern, &mut names);
    names
}

fn collect_bound_names(node: &SyntaxNode, names: &mut Vec<Name>) {
    match node.kind() {
        SyntaxKind::NAME => names.extend(Name::cast(node.clone())),
        SyntaxKind::OBJECT_PATTERN | SyntaxKind::ARRAY_PATTERN | SyntaxKind::PARAM_LIST => {
            for child in node.children() {
                collect_bound_names(&child, names);
            }
        }
        SyntaxKind::OBJECT_PATTERN_PROP => {
            if let Some(target) = node.children().filter(|c| is_binding_target(c.kind())).last() {
                collect_bound_names(&target, names);
            }
        }
        SyntaxKind::ASSIGN_PATTERN | SyntaxKind::REST_PATTERN => {
            if let Some(target) = node.first_child() {
                collect_bound_names(&target, names);
            }
        }
        _ => {}
    }
}
