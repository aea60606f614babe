//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all node and token kinds in the JavaScript syntax tree.
//! Token kinds come first, node kinds after them.

/// All syntax kinds (tokens and nodes)
///
/// Tokens are leaves (identifiers, keywords, punctuation, trivia).
/// Nodes are composite (statements, expressions, patterns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,
    SHEBANG,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,          // foo, $bar, _baz
    PRIVATE_NAME,   // #field
    NUMBER,         // 42, 0x2a, 1e3, 10n
    STRING,         // "a" or 'a'
    REGEX,          // /ab+c/gi
    TEMPLATE_HEAD,  // `text${   or   }text${
    TEMPLATE_TAIL,  // `text`    or   }text`

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,                // {
    R_BRACE,                // }
    L_PAREN,                // (
    R_PAREN,                // )
    L_BRACKET,              // [
    R_BRACKET,              // ]
    SEMICOLON,              // ;
    COMMA,                  // ,
    DOT,                    // .
    DOT_DOT_DOT,            // ...
    QUESTION_DOT,           // ?.
    QUESTION,               // ?
    QUESTION_QUESTION,      // ??
    COLON,                  // :
    FAT_ARROW,              // =>
    LT,                     // <
    GT,                     // >
    LT_EQ,                  // <=
    GT_EQ,                  // >=
    EQ_EQ,                  // ==
    BANG_EQ,                // !=
    EQ_EQ_EQ,               // ===
    BANG_EQ_EQ,             // !==
    PLUS,                   // +
    MINUS,                  // -
    STAR,                   // *
    SLASH,                  // /
    PERCENT,                // %
    STAR_STAR,              // **
    PLUS_PLUS,              // ++
    MINUS_MINUS,            // --
    SHL,                    // <<
    SHR,                    // >>
    USHR,                   // >>>
    AMP,                    // &
    PIPE,                   // |
    CARET,                  // ^
    BANG,                   // !
    TILDE,                  // ~
    AMP_AMP,                // &&
    PIPE_PIPE,              // ||
    EQ,                     // =
    PLUS_EQ,                // +=
    MINUS_EQ,               // -=
    STAR_EQ,                // *=
    SLASH_EQ,               // /=
    PERCENT_EQ,             // %=
    STAR_STAR_EQ,           // **=
    SHL_EQ,                 // <<=
    SHR_EQ,                 // >>=
    USHR_EQ,                // >>>=
    AMP_EQ,                 // &=
    PIPE_EQ,                // |=
    CARET_EQ,               // ^=
    AMP_AMP_EQ,             // &&=
    PIPE_PIPE_EQ,           // ||=
    QUESTION_QUESTION_EQ,   // ??=

    // =========================================================================
    // KEYWORDS (reserved words; contextual words such as `let`, `of`,
    // `async`, `get` stay IDENT)
    // =========================================================================
    BREAK_KW,
    CASE_KW,
    CATCH_KW,
    CLASS_KW,
    CONST_KW,
    CONTINUE_KW,
    DEBUGGER_KW,
    DEFAULT_KW,
    DELETE_KW,
    DO_KW,
    ELSE_KW,
    EXPORT_KW,
    EXTENDS_KW,
    FALSE_KW,
    FINALLY_KW,
    FOR_KW,
    FUNCTION_KW,
    IF_KW,
    IMPORT_KW,
    IN_KW,
    INSTANCEOF_KW,
    NEW_KW,
    NULL_KW,
    RETURN_KW,
    SUPER_KW,
    SWITCH_KW,
    THIS_KW,
    THROW_KW,
    TRUE_KW,
    TRY_KW,
    TYPEOF_KW,
    VAR_KW,
    VOID_KW,
    WHILE_KW,
    WITH_KW,

    // =========================================================================
    // NODES - Root
    // =========================================================================
    PROGRAM,

    // =========================================================================
    // NODES - Statements
    // =========================================================================
    BLOCK_STMT,
    VAR_DECL,
    VAR_DECLARATOR,
    FUNCTION_DECL,
    CLASS_DECL,
    EXPR_STMT,
    IF_STMT,
    FOR_STMT,
    FOR_IN_STMT,
    FOR_OF_STMT,
    WHILE_STMT,
    DO_WHILE_STMT,
    SWITCH_STMT,
    SWITCH_CASE,
    TRY_STMT,
    CATCH_CLAUSE,
    FINALLY_CLAUSE,
    RETURN_STMT,
    THROW_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    LABELED_STMT,
    WITH_STMT,
    DEBUGGER_STMT,
    EMPTY_STMT,

    // =========================================================================
    // NODES - Modules
    // =========================================================================
    IMPORT_DECL,
    IMPORT_DEFAULT_SPECIFIER,
    IMPORT_SPECIFIER,
    IMPORT_NAMESPACE_SPECIFIER,
    EXPORT_DECL,
    EXPORT_SPECIFIER,
    MODULE_EXPORT_NAME, // imported/exported name that is not a local binding

    // =========================================================================
    // NODES - Functions and classes
    // =========================================================================
    FUNCTION_EXPR,
    ARROW_FUNCTION,
    PARAM_LIST,
    CLASS_EXPR,
    CLASS_HERITAGE,
    CLASS_BODY,
    METHOD,
    CLASS_FIELD,
    STATIC_BLOCK,

    // =========================================================================
    // NODES - Expressions
    // =========================================================================
    NAME_REF,           // identifier in expression position
    THIS_EXPR,
    SUPER_EXPR,
    LITERAL,
    TEMPLATE_LITERAL,
    TAGGED_TEMPLATE,
    ARRAY_EXPR,
    OBJECT_EXPR,
    OBJECT_PROPERTY,
    PROPERTY_KEY,       // non-computed key in object literals / classes
    COMPUTED_KEY,       // [expr] key
    SPREAD_ELEMENT,
    PAREN_EXPR,
    MEMBER_EXPR,        // a.b, a?.b
    PROPERTY_NAME,      // the `b` of a.b
    INDEX_EXPR,         // a[b], a?.[b]
    CALL_EXPR,
    NEW_EXPR,
    ARG_LIST,
    META_PROPERTY,      // new.target, import.meta
    IMPORT_CALL,        // import(x)
    UNARY_EXPR,
    UPDATE_EXPR,
    AWAIT_EXPR,
    YIELD_EXPR,
    BINARY_EXPR,
    CONDITIONAL_EXPR,
    ASSIGN_EXPR,
    SEQUENCE_EXPR,

    // =========================================================================
    // NODES - Patterns
    // =========================================================================
    NAME,               // binding identifier
    OBJECT_PATTERN,
    OBJECT_PATTERN_PROP,
    ARRAY_PATTERN,
    ASSIGN_PATTERN,     // pattern = default
    REST_PATTERN,       // ...pattern
    LABEL,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT | Self::SHEBANG
        )
    }

    /// Check if this is a reserved-word keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::BREAK_KW as u16) && (self as u16) <= (Self::WITH_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16)
            && (self as u16) <= (Self::QUESTION_QUESTION_EQ as u16)
    }

    /// Check if this is an assignment operator (`=`, `+=`, `??=`, ...)
    pub fn is_assign_op(self) -> bool {
        (self as u16) >= (Self::EQ as u16) && (self as u16) <= (Self::QUESTION_QUESTION_EQ as u16)
    }

    /// Check if this can be used as an IdentifierName (after `.`, as an
    /// object key, as an import/export name)
    pub fn is_identifier_name(self) -> bool {
        self == Self::IDENT || self.is_keyword()
    }

    /// Node kinds that introduce a function scope
    pub fn is_function_scope(self) -> bool {
        matches!(
            self,
            Self::PROGRAM
                | Self::FUNCTION_DECL
                | Self::FUNCTION_EXPR
                | Self::ARROW_FUNCTION
                | Self::METHOD
                | Self::STATIC_BLOCK
        )
    }

    /// Node kinds that introduce a block scope (function scopes included)
    pub fn is_block_scope(self) -> bool {
        self == Self::BLOCK_STMT || self.is_function_scope()
    }

    /// Node kinds that give `this` a local meaning
    pub fn binds_this(self) -> bool {
        matches!(
            self,
            Self::FUNCTION_DECL
                | Self::FUNCTION_EXPR
                | Self::METHOD
                | Self::CLASS_FIELD
                | Self::STATIC_BLOCK
        )
    }

    /// Node kinds that declare an implicit `arguments` object
    pub fn binds_arguments(self) -> bool {
        matches!(self, Self::FUNCTION_DECL | Self::FUNCTION_EXPR | Self::METHOD)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsLanguage {}

impl rowan::Language for JsLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<JsLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<JsLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<JsLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<JsLanguage>;
