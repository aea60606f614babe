//! Recursive descent parser for JavaScript
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST: every byte of the
//! input ends up in exactly one token, so node ranges are exact source
//! offsets.

use super::grammar;
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Whether the source is a classic script or an ES module.
///
/// Modules accept `import`/`export` declarations and top-level `await`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceType {
    #[default]
    Script,
    Module,
}

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the text contains `import`/`export` declarations that only a
    /// module accepts
    pub fn needs_module(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.message == grammar::MODULE_ONLY)
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse JavaScript source code into a CST
pub fn parse(input: &str, source_type: SourceType) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, source_type);
    grammar::program(&mut parser);
    parser.finish()
}

/// Flags that change how the grammar treats contextual words.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Context {
    /// `await` is an operator
    pub in_async: bool,
    /// `yield` is an operator
    pub in_generator: bool,
    /// `in` is not a binary operator (for-statement heads)
    pub no_in: bool,
}

/// The parser state
pub(crate) struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    source_type: SourceType,
    pub(crate) ctx: Context,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], source_type: SourceType) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            source_type,
            ctx: Context {
                in_async: source_type == SourceType::Module,
                ..Context::default()
            },
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    pub(crate) fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Run `f` with a modified context, restoring the previous one afterwards
    pub(crate) fn with_ctx<R>(&mut self, ctx: Context, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::replace(&mut self.ctx, ctx);
        let result = f(self);
        self.ctx = saved;
        result
    }

    /// Run `f` with `in` re-enabled as an operator (inside brackets)
    pub(crate) fn with_in<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let ctx = Context {
            no_in: false,
            ..self.ctx
        };
        self.with_ctx(ctx, f)
    }

    // =========================================================================
    // Token inspection (all lookups skip trivia)
    // =========================================================================

    /// Index into `tokens` of the nth significant token ahead
    fn significant_index(&self, n: usize) -> Option<usize> {
        self.tokens[self.pos..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(i, _)| self.pos + i)
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.significant_index(0).map(|i| &self.tokens[i])
    }

    pub(crate) fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    pub(crate) fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    pub(crate) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    /// At an identifier with exactly this text (`let`, `of`, `async`, ...)
    pub(crate) fn at_contextual(&self, word: &str) -> bool {
        self.at(SyntaxKind::IDENT) && self.current_text() == word
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.significant_index(0).is_none()
    }

    /// Look ahead, skipping trivia
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.significant_index(n)
            .map(|i| self.tokens[i].kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    pub(crate) fn nth_text(&self, n: usize) -> &str {
        self.significant_index(n)
            .map(|i| self.tokens[i].text)
            .unwrap_or("")
    }

    /// Whether a line terminator separates the nth significant token from
    /// the significant token before it
    pub(crate) fn line_break_before_nth(&self, n: usize) -> bool {
        let end = self.significant_index(n).unwrap_or(self.tokens.len());
        self.tokens[..end]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.has_line_break())
    }

    pub(crate) fn has_line_break_before(&self) -> bool {
        self.line_break_before_nth(0)
    }

    /// Given that the nth significant token opens a bracketed group, return
    /// the lookahead distance of the first token after the matching close.
    pub(crate) fn after_group(&self, n: usize) -> usize {
        let Some(start) = self.significant_index(n) else {
            return n;
        };
        let mut depth = 0usize;
        let mut k = n;
        for token in self.tokens[start..].iter().filter(|t| !t.kind.is_trivia()) {
            match token.kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return k + 1;
                    }
                }
                _ => {}
            }
            k += 1;
        }
        k
    }

    /// Marker used by list loops to detect a lack of progress
    pub(crate) fn progress(&self) -> usize {
        self.significant_index(0).unwrap_or(self.tokens.len())
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    /// Attach pending trivia to the currently open node
    pub(crate) fn bump_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    pub(crate) fn bump(&mut self) {
        self.bump_trivia();
        if let Some(token) = self.tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_contextual(&mut self, word: &str) -> bool {
        if self.at_contextual(word) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("Unexpected token, expected {:?}", kind));
            false
        }
    }

    pub(crate) fn expect_contextual(&mut self, word: &str) -> bool {
        if self.eat_contextual(word) {
            true
        } else {
            self.error(format!("Unexpected token, expected \"{word}\""));
            false
        }
    }

    /// Consume a statement terminator, applying automatic semicolon insertion:
    /// a missing `;` is accepted before `}`, at end of input, or after a line
    /// break.
    pub(crate) fn eat_semicolon(&mut self) {
        if !self.eat(SyntaxKind::SEMICOLON)
            && !self.at(SyntaxKind::R_BRACE)
            && !self.at_eof()
            && !self.has_line_break_before()
        {
            self.error("Unexpected token");
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let range = match self.current() {
            Some(t) => TextRange::at(t.offset, TextSize::of(t.text)),
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            }
        };
        self.errors.push(SyntaxError::new(message, range));
    }

    /// Report an error and wrap the offending token in an ERROR node,
    /// unless it is a closing delimiter some enclosing rule is waiting for.
    pub(crate) fn error_bump(&mut self, message: impl Into<String>) {
        self.error(message);
        if self.at_eof()
            || self.at_any(&[
                SyntaxKind::R_PAREN,
                SyntaxKind::R_BRACE,
                SyntaxKind::R_BRACKET,
                SyntaxKind::SEMICOLON,
                SyntaxKind::COMMA,
            ])
        {
            return;
        }
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        self.finish_node();
    }

    /// Like [`Parser::error_bump`] but always consumes a token; used by the
    /// statement loops to guarantee progress
    pub(crate) fn error_skip(&mut self, message: impl Into<String>) {
        self.error(message);
        if !self.at_eof() {
            self.start_node(SyntaxKind::ERROR);
            self.bump();
            self.finish_node();
        }
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    /// Open the root node; it owns every token including leading trivia
    pub(crate) fn start_root(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    /// Open a node at the next significant token; pending trivia stays in
    /// the parent so node ranges never start on whitespace
    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.bump_trivia();
        self.builder.start_node(kind.into());
    }

    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(crate) fn checkpoint(&mut self) -> Checkpoint {
        self.bump_trivia();
        self.builder.checkpoint()
    }

    /// Open a node of `kind` starting at `checkpoint`; close with
    /// [`Parser::finish_node`]
    pub(crate) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }
}
