//! Logos-based lexer for JavaScript
//!
//! Fast tokenization using the logos crate. The wrapper adds the two pieces of
//! context a plain regular lexer cannot express: regular-expression literals
//! (decided by the previous significant token) and template literals with
//! nested `${ ... }` substitutions.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Whether the token text contains a line terminator
    pub fn has_line_break(&self) -> bool {
        self.text.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
    }
}

/// What an open `{` on the brace stack belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brace {
    Block,
    Template,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
    prev: Option<SyntaxKind>,
    braces: Vec<Brace>,
    /// One entry per open `(`: whether it opened an `if`/`for`/`while`/`with` head
    parens: Vec<bool>,
    /// The previous token is a `)` closing such a head
    after_head: bool,
    /// The previous tokens are `for await`
    for_await: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
            prev: None,
            braces: Vec::new(),
            parens: Vec::new(),
            after_head: false,
            for_await: false,
        }
    }

    /// A `/` starts a regular expression unless the previous significant
    /// token ends an operand.
    fn regex_allowed(&self) -> bool {
        if self.after_head {
            return true;
        }
        !matches!(
            self.prev,
            Some(
                SyntaxKind::IDENT
                    | SyntaxKind::PRIVATE_NAME
                    | SyntaxKind::NUMBER
                    | SyntaxKind::STRING
                    | SyntaxKind::REGEX
                    | SyntaxKind::TEMPLATE_TAIL
                    | SyntaxKind::R_PAREN
                    | SyntaxKind::R_BRACKET
                    | SyntaxKind::PLUS_PLUS
                    | SyntaxKind::MINUS_MINUS
                    | SyntaxKind::THIS_KW
                    | SyntaxKind::SUPER_KW
                    | SyntaxKind::NULL_KW
                    | SyntaxKind::TRUE_KW
                    | SyntaxKind::FALSE_KW
            )
        )
    }

    /// A `)` closing a statement head is followed by a statement, so a `/`
    /// after it starts a regular expression: `if (x) /re/.test(y)`
    fn track_parens(&mut self, kind: SyntaxKind, text: &str) {
        self.after_head = false;
        match kind {
            SyntaxKind::L_PAREN => {
                let head = self.for_await
                    || matches!(
                        self.prev,
                        Some(
                            SyntaxKind::IF_KW
                                | SyntaxKind::FOR_KW
                                | SyntaxKind::WHILE_KW
                                | SyntaxKind::WITH_KW
                        )
                    );
                self.parens.push(head);
            }
            SyntaxKind::R_PAREN => self.after_head = self.parens.pop().unwrap_or(false),
            _ => {}
        }
        self.for_await =
            kind == SyntaxKind::IDENT && text == "await" && self.prev == Some(SyntaxKind::FOR_KW);
    }

    /// Extend the current `/` or `/=` token over a regular-expression body and
    /// its flags. Falls back to `fallback` when no closing `/` exists on the
    /// line.
    fn scan_regex(&mut self, fallback: SyntaxKind) -> SyntaxKind {
        let rest = self.inner.remainder();
        let mut in_class = false;
        let mut chars = rest.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    None | Some((_, '\n' | '\r' | '\u{2028}' | '\u{2029}')) => break,
                    Some(_) => {}
                },
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    let flags = &rest[i + 1..];
                    let flags_len = flags
                        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
                        .unwrap_or(flags.len());
                    self.inner.bump(i + 1 + flags_len);
                    return SyntaxKind::REGEX;
                }
                '\n' | '\r' | '\u{2028}' | '\u{2029}' => break,
                _ => {}
            }
        }
        fallback
    }

    /// Extend the current `` ` `` or `}` token over a template chunk, up to
    /// and including the closing backtick or the next `${`.
    fn scan_template(&mut self) -> SyntaxKind {
        let rest = self.inner.remainder();
        let mut chars = rest.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '`' => {
                    self.inner.bump(i + 1);
                    return SyntaxKind::TEMPLATE_TAIL;
                }
                '$' if rest[i + 1..].starts_with('{') => {
                    self.inner.bump(i + 2);
                    self.braces.push(Brace::Template);
                    return SyntaxKind::TEMPLATE_HEAD;
                }
                _ => {}
            }
        }
        self.inner.bump(rest.len());
        SyntaxKind::ERROR
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let at_start = self.inner.span().start == 0;

        let kind = match logos_token {
            Ok(LogosToken::Backtick) => self.scan_template(),
            Ok(LogosToken::LBrace) => {
                self.braces.push(Brace::Block);
                SyntaxKind::L_BRACE
            }
            Ok(LogosToken::RBrace) => match self.braces.pop() {
                Some(Brace::Template) => self.scan_template(),
                _ => SyntaxKind::R_BRACE,
            },
            Ok(LogosToken::Slash) if self.regex_allowed() => self.scan_regex(SyntaxKind::SLASH),
            Ok(LogosToken::SlashEq) if self.regex_allowed() => {
                self.scan_regex(SyntaxKind::SLASH_EQ)
            }
            Ok(LogosToken::Shebang) if !at_start => SyntaxKind::ERROR,
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        if !kind.is_trivia() {
            self.track_parens(kind, text);
            self.prev = Some(kind);
        }

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Extends `/*` up to and including the next `*/`; an unterminated comment
/// swallows the rest of the input as an error token.
fn block_comment(lex: &mut logos::Lexer<LogosToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// Narrows the identifier pattern: its non-ASCII range only excludes
/// whitespace, so every non-ASCII character must be XID_Start (first) or
/// XID_Continue (rest).
fn validate_identifier(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let mut chars = lex.slice().chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let first_ok = first.is_ascii() || unicode_ident::is_xid_start(first);
    first_ok
        && chars.all(|c| {
            c.is_ascii() || unicode_ident::is_xid_continue(c) || c == '\u{200C}' || c == '\u{200D}'
        })
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(subpattern unicode_ident = r"[\u{80}-\u{9F}\u{A1}-\u{167F}\u{1681}-\u{1FFF}\u{200B}-\u{2027}\u{202A}-\u{202E}\u{2030}-\u{205E}\u{2060}-\u{2FFF}\u{3001}-\u{FEFE}\u{FF00}-\u{10FFFF}]")]
#[logos(subpattern unicode_escape = r"\\u([0-9a-fA-F]{4}|\{[0-9a-fA-F]+\})")]
#[logos(subpattern ident_start = r"([a-zA-Z_$]|(?&unicode_ident)|(?&unicode_escape))")]
#[logos(subpattern ident_part = r"([a-zA-Z0-9_$]|(?&unicode_ident)|(?&unicode_escape))")]
#[logos(subpattern digits = r"[0-9](_?[0-9])*")]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\n\r\u{0B}\u{0C}\u{A0}\u{FEFF}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}]+")]
    Whitespace,

    #[regex(r"//[^\n\r\u{2028}\u{2029}]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[regex(r"#![^\n\r]*")]
    Shebang,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"(?&ident_start)(?&ident_part)*", validate_identifier)]
    Ident,

    #[regex(r"#(?&ident_start)(?&ident_part)*", validate_identifier)]
    PrivateName,

    #[regex(r"((?&digits)(\.((?&digits))?)?|\.(?&digits))([eE][+-]?(?&digits))?")]
    #[regex(r"(?&digits)n")]
    #[regex(r"0[xX][0-9a-fA-F](_?[0-9a-fA-F])*n?")]
    #[regex(r"0[oO][0-7](_?[0-7])*n?")]
    #[regex(r"0[bB][01](_?[01])*n?")]
    Number,

    #[regex(r#""([^"\\\n\r]|\\([^\n\r]|\r\n|\n|\r))*""#)]
    #[regex(r#"'([^'\\\n\r]|\\([^\n\r]|\r\n|\n|\r))*'"#)]
    String,

    #[token("`")]
    Backtick,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (longest match wins in logos)
    // =========================================================================
    #[token("...")]
    DotDotDot,
    #[token("?.")]
    QuestionDot,
    #[token("??=")]
    QuestionQuestionEq,
    #[token("??")]
    QuestionQuestion,
    #[token("=>")]
    FatArrow,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    BangEqEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("**=")]
    StarStarEq,
    #[token("**")]
    StarStar,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<=")]
    ShlEq,
    #[token(">>>=")]
    UshrEq,
    #[token(">>=")]
    ShrEq,
    #[token("<<")]
    Shl,
    #[token(">>>")]
    Ushr,
    #[token(">>")]
    Shr,
    #[token("&&=")]
    AmpAmpEq,
    #[token("||=")]
    PipePipeEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("=")]
    Eq,

    // =========================================================================
    // KEYWORDS (reserved words only)
    // =========================================================================
    #[token("break")]
    BreakKw,
    #[token("case")]
    CaseKw,
    #[token("catch")]
    CatchKw,
    #[token("class")]
    ClassKw,
    #[token("const")]
    ConstKw,
    #[token("continue")]
    ContinueKw,
    #[token("debugger")]
    DebuggerKw,
    #[token("default")]
    DefaultKw,
    #[token("delete")]
    DeleteKw,
    #[token("do")]
    DoKw,
    #[token("else")]
    ElseKw,
    #[token("export")]
    ExportKw,
    #[token("extends")]
    ExtendsKw,
    #[token("false")]
    FalseKw,
    #[token("finally")]
    FinallyKw,
    #[token("for")]
    ForKw,
    #[token("function")]
    FunctionKw,
    #[token("if")]
    IfKw,
    #[token("import")]
    ImportKw,
    #[token("in")]
    InKw,
    #[token("instanceof")]
    InstanceofKw,
    #[token("new")]
    NewKw,
    #[token("null")]
    NullKw,
    #[token("return")]
    ReturnKw,
    #[token("super")]
    SuperKw,
    #[token("switch")]
    SwitchKw,
    #[token("this")]
    ThisKw,
    #[token("throw")]
    ThrowKw,
    #[token("true")]
    TrueKw,
    #[token("try")]
    TryKw,
    #[token("typeof")]
    TypeofKw,
    #[token("var")]
    VarKw,
    #[token("void")]
    VoidKw,
    #[token("while")]
    WhileKw,
    #[token("with")]
    WithKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            Shebang => SyntaxKind::SHEBANG,

            // Literals
            Ident => SyntaxKind::IDENT,
            PrivateName => SyntaxKind::PRIVATE_NAME,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            // Rewritten by the wrapper; only reached if it is bypassed
            Backtick => SyntaxKind::ERROR,

            // Multi-char punctuation
            DotDotDot => SyntaxKind::DOT_DOT_DOT,
            QuestionDot => SyntaxKind::QUESTION_DOT,
            QuestionQuestionEq => SyntaxKind::QUESTION_QUESTION_EQ,
            QuestionQuestion => SyntaxKind::QUESTION_QUESTION,
            FatArrow => SyntaxKind::FAT_ARROW,
            EqEqEq => SyntaxKind::EQ_EQ_EQ,
            BangEqEq => SyntaxKind::BANG_EQ_EQ,
            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            StarStarEq => SyntaxKind::STAR_STAR_EQ,
            StarStar => SyntaxKind::STAR_STAR,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            MinusMinus => SyntaxKind::MINUS_MINUS,
            ShlEq => SyntaxKind::SHL_EQ,
            UshrEq => SyntaxKind::USHR_EQ,
            ShrEq => SyntaxKind::SHR_EQ,
            Shl => SyntaxKind::SHL,
            Ushr => SyntaxKind::USHR,
            Shr => SyntaxKind::SHR,
            AmpAmpEq => SyntaxKind::AMP_AMP_EQ,
            PipePipeEq => SyntaxKind::PIPE_PIPE_EQ,
            AmpAmp => SyntaxKind::AMP_AMP,
            PipePipe => SyntaxKind::PIPE_PIPE,
            PlusEq => SyntaxKind::PLUS_EQ,
            MinusEq => SyntaxKind::MINUS_EQ,
            StarEq => SyntaxKind::STAR_EQ,
            SlashEq => SyntaxKind::SLASH_EQ,
            PercentEq => SyntaxKind::PERCENT_EQ,
            AmpEq => SyntaxKind::AMP_EQ,
            PipeEq => SyntaxKind::PIPE_EQ,
            CaretEq => SyntaxKind::CARET_EQ,

            // Single-char punctuation
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Question => SyntaxKind::QUESTION,
            Colon => SyntaxKind::COLON,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Caret => SyntaxKind::CARET,
            Bang => SyntaxKind::BANG,
            Tilde => SyntaxKind::TILDE,
            Eq => SyntaxKind::EQ,

            // Keywords
            BreakKw => SyntaxKind::BREAK_KW,
            CaseKw => SyntaxKind::CASE_KW,
            CatchKw => SyntaxKind::CATCH_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            ConstKw => SyntaxKind::CONST_KW,
            ContinueKw => SyntaxKind::CONTINUE_KW,
            DebuggerKw => SyntaxKind::DEBUGGER_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            DeleteKw => SyntaxKind::DELETE_KW,
            DoKw => SyntaxKind::DO_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            ExportKw => SyntaxKind::EXPORT_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            FinallyKw => SyntaxKind::FINALLY_KW,
            ForKw => SyntaxKind::FOR_KW,
            FunctionKw => SyntaxKind::FUNCTION_KW,
            IfKw => SyntaxKind::IF_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InKw => SyntaxKind::IN_KW,
            InstanceofKw => SyntaxKind::INSTANCEOF_KW,
            NewKw => SyntaxKind::NEW_KW,
            NullKw => SyntaxKind::NULL_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            SuperKw => SyntaxKind::SUPER_KW,
            SwitchKw => SyntaxKind::SWITCH_KW,
            ThisKw => SyntaxKind::THIS_KW,
            ThrowKw => SyntaxKind::THROW_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            TryKw => SyntaxKind::TRY_KW,
            TypeofKw => SyntaxKind::TYPEOF_KW,
            VarKw => SyntaxKind::VAR_KW,
            VoidKw => SyntaxKind::VOID_KW,
            WhileKw => SyntaxKind::WHILE_KW,
            WithKw => SyntaxKind::WITH_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        Lexer::new(input)
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_lex_member_access() {
        let tokens: Vec<_> = Lexer::new("window.blah = 1;").collect();
        assert_eq!(tokens.len(), 8); // window . blah ws = ws 1 ;
        assert_eq!(tokens[0].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[1].kind, SyntaxKind::DOT);
        assert_eq!(tokens[2].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[3].kind, SyntaxKind::WHITESPACE);
        assert_eq!(tokens[4].kind, SyntaxKind::EQ);
        assert_eq!(tokens[6].kind, SyntaxKind::NUMBER);
        assert_eq!(tokens[7].kind, SyntaxKind::SEMICOLON);
    }

    #[test]
    fn test_lex_is_lossless() {
        let input = "var a = /re[/]x/g; // c\n`t${ {b:1}.b }u` /* x */";
        let joined: String = Lexer::new(input).map(|t| t.text).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_lex_offsets() {
        let tokens = tokenize("a  bc");
        assert_eq!(tokens[2].offset, TextSize::new(3));
        assert_eq!(tokens[2].text, "bc");
    }

    #[test]
    fn test_lex_regex_vs_division() {
        assert_eq!(
            kinds("a / b / c"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::SLASH,
                SyntaxKind::IDENT,
                SyntaxKind::SLASH,
                SyntaxKind::IDENT
            ]
        );
        assert_eq!(
            kinds("x = /a/g.test(y)"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::EQ,
                SyntaxKind::REGEX,
                SyntaxKind::DOT,
                SyntaxKind::IDENT,
                SyntaxKind::L_PAREN,
                SyntaxKind::IDENT,
                SyntaxKind::R_PAREN
            ]
        );
        assert_eq!(kinds("(a) /= 2"), vec![
            SyntaxKind::L_PAREN,
            SyntaxKind::IDENT,
            SyntaxKind::R_PAREN,
            SyntaxKind::SLASH_EQ,
            SyntaxKind::NUMBER
        ]);
    }

    #[test]
    fn test_lex_template_with_substitutions() {
        let tokens: Vec<_> = Lexer::new("`a${b}c${ {d} }e`")
            .filter(|t| !t.kind.is_trivia())
            .collect();
        let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
        assert_eq!(
            summary,
            vec![
                (SyntaxKind::TEMPLATE_HEAD, "`a${"),
                (SyntaxKind::IDENT, "b"),
                (SyntaxKind::TEMPLATE_HEAD, "}c${"),
                (SyntaxKind::L_BRACE, "{"),
                (SyntaxKind::IDENT, "d"),
                (SyntaxKind::R_BRACE, "}"),
                (SyntaxKind::TEMPLATE_TAIL, "}e`"),
            ]
        );
    }

    #[test]
    fn test_lex_keywords_and_contextual_words() {
        assert_eq!(
            kinds("function let of instanceof"),
            vec![
                SyntaxKind::FUNCTION_KW,
                SyntaxKind::IDENT,
                SyntaxKind::IDENT,
                SyntaxKind::INSTANCEOF_KW
            ]
        );
    }

    #[test]
    fn test_lex_numbers() {
        for input in ["0", "1.5", ".5", "1e10", "0x1F", "0b101", "0o17", "10n", "1_000"] {
            assert_eq!(kinds(input), vec![SyntaxKind::NUMBER], "number {input}");
        }
    }

    #[test]
    fn test_lex_unicode_identifier() {
        assert_eq!(kinds("café ünïcödé"), vec![SyntaxKind::IDENT, SyntaxKind::IDENT]);
        assert_eq!(kinds("a\u{00A0}b"), vec![SyntaxKind::IDENT, SyntaxKind::IDENT]);
    }

    #[test]
    fn test_lex_comments_and_shebang() {
        let tokens: Vec<_> = Lexer::new("#!/usr/bin/env node\n/** doc **/ x").collect();
        assert_eq!(tokens[0].kind, SyntaxKind::SHEBANG);
        assert_eq!(tokens[2].kind, SyntaxKind::BLOCK_COMMENT);
        assert_eq!(tokens[2].text, "/** doc **/");
        assert_eq!(tokens[4].kind, SyntaxKind::IDENT);
    }

    #[test]
    fn test_lex_block_comments() {
        let tokens: Vec<_> = Lexer::new("x = a /* c */ + b").collect();
        assert!(tokens.iter().all(|t| t.kind != SyntaxKind::ERROR));
        let comment = tokens
            .iter()
            .find(|t| t.kind == SyntaxKind::BLOCK_COMMENT)
            .unwrap();
        assert_eq!(comment.text, "/* c */");

        let tokens: Vec<_> = Lexer::new("/* * */ /*\n multi\n*/ y").collect();
        assert_eq!(tokens[0].text, "/* * */");
        assert_eq!(tokens[2].kind, SyntaxKind::BLOCK_COMMENT);
        assert_eq!(tokens[2].text, "/*\n multi\n*/");
        assert_eq!(kinds("/* window */ window"), vec![SyntaxKind::IDENT]);
    }

    #[test]
    fn test_lex_unterminated_block_comment_is_error() {
        let tokens: Vec<_> = Lexer::new("a /* never closed").collect();
        assert_eq!(tokens.last().unwrap().kind, SyntaxKind::ERROR);
        assert_eq!(tokens.last().unwrap().text, "/* never closed");
    }

    #[test]
    fn test_lex_regex_after_control_head() {
        for source in [
            "if (x) /re/.test(y)",
            "while (x) /re/.exec(y)",
            "for (;;) /a/.b",
            "for await (x of y) /r/",
            "if (f(a)) /re/",
        ] {
            assert!(
                kinds(source).contains(&SyntaxKind::REGEX),
                "no regex in {source:?}"
            );
        }
        assert_eq!(kinds("(a) / b"), vec![
            SyntaxKind::L_PAREN,
            SyntaxKind::IDENT,
            SyntaxKind::R_PAREN,
            SyntaxKind::SLASH,
            SyntaxKind::IDENT
        ]);
        assert!(!kinds("if (f(a) / 2) b").contains(&SyntaxKind::REGEX));
    }

    #[test]
    fn test_lex_unterminated_template_is_error() {
        assert_eq!(kinds("`abc"), vec![SyntaxKind::ERROR]);
    }
}
