//! Core token types shared across the lexer, transformers, and tooling.
//!
//! Token Kinds
//!
//!     Every token carries a [TokenKind], a plain integer classification.
//!     There are two id ranges:
//!
//!     Built-in Kinds:
//!         Produced by the logos lexer in [lexer](crate::fixer::lexer). These
//!         are the constants defined on [TokenKind] below, all under 1000.
//!
//!     Custom Kinds:
//!         Introduced by transformers to capture context that the raw lexer
//!         cannot see (e.g. whether a `{` opens a block or a map literal).
//!         By convention custom kinds start at 1000; uniqueness is enforced
//!         by the [CustomTokenNamespace](crate::fixer::namespace::CustomTokenNamespace),
//!         not by the convention. Custom kinds never come out of the lexer;
//!         they only appear after a transformer pass has reclassified tokens.

use std::ops::Range;

/// Integer classification of a token.
///
/// Kinds are deliberately open-ended integers rather than a closed enum so
/// that transformers can introduce new kinds at registration time without
/// touching this module.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TokenKind(pub u16);

impl TokenKind {
    pub const IDENT: TokenKind = TokenKind(1);
    pub const KEYWORD: TokenKind = TokenKind(2);
    pub const NUMBER: TokenKind = TokenKind(3);
    pub const STRING: TokenKind = TokenKind(4);
    pub const COMMENT: TokenKind = TokenKind(5);
    pub const WHITESPACE: TokenKind = TokenKind(6);
    pub const NEWLINE: TokenKind = TokenKind(7);

    pub const BRACE_OPEN: TokenKind = TokenKind(10);
    pub const BRACE_CLOSE: TokenKind = TokenKind(11);
    pub const BRACKET_OPEN: TokenKind = TokenKind(12);
    pub const BRACKET_CLOSE: TokenKind = TokenKind(13);
    pub const PAREN_OPEN: TokenKind = TokenKind(14);
    pub const PAREN_CLOSE: TokenKind = TokenKind(15);

    pub const COMMA: TokenKind = TokenKind(20);
    pub const COLON: TokenKind = TokenKind(21);
    pub const SEMICOLON: TokenKind = TokenKind(22);
    pub const EQUALS: TokenKind = TokenKind(23);
    pub const MINUS: TokenKind = TokenKind(24);
    pub const PLUS: TokenKind = TokenKind(25);
    pub const LESS_THAN: TokenKind = TokenKind(26);
    pub const GREATER_THAN: TokenKind = TokenKind(27);
    pub const DOT: TokenKind = TokenKind(28);

    /// Bytes the lexer could not match. Kept in the stream so that token
    /// text always covers the full source.
    pub const ERROR: TokenKind = TokenKind(99);

    /// Whether this kind carries no syntactic meaning for classification
    /// (whitespace, newlines, comments). Transformers skip trivia when
    /// looking at neighboring tokens.
    pub fn is_trivia(&self) -> bool {
        matches!(
            *self,
            TokenKind::WHITESPACE | TokenKind::NEWLINE | TokenKind::COMMENT
        )
    }
}

/// Resolve a built-in kind to its display name.
///
/// Returns `None` for custom kinds; those are resolved through the
/// registry's custom token namespace instead.
pub fn built_in_name(kind: TokenKind) -> Option<&'static str> {
    let name = match kind {
        TokenKind::IDENT => "IDENT",
        TokenKind::KEYWORD => "KEYWORD",
        TokenKind::NUMBER => "NUMBER",
        TokenKind::STRING => "STRING",
        TokenKind::COMMENT => "COMMENT",
        TokenKind::WHITESPACE => "WHITESPACE",
        TokenKind::NEWLINE => "NEWLINE",
        TokenKind::BRACE_OPEN => "BRACE_OPEN",
        TokenKind::BRACE_CLOSE => "BRACE_CLOSE",
        TokenKind::BRACKET_OPEN => "BRACKET_OPEN",
        TokenKind::BRACKET_CLOSE => "BRACKET_CLOSE",
        TokenKind::PAREN_OPEN => "PAREN_OPEN",
        TokenKind::PAREN_CLOSE => "PAREN_CLOSE",
        TokenKind::COMMA => "COMMA",
        TokenKind::COLON => "COLON",
        TokenKind::SEMICOLON => "SEMICOLON",
        TokenKind::EQUALS => "EQUALS",
        TokenKind::MINUS => "MINUS",
        TokenKind::PLUS => "PLUS",
        TokenKind::LESS_THAN => "LESS_THAN",
        TokenKind::GREATER_THAN => "GREATER_THAN",
        TokenKind::DOT => "DOT",
        TokenKind::ERROR => "ERROR",
        _ => return None,
    };
    Some(name)
}

/// A single token: kind, source text, and byte span.
///
/// Tokens are owned values in a caller-owned `Vec<Token>`. The transformer
/// pipeline mutates that vector in place and never clones or retains it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }
}
