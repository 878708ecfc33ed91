//! Base tokenization for the tokfix pipeline
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.
//!
//! This is NOT a transformer - transformers operate on token streams.
//! This is the source that creates the initial token stream from a string.
//! The registry accepts any `Vec<Token>`, so callers with their own lexer
//! can bypass this module entirely.

use crate::fixer::token::{Token, TokenKind};
use logos::Logos;

/// Words that lex as [TokenKind::KEYWORD] instead of [TokenKind::IDENT].
const KEYWORDS: &[&str] = &["return", "if", "else", "while", "let", "fn"];

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,

    #[regex(r"//[^\n]*")]
    Comment,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token(".")]
    Dot,
}

fn kind_of(raw: RawToken, text: &str) -> TokenKind {
    match raw {
        RawToken::Ident => {
            if KEYWORDS.contains(&text) {
                TokenKind::KEYWORD
            } else {
                TokenKind::IDENT
            }
        }
        RawToken::Number => TokenKind::NUMBER,
        RawToken::Str => TokenKind::STRING,
        RawToken::Comment => TokenKind::COMMENT,
        RawToken::Whitespace => TokenKind::WHITESPACE,
        RawToken::Newline => TokenKind::NEWLINE,
        RawToken::BraceOpen => TokenKind::BRACE_OPEN,
        RawToken::BraceClose => TokenKind::BRACE_CLOSE,
        RawToken::BracketOpen => TokenKind::BRACKET_OPEN,
        RawToken::BracketClose => TokenKind::BRACKET_CLOSE,
        RawToken::ParenOpen => TokenKind::PAREN_OPEN,
        RawToken::ParenClose => TokenKind::PAREN_CLOSE,
        RawToken::Comma => TokenKind::COMMA,
        RawToken::Colon => TokenKind::COLON,
        RawToken::Semicolon => TokenKind::SEMICOLON,
        RawToken::Equals => TokenKind::EQUALS,
        RawToken::Minus => TokenKind::MINUS,
        RawToken::Plus => TokenKind::PLUS,
        RawToken::LessThan => TokenKind::LESS_THAN,
        RawToken::GreaterThan => TokenKind::GREATER_THAN,
        RawToken::Dot => TokenKind::DOT,
    }
}

/// Tokenize source code with location information
///
/// This function performs raw tokenization using the logos lexer, returning
/// tokens carrying their source text and byte spans. Bytes the lexer cannot
/// match become [TokenKind::ERROR] tokens rather than being dropped, so the
/// stream always covers the whole input.
///
/// Transformers operate on the token stream produced by this function; they
/// never see source text directly.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let text = lexer.slice();
        let kind = match result {
            Ok(raw) => kind_of(raw, text),
            Err(()) => TokenKind::ERROR,
        };
        tokens.push(Token::new(kind, text, lexer.span()));
    }

    tokens
}
