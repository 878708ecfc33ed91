//! Integration tests for the transformer pipeline
//!
//! These tests exercise the registry through the public API only: lexing a
//! source string, running the default pipeline, and checking the kinds the
//! passes assigned - including the cross-pass dependencies (later passes
//! reading kinds assigned by earlier ones).

use std::sync::{Arc, Mutex};

use tokfix::fixer::lexer::tokenize;
use tokfix::fixer::registry::TransformerRegistry;
use tokfix::fixer::testing::RecordingTransformer;
use tokfix::fixer::token::{Token, TokenKind};
use tokfix::fixer::transformer::{ApplyError, Transformer};
use tokfix::fixer::transformers::{array_bracket, map_brace, unary_minus};

/// Kind of the nth token with the given text
fn kind_of(tokens: &[Token], text: &str, occurrence: usize) -> TokenKind {
    tokens
        .iter()
        .filter(|t| t.text == text)
        .nth(occurrence)
        .unwrap()
        .kind
}

#[test]
fn test_default_pipeline_end_to_end() {
    let source = "let cfg = { retries: -3, tags: [\"a\", \"b\"] };\nprint(cfg.tags[0]);\n";
    let registry = TransformerRegistry::with_defaults();
    let mut tokens = tokenize(source);
    registry.transform(&mut tokens).unwrap();

    // map_brace: '{' opens a value position after '='
    assert_eq!(kind_of(&tokens, "{", 0), map_brace::MAP_BRACE_OPEN);
    assert_eq!(kind_of(&tokens, "}", 0), map_brace::MAP_BRACE_CLOSE);

    // array_bracket: the literal stays built-in, the subscript is custom
    assert_eq!(kind_of(&tokens, "[", 0), TokenKind::BRACKET_OPEN);
    assert_eq!(kind_of(&tokens, "[", 1), array_bracket::INDEX_BRACKET_OPEN);
    assert_eq!(kind_of(&tokens, "]", 0), TokenKind::BRACKET_CLOSE);
    assert_eq!(kind_of(&tokens, "]", 1), array_bracket::INDEX_BRACKET_CLOSE);

    // unary_minus: '-' after ':' begins an expression
    assert_eq!(kind_of(&tokens, "-", 0), unary_minus::UNARY_MINUS);
}

#[test]
fn test_failed_transform_reports_the_failing_pass() {
    let registry = TransformerRegistry::with_defaults();
    let mut tokens = tokenize("x = {");

    let err = registry.transform(&mut tokens).unwrap_err();
    assert_eq!(err.transformer, "map_brace");
}

#[test]
fn test_transform_empty_stream_with_defaults() {
    let registry = TransformerRegistry::with_defaults();
    let mut tokens = Vec::new();
    registry.transform(&mut tokens).unwrap();
    assert!(tokens.is_empty());
}

const PROBE_KIND: TokenKind = TokenKind(1100);

/// Assigns PROBE_KIND to every identifier token
struct Marker;

impl Transformer for Marker {
    fn name(&self) -> &str {
        "marker"
    }
    fn priority(&self) -> i32 {
        10
    }
    fn custom_tokens(&self) -> Vec<(TokenKind, &'static str)> {
        vec![(PROBE_KIND, "PROBE")]
    }
    fn apply(&self, tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        for token in tokens.iter_mut() {
            if token.kind == TokenKind::IDENT {
                token.kind = PROBE_KIND;
            }
        }
        Ok(())
    }
}

/// Counts PROBE_KIND tokens into a shared cell
struct Inspector {
    seen: Arc<Mutex<usize>>,
}

impl Transformer for Inspector {
    fn name(&self) -> &str {
        "inspector"
    }
    fn priority(&self) -> i32 {
        1
    }
    fn apply(&self, tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        let count = tokens.iter().filter(|t| t.kind == PROBE_KIND).count();
        *self
            .seen
            .lock()
            .map_err(|_| ApplyError::new("inspector", "probe cell poisoned"))? = count;
        Ok(())
    }
}

#[test]
fn test_later_pass_observes_earlier_custom_kinds() {
    let seen = Arc::new(Mutex::new(0));
    let mut registry = TransformerRegistry::new();
    registry
        .register(Box::new(Inspector {
            seen: Arc::clone(&seen),
        }))
        .unwrap();
    registry.register(Box::new(Marker)).unwrap();

    let mut tokens = tokenize("foo bar 1");
    registry.transform(&mut tokens).unwrap();

    // Marker (priority 10) ran before Inspector (priority 1) despite being
    // registered after it, so the inspector saw both marked identifiers
    assert_eq!(*seen.lock().unwrap(), 2);
}

#[test]
fn test_two_transforms_apply_in_identical_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut registry = TransformerRegistry::new();
    for (name, priority) in [("mid", 5), ("first", 9), ("last", -2)] {
        registry
            .register(Box::new(RecordingTransformer::new(
                name,
                priority,
                Arc::clone(&log),
            )))
            .unwrap();
    }

    let mut first = tokenize("a + b");
    let mut second = tokenize("c[0]");
    registry.transform(&mut first).unwrap();
    registry.transform(&mut second).unwrap();

    let observed = log.lock().unwrap();
    assert_eq!(observed[..3], observed[3..]);
    assert_eq!(observed[..3], ["first", "mid", "last"]);
}

#[test]
fn test_custom_token_metadata_readable_after_registration() {
    let mut registry = TransformerRegistry::new();
    registry.register(Box::new(Marker)).unwrap();

    assert!(registry.has_custom_token(PROBE_KIND));
    assert_eq!(registry.custom_token_name(PROBE_KIND).unwrap(), "PROBE");
    assert!(registry.custom_token_name(TokenKind(1101)).is_err());
}
