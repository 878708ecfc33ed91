//! Map literal brace classification
//!
//! The raw lexer cannot tell a block `{` from a map literal `{`; both lex
//! as [TokenKind::BRACE_OPEN]. This pass reclassifies braces that open a
//! value position - after `=`, `(`, `,`, `:`, `[`, an operator, `return`,
//! or inside another map literal - as map delimiters, so that later passes
//! and downstream tools can treat the two uses differently.
//!
//! Runs first (highest priority) because several later passes key off the
//! map kinds it assigns.

use crate::fixer::token::{Token, TokenKind};
use crate::fixer::transformer::{ApplyError, Transformer};
use crate::fixer::transformers::prev_significant;

pub const MAP_BRACE_OPEN: TokenKind = TokenKind(1000);
pub const MAP_BRACE_CLOSE: TokenKind = TokenKind(1001);

/// Classifies `{`/`}` pairs as map literal delimiters
pub struct MapBraceClassifier;

impl Transformer for MapBraceClassifier {
    fn name(&self) -> &str {
        "map_brace"
    }

    fn description(&self) -> &str {
        "Classify '{'/'}' as map literal delimiters when the brace opens a value position"
    }

    fn priority(&self) -> i32 {
        30
    }

    fn custom_tokens(&self) -> Vec<(TokenKind, &'static str)> {
        vec![
            (MAP_BRACE_OPEN, "MAP_BRACE_OPEN"),
            (MAP_BRACE_CLOSE, "MAP_BRACE_CLOSE"),
        ]
    }

    fn apply(&self, tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        // Stack entry per open brace: whether it opened a map, and where
        let mut stack: Vec<(bool, usize)> = Vec::new();

        for index in 0..tokens.len() {
            match tokens[index].kind {
                TokenKind::BRACE_OPEN => {
                    let is_map = opens_value_position(tokens, index);
                    if is_map {
                        tokens[index].kind = MAP_BRACE_OPEN;
                    }
                    stack.push((is_map, tokens[index].span.start));
                }
                TokenKind::BRACE_CLOSE => {
                    // A stray '}' with no matching open stays a block close
                    if let Some((true, _)) = stack.pop() {
                        tokens[index].kind = MAP_BRACE_CLOSE;
                    }
                }
                _ => {}
            }
        }

        if let Some((_, start)) = stack.iter().find(|(is_map, _)| *is_map) {
            return Err(ApplyError::new(
                self.name(),
                format!("unclosed map literal brace at byte {start}"),
            ));
        }
        Ok(())
    }
}

/// Whether the brace at `index` sits in value position
fn opens_value_position(tokens: &[Token], index: usize) -> bool {
    let Some(prev) = prev_significant(tokens, index) else {
        // Start of stream: a top-level '{' is a block
        return false;
    };
    let prev = &tokens[prev];
    matches!(
        prev.kind,
        TokenKind::EQUALS
            | TokenKind::PAREN_OPEN
            | TokenKind::BRACKET_OPEN
            | TokenKind::COMMA
            | TokenKind::COLON
            | TokenKind::MINUS
            | TokenKind::PLUS
            | TokenKind::LESS_THAN
            | TokenKind::GREATER_THAN
            | MAP_BRACE_OPEN
    ) || (prev.kind == TokenKind::KEYWORD && prev.text == "return")
}
