//! Unary minus classification
//!
//! `-` lexes as one kind whether it negates (`-x`) or subtracts (`a - b`).
//! This pass marks the unary case: a `-` that begins an expression, i.e.
//! at the start of the stream or after an operator, separator, opening
//! delimiter, or keyword. The opening delimiters include the map and index
//! kinds assigned by the two earlier passes, so this transformer must run
//! after them.

use crate::fixer::token::{Token, TokenKind};
use crate::fixer::transformer::{ApplyError, Transformer};
use crate::fixer::transformers::array_bracket::INDEX_BRACKET_OPEN;
use crate::fixer::transformers::map_brace::MAP_BRACE_OPEN;
use crate::fixer::transformers::prev_significant;

pub const UNARY_MINUS: TokenKind = TokenKind(1020);

/// Classifies `-` as a unary negation operator
pub struct UnaryMinusClassifier;

impl Transformer for UnaryMinusClassifier {
    fn name(&self) -> &str {
        "unary_minus"
    }

    fn description(&self) -> &str {
        "Classify '-' as unary negation when it begins an expression"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn custom_tokens(&self) -> Vec<(TokenKind, &'static str)> {
        vec![(UNARY_MINUS, "UNARY_MINUS")]
    }

    fn apply(&self, tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        for index in 0..tokens.len() {
            if tokens[index].kind != TokenKind::MINUS {
                continue;
            }
            if begins_expression(tokens, index) {
                tokens[index].kind = UNARY_MINUS;
            }
        }
        Ok(())
    }
}

/// Whether the minus at `index` sits in prefix position
fn begins_expression(tokens: &[Token], index: usize) -> bool {
    let Some(prev) = prev_significant(tokens, index) else {
        return true;
    };
    matches!(
        tokens[prev].kind,
        TokenKind::KEYWORD
            | TokenKind::EQUALS
            | TokenKind::PLUS
            | TokenKind::MINUS
            | TokenKind::LESS_THAN
            | TokenKind::GREATER_THAN
            | TokenKind::COMMA
            | TokenKind::COLON
            | TokenKind::SEMICOLON
            | TokenKind::PAREN_OPEN
            | TokenKind::BRACKET_OPEN
            | TokenKind::BRACE_OPEN
            | MAP_BRACE_OPEN
            | INDEX_BRACKET_OPEN
            | UNARY_MINUS
    )
}
