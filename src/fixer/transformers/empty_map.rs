//! Empty map literal marking
//!
//! Re-marks an adjacent map open/close pair (only trivia between them) with
//! dedicated empty-map kinds, so downstream tools can special-case `{}`
//! without re-deriving adjacency. Reads the kinds assigned by the map_brace
//! pass and therefore runs after it; the negative priority puts it at the
//! very end of the default pipeline.

use crate::fixer::token::{Token, TokenKind};
use crate::fixer::transformer::{ApplyError, Transformer};
use crate::fixer::transformers::map_brace::{MAP_BRACE_CLOSE, MAP_BRACE_OPEN};
use crate::fixer::transformers::next_significant;

pub const EMPTY_MAP_OPEN: TokenKind = TokenKind(1030);
pub const EMPTY_MAP_CLOSE: TokenKind = TokenKind(1031);

/// Marks `{}` map literals with empty-map kinds
pub struct EmptyMapMarker;

impl Transformer for EmptyMapMarker {
    fn name(&self) -> &str {
        "empty_map"
    }

    fn description(&self) -> &str {
        "Mark adjacent map literal delimiters as an empty map"
    }

    fn priority(&self) -> i32 {
        -10
    }

    fn custom_tokens(&self) -> Vec<(TokenKind, &'static str)> {
        vec![
            (EMPTY_MAP_OPEN, "EMPTY_MAP_OPEN"),
            (EMPTY_MAP_CLOSE, "EMPTY_MAP_CLOSE"),
        ]
    }

    fn apply(&self, tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        for index in 0..tokens.len() {
            if tokens[index].kind != MAP_BRACE_OPEN {
                continue;
            }
            if let Some(close) = next_significant(tokens, index) {
                if tokens[close].kind == MAP_BRACE_CLOSE {
                    tokens[index].kind = EMPTY_MAP_OPEN;
                    tokens[close].kind = EMPTY_MAP_CLOSE;
                }
            }
        }
        Ok(())
    }
}
