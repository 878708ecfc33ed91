//! Token stream rendering
//!
//! Read-only consumers of the registry's custom token metadata: a plain
//! text listing for terminals and a JSON dump for tooling. Both resolve
//! kind ids to display names through the registry, so custom kinds render
//! with the names their transformers declared.

use crate::fixer::registry::TransformerRegistry;
use crate::fixer::token::Token;
use serde::Serialize;
use std::fmt::Write;

/// One token as it appears in the JSON dump
#[derive(Debug, Serialize)]
pub struct TokenDump {
    pub kind: u16,
    pub name: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Render a token stream as one line per token:
/// `NAME "text" @ start..end`
pub fn render_tokens(tokens: &[Token], registry: &TransformerRegistry) -> String {
    let mut out = String::new();
    for token in tokens {
        let name = registry.token_display_name(token.kind);
        // writeln! to a String cannot fail
        let _ = writeln!(
            out,
            "{} {:?} @ {}..{}",
            name, token.text, token.span.start, token.span.end
        );
    }
    out
}

/// Serialize a token stream to pretty-printed JSON
pub fn tokens_to_json(
    tokens: &[Token],
    registry: &TransformerRegistry,
) -> Result<String, serde_json::Error> {
    let dumps: Vec<TokenDump> = tokens
        .iter()
        .map(|token| TokenDump {
            kind: token.kind.0,
            name: registry.token_display_name(token.kind),
            text: token.text.clone(),
            start: token.span.start,
            end: token.span.end,
        })
        .collect();
    serde_json::to_string_pretty(&dumps)
}
