//! Testing utilities shared by unit and integration tests
//!
//! Provides token factories and a small set of probe transformers:
//! - [RecordingTransformer] appends its name to a shared log when applied,
//!   for asserting execution order
//! - [DeclaringTransformer] is a no-op pass with a configurable custom
//!   token declaration, for exercising namespace registration
//! - [FailingTransformer] always fails, for exercising pipeline abort
//!
//! These types are not test-gated because integration tests in `tests/`
//! consume them through the public API.

use crate::fixer::token::{Token, TokenKind};
use crate::fixer::transformer::{ApplyError, Transformer};
use std::sync::{Arc, Mutex};

/// Shorthand for a token stream in test assertions
pub type Tokens = Vec<Token>;

/// Build a token with explicit span bounds
pub fn mk_token(kind: TokenKind, text: &str, start: usize, end: usize) -> Token {
    Token::new(kind, text, start..end)
}

/// Probe transformer that records each `apply` call in a shared log
pub struct RecordingTransformer {
    name: &'static str,
    priority: i32,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl RecordingTransformer {
    pub fn new(name: &'static str, priority: i32, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
        RecordingTransformer {
            name,
            priority,
            log,
        }
    }
}

impl Transformer for RecordingTransformer {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn apply(&self, _tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        self.log
            .lock()
            .map_err(|_| ApplyError::new(self.name, "probe log poisoned"))?
            .push(self.name);
        Ok(())
    }
}

/// No-op transformer with a configurable custom token declaration
pub struct DeclaringTransformer {
    name: &'static str,
    priority: i32,
    declared: Vec<(TokenKind, &'static str)>,
}

impl DeclaringTransformer {
    pub fn new(
        name: &'static str,
        priority: i32,
        declared: Vec<(TokenKind, &'static str)>,
    ) -> Self {
        DeclaringTransformer {
            name,
            priority,
            declared,
        }
    }
}

impl Transformer for DeclaringTransformer {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn custom_tokens(&self) -> Vec<(TokenKind, &'static str)> {
        self.declared.clone()
    }

    fn apply(&self, _tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        Ok(())
    }
}

/// Transformer whose `apply` always fails
pub struct FailingTransformer {
    name: &'static str,
    priority: i32,
}

impl FailingTransformer {
    pub fn new(name: &'static str, priority: i32) -> Self {
        FailingTransformer { name, priority }
    }
}

impl Transformer for FailingTransformer {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn apply(&self, _tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        Err(ApplyError::new(self.name, "probe failure"))
    }
}
