//! # tokfix
//!
//! A token-level fixer for brace-style source code.
//!
//! The crate tokenizes source text into a flat token stream and then runs a
//! pipeline of transformers over it. Each transformer reclassifies tokens in
//! place, optionally introducing custom token kinds to distinguish
//! contextually different uses of an ambiguous symbol (for example `{` as a
//! block delimiter versus a map literal). Transformers run in descending
//! priority order, so later passes can rely on the kinds assigned by earlier
//! ones.
//!
//! Entry points live in the [fixer] module:
//! - [fixer::lexer::tokenize] produces the initial token stream
//! - [fixer::registry::TransformerRegistry] owns the transformers and the
//!   custom token namespace, and drives the pipeline via `transform`

pub mod fixer;
