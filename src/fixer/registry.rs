//! Transformer registry and pipeline orchestration
//!
//! The registry owns the set of registered transformers together with the
//! custom token namespace they share. It exposes a deterministic,
//! priority-ordered view of the transformers and a single `transform` entry
//! point that runs every pass in order over one mutable token stream.
//!
//! Two invariants live here:
//! - execution order: transformers run in descending priority, ties broken
//!   by registration order, so later passes can depend on kinds assigned by
//!   earlier ones
//! - namespace integrity: a transformer whose declared custom kinds collide
//!   with anything already registered is rejected at registration time,
//!   before it contributes a single namespace entry

use crate::fixer::namespace::{CustomTokenNamespace, RegistryError};
use crate::fixer::token::{built_in_name, Token, TokenKind};
use crate::fixer::transformer::{ApplyError, Transformer};
use crate::fixer::transformers;
use once_cell::sync::Lazy;
use std::cmp::Reverse;
use std::sync::Mutex;

/// Registry of token transformers
///
/// Construct one explicitly with [TransformerRegistry::new] or
/// [TransformerRegistry::with_defaults] and pass it by reference to whatever
/// needs it. Registration is expected to finish before the first `transform`
/// call; nothing enforces that, but a transformer registered between
/// `transform` calls only affects subsequent calls.
pub struct TransformerRegistry {
    transformers: Vec<Box<dyn Transformer>>,
    namespace: CustomTokenNamespace,
}

impl TransformerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TransformerRegistry {
            transformers: Vec::new(),
            namespace: CustomTokenNamespace::new(),
        }
    }

    /// Create a registry with the built-in transformers registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for transformer in transformers::built_in() {
            registry
                .register(transformer)
                .expect("built-in transformers declare colliding custom token kinds");
        }
        registry
    }

    /// Register a transformer
    ///
    /// Merges the transformer's declared custom token kinds into the shared
    /// namespace. Registration is all-or-nothing: every declared pair is
    /// validated against the namespace, and against the transformer's own
    /// earlier declarations, before any of them is committed. On
    /// [RegistryError::DuplicateTokenKind] the namespace is unchanged and
    /// the transformer is not added.
    pub fn register(&mut self, transformer: Box<dyn Transformer>) -> Result<(), RegistryError> {
        let declared = transformer.custom_tokens();

        for (index, (kind, name)) in declared.iter().enumerate() {
            if self.namespace.contains(*kind) {
                let existing = self.namespace.lookup(*kind)?.to_string();
                return Err(RegistryError::DuplicateTokenKind {
                    kind: *kind,
                    name: (*name).to_string(),
                    existing,
                });
            }
            if let Some((_, first)) = declared[..index].iter().find(|(other, _)| other == kind) {
                return Err(RegistryError::DuplicateTokenKind {
                    kind: *kind,
                    name: (*name).to_string(),
                    existing: (*first).to_string(),
                });
            }
        }

        for (kind, name) in declared {
            self.namespace.register(kind, name)?;
        }
        self.transformers.push(transformer);
        Ok(())
    }

    /// All registered transformers in execution order
    ///
    /// Sorted by descending priority, ties broken by registration order
    /// (stable sort). Recomputed on every call rather than cached, so the
    /// ordering contract holds even for transformers with mutable
    /// priorities.
    pub fn ordered_transformers(&self) -> Vec<&dyn Transformer> {
        let mut ordered: Vec<&dyn Transformer> =
            self.transformers.iter().map(|t| t.as_ref()).collect();
        ordered.sort_by_key(|t| Reverse(t.priority()));
        ordered
    }

    /// Run every registered transformer over the token stream
    ///
    /// The execution order is computed once, then each pass runs
    /// sequentially on the same stream - each transformer sees the
    /// cumulative effect of all higher-priority transformers before it.
    /// A failing pass aborts the rest of the pipeline and leaves the stream
    /// partially transformed; callers must discard it.
    pub fn transform(&self, tokens: &mut Vec<Token>) -> Result<(), ApplyError> {
        for transformer in self.ordered_transformers() {
            transformer.apply(tokens)?;
        }
        Ok(())
    }

    /// Display name of a registered custom token kind
    pub fn custom_token_name(&self, kind: TokenKind) -> Result<&str, RegistryError> {
        self.namespace.lookup(kind)
    }

    /// Check whether a custom token kind is registered
    pub fn has_custom_token(&self, kind: TokenKind) -> bool {
        self.namespace.contains(kind)
    }

    /// Resolve any kind to a display name: custom kinds through the
    /// namespace, then built-in kinds, then a numeric fallback
    pub fn token_display_name(&self, kind: TokenKind) -> String {
        if let Ok(name) = self.namespace.lookup(kind) {
            return name.to_string();
        }
        match built_in_name(kind) {
            Some(name) => name.to_string(),
            None => format!("UNKNOWN({})", kind.0),
        }
    }

    /// The shared custom token namespace
    pub fn namespace(&self) -> &CustomTokenNamespace {
        &self.namespace
    }

    /// Number of registered transformers
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// Whether no transformers are registered
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl Default for TransformerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static SHARED: Lazy<Mutex<TransformerRegistry>> =
    Lazy::new(|| Mutex::new(TransformerRegistry::with_defaults()));

/// Process-wide shared registry with the built-in transformers
///
/// Built lazily on first access; `Lazy` guarantees the registry is
/// constructed and its built-ins registered exactly once even under
/// concurrent first access. Prefer an explicitly constructed
/// [TransformerRegistry] owned by the application; this accessor exists for
/// tools that want one ambient instance.
pub fn shared() -> &'static Mutex<TransformerRegistry> {
    &SHARED
}
