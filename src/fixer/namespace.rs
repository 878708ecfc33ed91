//! Custom token namespace shared by all transformers
//!
//! Transformers introduce synthetic token kinds to mark context the raw
//! lexer cannot express. All of those kinds live in one process-wide
//! namespace so that two transformers can never claim the same kind id for
//! different purposes. The namespace only grows within a run; transformers
//! are registered once and their kinds are permanent for the registry's
//! lifetime, so there is no removal operation.

use crate::fixer::token::TokenKind;
use std::collections::HashMap;
use std::fmt;

/// Errors raised by namespace and registry bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A custom token kind id was declared twice. Always a configuration
    /// error in the transformer set, caught at registration time.
    DuplicateTokenKind {
        kind: TokenKind,
        name: String,
        existing: String,
    },
    /// Lookup of a kind id nothing has registered. Always a caller logic
    /// error, never expected in normal operation.
    UnknownTokenKind(TokenKind),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateTokenKind {
                kind,
                name,
                existing,
            } => write!(
                f,
                "custom token kind {} ('{}') is already registered as '{}'",
                kind.0, name, existing
            ),
            RegistryError::UnknownTokenKind(kind) => {
                write!(f, "unknown custom token kind {}", kind.0)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Collision-checked mapping from custom token kind ids to display names
#[derive(Debug, Default)]
pub struct CustomTokenNamespace {
    names: HashMap<TokenKind, String>,
}

impl CustomTokenNamespace {
    /// Create a new empty namespace
    pub fn new() -> Self {
        CustomTokenNamespace {
            names: HashMap::new(),
        }
    }

    /// Register a kind/name pair
    ///
    /// Fails with [RegistryError::DuplicateTokenKind] if the kind is already
    /// mapped, regardless of whether the name matches the existing entry.
    pub fn register(
        &mut self,
        kind: TokenKind,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if let Some(existing) = self.names.get(&kind) {
            return Err(RegistryError::DuplicateTokenKind {
                kind,
                name,
                existing: existing.clone(),
            });
        }
        self.names.insert(kind, name);
        Ok(())
    }

    /// Look up the display name of a registered kind
    pub fn lookup(&self, kind: TokenKind) -> Result<&str, RegistryError> {
        self.names
            .get(&kind)
            .map(|name| name.as_str())
            .ok_or(RegistryError::UnknownTokenKind(kind))
    }

    /// Check whether a kind is registered. Total, never fails.
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.names.contains_key(&kind)
    }

    /// All registered entries, sorted by kind id
    pub fn entries(&self) -> Vec<(TokenKind, &str)> {
        let mut entries: Vec<_> = self
            .names
            .iter()
            .map(|(kind, name)| (*kind, name.as_str()))
            .collect();
        entries.sort_by_key(|(kind, _)| *kind);
        entries
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the namespace has no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut namespace = CustomTokenNamespace::new();
        namespace.register(TokenKind(1000), "T_FOO").unwrap();

        assert!(namespace.contains(TokenKind(1000)));
        assert_eq!(namespace.lookup(TokenKind(1000)).unwrap(), "T_FOO");
    }

    #[test]
    fn test_lookup_unknown() {
        let namespace = CustomTokenNamespace::new();
        let result = namespace.lookup(TokenKind(1001));
        assert_eq!(
            result.unwrap_err(),
            RegistryError::UnknownTokenKind(TokenKind(1001))
        );
    }

    #[test]
    fn test_duplicate_rejected_different_name() {
        let mut namespace = CustomTokenNamespace::new();
        namespace.register(TokenKind(1000), "T_FOO").unwrap();

        let result = namespace.register(TokenKind(1000), "T_BAR");
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateTokenKind {
                kind: TokenKind(1000),
                name: "T_BAR".to_string(),
                existing: "T_FOO".to_string(),
            }
        );
        // The first mapping is untouched
        assert_eq!(namespace.lookup(TokenKind(1000)).unwrap(), "T_FOO");
    }

    #[test]
    fn test_duplicate_rejected_same_name() {
        let mut namespace = CustomTokenNamespace::new();
        namespace.register(TokenKind(1000), "T_FOO").unwrap();
        assert!(namespace.register(TokenKind(1000), "T_FOO").is_err());
        assert_eq!(namespace.len(), 1);
    }

    #[test]
    fn test_contains_is_total() {
        let namespace = CustomTokenNamespace::new();
        assert!(!namespace.contains(TokenKind(1000)));
    }

    #[test]
    fn test_entries_sorted() {
        let mut namespace = CustomTokenNamespace::new();
        namespace.register(TokenKind(1010), "T_B").unwrap();
        namespace.register(TokenKind(1000), "T_A").unwrap();
        namespace.register(TokenKind(1020), "T_C").unwrap();

        assert_eq!(
            namespace.entries(),
            vec![
                (TokenKind(1000), "T_A"),
                (TokenKind(1010), "T_B"),
                (TokenKind(1020), "T_C"),
            ]
        );
    }

    #[test]
    fn test_is_empty() {
        let mut namespace = CustomTokenNamespace::new();
        assert!(namespace.is_empty());
        namespace.register(TokenKind(1000), "T_FOO").unwrap();
        assert!(!namespace.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err1 = RegistryError::DuplicateTokenKind {
            kind: TokenKind(1000),
            name: "T_BAR".to_string(),
            existing: "T_FOO".to_string(),
        };
        assert_eq!(
            format!("{err1}"),
            "custom token kind 1000 ('T_BAR') is already registered as 'T_FOO'"
        );

        let err2 = RegistryError::UnknownTokenKind(TokenKind(1001));
        assert_eq!(format!("{err2}"), "unknown custom token kind 1001");
    }
}
