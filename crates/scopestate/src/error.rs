//! Error types for the store.

use std::fmt;

use thiserror::Error;

/// Which of the two independent namespaces an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Write-once, one value per name.
    Data,
    /// Append-only lists.
    List,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Data => f.write_str("data"),
            Namespace::List => f.write_str("list"),
        }
    }
}

/// Errors that can occur during store operations.
///
/// A failed write never changes the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// `set_data` for a name that already holds a value.
    #[error("set_data called twice with same name: {name}")]
    NameConflict { name: String },

    /// Lookup of a name with no entry in the namespace.
    #[error("{namespace} lookup for unknown name: {name}")]
    UnknownName { namespace: Namespace, name: String },

    /// The stored value (or list element type) is not a `requested`.
    #[error("{namespace} entry {name} of type {stored} cannot be coerced to {requested}")]
    TypeMismatch {
        namespace: Namespace,
        name: String,
        requested: &'static str,
        stored: &'static str,
    },

    /// `add_to_list` with a value that is not a `declared`.
    #[error("list {name} does not conform to {declared}: got {offered}")]
    ListTypeConflict {
        name: String,
        declared: &'static str,
        offered: &'static str,
    },
}

impl StateError {
    /// The name the failed operation referred to.
    pub fn name(&self) -> &str {
        match self {
            StateError::NameConflict { name }
            | StateError::UnknownName { name, .. }
            | StateError::TypeMismatch { name, .. }
            | StateError::ListTypeConflict { name, .. } => name,
        }
    }

    /// The namespace the failed operation ran against.
    pub fn namespace(&self) -> Namespace {
        match self {
            StateError::NameConflict { .. } => Namespace::Data,
            StateError::ListTypeConflict { .. } => Namespace::List,
            StateError::UnknownName { namespace, .. }
            | StateError::TypeMismatch { namespace, .. } => *namespace,
        }
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StateError>;
