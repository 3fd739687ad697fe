//! Runtime type identities for stored objects.
//!
//! `Any` only answers exact-type questions. A [`TypeToken`] additionally
//! records the identity of every type a concrete type derives from, so that
//! is-a becomes a membership test over that recorded chain.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a single concrete type.
///
/// Equality and hashing use the [`TypeId`] only; the name is carried for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key of `T`.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's name as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A concrete type together with its ancestor chain.
///
/// Ancestors are ordered nearest first: for `C` deriving from `B` deriving
/// from `A`, the chain of `C` is `[B, A]`.
#[derive(Clone)]
pub struct TypeToken {
    key: TypeKey,
    ancestors: Vec<TypeKey>,
}

impl TypeToken {
    /// Token for a type with no ancestors.
    pub fn root<T: Any>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            ancestors: Vec::new(),
        }
    }

    /// Token for a type deriving directly from the type of `parent`.
    pub fn derived<T: Any>(parent: &TypeToken) -> Self {
        let mut ancestors = Vec::with_capacity(parent.ancestors.len() + 1);
        ancestors.push(parent.key);
        ancestors.extend_from_slice(&parent.ancestors);
        Self {
            key: TypeKey::of::<T>(),
            ancestors,
        }
    }

    /// Key of the concrete type.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Name of the concrete type.
    pub fn name(&self) -> &'static str {
        self.key.name
    }

    /// Recorded ancestors, nearest first.
    pub fn ancestors(&self) -> &[TypeKey] {
        &self.ancestors
    }

    /// The concrete type followed by its ancestors.
    pub fn chain(&self) -> impl Iterator<Item = TypeKey> + '_ {
        std::iter::once(self.key).chain(self.ancestors.iter().copied())
    }

    /// Whether this type equals `key` or descends from it.
    pub fn is_a(&self, key: TypeKey) -> bool {
        self.is_a_id(key.id)
    }

    /// Whether this type equals `T` or descends from it.
    pub fn is_a_type<T: Any>(&self) -> bool {
        self.is_a_id(TypeId::of::<T>())
    }

    /// Whether every value of this type is also a value of `other`.
    pub fn is_a_token(&self, other: &TypeToken) -> bool {
        self.is_a(other.key)
    }

    fn is_a_id(&self, id: TypeId) -> bool {
        self.key.id == id || self.ancestors.iter().any(|k| k.id == id)
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TypeToken {}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeToken")
            .field("type", &self.key.name)
            .field(
                "ancestors",
                &self.ancestors.iter().map(|k| k.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key.name)
    }
}
