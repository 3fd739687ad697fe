//! The data namespace: one write-once value per name.

use std::collections::HashMap;

use scopestate_core::{downcast, Object, TypeToken};
use tracing::{debug, trace};

use crate::error::{Namespace, Result, StateError};

struct DataEntry {
    token: &'static TypeToken,
    object: Box<dyn Object>,
}

/// Name to single owned value.
///
/// The first successful [`set`](DataNamespace::set) for a name is final.
#[derive(Default)]
pub struct DataNamespace {
    entries: HashMap<String, DataEntry>,
}

impl DataNamespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `object` under `name`.
    ///
    /// Fails with [`StateError::NameConflict`] if the name is taken, whatever
    /// the stored type; `object` is dropped and the existing entry is kept.
    pub fn set<T: Object>(&mut self, name: &str, object: T) -> Result<()> {
        let token = T::type_token();

        if let Some(existing) = self.entries.get(name) {
            debug!(
                name,
                stored = existing.token.name(),
                offered = token.name(),
                "rejecting second set_data for name"
            );
            return Err(StateError::NameConflict {
                name: name.to_owned(),
            });
        }

        trace!(name, type_name = token.name(), "data entry created");
        self.entries.insert(
            name.to_owned(),
            DataEntry {
                token,
                object: Box::new(object),
            },
        );
        Ok(())
    }

    /// Whether `name` holds a value that is-a `T`.
    pub fn has<T: Object>(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|entry| entry.token.is_a_type::<T>())
    }

    /// Whether `name` holds any value.
    pub fn has_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Borrow the value under `name` viewed as `T`.
    pub fn get<T: Object>(&self, name: &str) -> Result<&T> {
        let Some(entry) = self.entries.get(name) else {
            debug!(name, "get_data for unknown name");
            return Err(StateError::UnknownName {
                namespace: Namespace::Data,
                name: name.to_owned(),
            });
        };

        let found = if entry.token.is_a_type::<T>() {
            downcast::<T>(entry.object.as_ref())
        } else {
            None
        };

        found.ok_or_else(|| {
            let requested = T::type_token().name();
            debug!(name, stored = entry.token.name(), requested, "get_data type mismatch");
            StateError::TypeMismatch {
                namespace: Namespace::Data,
                name: name.to_owned(),
                requested,
                stored: entry.token.name(),
            }
        })
    }

    /// Number of names with a value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no name has been set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names and stored type names, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.token.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scopestate_core::impl_object;

    #[derive(Debug)]
    struct Simple(i32);
    #[derive(Debug)]
    struct Other;
    #[derive(Debug)]
    struct Parent {
        id: u32,
    }
    #[derive(Debug)]
    struct Child {
        parent: Parent,
    }

    impl_object!(Simple);
    impl_object!(Other);
    impl_object!(Parent);
    impl_object!(Child: Parent => parent);

    #[test]
    fn test_set_and_get() {
        let mut data = DataNamespace::new();
        data.set("test_1", Simple(1)).unwrap();
        data.set("test_2", Simple(2)).unwrap();

        assert_eq!(data.get::<Simple>("test_1").unwrap().0, 1);
        assert_eq!(data.get::<Simple>("test_2").unwrap().0, 2);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_second_set_keeps_first_value() {
        let mut data = DataNamespace::new();
        data.set("test_1", Simple(1)).unwrap();

        let err = data.set("test_1", Simple(2)).unwrap_err();
        assert_eq!(
            err,
            StateError::NameConflict {
                name: "test_1".into()
            }
        );

        let err = data.set("test_1", Other).unwrap_err();
        assert!(matches!(err, StateError::NameConflict { .. }));

        assert_eq!(data.get::<Simple>("test_1").unwrap().0, 1);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_get_unknown_name() {
        let data = DataNamespace::new();
        let err = data.get::<Simple>("test_1").unwrap_err();
        assert!(matches!(
            err,
            StateError::UnknownName {
                namespace: Namespace::Data,
                ..
            }
        ));
    }

    #[test]
    fn test_get_wrong_type() {
        let mut data = DataNamespace::new();
        data.set("test_name", Simple(5)).unwrap();

        let err = data.get::<Other>("test_name").unwrap_err();
        match err {
            StateError::TypeMismatch {
                name,
                requested,
                stored,
                ..
            } => {
                assert_eq!(name, "test_name");
                assert!(requested.ends_with("Other"));
                assert!(stored.ends_with("Simple"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_as_ancestor() {
        let mut data = DataNamespace::new();
        let child = Child {
            parent: Parent { id: 7 },
        };
        data.set("child", child).unwrap();

        assert_eq!(data.get::<Parent>("child").unwrap().id, 7);
        assert_eq!(data.get::<Child>("child").unwrap().parent.id, 7);

        data.set("parent", Parent { id: 1 }).unwrap();
        assert!(data.get::<Child>("parent").is_err());
    }

    #[test]
    fn test_has_checks_type_and_presence() {
        let mut data = DataNamespace::new();
        data.set("test_1", Simple(1)).unwrap();

        assert!(data.has::<Simple>("test_1"));
        assert!(!data.has::<Simple>("test_2"));
        assert!(!data.has::<Other>("test_1"));
        assert!(data.has_name("test_1"));
        assert!(!data.has_name("test_2"));
    }
}
