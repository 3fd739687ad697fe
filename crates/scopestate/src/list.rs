//! The list namespace: append-only sequences with a declared element type.

use std::collections::HashMap;

use scopestate_core::{downcast, Object, TypeToken};
use tracing::{debug, trace};

use crate::error::{Namespace, Result, StateError};

struct ListEntry {
    /// Fixed by the first append.
    declared: &'static TypeToken,
    items: Vec<Box<dyn Object>>,
}

/// Name to ordered, append-only list of owned values.
#[derive(Default)]
pub struct ListNamespace {
    entries: HashMap<String, ListEntry>,
}

impl ListNamespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `object` to the list under `name`.
    ///
    /// The first append for a name declares the list's element type as `T`.
    /// Later appends must be is-a that declared type or fail with
    /// [`StateError::ListTypeConflict`], leaving the list unchanged.
    pub fn add<T: Object>(&mut self, name: &str, object: T) -> Result<()> {
        self.add_as::<T, T>(name, object)
    }

    /// Append `object` to the list under `name`, declaring the element type
    /// as `L` if this is the first append.
    ///
    /// `object` must be is-a `L`; once the list exists it must also be is-a
    /// the list's declared type. Either failure is a
    /// [`StateError::ListTypeConflict`] and leaves the list unchanged.
    pub fn add_as<L: Object, T: Object>(&mut self, name: &str, object: T) -> Result<()> {
        let offered = T::type_token();
        let requested = L::type_token();

        let declared = match self.entries.get(name) {
            Some(list) => list.declared,
            None => requested,
        };
        if !offered.is_a_token(requested) || !offered.is_a_token(declared) {
            let declared = if offered.is_a_token(requested) {
                declared
            } else {
                requested
            };
            debug!(
                name,
                declared = declared.name(),
                offered = offered.name(),
                "rejecting list element of incompatible type"
            );
            return Err(StateError::ListTypeConflict {
                name: name.to_owned(),
                declared: declared.name(),
                offered: offered.name(),
            });
        }

        match self.entries.get_mut(name) {
            Some(list) => {
                list.items.push(Box::new(object));
                trace!(name, len = list.items.len(), "list element appended");
            }
            None => {
                trace!(name, declared = requested.name(), "list created");
                self.entries.insert(
                    name.to_owned(),
                    ListEntry {
                        declared: requested,
                        items: vec![Box::new(object)],
                    },
                );
            }
        }
        Ok(())
    }

    /// Whether `name` has a list whose declared type is-a `T`.
    pub fn has<T: Object>(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|list| list.declared.is_a_type::<T>())
    }

    /// Visit each element of the list under `name` as `T`, in insertion order.
    ///
    /// The visitor returns `true` to continue and `false` to stop after the
    /// current element. Stopping early is not an error.
    pub fn for_each<T, F>(&self, name: &str, mut visitor: F) -> Result<()>
    where
        T: Object,
        F: FnMut(&T) -> bool,
    {
        let Some(list) = self.entries.get(name) else {
            debug!(name, "for_each_list_item for unknown name");
            return Err(StateError::UnknownName {
                namespace: Namespace::List,
                name: name.to_owned(),
            });
        };

        let mismatch = || {
            let requested = T::type_token().name();
            debug!(name, declared = list.declared.name(), requested, "list type mismatch");
            StateError::TypeMismatch {
                namespace: Namespace::List,
                name: name.to_owned(),
                requested,
                stored: list.declared.name(),
            }
        };

        if !list.declared.is_a_type::<T>() {
            return Err(mismatch());
        }

        for item in &list.items {
            // An element whose view disagrees with its token is reported the
            // same way as a declared-type mismatch.
            let value = downcast::<T>(item.as_ref()).ok_or_else(mismatch)?;
            if !visitor(value) {
                break;
            }
        }
        Ok(())
    }

    /// Number of elements in the list under `name`, if it exists.
    pub fn len_of(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|list| list.items.len())
    }

    /// Number of lists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no list has been created.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names, declared type names and lengths, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(name, list)| (name.as_str(), list.declared.name(), list.items.len()))
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
    struct Base {
        id: u32,
    }
    #[derive(Debug)]
    struct Derived {
        base: Base,
    }

    impl_object!(Simple);
    impl_object!(Other);
    impl_object!(Base);
    impl_object!(Derived: Base => base);

    fn collect(lists: &ListNamespace, name: &str) -> Vec<i32> {
        let mut seen = Vec::new();
        lists
            .for_each::<Simple, _>(name, |s| {
                seen.push(s.0);
                true
            })
            .unwrap();
        seen
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut lists = ListNamespace::new();
        for i in 0..5 {
            lists.add("numbers", Simple(i)).unwrap();
        }
        assert_eq!(collect(&lists, "numbers"), vec![0, 1, 2, 3, 4]);
        assert_eq!(lists.len_of("numbers"), Some(5));
    }

    #[test]
    fn test_incompatible_add_leaves_list_unchanged() {
        let mut lists = ListNamespace::new();
        lists.add("test_1", Simple(1)).unwrap();

        let err = lists.add("test_1", Other).unwrap_err();
        assert!(matches!(err, StateError::ListTypeConflict { .. }));
        assert_eq!(lists.len_of("test_1"), Some(1));
    }

    #[test]
    fn test_derived_elements_join_base_list() {
        let mut lists = ListNamespace::new();
        lists.add("bases", Base { id: 1 }).unwrap();
        lists
            .add(
                "bases",
                Derived {
                    base: Base { id: 2 },
                },
            )
            .unwrap();

        let mut ids = Vec::new();
        lists
            .for_each::<Base, _>("bases", |b| {
                ids.push(b.id);
                true
            })
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_base_elements_rejected_by_derived_list() {
        let mut lists = ListNamespace::new();
        lists
            .add(
                "derived",
                Derived {
                    base: Base { id: 1 },
                },
            )
            .unwrap();

        assert!(lists.add("derived", Base { id: 2 }).is_err());
        assert_eq!(lists.len_of("derived"), Some(1));
    }

    #[test]
    fn test_for_each_stops_on_false() {
        let mut lists = ListNamespace::new();
        for i in 0..4 {
            lists.add("numbers", Simple(i)).unwrap();
        }

        let mut visited = 0;
        lists
            .for_each::<Simple, _>("numbers", |_| {
                visited += 1;
                visited < 2
            })
            .unwrap();
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_for_each_errors() {
        let mut lists = ListNamespace::new();
        lists.add("test_name", Simple(5)).unwrap();

        let err = lists
            .for_each::<Simple, _>("missing", |_| true)
            .unwrap_err();
        assert!(matches!(
            err,
            StateError::UnknownName {
                namespace: Namespace::List,
                ..
            }
        ));

        let mut called = false;
        let err = lists
            .for_each::<Other, _>("test_name", |_| {
                called = true;
                true
            })
            .unwrap_err();
        assert!(matches!(
            err,
            StateError::TypeMismatch {
                namespace: Namespace::List,
                ..
            }
        ));
        assert!(!called);
    }

    #[test]
    fn test_has_uses_declared_type() {
        let mut lists = ListNamespace::new();
        lists
            .add(
                "derived",
                Derived {
                    base: Base { id: 1 },
                },
            )
            .unwrap();

        assert!(lists.has::<Derived>("derived"));
        assert!(lists.has::<Base>("derived"));
        assert!(!lists.has::<Other>("derived"));
        assert!(!lists.has::<Base>("missing"));
    }

    #[test]
    fn test_add_as_declares_base_for_derived_first_element() {
        let mut lists = ListNamespace::new();
        lists
            .add_as::<Base, _>(
                "hops",
                Derived {
                    base: Base { id: 1 },
                },
            )
            .unwrap();
        lists.add("hops", Base { id: 2 }).unwrap();

        assert!(lists.has::<Base>("hops"));
        assert!(!lists.has::<Derived>("hops"));

        let mut ids = Vec::new();
        lists
            .for_each::<Base, _>("hops", |b| {
                ids.push(b.id);
                true
            })
            .unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_add_as_rejects_value_not_of_requested_type() {
        let mut lists = ListNamespace::new();
        let err = lists.add_as::<Derived, _>("hops", Base { id: 1 }).unwrap_err();
        assert!(matches!(err, StateError::ListTypeConflict { .. }));
        assert_eq!(lists.len_of("hops"), None);

        lists.add("numbers", Simple(1)).unwrap();
        let err = lists.add_as::<Base, _>("numbers", Base { id: 2 }).unwrap_err();
        match err {
            StateError::ListTypeConflict { declared, .. } => {
                assert!(declared.ends_with("Simple"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(lists.len_of("numbers"), Some(1));
    }

    #[test]
    fn test_add_as_keeps_existing_declared_type() {
        let mut lists = ListNamespace::new();
        lists.add_as::<Base, _>("hops", Base { id: 1 }).unwrap();
        lists
            .add_as::<Derived, _>(
                "hops",
                Derived {
                    base: Base { id: 2 },
                },
            )
            .unwrap();

        assert!(lists.has::<Base>("hops"));
        assert!(!lists.has::<Derived>("hops"));
        assert_eq!(lists.len_of("hops"), Some(2));
    }
}
