//! The store: one data namespace and one list namespace for one scope.

use std::fmt;

use scopestate_core::Object;

use crate::data::DataNamespace;
use crate::error::Result;
use crate::list::ListNamespace;

/// Per-scope heterogeneous state.
///
/// Stages publish values with [`set_data`](ScopeState::set_data) and
/// [`add_to_list`](ScopeState::add_to_list); later stages read them back as
/// the stored type or any of its declared ancestors. Entries are never
/// updated or removed. Dropping the store drops every stored value.
///
/// The two namespaces are independent: the same name may hold a data value
/// and a list at the same time.
///
/// # Design Notes
///
/// - **Write-once data**: a second `set_data` for a name fails, whatever the
///   type.
/// - **Declared list type**: the first append for a name fixes the element
///   type, either the value's own type or the one named with
///   [`add_to_list_as`](ScopeState::add_to_list_as); later elements must be
///   is-a that type.
/// - **Borrowed reads**: reads return `&T` tied to `&self`, so nothing
///   can outlive the store or observe a concurrent write.
/// - **Teardown order**: unspecified across entries.
#[derive(Default)]
pub struct ScopeState {
    data: DataNamespace,
    lists: ListNamespace,
}

impl ScopeState {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Data Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Store `object` under `name` in the data namespace.
    ///
    /// Fails with `NameConflict` if `name` already holds a value; the
    /// existing value is kept and `object` is dropped.
    pub fn set_data<T: Object>(&mut self, name: &str, object: T) -> Result<()> {
        self.data.set(name, object)
    }

    /// Borrow the value under `name` as `T`.
    ///
    /// Fails with `UnknownName` if there is no value, `TypeMismatch` if the
    /// value is not a `T`.
    pub fn get_data<T: Object>(&self, name: &str) -> Result<&T> {
        self.data.get(name)
    }

    /// Whether `name` holds a value that is a `T`.
    pub fn has_data<T: Object>(&self, name: &str) -> bool {
        self.data.has::<T>(name)
    }

    /// Whether `name` holds a value of any type.
    pub fn has_data_with_name(&self, name: &str) -> bool {
        self.data.has_name(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append `object` to the list under `name`.
    ///
    /// The first append declares the list's element type as `T`. Later
    /// appends that are not a declared-type value fail with
    /// `ListTypeConflict` and leave the list unchanged.
    pub fn add_to_list<T: Object>(&mut self, name: &str, object: T) -> Result<()> {
        self.lists.add(name, object)
    }

    /// Append `object` to the list under `name`, declaring the element type
    /// as `L` rather than the value's own type if this is the first append.
    ///
    /// `object` must be an `L`. A derived value can open a list of its base
    /// type this way, so later base values are accepted. Fails with
    /// `ListTypeConflict` if `object` is not an `L` or not a value of the
    /// list's existing declared type.
    pub fn add_to_list_as<L: Object, T: Object>(&mut self, name: &str, object: T) -> Result<()> {
        self.lists.add_as::<L, T>(name, object)
    }

    /// Whether `name` has a list whose declared element type is a `T`.
    pub fn has_list<T: Object>(&self, name: &str) -> bool {
        self.lists.has::<T>(name)
    }

    /// Visit every element of the list under `name` as `T`, oldest first,
    /// until `visitor` returns `false`.
    ///
    /// Fails with `UnknownName` if there is no list, `TypeMismatch` if the
    /// declared element type is not a `T`.
    pub fn for_each_list_item<T, F>(&self, name: &str, visitor: F) -> Result<()>
    where
        T: Object,
        F: FnMut(&T) -> bool,
    {
        self.lists.for_each::<T, F>(name, visitor)
    }
}

impl fmt::Debug for ScopeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut data: Vec<_> = self.data.entries().collect();
        data.sort_unstable();
        let mut lists: Vec<_> = self.lists.entries().collect();
        lists.sort_unstable();

        f.debug_struct("ScopeState")
            .field("data", &data)
            .field("lists", &lists)
            .finish()
    }
}
