//! Test fixtures and helpers.
//!
//! Value types for exercising a [`ScopeState`](scopestate::ScopeState):
//! an instrumented value, a plain value, and a three-level hierarchy.

use std::cell::Cell;
use std::rc::Rc;

use scopestate::impl_object;

/// Shared access and drop counters for [`Tracked`] values.
#[derive(Debug, Clone, Default)]
pub struct Counters {
    accesses: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl Counters {
    /// Fresh counters at `(0, 0)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value that reports to these counters.
    pub fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            counters: Some(self.clone()),
        }
    }

    /// Number of [`Tracked::access`] calls.
    pub fn accesses(&self) -> usize {
        self.accesses.get()
    }

    /// Number of drops.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// `(accesses, drops)`.
    pub fn snapshot(&self) -> (usize, usize) {
        (self.accesses(), self.drops())
    }
}

/// A value that counts reads and drops.
#[derive(Debug)]
pub struct Tracked {
    value: i32,
    counters: Option<Counters>,
}

impl Tracked {
    /// A tracked value with no counters attached.
    pub fn untracked(value: i32) -> Self {
        Self {
            value,
            counters: None,
        }
    }

    /// Read the value, bumping the access counter.
    pub fn access(&self) -> i32 {
        if let Some(counters) = &self.counters {
            counters.accesses.set(counters.accesses.get() + 1);
        }
        self.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(counters) = &self.counters {
            counters.drops.set(counters.drops.get() + 1);
        }
    }
}

impl_object!(Tracked);

/// A plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleType(pub i32);

impl SimpleType {
    /// The wrapped value.
    pub fn access(&self) -> i32 {
        self.0
    }
}

impl_object!(SimpleType);

/// A type related to nothing else in the fixtures.
#[derive(Debug, Default)]
pub struct Unrelated;

impl_object!(Unrelated);

/// Root of the `A <- B <- C` hierarchy.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct A {
    pub id: u32,
}

/// Derives from [`A`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct B {
    pub a: A,
}

/// Derives from [`B`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct C {
    pub b: B,
}

impl_object!(A);
impl_object!(B: A => a);
impl_object!(C: B => b);

impl A {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl B {
    pub fn new(id: u32) -> Self {
        Self { a: A::new(id) }
    }
}

impl C {
    pub fn new(id: u32) -> Self {
        Self { b: B::new(id) }
    }
}
