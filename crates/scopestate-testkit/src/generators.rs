//! Proptest generators for property-based testing.
//!
//! Scripts of store operations are generated over a small name pool so that
//! collisions are common, then replayed against a [`ScopeState`] and against
//! [`Model`], a plain description of what the store should contain.

use std::collections::HashMap;

use proptest::prelude::*;
use scopestate::{Result, ScopeState};

use crate::fixtures::{Counters, SimpleType, Tracked, Unrelated, A, B, C};

/// Which fixture type an operation stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Simple,
    Tracked,
    Unrelated,
    A,
    B,
    C,
}

impl Kind {
    /// Every kind, for exhaustive checks.
    pub const ALL: [Kind; 6] = [
        Kind::Simple,
        Kind::Tracked,
        Kind::Unrelated,
        Kind::A,
        Kind::B,
        Kind::C,
    ];

    /// Whether a value of this kind is-a `other`.
    pub fn is_a(self, other: Kind) -> bool {
        match self {
            Kind::C => matches!(other, Kind::C | Kind::B | Kind::A),
            Kind::B => matches!(other, Kind::B | Kind::A),
            _ => self == other,
        }
    }
}

/// A single store operation.
#[derive(Debug, Clone)]
pub enum Op {
    SetData { name: String, kind: Kind, value: i32 },
    AddToList { name: String, kind: Kind, value: i32 },
}

/// Generate a fixture kind.
pub fn kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::ALL.to_vec())
}

/// Generate a name from a small pool.
pub fn pooled_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "request_id", "peer"]).prop_map(String::from)
}

/// Generate an arbitrary name.
pub fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,23}".prop_map(String::from)
}

/// Generate one operation.
pub fn op() -> impl Strategy<Value = Op> {
    (any::<bool>(), pooled_name(), kind(), any::<i32>()).prop_map(|(data, name, kind, value)| {
        if data {
            Op::SetData { name, kind, value }
        } else {
            Op::AddToList { name, kind, value }
        }
    })
}

/// Generate a script of up to `max_len` operations.
pub fn script(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..=max_len)
}

/// Run `op` against `state`, building `Tracked` values from `counters`.
pub fn apply(state: &mut ScopeState, op: &Op, counters: &Counters) -> Result<()> {
    match op {
        Op::SetData { name, kind, value } => match kind {
            Kind::Simple => state.set_data(name, SimpleType(*value)),
            Kind::Tracked => state.set_data(name, counters.track(*value)),
            Kind::Unrelated => state.set_data(name, Unrelated),
            Kind::A => state.set_data(name, A::new(value.unsigned_abs())),
            Kind::B => state.set_data(name, B::new(value.unsigned_abs())),
            Kind::C => state.set_data(name, C::new(value.unsigned_abs())),
        },
        Op::AddToList { name, kind, value } => match kind {
            Kind::Simple => state.add_to_list(name, SimpleType(*value)),
            Kind::Tracked => state.add_to_list(name, counters.track(*value)),
            Kind::Unrelated => state.add_to_list(name, Unrelated),
            Kind::A => state.add_to_list(name, A::new(value.unsigned_abs())),
            Kind::B => state.add_to_list(name, B::new(value.unsigned_abs())),
            Kind::C => state.add_to_list(name, C::new(value.unsigned_abs())),
        },
    }
}

/// `has_data` for the type behind `kind`.
pub fn has_data_as(state: &ScopeState, name: &str, kind: Kind) -> bool {
    match kind {
        Kind::Simple => state.has_data::<SimpleType>(name),
        Kind::Tracked => state.has_data::<Tracked>(name),
        Kind::Unrelated => state.has_data::<Unrelated>(name),
        Kind::A => state.has_data::<A>(name),
        Kind::B => state.has_data::<B>(name),
        Kind::C => state.has_data::<C>(name),
    }
}

/// `has_list` for the type behind `kind`.
pub fn has_list_as(state: &ScopeState, name: &str, kind: Kind) -> bool {
    match kind {
        Kind::Simple => state.has_list::<SimpleType>(name),
        Kind::Tracked => state.has_list::<Tracked>(name),
        Kind::Unrelated => state.has_list::<Unrelated>(name),
        Kind::A => state.has_list::<A>(name),
        Kind::B => state.has_list::<B>(name),
        Kind::C => state.has_list::<C>(name),
    }
}

/// Expected store contents after a script.
#[derive(Debug, Default)]
pub struct Model {
    /// Name to stored kind.
    pub data: HashMap<String, Kind>,
    /// Name to declared kind and length.
    pub lists: HashMap<String, (Kind, usize)>,
}

impl Model {
    /// Apply `op`, returning whether the store should accept it.
    pub fn apply(&mut self, op: &Op) -> bool {
        match op {
            Op::SetData { name, kind, .. } => {
                if self.data.contains_key(name) {
                    false
                } else {
                    self.data.insert(name.clone(), *kind);
                    true
                }
            }
            Op::AddToList { name, kind, .. } => match self.lists.get_mut(name) {
                Some((declared, len)) => {
                    if kind.is_a(*declared) {
                        *len += 1;
                        true
                    } else {
                        false
                    }
                }
                None => {
                    self.lists.insert(name.clone(), (*kind, 1));
                    true
                }
            },
        }
    }
}

/// Count the elements of the list under `name` by visiting them as `declared`.
///
/// Fails as `for_each_list_item` does: unknown name or a type the list
/// cannot be read as.
pub fn list_len(state: &ScopeState, name: &str, declared: Kind) -> Result<usize> {
    let mut len = 0;
    visit_as(state, name, declared, || {
        len += 1;
        true
    })?;
    Ok(len)
}

fn visit_as<F>(state: &ScopeState, name: &str, kind: Kind, mut f: F) -> Result<()>
where
    F: FnMut() -> bool,
{
    match kind {
        Kind::Simple => state.for_each_list_item::<SimpleType, _>(name, |_| f()),
        Kind::Tracked => state.for_each_list_item::<Tracked, _>(name, |_| f()),
        Kind::Unrelated => state.for_each_list_item::<Unrelated, _>(name, |_| f()),
        Kind::A => state.for_each_list_item::<A, _>(name, |_| f()),
        Kind::B => state.for_each_list_item::<B, _>(name, |_| f()),
        Kind::C => state.for_each_list_item::<C, _>(name, |_| f()),
    }
}
