//! # ScopeState Testkit
//!
//! Testing utilities for ScopeState.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: value types for exercising a store, including an
//!   instrumented [`Tracked`] value and the `A <- B <- C` hierarchy
//! - **Generators**: Proptest strategies for operation scripts, plus a
//!   [`Model`] to check them against
//!
//! ## Test Fixtures
//!
//! ```rust
//! use scopestate::ScopeState;
//! use scopestate_testkit::fixtures::{Counters, A, C};
//!
//! let counters = Counters::new();
//! let mut state = ScopeState::new();
//! state.set_data("tracked", counters.track(5)).unwrap();
//! state.set_data("leaf", C::new(1)).unwrap();
//!
//! assert!(state.has_data::<A>("leaf"));
//! drop(state);
//! assert_eq!(counters.snapshot(), (0, 1));
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use scopestate::ScopeState;
//! use scopestate_testkit::generators::{apply, script, Model};
//! use scopestate_testkit::fixtures::Counters;
//!
//! proptest! {
//!     #[test]
//!     fn store_matches_model(ops in script(32)) {
//!         let counters = Counters::new();
//!         let mut state = ScopeState::new();
//!         let mut model = Model::default();
//!         for op in &ops {
//!             prop_assert_eq!(apply(&mut state, op, &counters).is_ok(), model.apply(op));
//!         }
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{Counters, SimpleType, Tracked, Unrelated, A, B, C};
pub use generators::{apply, script, Kind, Model, Op};
