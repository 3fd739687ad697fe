//! # ScopeState
//!
//! A per-scope (e.g. per-request) heterogeneous state store. Independently
//! written processing stages publish values of arbitrary types under string
//! names, and later stages read them back with the type checked at access
//! time.
//!
//! ## Overview
//!
//! A [`ScopeState`] holds two independent namespaces:
//!
//! - **Data**: one value per name, written once.
//! - **Lists**: an append-only list per name whose element type is fixed by
//!   the first append.
//!
//! Reads are covariant: a value stored as a derived type can be read as any
//! ancestor declared with [`impl_object!`].
//!
//! ## Usage
//!
//! ```rust
//! use scopestate::{impl_object, ScopeState, StateError};
//!
//! struct Peer { addr: String }
//! struct TlsPeer { peer: Peer, sni: String }
//!
//! impl_object!(Peer);
//! impl_object!(TlsPeer: Peer => peer);
//!
//! let mut state = ScopeState::new();
//! state
//!     .set_data("downstream", TlsPeer {
//!         peer: Peer { addr: "10.0.0.1:443".into() },
//!         sni: "example.com".into(),
//!     })
//!     .unwrap();
//!
//! // A later stage only knows about `Peer`.
//! let peer = state.get_data::<Peer>("downstream").unwrap();
//! assert_eq!(peer.addr, "10.0.0.1:443");
//!
//! // Names are write-once.
//! let err = state
//!     .set_data("downstream", Peer { addr: "other".into() })
//!     .unwrap_err();
//! assert!(matches!(err, StateError::NameConflict { .. }));
//!
//! // Lists grow by append and are visited in order.
//! state.add_to_list("hops", Peer { addr: "a".into() }).unwrap();
//! state.add_to_list("hops", Peer { addr: "b".into() }).unwrap();
//! let mut hops = Vec::new();
//! state
//!     .for_each_list_item::<Peer, _>("hops", |p| {
//!         hops.push(p.addr.clone());
//!         true
//!     })
//!     .unwrap();
//! assert_eq!(hops, ["a", "b"]);
//! ```
//!
//! ## Design Notes
//!
//! - **No central registry**: each type records its own ancestor chain in a
//!   [`TypeToken`]; is-a is chain membership.
//! - **No updates or deletes**: entries are facts established once per scope.
//! - **Not thread-safe**: one store per scope, owned by one caller.

pub mod data;
pub mod error;
pub mod list;
pub mod state;

// Re-export the core crate
pub use scopestate_core as core;

pub use data::DataNamespace;
pub use error::{Namespace, Result, StateError};
pub use list::ListNamespace;
pub use state::ScopeState;

pub use scopestate_core::{downcast, impl_object, Object, TypeKey, TypeToken};
