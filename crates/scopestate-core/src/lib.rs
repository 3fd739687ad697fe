//! # ScopeState Core
//!
//! The Object capability and runtime type tokens that the ScopeState store is
//! built on.
//!
//! This crate contains no storage. It answers one question: given a value of
//! some type defined far away, is it a `T` for a requested `T`, and if so,
//! where is the `T` inside it?
//!
//! ## Key Types
//!
//! - [`Object`] - Implemented by every storable value
//! - [`TypeToken`] - A concrete type plus its declared ancestor chain
//! - [`TypeKey`] - Identity of a single type
//!
//! ## Declaring Hierarchies
//!
//! Derived types embed their parent and declare the relationship with
//! [`impl_object!`]. See the macro docs for an example.

pub mod object;
pub mod token;

pub use object::{downcast, Object};
pub use token::{TypeKey, TypeToken};
