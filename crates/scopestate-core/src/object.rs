//! The Object capability: what every storable value implements.
//!
//! Rust has no inheritance, so a "derived" type embeds its parent by value
//! and declares the relationship through [`Object::type_token`]. The
//! [`Object::view`] projection then hands out the embedded parent whenever a
//! caller asks for an ancestor type.

use std::any::{Any, TypeId};

use crate::token::TypeToken;

/// A value that can be stored and later retrieved as itself or as any of
/// its declared ancestors.
///
/// Implementations must keep [`type_token`](Object::type_token) and
/// [`view`](Object::view) consistent: `view(id)` returns `Some` exactly for
/// the ids in the token's chain, and the returned value downcasts to the
/// type with that id. The [`impl_object!`](crate::impl_object) macro
/// generates a conforming implementation.
pub trait Object: Any {
    /// Token of the implementing type, built once and cached.
    fn type_token() -> &'static TypeToken
    where
        Self: Sized;

    /// Token of the value's dynamic type.
    fn object_token(&self) -> &'static TypeToken;

    /// The part of this value that represents type `ty`, if the value is-a `ty`.
    fn view(&self, ty: TypeId) -> Option<&dyn Any>;
}

/// View `object` as `T`, following its declared ancestry.
pub fn downcast<T: Any>(object: &dyn Object) -> Option<&T> {
    object.view(TypeId::of::<T>())?.downcast_ref::<T>()
}

/// Implement [`Object`] for a type.
///
/// ```rust
/// use scopestate_core::{downcast, impl_object, Object};
///
/// struct Animal { legs: u32 }
/// struct Dog { animal: Animal }
///
/// impl_object!(Animal);
/// impl_object!(Dog: Animal => animal);
///
/// let dog = Dog { animal: Animal { legs: 4 } };
/// assert!(Dog::type_token().is_a_type::<Animal>());
/// assert_eq!(downcast::<Animal>(&dog).map(|a| a.legs), Some(4));
/// ```
///
/// The derived form names the field holding the parent value; that parent
/// must itself implement [`Object`].
#[macro_export]
macro_rules! impl_object {
    ($ty:ty) => {
        impl $crate::Object for $ty {
            fn type_token() -> &'static $crate::TypeToken {
                static TOKEN: ::std::sync::OnceLock<$crate::TypeToken> =
                    ::std::sync::OnceLock::new();
                TOKEN.get_or_init($crate::TypeToken::root::<$ty>)
            }

            fn object_token(&self) -> &'static $crate::TypeToken {
                <$ty as $crate::Object>::type_token()
            }

            fn view(
                &self,
                ty: ::std::any::TypeId,
            ) -> ::std::option::Option<&dyn ::std::any::Any> {
                if ty == ::std::any::TypeId::of::<$ty>() {
                    ::std::option::Option::Some(self as &dyn ::std::any::Any)
                } else {
                    ::std::option::Option::None
                }
            }
        }
    };
    ($ty:ty : $parent:ty => $field:ident) => {
        impl $crate::Object for $ty {
            fn type_token() -> &'static $crate::TypeToken {
                static TOKEN: ::std::sync::OnceLock<$crate::TypeToken> =
                    ::std::sync::OnceLock::new();
                TOKEN.get_or_init(|| {
                    $crate::TypeToken::derived::<$ty>(<$parent as $crate::Object>::type_token())
                })
            }

            fn object_token(&self) -> &'static $crate::TypeToken {
                <$ty as $crate::Object>::type_token()
            }

            fn view(
                &self,
                ty: ::std::any::TypeId,
            ) -> ::std::option::Option<&dyn ::std::any::Any> {
                if ty == ::std::any::TypeId::of::<$ty>() {
                    ::std::option::Option::Some(self as &dyn ::std::any::Any)
                } else {
                    <$parent as $crate::Object>::view(&self.$field, ty)
                }
            }
        }
    };
}
