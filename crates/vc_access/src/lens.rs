//! Contracts shared by every bound accessor.
//!
//! ## Menu
//!
//! - [`TypeBearer`]: reports the declared value type.
//! - [`Getter`] / [`Setter`]: read or write one property of `T`.
//! - [`Lens`]: both, implemented for anything that is both.
//! - [`Accessor`]: a named lens that knows whether it can write.
//!
//! The concrete types live in [`factory`](crate::factory), these traits
//! let callers stay generic over the resolution strategy.
//!
//! # Examples
//!
//! ```
//! use vc_access::{AccessError, AccessorFactory, derive::Inspect};
//! use vc_access::lens::Lens;
//!
//! #[derive(Inspect)]
//! pub struct Counter {
//!     pub hits: u32,
//! }
//!
//! fn bump<T>(lens: &impl Lens<T, u32>, target: &mut T) -> Result<u32, AccessError> {
//!     let value = lens.get(target)?;
//!     lens.set(target, value + 1)
//! }
//!
//! let lens = AccessorFactory::<Counter>::of().lens::<u32>("hits").unwrap();
//! let mut counter = Counter { hits: 1 };
//!
//! assert_eq!(bump(&lens, &mut counter), Ok(2));
//! assert_eq!(counter.hits, 2);
//! ```

use crate::AccessError;
use crate::info::Type;

/// A value that carries the static type of the property it accesses.
pub trait TypeBearer {
    fn value_type(&self) -> Type;
}

/// Reads a `V` out of a `T`.
pub trait Getter<T, V> {
    fn get(&self, target: &T) -> Result<V, AccessError>;
}

/// Writes a `V` into a `T`.
pub trait Setter<T, V> {
    /// Writes `value` and returns it.
    fn set(&self, target: &mut T, value: V) -> Result<V, AccessError>;
}

/// A [`Getter`] and [`Setter`] over the same property.
pub trait Lens<T, V>: Getter<T, V> + Setter<T, V> {}

impl<T, V, L: Getter<T, V> + Setter<T, V> + ?Sized> Lens<T, V> for L {}

/// A named [`Lens`].
///
/// Writing through an accessor that is not mutable fails with
/// [`AccessError::Immutable`].
pub trait Accessor<T, V>: Lens<T, V> + TypeBearer {
    fn property_name(&self) -> &str;

    fn is_mutable(&self) -> bool;
}
