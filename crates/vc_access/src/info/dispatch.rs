//! Type-erased member strategies.
//!
//! Values cross the erased boundary as `&dyn Any`. Method calls exchange
//! values through a `&mut Option<V>` slot, so no allocation is needed.
//! The value type is checked once when an accessor is bound, a mismatch
//! here only shows up as an unfilled slot.

use alloc::sync::Arc;
use core::any::Any;

// -----------------------------------------------------------------------------
// Traits

pub(crate) trait FieldAccess<T>: Send + Sync {
    fn read<'a>(&self, this: &'a T) -> &'a dyn Any;

    /// Returns `None` for immutable fields.
    fn write<'a>(&self, this: &'a mut T) -> Option<&'a mut dyn Any>;
}

pub(crate) trait GetterCall<T>: Send + Sync {
    /// Writes the result into `out`, an `Option<V>`.
    ///
    /// Returns `false` if `out` has another type.
    fn call(&self, this: &T, out: &mut dyn Any) -> bool;
}

pub(crate) trait SetterCall<T>: Send + Sync {
    /// Takes the argument out of `arg`, an `Option<V>`.
    ///
    /// Returns `false` if `arg` has another type or is empty.
    fn call(&self, this: &mut T, arg: &mut dyn Any) -> bool;
}

// -----------------------------------------------------------------------------
// Direct members

pub(crate) struct DirectField<T, V> {
    pub read: fn(&T) -> &V,
    pub write: Option<fn(&mut T) -> &mut V>,
}

impl<T, V: Any> FieldAccess<T> for DirectField<T, V> {
    #[inline]
    fn read<'a>(&self, this: &'a T) -> &'a dyn Any {
        (self.read)(this)
    }

    #[inline]
    fn write<'a>(&self, this: &'a mut T) -> Option<&'a mut dyn Any> {
        match self.write {
            Some(write) => Some(write(this) as &mut dyn Any),
            None => None,
        }
    }
}

pub(crate) struct GetterFn<T, V> {
    pub func: fn(&T) -> V,
}

impl<T, V: Any> GetterCall<T> for GetterFn<T, V> {
    fn call(&self, this: &T, out: &mut dyn Any) -> bool {
        match out.downcast_mut::<Option<V>>() {
            Some(slot) => {
                *slot = Some((self.func)(this));
                true
            }
            None => false,
        }
    }
}

pub(crate) struct SetterFn<T, V> {
    pub func: fn(&mut T, V),
}

impl<T, V: Any> SetterCall<T> for SetterFn<T, V> {
    fn call(&self, this: &mut T, arg: &mut dyn Any) -> bool {
        match arg.downcast_mut::<Option<V>>().and_then(Option::take) {
            Some(value) => {
                (self.func)(this, value);
                true
            }
            None => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Projected members

/// Reaches an embedded parent `P` from `T`.
pub(crate) struct Projection<T, P> {
    pub project: fn(&T) -> &P,
    pub project_mut: fn(&mut T) -> &mut P,
}

impl<T, P> Clone for Projection<T, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P> Copy for Projection<T, P> {}

pub(crate) struct Projected<T, P, S: ?Sized> {
    pub projection: Projection<T, P>,
    pub inner: Arc<S>,
}

impl<T, P: 'static> FieldAccess<T> for Projected<T, P, dyn FieldAccess<P>> {
    #[inline]
    fn read<'a>(&self, this: &'a T) -> &'a dyn Any {
        self.inner.read((self.projection.project)(this))
    }

    #[inline]
    fn write<'a>(&self, this: &'a mut T) -> Option<&'a mut dyn Any> {
        self.inner.write((self.projection.project_mut)(this))
    }
}

impl<T, P: 'static> GetterCall<T> for Projected<T, P, dyn GetterCall<P>> {
    #[inline]
    fn call(&self, this: &T, out: &mut dyn Any) -> bool {
        self.inner.call((self.projection.project)(this), out)
    }
}

impl<T, P: 'static> SetterCall<T> for Projected<T, P, dyn SetterCall<P>> {
    #[inline]
    fn call(&self, this: &mut T, arg: &mut dyn Any) -> bool {
        self.inner.call((self.projection.project_mut)(this), arg)
    }
}
