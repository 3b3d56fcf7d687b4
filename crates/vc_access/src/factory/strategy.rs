use alloc::sync::Arc;
use core::any::Any;

use crate::info::dispatch::{FieldAccess, GetterCall, SetterCall};

// -----------------------------------------------------------------------------
// ReadStrategy

/// How a bound accessor reads its property.
pub(crate) enum ReadStrategy<T> {
    Method(Arc<dyn GetterCall<T>>),
    Field(Arc<dyn FieldAccess<T>>),
}

impl<T> Clone for ReadStrategy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Method(call) => Self::Method(call.clone()),
            Self::Field(access) => Self::Field(access.clone()),
        }
    }
}

impl<T> ReadStrategy<T> {
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Method(_) => "method",
            Self::Field(_) => "field",
        }
    }

    /// Returns `None` if the erased member does not hold a `V`.
    pub fn read<V: Clone + Any>(&self, target: &T) -> Option<V> {
        match self {
            Self::Method(call) => {
                let mut slot: Option<V> = None;
                call.call(target, &mut slot);
                slot
            }
            Self::Field(access) => access.read(target).downcast_ref::<V>().cloned(),
        }
    }
}

// -----------------------------------------------------------------------------
// WriteStrategy

/// How a bound accessor writes its property.
pub(crate) enum WriteStrategy<T> {
    Method(Arc<dyn SetterCall<T>>),
    Field(Arc<dyn FieldAccess<T>>),
}

impl<T> Clone for WriteStrategy<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Method(call) => Self::Method(call.clone()),
            Self::Field(access) => Self::Field(access.clone()),
        }
    }
}

impl<T> WriteStrategy<T> {
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Method(_) => "method",
            Self::Field(_) => "field",
        }
    }

    /// Returns `false` if the value could not be stored.
    pub fn write<V: Any>(&self, target: &mut T, value: V) -> bool {
        match self {
            Self::Method(call) => {
                let mut slot = Some(value);
                call.call(target, &mut slot)
            }
            Self::Field(access) => match access
                .write(target)
                .and_then(|slot| slot.downcast_mut::<V>())
            {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            },
        }
    }
}
