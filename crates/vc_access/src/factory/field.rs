use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use super::check_type;
use crate::AccessError;
use crate::info::dispatch::FieldAccess;
use crate::info::{Inspect, Mutability, Type};
use crate::inspect::TypeInspector;
use crate::lens::{Accessor, Getter, Setter, TypeBearer};

// -----------------------------------------------------------------------------
// FieldAccessor

/// Builds a [`BoundField`], an accessor that only ever uses a field.
///
/// Unlike the [`AccessorFactory`](crate::AccessorFactory), accessor methods
/// are never considered, and the failure says whether the field is missing
/// or hidden by the access level.
///
/// # Examples
///
/// ```
/// use vc_access::{AccessError, derive::Inspect};
/// use vc_access::factory::FieldAccessor;
///
/// #[derive(Inspect)]
/// pub struct Config {
///     pub retries: u8,
///     #[inspect(readonly)]
///     pub name: String,
///     token: u64,
/// }
///
/// let retries = FieldAccessor::for_field("retries").of_type::<Config, u8>().unwrap();
/// let name = FieldAccessor::for_field("name").of_type::<Config, String>().unwrap();
///
/// let mut config = Config { retries: 3, name: "main".into(), token: 0 };
///
/// assert!(retries.is_mutable());
/// assert_eq!(retries.set(&mut config, 5), Ok(5));
/// assert_eq!(config.retries, 5);
///
/// assert!(!name.is_mutable());
/// assert!(matches!(name.set(&mut config, "other".into()), Err(AccessError::Immutable { .. })));
///
/// let token = FieldAccessor::for_field("token").of_type::<Config, u64>();
/// assert!(matches!(token, Err(AccessError::Inaccessible { .. })));
///
/// let missing = FieldAccessor::for_field("port").of_type::<Config, u16>();
/// assert!(matches!(missing, Err(AccessError::NoSuchField { .. })));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldAccessor<'a> {
    name: &'a str,
}

impl<'a> FieldAccessor<'a> {
    /// Starts building an accessor for the field `name`.
    #[inline]
    pub const fn for_field(name: &'a str) -> Self {
        Self { name }
    }

    /// Resolves the field on `T` with default options.
    pub fn of_type<T: Inspect, V: Clone + Any>(self) -> Result<BoundField<T, V>, AccessError> {
        self.in_inspector(&TypeInspector::<T>::of())
    }

    /// Resolves the field through `inspector`, honoring its options.
    pub fn in_inspector<T: Any, V: Clone + Any>(
        self,
        inspector: &TypeInspector<T>,
    ) -> Result<BoundField<T, V>, AccessError> {
        let field = inspector.find_field(self.name)?;
        check_type::<T, V>(self.name, field.ty())?;

        log::trace!(
            "`{}::{}` bound to field (depth {})",
            inspector.type_path(),
            self.name,
            field.depth(),
        );

        Ok(BoundField {
            property: Arc::from(self.name),
            ty: field.ty(),
            mutability: field.mutability(),
            access: field.access().clone(),
            _marker: PhantomData,
        })
    }
}

// -----------------------------------------------------------------------------
// BoundField

/// A field-only accessor, built by [`FieldAccessor`].
pub struct BoundField<T, V> {
    property: Arc<str>,
    ty: Type,
    mutability: Mutability,
    access: Arc<dyn FieldAccess<T>>,
    _marker: PhantomData<fn(V) -> V>,
}

impl<T, V> Clone for BoundField<T, V> {
    fn clone(&self) -> Self {
        Self {
            property: self.property.clone(),
            ty: self.ty,
            mutability: self.mutability,
            access: self.access.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, V> BoundField<T, V> {
    #[inline]
    pub fn property_name(&self) -> &str {
        &self.property
    }

    #[inline]
    pub fn value_type(&self) -> Type {
        self.ty
    }

    /// Returns `false` for fields registered as read-only.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.mutability.is_mutable()
    }

    fn error(&self, immutable: bool) -> AccessError {
        let property = self.property.to_string();
        let type_path = core::any::type_name::<T>();
        if immutable {
            AccessError::Immutable {
                property,
                type_path,
            }
        } else {
            AccessError::Invocation {
                property,
                type_path,
            }
        }
    }
}

impl<T: Any, V: Clone + Any> BoundField<T, V> {
    pub fn get(&self, target: &T) -> Result<V, AccessError> {
        self.access
            .read(target)
            .downcast_ref::<V>()
            .cloned()
            .ok_or_else(|| self.error(false))
    }

    /// Writes `value` and returns it.
    ///
    /// Fails with [`AccessError::Immutable`] on a read-only field.
    pub fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        if !self.is_mutable() {
            return Err(self.error(true));
        }

        match self
            .access
            .write(target)
            .and_then(|slot| slot.downcast_mut::<V>())
        {
            Some(slot) => {
                *slot = value.clone();
                Ok(value)
            }
            None => Err(self.error(false)),
        }
    }

    pub fn get_dyn(&self, target: &dyn Any) -> Result<V, AccessError> {
        match target.downcast_ref::<T>() {
            Some(target) => self.get(target),
            None => Err(AccessError::IncompatibleTarget {
                type_path: core::any::type_name::<T>(),
            }),
        }
    }

    pub fn set_dyn(&self, target: &mut dyn Any, value: V) -> Result<V, AccessError> {
        match target.downcast_mut::<T>() {
            Some(target) => self.set(target, value),
            None => Err(AccessError::IncompatibleTarget {
                type_path: core::any::type_name::<T>(),
            }),
        }
    }
}

impl<T: Any, V: Clone + Any> Getter<T, V> for BoundField<T, V> {
    #[inline]
    fn get(&self, target: &T) -> Result<V, AccessError> {
        BoundField::get(self, target)
    }
}

impl<T: Any, V: Clone + Any> Setter<T, V> for BoundField<T, V> {
    #[inline]
    fn set(&self, target: &mut T, value: V) -> Result<V, AccessError> {
        BoundField::set(self, target, value)
    }
}

impl<T, V> TypeBearer for BoundField<T, V> {
    #[inline]
    fn value_type(&self) -> Type {
        self.ty
    }
}

impl<T: Any, V: Clone + Any> Accessor<T, V> for BoundField<T, V> {
    #[inline]
    fn property_name(&self) -> &str {
        &self.property
    }

    #[inline]
    fn is_mutable(&self) -> bool {
        self.mutability.is_mutable()
    }
}

impl<T, V> fmt::Debug for BoundField<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundField")
            .field("target", &core::any::type_name::<T>())
            .field("property", &self.property)
            .field("ty", &self.ty)
            .field("mutability", &self.mutability)
            .finish()
    }
}
