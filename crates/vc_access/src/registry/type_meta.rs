use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{Inspect, Members, Type};
use crate::inspect::TypeInspector;

// -----------------------------------------------------------------------------
// TypeMeta

/// A member table stored in the [`TypeRegistry`](super::TypeRegistry),
/// along with the property names it exposes under default options.
///
/// # Examples
///
/// ```
/// use vc_access::derive::Inspect;
/// use vc_access::registry::TypeMeta;
///
/// #[derive(Inspect)]
/// pub struct Foo {
///     pub a: u8,
///     b: u8,
/// }
///
/// let meta = TypeMeta::of::<Foo>();
///
/// assert_eq!(meta.ty().name(), "Foo");
/// assert_eq!(meta.readable_properties(), ["a"]);
/// assert!(meta.inspector::<Foo>().is_some());
/// assert!(meta.inspector::<u8>().is_none());
/// ```
pub struct TypeMeta {
    ty: Type,
    // `Arc<Members<T>>`, `T` is `ty`.
    members: Arc<dyn Any + Send + Sync>,
    readable: Vec<Cow<'static, str>>,
    writable: Vec<Cow<'static, str>>,
}

impl TypeMeta {
    /// Creates the meta of `T` from [`T::members`](Inspect::members).
    #[inline]
    pub fn of<T: Inspect>() -> Self {
        Self::new(T::members())
    }

    /// Creates the meta of `T` from a manually built member table.
    pub fn new<T: 'static>(members: Members<T>) -> Self {
        let members = Arc::new(members);
        let inspector = TypeInspector::from_shared(members.clone());

        Self {
            ty: Type::of::<T>(),
            readable: inspector.readable_properties(),
            writable: inspector.writable_properties(),
            members,
        }
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    /// Returns the member table if this is the meta of `T`.
    pub fn members<T: 'static>(&self) -> Option<Arc<Members<T>>> {
        self.members.clone().downcast::<Members<T>>().ok()
    }

    /// Returns an inspector with default options if this is the meta of `T`.
    #[inline]
    pub fn inspector<T: 'static>(&self) -> Option<TypeInspector<T>> {
        self.members::<T>().map(TypeInspector::from_shared)
    }

    /// Names readable under default options, see
    /// [`TypeInspector::readable_properties`].
    #[inline]
    pub fn readable_properties(&self) -> &[Cow<'static, str>] {
        &self.readable
    }

    /// Names writable under default options, see
    /// [`TypeInspector::writable_properties`].
    #[inline]
    pub fn writable_properties(&self) -> &[Cow<'static, str>] {
        &self.writable
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("ty", &self.ty)
            .field("readable", &self.readable)
            .field("writable", &self.writable)
            .finish()
    }
}
