use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use super::dispatch::{DirectField, FieldAccess, Projected, Projection};
use crate::info::{Mutability, Type, Visibility};

// -----------------------------------------------------------------------------
// FieldInfo

/// A registered field of `T`.
///
/// # Examples
///
/// ```
/// use vc_access::info::{FieldInfo, Mutability, Visibility};
///
/// struct Foo {
///     id: u32,
/// }
///
/// let field = FieldInfo::<Foo>::readonly::<u32>("id", |foo| &foo.id)
///     .with_visibility(Visibility::Private);
///
/// assert_eq!(field.name(), "id");
/// assert!(field.type_is::<u32>());
/// assert_eq!(field.mutability(), Mutability::Immutable);
/// assert_eq!(field.depth(), 0);
/// ```
pub struct FieldInfo<T> {
    name: &'static str,
    ty: Type,
    visibility: Visibility,
    mutability: Mutability,
    // 0 for fields declared on `T`, +1 per parent projection.
    depth: usize,
    access: Arc<dyn FieldAccess<T>>,
}

impl<T> Clone for FieldInfo<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            ty: self.ty,
            visibility: self.visibility,
            mutability: self.mutability,
            depth: self.depth,
            access: self.access.clone(),
        }
    }
}

impl<T: 'static> FieldInfo<T> {
    /// Creates a public, mutable field.
    pub fn new<V: Any>(
        name: &'static str,
        read: fn(&T) -> &V,
        write: fn(&mut T) -> &mut V,
    ) -> Self {
        Self {
            name,
            ty: Type::of::<V>(),
            visibility: Visibility::Public,
            mutability: Mutability::Mutable,
            depth: 0,
            access: Arc::new(DirectField {
                read,
                write: Some(write),
            }),
        }
    }

    /// Creates a public, immutable field.
    pub fn readonly<V: Any>(name: &'static str, read: fn(&T) -> &V) -> Self {
        Self {
            name,
            ty: Type::of::<V>(),
            visibility: Visibility::Public,
            mutability: Mutability::Immutable,
            depth: 0,
            access: Arc::new(DirectField { read, write: None }),
        }
    }

    /// Lifts a field of the embedded parent `P` into `T`.
    pub(crate) fn project<P: 'static>(parent: &FieldInfo<P>, projection: Projection<T, P>) -> Self {
        Self {
            name: parent.name,
            ty: parent.ty,
            visibility: parent.visibility,
            mutability: parent.mutability,
            depth: parent.depth + 1,
            access: Arc::new(Projected {
                projection,
                inner: parent.access.clone(),
            }),
        }
    }
}

impl<T> FieldInfo<T> {
    /// Sets the visibility, the default is [`Visibility::Public`].
    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] of the field value.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Check if the field value has type `V`.
    #[inline]
    pub fn type_is<V: Any>(&self) -> bool {
        self.ty.is::<V>()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn mutability(&self) -> Mutability {
        self.mutability
    }

    /// Returns `0` for declared fields, the number of parent hops otherwise.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub(crate) fn access(&self) -> &Arc<dyn FieldAccess<T>> {
        &self.access
    }
}

impl<T> fmt::Debug for FieldInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("visibility", &self.visibility)
            .field("mutability", &self.mutability)
            .field("depth", &self.depth)
            .finish()
    }
}
