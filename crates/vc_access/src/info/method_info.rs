use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use super::dispatch::{GetterCall, GetterFn, Projected, Projection, SetterCall, SetterFn};
use crate::info::{Type, Visibility};

// -----------------------------------------------------------------------------
// MethodKind

/// The shape of a registered accessor method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    /// `fn(&self) -> V`
    Getter,
    /// `fn(&mut self, V)`
    Setter,
}

pub(crate) enum MethodBody<T> {
    Getter(Arc<dyn GetterCall<T>>),
    Setter(Arc<dyn SetterCall<T>>),
}

impl<T> Clone for MethodBody<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Getter(call) => Self::Getter(call.clone()),
            Self::Setter(call) => Self::Setter(call.clone()),
        }
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// A registered accessor method of `T`.
///
/// Only two shapes can be registered, see [`MethodKind`].
/// For a getter the value type is the return type, for a setter
/// it's the argument type.
///
/// # Examples
///
/// ```
/// use vc_access::info::{MethodInfo, MethodKind};
///
/// struct Foo {
///     id: u32,
/// }
///
/// impl Foo {
///     fn id(&self) -> u32 { self.id }
///     fn set_id(&mut self, id: u32) { self.id = id; }
/// }
///
/// let getter = MethodInfo::<Foo>::getter("id", Foo::id);
/// let setter = MethodInfo::<Foo>::setter("set_id", Foo::set_id);
///
/// assert_eq!(getter.kind(), MethodKind::Getter);
/// assert_eq!(setter.kind(), MethodKind::Setter);
/// assert!(setter.type_is::<u32>());
/// ```
pub struct MethodInfo<T> {
    name: &'static str,
    ty: Type,
    visibility: Visibility,
    depth: usize,
    body: MethodBody<T>,
}

impl<T> Clone for MethodInfo<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            ty: self.ty,
            visibility: self.visibility,
            depth: self.depth,
            body: self.body.clone(),
        }
    }
}

impl<T: 'static> MethodInfo<T> {
    /// Creates a public getter method.
    pub fn getter<V: Any>(name: &'static str, func: fn(&T) -> V) -> Self {
        Self {
            name,
            ty: Type::of::<V>(),
            visibility: Visibility::Public,
            depth: 0,
            body: MethodBody::Getter(Arc::new(GetterFn { func })),
        }
    }

    /// Creates a public setter method.
    pub fn setter<V: Any>(name: &'static str, func: fn(&mut T, V)) -> Self {
        Self {
            name,
            ty: Type::of::<V>(),
            visibility: Visibility::Public,
            depth: 0,
            body: MethodBody::Setter(Arc::new(SetterFn { func })),
        }
    }

    /// Lifts a method of the embedded parent `P` into `T`.
    pub(crate) fn project<P: 'static>(
        parent: &MethodInfo<P>,
        projection: Projection<T, P>,
    ) -> Self {
        let body = match &parent.body {
            MethodBody::Getter(inner) => MethodBody::Getter(Arc::new(Projected {
                projection,
                inner: inner.clone(),
            }) as Arc<dyn GetterCall<T>>),
            MethodBody::Setter(inner) => MethodBody::Setter(Arc::new(Projected {
                projection,
                inner: inner.clone(),
            }) as Arc<dyn SetterCall<T>>),
        };

        Self {
            name: parent.name,
            ty: parent.ty,
            visibility: parent.visibility,
            depth: parent.depth + 1,
            body,
        }
    }
}

impl<T> MethodInfo<T> {
    /// Sets the visibility, the default is [`Visibility::Public`].
    #[inline]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] of the value read or written.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    /// Check if the value read or written has type `V`.
    #[inline]
    pub fn type_is<V: Any>(&self) -> bool {
        self.ty.is::<V>()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `0` for declared methods, the number of parent hops otherwise.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub const fn kind(&self) -> MethodKind {
        match self.body {
            MethodBody::Getter(_) => MethodKind::Getter,
            MethodBody::Setter(_) => MethodKind::Setter,
        }
    }

    #[inline]
    pub(crate) fn body(&self) -> &MethodBody<T> {
        &self.body
    }
}

impl<T> fmt::Debug for MethodInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("ty", &self.ty)
            .field("visibility", &self.visibility)
            .field("depth", &self.depth)
            .finish()
    }
}
