use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// The identity of a type: its [`TypeId`] and its [`type_name`] path.
///
/// Equality and hashing only consider the `TypeId`.
///
/// # Examples
///
/// ```
/// use vc_access::info::Type;
///
/// let ty = Type::of::<String>();
///
/// assert!(ty.is::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// ```
///
/// [`type_name`]: core::any::type_name
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type path, as given by [`core::any::type_name`].
    ///
    /// The content is not guaranteed to be stable across compiler versions.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the type name without module path.
    ///
    /// Generic arguments are kept as they appear in the path.
    pub fn name(&self) -> &'static str {
        // Only split on the part before generics, `a::B<c::D>` -> `B<c::D>`.
        let head = match self.path.find('<') {
            Some(index) => &self.path[..index],
            None => self.path,
        };
        match head.rfind("::") {
            Some(index) => &self.path[index + 2..],
            None => self.path,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::Type;

    #[test]
    fn generic_name() {
        let ty = Type::of::<Vec<alloc::string::String>>();
        assert_eq!(ty.name(), "Vec<alloc::string::String>");
        assert_eq!(Type::of::<i32>().name(), "i32");
        assert_ne!(Type::of::<i32>(), Type::of::<u32>());
    }
}
