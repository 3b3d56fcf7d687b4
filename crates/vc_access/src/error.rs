use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// An error raised while resolving or invoking a property accessor.
///
/// There are two classes of failure:
///
/// - Resolution: the factory could not bind an accessor for the requested
///   name and type. See [`is_resolution`](Self::is_resolution).
/// - Invocation: a bound accessor could not run against a specific instance.
///   See [`is_invocation`](Self::is_invocation).
///
/// # Examples
///
/// ```
/// use vc_access::{AccessError, AccessorFactory, derive::Inspect};
///
/// #[derive(Inspect)]
/// pub struct Foo {
///     pub a: u8,
/// }
///
/// let err = AccessorFactory::<Foo>::of().getter::<u8>("b").unwrap_err();
///
/// assert!(err.is_resolution());
/// assert_eq!(err.property(), Some("b"));
/// assert!(matches!(err, AccessError::NotReadable { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("no readable property or field `{property}` on `{type_path}`")]
    NotReadable {
        property: String,
        type_path: &'static str,
    },

    #[error("no writable property or field `{property}` on `{type_path}`")]
    NotWritable {
        property: String,
        type_path: &'static str,
    },

    #[error("property `{property}` on `{type_path}` has type `{found}`, not `{expected}`")]
    TypeMismatch {
        property: String,
        type_path: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("no field `{property}` on `{type_path}`")]
    NoSuchField {
        property: String,
        type_path: &'static str,
    },

    #[error("field `{property}` on `{type_path}` is not accessible")]
    Inaccessible {
        property: String,
        type_path: &'static str,
    },

    #[error("accessor for `{type_path}` invoked on an instance of another type")]
    IncompatibleTarget { type_path: &'static str },

    #[error("property `{property}` on `{type_path}` is immutable")]
    Immutable {
        property: String,
        type_path: &'static str,
    },

    #[error("invoking `{property}` on `{type_path}` did not produce a value")]
    Invocation {
        property: String,
        type_path: &'static str,
    },
}

impl AccessError {
    /// Returns `true` if the error was raised while building an accessor.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::NotReadable { .. }
                | Self::NotWritable { .. }
                | Self::TypeMismatch { .. }
                | Self::NoSuchField { .. }
                | Self::Inaccessible { .. }
        )
    }

    /// Returns `true` if the error was raised by a bound accessor at call time.
    #[inline]
    pub fn is_invocation(&self) -> bool {
        !self.is_resolution()
    }

    /// Returns the property name involved, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::NotReadable { property, .. }
            | Self::NotWritable { property, .. }
            | Self::TypeMismatch { property, .. }
            | Self::NoSuchField { property, .. }
            | Self::Inaccessible { property, .. }
            | Self::Immutable { property, .. }
            | Self::Invocation { property, .. } => Some(property),
            Self::IncompatibleTarget { .. } => None,
        }
    }

    /// Returns the type path of the target type.
    pub fn type_path(&self) -> &'static str {
        match self {
            Self::NotReadable { type_path, .. }
            | Self::NotWritable { type_path, .. }
            | Self::TypeMismatch { type_path, .. }
            | Self::NoSuchField { type_path, .. }
            | Self::Inaccessible { type_path, .. }
            | Self::IncompatibleTarget { type_path }
            | Self::Immutable { type_path, .. }
            | Self::Invocation { type_path, .. } => type_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::AccessError;

    #[test]
    fn not_writable_message() {
        let err = AccessError::NotWritable {
            property: "y".into(),
            type_path: "demo::Point",
        };
        assert_eq!(
            err.to_string(),
            "no writable property or field `y` on `demo::Point`"
        );
        assert!(err.is_resolution());
        assert_eq!(err.property(), Some("y"));
    }

    #[test]
    fn invocation_class() {
        let err = AccessError::IncompatibleTarget {
            type_path: "demo::Point",
        };
        assert!(err.is_invocation());
        assert_eq!(err.property(), None);
        assert_eq!(err.type_path(), "demo::Point");

        let err = AccessError::Immutable {
            property: "x".into(),
            type_path: "demo::Point",
        };
        assert!(err.is_invocation());
    }
}
