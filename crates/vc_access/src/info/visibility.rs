use core::fmt;

// -----------------------------------------------------------------------------
// Visibility

/// The declared visibility of a registered member.
///
/// The derive macros map Rust visibility as follows:
///
/// - `pub` => [`Visibility::Public`]
/// - `pub(crate)`, `pub(super)`, `pub(in path)` => [`Visibility::Restricted`]
/// - no modifier => [`Visibility::Private`]
///
/// Ordered from the most hidden to the most exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Visibility {
    Private,
    Restricted,
    Public,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Private => "private",
            Self::Restricted => "restricted",
            Self::Public => "public",
        })
    }
}

// -----------------------------------------------------------------------------
// Mutability

/// Whether a field may be written through an accessor.
///
/// Rust has no per-field `const`, a field is marked immutable at registration,
/// e.g. with `#[inspect(readonly)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Mutable,
    Immutable,
}

impl Mutability {
    /// Returns `true` for [`Mutability::Mutable`].
    #[inline]
    pub const fn is_mutable(self) -> bool {
        matches!(self, Self::Mutable)
    }
}
