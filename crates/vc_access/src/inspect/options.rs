use bitflags::bitflags;

use crate::info::Visibility;

// -----------------------------------------------------------------------------
// Conventions

bitflags! {
    /// Naming conventions used to recognize accessor methods.
    ///
    /// For a property `name`:
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Conventions: u8 {
        /// Getter `get_name`.
        const GET_PREFIX = 1 << 0;
        /// Getter `getName`.
        const GET_CAMEL  = 1 << 1;
        /// Getter `name`.
        const BARE       = 1 << 2;
        /// Getter `is_name` or `isName`, only for `bool` properties.
        const IS_PREFIX  = 1 << 3;
        /// Setter `set_name`.
        const SET_PREFIX = 1 << 4;
        /// Setter `setName`.
        const SET_CAMEL  = 1 << 5;
    }
}

impl Default for Conventions {
    #[inline]
    fn default() -> Self {
        Self::all()
    }
}

// -----------------------------------------------------------------------------
// ScanScope

/// Which members take part in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanScope {
    /// Only members declared on the type itself.
    Declared,
    /// Declared members, then members of embedded parents.
    #[default]
    Inherited,
}

// -----------------------------------------------------------------------------
// AccessLevel

/// The lowest [`Visibility`] a member may have to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessLevel {
    /// Only `pub` members.
    #[default]
    Public,
    /// `pub` members and restricted ones like `pub(crate)`.
    Restricted,
    /// Every registered member.
    Private,
}

impl AccessLevel {
    /// Returns the lowest visibility allowed by this level.
    #[inline]
    pub const fn min_visibility(self) -> Visibility {
        match self {
            Self::Public => Visibility::Public,
            Self::Restricted => Visibility::Restricted,
            Self::Private => Visibility::Private,
        }
    }
}

// -----------------------------------------------------------------------------
// InspectOptions

/// Resolution settings of a [`TypeInspector`](crate::TypeInspector).
///
/// The default resolves public members, includes embedded parents
/// and enables every naming convention.
///
/// # Examples
///
/// ```
/// use vc_access::inspect::{AccessLevel, Conventions, InspectOptions, ScanScope};
///
/// let options = InspectOptions::new()
///     .with_scope(ScanScope::Declared)
///     .with_access(AccessLevel::Private)
///     .with_conventions(Conventions::GET_PREFIX | Conventions::SET_PREFIX);
///
/// assert_eq!(options.scope(), ScanScope::Declared);
/// assert!(!options.conventions().contains(Conventions::BARE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InspectOptions {
    scope: ScanScope,
    access: AccessLevel,
    conventions: Conventions,
}

impl Default for InspectOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl InspectOptions {
    /// Creates the default options.
    #[inline]
    pub const fn new() -> Self {
        Self {
            scope: ScanScope::Inherited,
            access: AccessLevel::Public,
            conventions: Conventions::all(),
        }
    }

    #[inline]
    pub const fn with_scope(mut self, scope: ScanScope) -> Self {
        self.scope = scope;
        self
    }

    #[inline]
    pub const fn with_access(mut self, access: AccessLevel) -> Self {
        self.access = access;
        self
    }

    #[inline]
    pub const fn with_conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }

    #[inline]
    pub const fn scope(&self) -> ScanScope {
        self.scope
    }

    #[inline]
    pub const fn access(&self) -> AccessLevel {
        self.access
    }

    #[inline]
    pub const fn conventions(&self) -> Conventions {
        self.conventions
    }

    /// Whether a member with `visibility` passes the access level.
    #[inline]
    pub fn allows(&self, visibility: Visibility) -> bool {
        visibility >= self.access.min_visibility()
    }

    /// Whether a member at `depth` (0 = declared) is in scope.
    #[inline]
    pub const fn includes(&self, depth: usize) -> bool {
        match self.scope {
            ScanScope::Declared => depth == 0,
            ScanScope::Inherited => true,
        }
    }
}
