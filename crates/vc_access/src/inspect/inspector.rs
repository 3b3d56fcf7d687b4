use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use super::{InspectOptions, naming};
use crate::AccessError;
use crate::info::{FieldInfo, Inspect, Members, MethodInfo, MethodKind};

// -----------------------------------------------------------------------------
// TypeInspector

/// Locates accessor candidates for a property of `T`.
///
/// An inspector is a pure lookup over the [`Members`] of `T`, filtered by
/// its [`InspectOptions`]. Every `find_*` function returns the first match
/// in scan order: declared members, then inherited ones.
///
/// Cloning is cheap, the member table is shared.
///
/// # Examples
///
/// ```
/// use vc_access::{TypeInspector, derive::Inspect};
///
/// #[derive(Inspect)]
/// #[inspect(methods)]
/// pub struct Door {
///     pub width: u32,
///     open: bool,
/// }
///
/// #[vc_access::derive::inspect_methods]
/// impl Door {
///     pub fn is_open(&self) -> bool { self.open }
///     pub fn set_open(&mut self, open: bool) { self.open = open; }
/// }
///
/// let inspector = TypeInspector::<Door>::of();
///
/// assert!(inspector.find_getter_method("open").is_some());
/// assert!(inspector.find_setter_method("open").is_some());
/// assert!(inspector.find_writable_field("width").is_some());
/// // private field, hidden by the default access level
/// assert!(inspector.find_readable_field("open").is_none());
/// ```
pub struct TypeInspector<T> {
    members: Arc<Members<T>>,
    options: InspectOptions,
}

impl<T> Clone for TypeInspector<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
            options: self.options,
        }
    }
}

impl<T: Inspect> TypeInspector<T> {
    /// Creates an inspector over [`T::members`](Inspect::members) with
    /// default options.
    #[inline]
    pub fn of() -> Self {
        Self::new(T::members())
    }
}

impl<T> TypeInspector<T> {
    /// Creates an inspector over a manually built member table.
    #[inline]
    pub fn new(members: Members<T>) -> Self {
        Self::from_shared(Arc::new(members))
    }

    /// Creates an inspector over a shared member table.
    #[inline]
    pub fn from_shared(members: Arc<Members<T>>) -> Self {
        Self {
            members,
            options: InspectOptions::new(),
        }
    }

    /// Replaces the options.
    #[inline]
    pub fn with_options(mut self, options: InspectOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &InspectOptions {
        &self.options
    }

    /// Returns the full member table, unfiltered.
    #[inline]
    pub fn members(&self) -> &Members<T> {
        &self.members
    }

    /// Returns the type path of `T`.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn visible_fields(&self) -> impl Iterator<Item = &FieldInfo<T>> {
        self.members.fields().filter(move |field| {
            self.options.includes(field.depth()) && self.options.allows(field.visibility())
        })
    }

    fn visible_methods(&self, kind: MethodKind) -> impl Iterator<Item = &MethodInfo<T>> {
        self.members.methods().filter(move |method| {
            method.kind() == kind
                && self.options.includes(method.depth())
                && self.options.allows(method.visibility())
        })
    }

    /// Returns the first getter method reading `property`.
    pub fn find_getter_method(&self, property: &str) -> Option<&MethodInfo<T>> {
        let conventions = self.options.conventions();
        self.visible_methods(MethodKind::Getter).find(|method| {
            naming::is_getter_of(method.name(), property, method.type_is::<bool>(), conventions)
        })
    }

    /// Returns the first setter method writing `property`.
    pub fn find_setter_method(&self, property: &str) -> Option<&MethodInfo<T>> {
        let conventions = self.options.conventions();
        self.visible_methods(MethodKind::Setter)
            .find(|method| naming::is_setter_of(method.name(), property, conventions))
    }

    /// Returns the first visible field named `name`.
    pub fn find_readable_field(&self, name: &str) -> Option<&FieldInfo<T>> {
        self.visible_fields().find(|field| field.name() == name)
    }

    /// Returns the first visible field named `name`, if it is mutable.
    ///
    /// A read-only field shadows same-named fields of embedded parents,
    /// the search does not go past it.
    pub fn find_writable_field(&self, name: &str) -> Option<&FieldInfo<T>> {
        self.find_readable_field(name)
            .filter(|field| field.mutability().is_mutable())
    }

    /// Returns the first field named `name` in scope.
    ///
    /// Unlike [`find_readable_field`](Self::find_readable_field), the access
    /// level is checked afterwards, so a hidden field is reported as
    /// [`AccessError::Inaccessible`] instead of [`AccessError::NoSuchField`].
    pub fn find_field(&self, name: &str) -> Result<&FieldInfo<T>, AccessError> {
        let field = self
            .members
            .fields()
            .filter(|field| self.options.includes(field.depth()))
            .find(|field| field.name() == name)
            .ok_or_else(|| AccessError::NoSuchField {
                property: name.to_string(),
                type_path: self.type_path(),
            })?;

        if self.options.allows(field.visibility()) {
            Ok(field)
        } else {
            self.find_readable_field(name)
                .ok_or_else(|| AccessError::Inaccessible {
                    property: name.to_string(),
                    type_path: self.type_path(),
                })
        }
    }

    /// Returns the names of every readable property, in scan order,
    /// without duplicates.
    ///
    /// Getter methods come first, then fields.
    pub fn readable_properties(&self) -> Vec<Cow<'static, str>> {
        let conventions = self.options.conventions();
        let methods = self
            .visible_methods(MethodKind::Getter)
            .filter_map(|m| naming::read_property(m.name(), m.type_is::<bool>(), conventions));
        let fields = self
            .visible_fields()
            .map(|field| Cow::Borrowed(field.name()));

        dedup(methods.chain(fields))
    }

    /// Returns the names of every writable property, in scan order,
    /// without duplicates.
    ///
    /// Setter methods come first, then mutable fields.
    pub fn writable_properties(&self) -> Vec<Cow<'static, str>> {
        let conventions = self.options.conventions();
        let methods = self
            .visible_methods(MethodKind::Setter)
            .filter_map(|m| naming::write_property(m.name(), conventions));
        let fields = self
            .visible_fields()
            .filter(|field| {
                self.find_writable_field(field.name())
                    .is_some_and(|first| core::ptr::eq(first, *field))
            })
            .map(|field| Cow::Borrowed(field.name()));

        dedup(methods.chain(fields))
    }
}

fn dedup(names: impl Iterator<Item = Cow<'static, str>>) -> Vec<Cow<'static, str>> {
    let mut out: Vec<Cow<'static, str>> = Vec::new();
    for name in names {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

impl<T> fmt::Debug for TypeInspector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInspector")
            .field("type_path", &self.type_path())
            .field("options", &self.options)
            .field("members", &self.members.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::info::{FieldInfo, Inspect, Members, MethodInfo, Visibility};
    use crate::inspect::{AccessLevel, Conventions, InspectOptions, ScanScope, TypeInspector};

    struct Base {
        id: u64,
        tag: u8,
    }

    impl Base {
        fn get_id(&self) -> u64 {
            self.id
        }
    }

    impl Inspect for Base {
        fn members() -> Members<Self> {
            Members::<Self>::new()
                .with_field(FieldInfo::new::<u64>("id", |b| &b.id, |b| &mut b.id))
                .with_field(FieldInfo::new::<u8>("tag", |b| &b.tag, |b| &mut b.tag))
                .with_method(MethodInfo::getter("get_id", Base::get_id))
        }
    }

    struct Item {
        tag: u8,
        name: u32,
        secret: u32,
        active: bool,
        base: Base,
    }

    impl Item {
        fn name(&self) -> u32 {
            self.name
        }

        fn get_name(&self) -> u32 {
            self.name + 1
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn is_secret(&self) -> u32 {
            self.secret
        }

        fn set_name(&mut self, name: u32) {
            self.name = name;
        }
    }

    impl Inspect for Item {
        fn members() -> Members<Self> {
            Members::<Self>::new()
                .with_field(FieldInfo::readonly::<u8>("tag", |i| &i.tag))
                .with_field(FieldInfo::new::<u32>("name", |i| &i.name, |i| &mut i.name))
                .with_field(
                    FieldInfo::<Self>::new::<u32>("secret", |i| &i.secret, |i| &mut i.secret)
                        .with_visibility(Visibility::Private),
                )
                .with_method(MethodInfo::getter("name", Item::name))
                .with_method(MethodInfo::getter("get_name", Item::get_name))
                .with_method(MethodInfo::getter("is_active", Item::is_active))
                .with_method(MethodInfo::getter("is_secret", Item::is_secret))
                .with_method(MethodInfo::setter("set_name", Item::set_name))
                .with_parent(|i| &i.base, |i| &mut i.base)
        }
    }

    #[test]
    fn first_match_in_declaration_order() {
        let inspector = TypeInspector::<Item>::of();
        let getter = inspector.find_getter_method("name").unwrap();

        assert_eq!(getter.name(), "name");
        assert_eq!(inspector.find_setter_method("name").unwrap().name(), "set_name");
        assert!(inspector.find_setter_method("active").is_none());
    }

    #[test]
    fn is_prefix_needs_bool() {
        let inspector = TypeInspector::<Item>::of();

        assert_eq!(inspector.find_getter_method("active").unwrap().name(), "is_active");
        assert!(inspector.find_getter_method("secret").is_none());
    }

    #[test]
    fn conventions_can_be_disabled() {
        let inspector = TypeInspector::<Item>::of().with_options(
            InspectOptions::new().with_conventions(Conventions::GET_PREFIX),
        );

        assert_eq!(inspector.find_getter_method("name").unwrap().name(), "get_name");
        assert!(inspector.find_getter_method("active").is_none());
        assert!(inspector.find_setter_method("name").is_none());
    }

    #[test]
    fn declared_field_comes_first() {
        let inspector = TypeInspector::<Item>::of();
        let tag = inspector.find_readable_field("tag").unwrap();

        assert_eq!(tag.depth(), 0);
        // the declared `tag` is read-only and hides the mutable parent one
        assert!(inspector.find_writable_field("tag").is_none());
        assert_eq!(inspector.find_writable_field("id").unwrap().depth(), 1);
    }

    #[test]
    fn scope_limits_inherited_members() {
        let inherited = TypeInspector::<Item>::of();
        assert_eq!(inherited.find_readable_field("id").unwrap().depth(), 1);
        assert!(inherited.find_getter_method("id").is_some());

        let declared = inherited
            .clone()
            .with_options(InspectOptions::new().with_scope(ScanScope::Declared));
        assert!(declared.find_readable_field("id").is_none());
        assert!(declared.find_getter_method("id").is_none());
        assert!(declared.find_writable_field("tag").is_none());
    }

    #[test]
    fn access_level_hides_private_fields() {
        let public = TypeInspector::<Item>::of();
        assert!(public.find_readable_field("secret").is_none());
        assert!(matches!(
            public.find_field("secret"),
            Err(crate::AccessError::Inaccessible { .. })
        ));
        assert!(matches!(
            public.find_field("missing"),
            Err(crate::AccessError::NoSuchField { .. })
        ));

        let private = public.with_options(InspectOptions::new().with_access(AccessLevel::Private));
        assert!(private.find_readable_field("secret").is_some());
        assert!(private.find_field("secret").is_ok());
    }

    #[test]
    fn property_names() {
        let inspector = TypeInspector::<Item>::of();

        let readable: Vec<_> = inspector.readable_properties();
        assert_eq!(readable, ["name", "active", "is_secret", "id", "tag"]);

        let writable: Vec<_> = inspector.writable_properties();
        assert_eq!(writable, ["name", "id"]);
    }
}
