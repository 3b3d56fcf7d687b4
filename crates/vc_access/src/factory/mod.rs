//! Bound accessors and the factory that resolves them.
//!
//! ## Menu
//!
//! - [`AccessorFactory`]: resolves a property name of `T` into a bound
//!   accessor, trying accessor methods first and fields second.
//! - [`PropertyGetter`], [`PropertySetter`], [`PropertyLens`],
//!   [`PropertyAccessor`]: the bound accessors it returns.
//! - [`FieldAccessor`]: builds a [`BoundField`], which only uses fields.
//!
//! Resolution happens once, when the accessor is built. A bound accessor
//! never searches again and can be reused on any number of instances.

mod bound;
mod field;
mod strategy;

pub use bound::{PropertyAccessor, PropertyGetter, PropertyLens, PropertySetter};
pub use field::{BoundField, FieldAccessor};

use alloc::string::ToString;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use strategy::{ReadStrategy, WriteStrategy};

use crate::AccessError;
use crate::info::{Inspect, MethodBody, Type};
use crate::inspect::{InspectOptions, TypeInspector};

/// Checks that a member declared with type `found` can be accessed as `V`.
pub(crate) fn check_type<T, V: Any>(property: &str, found: Type) -> Result<(), AccessError> {
    if found.is::<V>() {
        Ok(())
    } else {
        Err(AccessError::TypeMismatch {
            property: property.to_string(),
            type_path: core::any::type_name::<T>(),
            expected: core::any::type_name::<V>(),
            found: found.path(),
        })
    }
}

// -----------------------------------------------------------------------------
// AccessorFactory

/// Resolves property names of `T` into bound accessors.
///
/// For every request, accessor methods are searched first. Only if none
/// matches is a field considered. The declared type of the chosen member
/// must be exactly `V`.
///
/// Nothing is cached: each call resolves again, and the same request always
/// yields an accessor with the same behavior.
///
/// # Examples
///
/// ```
/// use vc_access::{AccessorFactory, derive::{Inspect, inspect_methods}};
///
/// #[derive(Inspect)]
/// #[inspect(methods)]
/// pub struct Account {
///     pub owner: String,
///     balance: i64,
/// }
///
/// #[inspect_methods]
/// impl Account {
///     pub fn get_balance(&self) -> i64 { self.balance }
/// }
///
/// let factory = AccessorFactory::<Account>::of();
/// let account = Account { owner: "ada".into(), balance: 10 };
///
/// let balance = factory.accessor::<i64>("balance").unwrap();
/// assert_eq!(balance.get(&account), Ok(10));
/// assert!(!balance.is_mutable());
///
/// let owner = factory.lens::<String>("owner").unwrap();
/// assert_eq!(owner.get(&account).unwrap(), "ada");
///
/// assert!(factory.setter::<i64>("balance").is_err());
/// ```
pub struct AccessorFactory<T> {
    inspector: TypeInspector<T>,
}

impl<T> Clone for AccessorFactory<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inspector: self.inspector.clone(),
        }
    }
}

impl<T: Inspect> AccessorFactory<T> {
    /// Creates a factory over [`T::members`](Inspect::members) with default
    /// options.
    #[inline]
    pub fn of() -> Self {
        Self::new(TypeInspector::of())
    }
}

impl<T> AccessorFactory<T> {
    #[inline]
    pub fn new(inspector: TypeInspector<T>) -> Self {
        Self { inspector }
    }

    /// Replaces the options of the underlying inspector.
    #[inline]
    pub fn with_options(self, options: InspectOptions) -> Self {
        Self::new(self.inspector.with_options(options))
    }

    #[inline]
    pub fn inspector(&self) -> &TypeInspector<T> {
        &self.inspector
    }
}

impl<T: Any> AccessorFactory<T> {
    fn resolve_read<V: Any>(&self, property: &str) -> Result<ReadStrategy<T>, AccessError> {
        let inspector = &self.inspector;

        if let Some(method) = inspector.find_getter_method(property)
            && let MethodBody::Getter(call) = method.body()
        {
            check_type::<T, V>(property, method.ty())?;
            log::trace!(
                "`{}::{}` read through method `{}`",
                inspector.type_path(),
                property,
                method.name(),
            );
            return Ok(ReadStrategy::Method(call.clone()));
        }

        if let Some(field) = inspector.find_readable_field(property) {
            check_type::<T, V>(property, field.ty())?;
            log::trace!(
                "`{}::{}` read through field (depth {})",
                inspector.type_path(),
                property,
                field.depth(),
            );
            return Ok(ReadStrategy::Field(field.access().clone()));
        }

        Err(AccessError::NotReadable {
            property: property.to_string(),
            type_path: inspector.type_path(),
        })
    }

    fn resolve_write<V: Any>(&self, property: &str) -> Result<WriteStrategy<T>, AccessError> {
        let inspector = &self.inspector;

        if let Some(method) = inspector.find_setter_method(property)
            && let MethodBody::Setter(call) = method.body()
        {
            check_type::<T, V>(property, method.ty())?;
            log::trace!(
                "`{}::{}` written through method `{}`",
                inspector.type_path(),
                property,
                method.name(),
            );
            return Ok(WriteStrategy::Method(call.clone()));
        }

        if let Some(field) = inspector.find_writable_field(property) {
            check_type::<T, V>(property, field.ty())?;
            log::trace!(
                "`{}::{}` written through field (depth {})",
                inspector.type_path(),
                property,
                field.depth(),
            );
            return Ok(WriteStrategy::Field(field.access().clone()));
        }

        Err(AccessError::NotWritable {
            property: property.to_string(),
            type_path: inspector.type_path(),
        })
    }

    /// Resolves a reader for `property`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::NotReadable`] if neither a getter method nor a
    ///   readable field matches.
    /// - [`AccessError::TypeMismatch`] if the match is not declared as `V`.
    pub fn getter<V: Clone + Any>(
        &self,
        property: &str,
    ) -> Result<PropertyGetter<T, V>, AccessError> {
        let strategy = self.resolve_read::<V>(property)?;
        let mutable = self.resolve_write::<V>(property).is_ok();
        Ok(PropertyGetter::new(Arc::from(property), strategy, mutable))
    }

    /// Resolves a writer for `property`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::NotWritable`] if neither a setter method nor a
    ///   writable field matches.
    /// - [`AccessError::TypeMismatch`] if the match is not declared as `V`.
    pub fn setter<V: Clone + Any>(
        &self,
        property: &str,
    ) -> Result<PropertySetter<T, V>, AccessError> {
        let strategy = self.resolve_write::<V>(property)?;
        Ok(PropertySetter::new(Arc::from(property), strategy))
    }

    /// Resolves a reader and a writer for `property`.
    ///
    /// Both halves are resolved independently, e.g. a getter method can be
    /// paired with a field write. Fails with the error of the first half
    /// that fails.
    pub fn lens<V: Clone + Any>(&self, property: &str) -> Result<PropertyLens<T, V>, AccessError> {
        let name: Arc<str> = Arc::from(property);
        let read = self.resolve_read::<V>(property)?;
        let write = self.resolve_write::<V>(property)?;

        Ok(PropertyLens::new(
            PropertyGetter::new(name.clone(), read, true),
            PropertySetter::new(name, write),
        ))
    }

    /// Resolves a named accessor for `property`.
    ///
    /// The reader is required, the writer is optional: if nothing writes
    /// `property` the accessor is immutable.
    ///
    /// # Errors
    ///
    /// Same as [`getter`](Self::getter). A writer declared with another
    /// type than `V` fails with [`AccessError::TypeMismatch`] as well.
    pub fn accessor<V: Clone + Any>(
        &self,
        property: &str,
    ) -> Result<PropertyAccessor<T, V>, AccessError> {
        let name: Arc<str> = Arc::from(property);
        let read = self.resolve_read::<V>(property)?;
        let write = match self.resolve_write::<V>(property) {
            Ok(write) => Some(write),
            Err(AccessError::NotWritable { .. }) => None,
            Err(err) => return Err(err),
        };

        let getter = PropertyGetter::new(name.clone(), read, write.is_some());
        let setter = write.map(|write| PropertySetter::new(name, write));
        Ok(PropertyAccessor::new(getter, setter))
    }
}

impl<T> fmt::Debug for AccessorFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorFactory")
            .field("inspector", &self.inspector)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::any::Any;

    use crate::AccessError;
    use crate::factory::{AccessorFactory, FieldAccessor};
    use crate::info::{FieldInfo, Inspect, Members, MethodInfo, Type, Visibility};
    use crate::inspect::{AccessLevel, InspectOptions, ScanScope, TypeInspector};
    use crate::lens::{Accessor, Getter, Setter};

    // A point with a public `x` field and a private `y` behind accessors.
    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        fn get_y(&self) -> i32 {
            self.y
        }

        fn set_y(&mut self, y: i32) {
            self.y = y;
        }
    }

    impl Inspect for Point {
        fn members() -> Members<Self> {
            Members::<Self>::new()
                .with_field(FieldInfo::new::<i32>("x", |p| &p.x, |p| &mut p.x))
                .with_field(
                    FieldInfo::<Self>::new::<i32>("y", |p| &p.y, |p| &mut p.y)
                        .with_visibility(Visibility::Private),
                )
                .with_method(MethodInfo::getter("get_y", Point::get_y))
                .with_method(MethodInfo::setter("set_y", Point::set_y))
        }
    }

    // `label` has both a getter and a public field, the getter decorates.
    struct Tagged {
        label: String,
        id: u32,
        base: Point,
    }

    impl Tagged {
        fn get_label(&self) -> String {
            let mut label = String::from("#");
            label.push_str(&self.label);
            label
        }
    }

    impl Inspect for Tagged {
        fn members() -> Members<Self> {
            Members::<Self>::new()
                .with_field(FieldInfo::new::<String>(
                    "label",
                    |t| &t.label,
                    |t| &mut t.label,
                ))
                .with_field(FieldInfo::readonly::<u32>("id", |t| &t.id))
                .with_method(MethodInfo::getter("get_label", Tagged::get_label))
                .with_parent(|t| &t.base, |t| &mut t.base)
        }
    }

    fn tagged() -> Tagged {
        Tagged {
            label: "a".to_string(),
            id: 4,
            base: Point { x: 1, y: 2 },
        }
    }

    #[test]
    fn field_and_method_access() {
        let factory = AccessorFactory::<Point>::of();
        let mut p = Point { x: 3, y: 4 };

        let x = factory.getter::<i32>("x").unwrap();
        assert_eq!(x.get(&p), Ok(3));
        assert!(!x.is_method());
        assert!(x.is_mutable());

        let y = factory.lens::<i32>("y").unwrap();
        assert_eq!(y.set(&mut p, 5), Ok(5));
        assert_eq!(p.y, 5);
        assert_eq!(y.get(&p), Ok(5));
        assert!(y.getter().is_method());
        assert!(y.setter().is_method());
    }

    #[test]
    fn missing_property() {
        let factory = AccessorFactory::<Point>::of();

        let err = factory.getter::<i32>("z").unwrap_err();
        assert_eq!(
            err,
            AccessError::NotReadable {
                property: "z".to_string(),
                type_path: core::any::type_name::<Point>(),
            }
        );

        let err = factory.setter::<i32>("z").unwrap_err();
        assert!(matches!(err, AccessError::NotWritable { .. }));
        assert!(err.to_string().contains("writable property or field `z`"));

        assert!(factory.lens::<i32>("z").unwrap_err().is_resolution());
    }

    #[test]
    fn methods_take_precedence() {
        let factory = AccessorFactory::<Tagged>::of();
        let mut value = tagged();

        let label = factory.getter::<String>("label").unwrap();
        assert_eq!(label.get(&value).unwrap(), "#a");

        // no setter method, the write half falls back to the field
        let lens = factory.lens::<String>("label").unwrap();
        assert!(lens.getter().is_method());
        assert!(!lens.setter().is_method());
        lens.set(&mut value, "b".to_string()).unwrap();
        assert_eq!(value.label, "b");
        assert_eq!(lens.get(&value).unwrap(), "#b");
    }

    #[test]
    fn resolution_is_idempotent() {
        let factory = AccessorFactory::<Tagged>::of();
        let value = tagged();

        let first = factory.getter::<String>("label").unwrap();
        let second = factory.getter::<String>("label").unwrap();
        assert_eq!(first.get(&value), second.get(&value));
        assert_eq!(first.is_method(), second.is_method());
    }

    #[test]
    fn reusable_across_instances() {
        let setter = AccessorFactory::<Point>::of().setter::<i32>("x").unwrap();
        let mut points: Vec<Point> = (0..3).map(|i| Point { x: i, y: 0 }).collect();

        for point in &mut points {
            setter.set(point, 7).unwrap();
        }
        assert!(points.iter().all(|p| p.x == 7));
    }

    #[test]
    fn readonly_field() {
        let factory = AccessorFactory::<Tagged>::of();
        let mut value = tagged();

        let id = factory.getter::<u32>("id").unwrap();
        assert!(!id.is_mutable());
        assert!(matches!(
            factory.setter::<u32>("id"),
            Err(AccessError::NotWritable { .. })
        ));

        let accessor = factory.accessor::<u32>("id").unwrap();
        assert!(!accessor.is_mutable());
        assert!(accessor.setter().is_none());
        assert!(matches!(
            accessor.set(&mut value, 1),
            Err(AccessError::Immutable { .. })
        ));
        assert_eq!(value.id, 4);
    }

    #[test]
    fn type_mismatch() {
        let factory = AccessorFactory::<Point>::of();

        let err = factory.getter::<i64>("x").unwrap_err();
        assert!(err.is_resolution());
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                property: "x".to_string(),
                type_path: core::any::type_name::<Point>(),
                expected: "i64",
                found: "i32",
            }
        );
        assert!(matches!(
            factory.setter::<u8>("y"),
            Err(AccessError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn inherited_members() {
        let factory = AccessorFactory::<Tagged>::of();
        let mut value = tagged();

        let y = factory.lens::<i32>("y").unwrap();
        y.set(&mut value, 9).unwrap();
        assert_eq!(value.base.y, 9);
        assert_eq!(factory.getter::<i32>("x").unwrap().get(&value), Ok(1));

        let declared =
            factory.with_options(InspectOptions::new().with_scope(ScanScope::Declared));
        assert!(declared.getter::<i32>("x").is_err());
        assert!(declared.lens::<i32>("y").is_err());
    }

    #[test]
    fn access_level() {
        let public = AccessorFactory::<Point>::new(
            TypeInspector::of().with_options(
                InspectOptions::new().with_conventions(crate::inspect::Conventions::BARE),
            ),
        );
        // `get_y` no longer matches and the field is private
        assert!(public.getter::<i32>("y").is_err());

        let private = public.with_options(
            InspectOptions::new()
                .with_access(AccessLevel::Private)
                .with_conventions(crate::inspect::Conventions::BARE),
        );
        let y = private.getter::<i32>("y").unwrap();
        assert!(!y.is_method());
        assert_eq!(y.get(&Point { x: 0, y: 2 }), Ok(2));
    }

    #[test]
    fn dyn_targets() {
        let factory = AccessorFactory::<Point>::of();
        let lens = factory.lens::<i32>("y").unwrap();

        let mut p = Point { x: 0, y: 1 };
        let erased: &mut dyn Any = &mut p;
        assert_eq!(lens.set_dyn(erased, 3), Ok(3));
        assert_eq!(lens.get_dyn(&p), Ok(3));

        let mut other = 5_u8;
        assert_eq!(
            lens.set_dyn(&mut other, 1),
            Err(AccessError::IncompatibleTarget {
                type_path: core::any::type_name::<Point>(),
            })
        );
        assert!(lens.get_dyn(&other).unwrap_err().is_invocation());
    }

    #[test]
    fn field_accessor() {
        let x = FieldAccessor::for_field("x").of_type::<Point, i32>().unwrap();
        let mut p = Point { x: 1, y: 2 };

        assert_eq!(x.set(&mut p, 4), Ok(4));
        assert_eq!(x.get(&p), Ok(4));
        assert!(x.is_mutable());

        // `y` has accessors, but this builder only looks at fields
        let y = FieldAccessor::for_field("y").of_type::<Point, i32>();
        assert!(matches!(y, Err(AccessError::Inaccessible { .. })));

        let private = TypeInspector::<Point>::of()
            .with_options(InspectOptions::new().with_access(AccessLevel::Private));
        let y = FieldAccessor::for_field("y")
            .in_inspector::<Point, i32>(&private)
            .unwrap();
        assert_eq!(y.get(&p), Ok(2));

        let id = FieldAccessor::for_field("id").of_type::<Tagged, u32>().unwrap();
        assert!(!id.is_mutable());
    }

    // Read-only `tag` declared over a mutable `tag` in the parent.
    struct Shadowed {
        tag: u8,
        base: Point,
        level: u16,
    }

    struct Tag {
        tag: u8,
    }

    impl Inspect for Tag {
        fn members() -> Members<Self> {
            Members::<Self>::new().with_field(FieldInfo::new::<u8>("tag", |t| &t.tag, |t| &mut t.tag))
        }
    }

    impl Shadowed {
        fn set_level(&mut self, level: u8) {
            self.level = u16::from(level);
        }
    }

    struct WithTag {
        inner: Shadowed,
        tag: Tag,
    }

    impl Inspect for Shadowed {
        fn members() -> Members<Self> {
            Members::<Self>::new()
                .with_field(FieldInfo::readonly::<u8>("tag", |s| &s.tag))
                .with_field(FieldInfo::readonly::<u16>("level", |s| &s.level))
                .with_method(MethodInfo::setter("set_level", Shadowed::set_level))
                .with_parent(|s| &s.base, |s| &mut s.base)
        }
    }

    impl Inspect for WithTag {
        fn members() -> Members<Self> {
            Members::<Self>::new()
                .with_parent(|w| &w.inner, |w| &mut w.inner)
                .with_parent(|w| &w.tag, |w| &mut w.tag)
        }
    }

    #[test]
    fn readonly_field_shadows_parent() {
        let factory = AccessorFactory::<WithTag>::of();
        let mut value = WithTag {
            inner: Shadowed {
                tag: 1,
                base: Point { x: 0, y: 0 },
                level: 0,
            },
            tag: Tag { tag: 2 },
        };

        // the first `tag` in scan order is read-only, the later mutable one is hidden
        let tag = factory.accessor::<u8>("tag").unwrap();
        assert!(!tag.is_mutable());
        assert_eq!(tag.get(&value), Ok(1));
        assert!(matches!(
            tag.set(&mut value, 9),
            Err(AccessError::Immutable { .. })
        ));
        assert!(matches!(
            factory.lens::<u8>("tag"),
            Err(AccessError::NotWritable { .. })
        ));
        assert_eq!(value.tag.tag, 2);
        assert!(!factory.inspector().writable_properties().contains(&"tag".into()));
    }

    #[test]
    fn accessor_reports_mistyped_setter() {
        let factory = AccessorFactory::<Shadowed>::of();

        let err = factory.accessor::<u16>("level").unwrap_err();
        assert!(matches!(err, AccessError::TypeMismatch { found: "u8", .. }));
        assert!(factory.getter::<u16>("level").is_ok());
    }

    fn assert_send_sync<S: Send + Sync>() {}

    #[test]
    fn accessors_are_send_sync() {
        assert_send_sync::<AccessorFactory<Point>>();
        assert_send_sync::<TypeInspector<Point>>();
        assert_send_sync::<crate::factory::PropertyGetter<Point, i32>>();
        assert_send_sync::<crate::factory::PropertySetter<Point, i32>>();
        assert_send_sync::<crate::factory::PropertyLens<Point, String>>();
        assert_send_sync::<crate::factory::PropertyAccessor<Point, String>>();
        assert_send_sync::<crate::factory::BoundField<Point, i32>>();
        assert_send_sync::<Members<Point>>();
    }

    fn describe<A: Accessor<T, V>, T, V>(accessor: &A) -> (&str, Type, bool) {
        (
            accessor.property_name(),
            accessor.value_type(),
            accessor.is_mutable(),
        )
    }

    fn copy_between<T, V>(
        from: &impl Getter<T, V>,
        to: &impl Setter<T, V>,
        src: &T,
        dst: &mut T,
    ) -> Result<V, AccessError> {
        to.set(dst, from.get(src)?)
    }

    #[test]
    fn lens_traits() {
        let factory = AccessorFactory::<Point>::of();
        let accessor = factory.accessor::<i32>("y").unwrap();

        let (name, ty, mutable) = describe(&accessor);
        assert_eq!(name, "y");
        assert_eq!(ty, Type::of::<i32>());
        assert!(mutable);

        let x = factory.getter::<i32>("x").unwrap();
        let src = Point { x: 8, y: 0 };
        let mut dst = Point { x: 0, y: 0 };
        assert_eq!(copy_between(&x, &accessor, &src, &mut dst), Ok(8));
        assert_eq!(dst.y, 8);
    }
}
