use alloc::vec::Vec;
use core::fmt;

use super::dispatch::Projection;
use crate::info::{FieldInfo, Inspect, MethodInfo};

// -----------------------------------------------------------------------------
// Members

/// The inspectable surface of `T`: its fields and accessor methods.
///
/// Members are kept in two segments, each in insertion order:
///
/// 1. declared members, added by [`push_field`](Self::push_field)
///    and [`push_method`](Self::push_method);
/// 2. inherited members, added by [`push_parent`](Self::push_parent).
///
/// Iteration always yields declared members first, this is the scan
/// order used by [`TypeInspector`](crate::TypeInspector).
///
/// Usually generated by [`#[derive(Inspect)]`](crate::derive::Inspect),
/// but can also be built by hand.
///
/// # Examples
///
/// ```
/// use vc_access::info::{FieldInfo, Members, MethodInfo};
///
/// struct Celsius {
///     value: f32,
/// }
///
/// impl Celsius {
///     fn fahrenheit(&self) -> f32 { self.value * 1.8 + 32.0 }
/// }
///
/// let members = Members::<Celsius>::new()
///     .with_field(FieldInfo::new::<f32>("value", |c| &c.value, |c| &mut c.value))
///     .with_method(MethodInfo::getter("fahrenheit", Celsius::fahrenheit));
///
/// assert_eq!(members.fields().count(), 1);
/// assert_eq!(members.methods().count(), 1);
/// assert!(members.field("value").is_some());
/// ```
pub struct Members<T> {
    fields: Vec<FieldInfo<T>>,
    methods: Vec<MethodInfo<T>>,
    inherited_fields: Vec<FieldInfo<T>>,
    inherited_methods: Vec<MethodInfo<T>>,
}

impl<T> Default for Members<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Members<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            methods: self.methods.clone(),
            inherited_fields: self.inherited_fields.clone(),
            inherited_methods: self.inherited_methods.clone(),
        }
    }
}

impl<T> Members<T> {
    /// Creates an empty table.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fields: Vec::new(),
            methods: Vec::new(),
            inherited_fields: Vec::new(),
            inherited_methods: Vec::new(),
        }
    }

    /// Creates an empty table with room for `fields` declared fields
    /// and `methods` declared methods.
    pub fn with_capacity(fields: usize, methods: usize) -> Self {
        Self {
            fields: Vec::with_capacity(fields),
            methods: Vec::with_capacity(methods),
            inherited_fields: Vec::new(),
            inherited_methods: Vec::new(),
        }
    }

    /// Appends a declared field.
    pub fn push_field(&mut self, field: FieldInfo<T>) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        if self.fields.iter().any(|f| f.name() == field.name()) {
            log::warn!(
                "field `{}` registered twice on `{}`, the first one wins",
                field.name(),
                core::any::type_name::<T>(),
            );
        }
        self.fields.push(field);
    }

    /// Appends a declared method.
    pub fn push_method(&mut self, method: MethodInfo<T>) {
        #[cfg(all(debug_assertions, feature = "debug"))]
        if self
            .methods
            .iter()
            .any(|m| m.name() == method.name() && m.kind() == method.kind())
        {
            log::warn!(
                "method `{}` registered twice on `{}`, the first one wins",
                method.name(),
                core::any::type_name::<T>(),
            );
        }
        self.methods.push(method);
    }

    /// Builder form of [`push_field`](Self::push_field).
    #[inline]
    pub fn with_field(mut self, field: FieldInfo<T>) -> Self {
        self.push_field(field);
        self
    }

    /// Builder form of [`push_method`](Self::push_method).
    #[inline]
    pub fn with_method(mut self, method: MethodInfo<T>) -> Self {
        self.push_method(method);
        self
    }

    /// Returns the first field named `name`, declared or inherited,
    /// regardless of visibility.
    pub fn field(&self, name: &str) -> Option<&FieldInfo<T>> {
        self.fields().find(|field| field.name() == name)
    }

    /// Returns all fields, declared first.
    pub fn fields(&self) -> impl Iterator<Item = &FieldInfo<T>> {
        self.fields.iter().chain(self.inherited_fields.iter())
    }

    /// Returns all methods, declared first.
    pub fn methods(&self) -> impl Iterator<Item = &MethodInfo<T>> {
        self.methods.iter().chain(self.inherited_methods.iter())
    }

    /// Returns the number of members, including inherited ones.
    pub fn len(&self) -> usize {
        self.fields.len()
            + self.methods.len()
            + self.inherited_fields.len()
            + self.inherited_methods.len()
    }

    /// Returns `true` if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Members<T> {
    /// Appends every member of the embedded parent `P` as inherited members.
    ///
    /// `project` and `project_mut` reach the parent from `T`. The parent's
    /// own order (declared, then inherited) is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::info::{FieldInfo, Inspect, Members};
    ///
    /// struct Base {
    ///     id: u64,
    /// }
    ///
    /// impl Inspect for Base {
    ///     fn members() -> Members<Self> {
    ///         Members::<Self>::new().with_field(FieldInfo::new::<u64>("id", |b| &b.id, |b| &mut b.id))
    ///     }
    /// }
    ///
    /// struct User {
    ///     base: Base,
    /// }
    ///
    /// let members = Members::<User>::new().with_parent(|u| &u.base, |u| &mut u.base);
    /// let id = members.field("id").unwrap();
    ///
    /// assert_eq!(id.depth(), 1);
    /// ```
    pub fn push_parent<P: Inspect>(
        &mut self,
        project: fn(&T) -> &P,
        project_mut: fn(&mut T) -> &mut P,
    ) {
        let projection = Projection {
            project,
            project_mut,
        };
        let parent = P::members();

        self.inherited_fields.extend(
            parent
                .fields()
                .map(|field| FieldInfo::<T>::project(field, projection)),
        );
        self.inherited_methods.extend(
            parent
                .methods()
                .map(|method| MethodInfo::<T>::project(method, projection)),
        );
    }

    /// Builder form of [`push_parent`](Self::push_parent).
    #[inline]
    pub fn with_parent<P: Inspect>(
        mut self,
        project: fn(&T) -> &P,
        project_mut: fn(&mut T) -> &mut P,
    ) -> Self {
        self.push_parent(project, project_mut);
        self
    }
}

impl<T> fmt::Debug for Members<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Members")
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .field("inherited_fields", &self.inherited_fields)
            .field("inherited_methods", &self.inherited_methods)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::info::{FieldInfo, Inspect, Members, MethodInfo, MethodKind};

    struct Base {
        id: u64,
    }

    impl Base {
        fn label(&self) -> u64 {
            self.id * 10
        }
    }

    impl Inspect for Base {
        fn members() -> Members<Self> {
            Members::<Self>::new()
                .with_field(FieldInfo::new::<u64>("id", |b| &b.id, |b| &mut b.id))
                .with_method(MethodInfo::getter("label", Base::label))
        }
    }

    struct Derived {
        name: u8,
        base: Base,
    }

    fn derived() -> Members<Derived> {
        Members::<Derived>::new()
            .with_parent(|d| &d.base, |d| &mut d.base)
            .with_field(FieldInfo::new::<u8>("name", |d| &d.name, |d| &mut d.name))
    }

    #[test]
    fn declared_before_inherited() {
        let members = derived();
        let names: alloc::vec::Vec<_> = members.fields().map(FieldInfo::name).collect();

        // `with_parent` was called first, the declared field still leads.
        assert_eq!(names, ["name", "id"]);
        assert_eq!(members.len(), 3);
        assert_eq!(members.methods().next().unwrap().kind(), MethodKind::Getter);
        assert_eq!(members.methods().next().unwrap().depth(), 1);
    }

    #[test]
    fn projected_field_reads_parent() {
        let members = derived();
        let mut value = Derived {
            name: 1,
            base: Base { id: 7 },
        };

        let id = members.field("id").unwrap();
        assert_eq!(id.access().read(&value).downcast_ref::<u64>(), Some(&7));

        let slot = id.access().write(&mut value).unwrap();
        *slot.downcast_mut::<u64>().unwrap() = 9;
        assert_eq!(value.base.id, 9);
    }
}
