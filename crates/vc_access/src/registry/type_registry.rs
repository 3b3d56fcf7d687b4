use core::any::TypeId;

use crate::factory::AccessorFactory;
use crate::hash::{HashMap, HashSet};
use crate::info::{Inspect, Members};
use crate::inspect::TypeInspector;
use crate::registry::TypeMeta;

// -----------------------------------------------------------------------------
// TypeRegistry

/// A store of member tables, keyed by [`TypeId`].
///
/// Registering a type builds its [`Members`] once, inspectors and factories
/// obtained from the registry then share that table.
///
/// Types can also be found by their full type path, or by their short name
/// as long as it is not [ambiguous](Self::is_ambiguous).
///
/// # Examples
///
/// ```
/// use vc_access::derive::Inspect;
/// use vc_access::registry::TypeRegistry;
///
/// #[derive(Inspect)]
/// pub struct Player {
///     pub score: u32,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Player>();
///
/// let meta = registry.get_with_type_name("Player").unwrap();
/// assert_eq!(meta.writable_properties(), ["score"]);
///
/// let factory = registry.factory::<Player>().unwrap();
/// let score = factory.getter::<u32>("score").unwrap();
/// assert_eq!(score.get(&Player { score: 3 }), Ok(3));
/// ```
pub struct TypeRegistry {
    type_meta_table: HashMap<TypeId, TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        use crate::hash::FixedHashState;

        Self {
            type_meta_table: HashMap::with_hasher(FixedHashState),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    // The type must not be registered yet.
    fn add_new_type_indices(&mut self, type_meta: &TypeMeta) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !self.ambiguous_names.contains(type_name) {
            if self.type_name_to_id.contains_key(type_name) {
                self.type_name_to_id.remove(type_name);
                self.ambiguous_names.insert(type_name);
            } else {
                self.type_name_to_id.insert(type_name, ty.id());
            }
        }

        self.type_path_to_id.insert(ty.path(), ty.id());
    }

    /// Registers `T` if it is not registered yet.
    ///
    /// Returns `true` if the type was inserted, `false` if it was already
    /// present, in which case nothing changes.
    pub fn register<T: Inspect>(&mut self) -> bool {
        if self.contains(TypeId::of::<T>()) {
            return false;
        }
        self.insert_type_meta(TypeMeta::of::<T>());
        true
    }

    /// Inserts or **overwrites** the member table of `T`.
    ///
    /// This is the registration path for types without an [`Inspect`] impl.
    #[inline]
    pub fn insert<T: 'static>(&mut self, members: Members<T>) {
        self.insert_type_meta(TypeMeta::new(members));
    }

    /// Inserts or **overwrites** a [`TypeMeta`].
    ///
    /// On overwrite, the path and name indices are kept as they are.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        let type_id = type_meta.type_id();
        if self.contains(type_id) {
            log::warn!(
                "member table of `{}` overwritten in the type registry",
                type_meta.ty().path(),
            );
        } else {
            self.add_new_type_indices(&type_meta);
        }
        self.type_meta_table.insert(type_id, type_meta);
    }

    /// Registers every non-generic type marked `#[inspect(auto_register)]`.
    ///
    /// Repeated calls are cheap and do not insert duplicates.
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform. Without the `auto_register` feature, this does nothing
    /// and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use core::any::TypeId;
    /// use vc_access::derive::Inspect;
    /// use vc_access::registry::TypeRegistry;
    ///
    /// #[derive(Inspect)]
    /// #[inspect(auto_register)]
    /// pub struct Foo {
    ///     pub value: i32,
    /// }
    ///
    /// let mut registry = TypeRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(TypeId::of::<Foo>()));
    /// ```
    #[inline]
    pub fn auto_register(&mut self) -> bool {
        Self::auto_register_internal(self)
    }

    #[cfg(feature = "auto_register")]
    fn auto_register_internal(&mut self) -> bool {
        use crate::__macro_exports::auto_register;

        // Reduce the cost of repeated calls.
        if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
            return true;
        }
        auto_register::__register_types(self);
        self.contains(TypeId::of::<auto_register::__AvailFlag>())
    }

    #[cfg(not(feature = "auto_register"))]
    #[inline(always)]
    fn auto_register_internal(&mut self) -> bool {
        false
    }

    /// Whether the type with the given [`TypeId`] is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains_key(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with the given full path,
    /// e.g. `my_crate::shapes::Circle`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the [`TypeMeta`] of the type with the given short name,
    /// e.g. `Circle`.
    ///
    /// Returns `None` if the name is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        match self.type_name_to_id.get(type_name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if the short name matches more than one registered type.
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns an inspector over the registered table of `T`.
    #[inline]
    pub fn inspector<T: 'static>(&self) -> Option<TypeInspector<T>> {
        self.get(TypeId::of::<T>())?.inspector::<T>()
    }

    /// Returns a factory over the registered table of `T`.
    #[inline]
    pub fn factory<T: 'static>(&self) -> Option<AccessorFactory<T>> {
        self.inspector::<T>().map(AccessorFactory::new)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    /// Returns an iterator over the registered [`TypeMeta`]s.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

#[cfg(feature = "std")]
pub use arc::TypeRegistryArc;

#[cfg(feature = "std")]
mod arc {
    use alloc::sync::Arc;
    use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

    use super::TypeRegistry;

    /// A [`TypeRegistry`] shared behind a lock.
    #[derive(Clone, Default)]
    pub struct TypeRegistryArc {
        /// The wrapped [`TypeRegistry`].
        pub internal: Arc<RwLock<TypeRegistry>>,
    }

    impl TypeRegistryArc {
        #[inline]
        pub fn new(registry: TypeRegistry) -> Self {
            Self {
                internal: Arc::new(RwLock::new(registry)),
            }
        }

        /// Takes a read lock on the underlying [`TypeRegistry`].
        pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
            self.internal.read().unwrap_or_else(PoisonError::into_inner)
        }

        /// Takes a write lock on the underlying [`TypeRegistry`].
        pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
            self.internal
                .write()
                .unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl core::fmt::Debug for TypeRegistryArc {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            core::fmt::Debug::fmt(&*self.read(), f)
        }
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use crate::info::{FieldInfo, Inspect, Members};
    use crate::registry::TypeRegistry;

    mod first {
        use crate::info::{FieldInfo, Inspect, Members};

        pub struct Node {
            pub id: u32,
        }

        impl Inspect for Node {
            fn members() -> Members<Self> {
                Members::<Self>::new().with_field(FieldInfo::new::<u32>("id", |n| &n.id, |n| &mut n.id))
            }
        }
    }

    mod second {
        use crate::info::{Inspect, Members};

        pub struct Node;

        impl Inspect for Node {
            fn members() -> Members<Self> {
                Members::new()
            }
        }
    }

    struct Plain {
        value: i8,
    }

    #[test]
    fn register_once() {
        let mut registry = TypeRegistry::new();

        assert!(registry.register::<first::Node>());
        assert!(!registry.register::<first::Node>());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(TypeId::of::<first::Node>()));

        let meta = registry
            .get_with_type_path(core::any::type_name::<first::Node>())
            .unwrap();
        assert_eq!(meta.readable_properties(), ["id"]);
        assert!(registry.get_with_type_name("Node").is_some());
    }

    #[test]
    fn ambiguous_names() {
        let mut registry = TypeRegistry::new();
        registry.register::<first::Node>();
        registry.register::<second::Node>();

        assert!(registry.is_ambiguous("Node"));
        assert!(registry.get_with_type_name("Node").is_none());
        assert!(
            registry
                .get_with_type_path(core::any::type_name::<second::Node>())
                .is_some()
        );
    }

    #[test]
    fn manual_insert_and_factory() {
        let mut registry = TypeRegistry::default();
        registry.insert(Members::<Plain>::new());
        registry.insert(
            Members::<Plain>::new()
                .with_field(FieldInfo::new::<i8>("value", |p| &p.value, |p| &mut p.value)),
        );
        assert_eq!(registry.len(), 1);

        let mut plain = Plain { value: 1 };
        let lens = registry.factory::<Plain>().unwrap().lens::<i8>("value").unwrap();
        lens.set(&mut plain, -1).unwrap();
        assert_eq!(plain.value, -1);

        assert!(registry.inspector::<first::Node>().is_none());
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn shared_table() {
        let mut registry = TypeRegistry::new();
        registry.register::<first::Node>();

        let a = registry.get(TypeId::of::<first::Node>()).unwrap().members::<first::Node>();
        let b = registry.inspector::<first::Node>().unwrap();
        assert!(core::ptr::eq(a.unwrap().as_ref(), b.members()));
        assert_eq!(first::Node::members().len(), b.members().len());
    }

    #[cfg(feature = "std")]
    #[test]
    fn arc_registry() {
        use crate::registry::TypeRegistryArc;

        let shared = TypeRegistryArc::default();
        shared.write().register::<first::Node>();

        let clone = shared.clone();
        assert!(clone.read().contains(TypeId::of::<first::Node>()));
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register() {
        use crate::derive::Inspect;

        #[derive(Inspect)]
        #[inspect(auto_register)]
        pub struct Marked {
            pub value: i32,
        }

        let mut registry = TypeRegistry::new();
        assert!(registry.auto_register());
        assert!(registry.contains(TypeId::of::<Marked>()));

        let len = registry.len();
        assert!(registry.auto_register());
        assert_eq!(registry.len(), len);
    }

    #[cfg(not(feature = "auto_register"))]
    #[test]
    fn auto_register_disabled() {
        assert!(!TypeRegistry::new().auto_register());
    }
}
