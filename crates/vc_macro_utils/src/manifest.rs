use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{DocumentMut, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// The emitted path must be valid from the invoking crate, so proc-macros
/// resolve it here instead of hard-coding `::vc_access`.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_access"));
/// ```
///
/// Reading the manifest is not cheap, call this once per proc-macro
/// invocation and keep the result.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_`, and the target crate
///    depends on the facade crate `vc_lens`, return `::vc_lens::short_name`
///    (e.g. `vc_access` -> `::vc_lens::access`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A missing or unreadable manifest also falls back to `::crate_name`.
///
/// ## Note
/// When a crate needs to reference itself, library code should use
/// `crate::...`, while doctests and other external code use the absolute
/// path `::crate_name`. An alias such as `extern crate self as vc_access;`
/// in the crate root makes both work.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: DocumentMut,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_lens";
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    // Try get `Cargo.toml` path.
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    // Try get `Cargo.toml` modified time.
    #[inline(never)]
    fn get_manifest_modified_time(cargo_manifest_path: &Path) -> Option<SystemTime> {
        std::fs::metadata(cargo_manifest_path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<DocumentMut> {
        std::fs::read_to_string(path).ok()?.parse().ok()
    }

    // `::name`, or `::name::module`.
    fn absolute_path(name: &str, module: Option<&str>) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Default::default(),
        };
        let span = Span::call_site();
        path.segments.push(syn::Ident::new(name, span).into());
        if let Some(module) = module {
            path.segments.push(syn::Ident::new(module, span).into());
        }
        path
    }

    #[inline]
    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            // This dependency exists in this crate
            return Some(Self::absolute_path(name, None));
        }
        if let Some(module) = name.strip_prefix(CRATE_PREFIX)
            && deps.contains_key(FACADE_NAME)
        {
            return Some(Self::absolute_path(FACADE_NAME, Some(module)));
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(Item::Table(deps)) = self.manifest.get("dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        if let Some(Item::Table(deps)) = self.manifest.get("dev-dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        Self::absolute_path(name, None)
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// This function reads and caches the caller's `Cargo.toml`. Parsing the
    /// manifest and acquiring the global cache lock are relatively expensive for
    /// proc-macros, so callers should invoke [`Manifest::shared`] sparingly (typically
    /// once per macro invocation) and cache the returned [`syn::Path`] where possible.
    ///
    /// If the manifest cannot be read, `func` sees an empty one.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Self::empty());
        };
        let Some(modified_time) = Self::get_manifest_modified_time(&manifest_path) else {
            return func(&Self::empty());
        };

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let Some(document) = Self::read_manifest(&manifest_path) else {
            return func(&Self::empty());
        };
        let manifest = Manifest {
            manifest: document,
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }

    fn empty() -> Self {
        Self {
            manifest: DocumentMut::new(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: text.parse().unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn path_string(path: &syn::Path) -> String {
        let mut out = String::new();
        if path.leading_colon.is_some() {
            out.push_str("::");
        }
        let segments: Vec<_> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        out.push_str(&segments.join("::"));
        out
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nvc_access = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_access")), "::vc_access");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dev-dependencies]\nvc_lens = { path = \"..\" }\n");
        assert_eq!(path_string(&m.get_crate_path("vc_access")), "::vc_lens::access");
    }

    #[test]
    fn fallback() {
        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(path_string(&m.get_crate_path("vc_access")), "::vc_access");
        assert_eq!(path_string(&Manifest::empty().get_crate_path("other")), "::other");
    }
}
