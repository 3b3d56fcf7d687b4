//! Accessor naming conventions.
//!
//! Matching never allocates, only [`read_property`] and [`write_property`]
//! may build a new string when a camel-case name has to be decapitalized.

use alloc::borrow::Cow;
use alloc::string::String;

use super::Conventions;

// -----------------------------------------------------------------------------
// Matching

/// Whether the getter `method` reads `property`.
pub(crate) fn is_getter_of(
    method: &str,
    property: &str,
    is_bool: bool,
    conventions: Conventions,
) -> bool {
    if property.is_empty() {
        return false;
    }

    (conventions.contains(Conventions::GET_PREFIX) && snake_eq(method, "get_", property))
        || (conventions.contains(Conventions::GET_CAMEL) && camel_eq(method, "get", property))
        || (conventions.contains(Conventions::BARE) && method == property)
        || (is_bool
            && conventions.contains(Conventions::IS_PREFIX)
            && (snake_eq(method, "is_", property) || camel_eq(method, "is", property)))
}

/// Whether the setter `method` writes `property`.
pub(crate) fn is_setter_of(method: &str, property: &str, conventions: Conventions) -> bool {
    if property.is_empty() {
        return false;
    }

    (conventions.contains(Conventions::SET_PREFIX) && snake_eq(method, "set_", property))
        || (conventions.contains(Conventions::SET_CAMEL) && camel_eq(method, "set", property))
}

#[inline]
fn snake_eq(method: &str, prefix: &str, property: &str) -> bool {
    method.strip_prefix(prefix) == Some(property)
}

/// `getFoo` matches `foo` and `Foo`.
fn camel_eq(method: &str, prefix: &str, property: &str) -> bool {
    let Some(rest) = method.strip_prefix(prefix) else {
        return false;
    };

    let mut rest = rest.chars();
    let mut property = property.chars();

    match (rest.next(), property.next()) {
        (Some(head), Some(first)) => {
            head.is_uppercase()
                && first.to_uppercase().eq(head.to_uppercase())
                && rest.as_str() == property.as_str()
        }
        _ => false,
    }
}

// -----------------------------------------------------------------------------
// Property names

/// Returns the property read by the getter `method`, if any convention applies.
///
/// Prefixed conventions are tried before [`Conventions::BARE`].
pub(crate) fn read_property(
    method: &'static str,
    is_bool: bool,
    conventions: Conventions,
) -> Option<Cow<'static, str>> {
    if conventions.contains(Conventions::GET_PREFIX)
        && let Some(name) = strip_snake(method, "get_")
    {
        return Some(Cow::Borrowed(name));
    }
    if conventions.contains(Conventions::GET_CAMEL)
        && let Some(name) = strip_camel(method, "get")
    {
        return Some(Cow::Owned(decapitalize(name)));
    }
    if is_bool && conventions.contains(Conventions::IS_PREFIX) {
        if let Some(name) = strip_snake(method, "is_") {
            return Some(Cow::Borrowed(name));
        }
        if let Some(name) = strip_camel(method, "is") {
            return Some(Cow::Owned(decapitalize(name)));
        }
    }
    if conventions.contains(Conventions::BARE) && !method.is_empty() {
        return Some(Cow::Borrowed(method));
    }
    None
}

/// Returns the property written by the setter `method`, if any convention applies.
pub(crate) fn write_property(
    method: &'static str,
    conventions: Conventions,
) -> Option<Cow<'static, str>> {
    if conventions.contains(Conventions::SET_PREFIX)
        && let Some(name) = strip_snake(method, "set_")
    {
        return Some(Cow::Borrowed(name));
    }
    if conventions.contains(Conventions::SET_CAMEL)
        && let Some(name) = strip_camel(method, "set")
    {
        return Some(Cow::Owned(decapitalize(name)));
    }
    None
}

#[inline]
fn strip_snake<'a>(method: &'a str, prefix: &str) -> Option<&'a str> {
    method.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

#[inline]
fn strip_camel<'a>(method: &'a str, prefix: &str) -> Option<&'a str> {
    method
        .strip_prefix(prefix)
        .filter(|rest| rest.chars().next().is_some_and(char::is_uppercase))
}

/// `Foo` => `foo`, but `URL` stays `URL`.
fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            String::from(name)
        }
        (Some(first), _) => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_lowercase());
            out.push_str(&name[first.len_utf8()..]);
            out
        }
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: Conventions = Conventions::all();

    #[test]
    fn getter_names() {
        assert!(is_getter_of("get_x", "x", false, ALL));
        assert!(is_getter_of("getX", "x", false, ALL));
        assert!(is_getter_of("x", "x", false, ALL));
        assert!(!is_getter_of("getx", "x", false, ALL));
        assert!(!is_getter_of("get_", "", false, ALL));

        assert!(is_getter_of("is_open", "open", true, ALL));
        assert!(is_getter_of("isOpen", "open", true, ALL));
        assert!(!is_getter_of("is_open", "open", false, ALL));
    }

    #[test]
    fn disabled_conventions() {
        let only_snake = Conventions::GET_PREFIX | Conventions::SET_PREFIX;

        assert!(is_getter_of("get_x", "x", false, only_snake));
        assert!(!is_getter_of("getX", "x", false, only_snake));
        assert!(!is_getter_of("x", "x", false, only_snake));
        assert!(!is_setter_of("setX", "x", only_snake));
        assert!(is_setter_of("set_x", "x", only_snake));
    }

    #[test]
    fn property_names() {
        assert_eq!(read_property("get_x", false, ALL).as_deref(), Some("x"));
        assert_eq!(read_property("getName", false, ALL).as_deref(), Some("name"));
        assert_eq!(read_property("getURL", false, ALL).as_deref(), Some("URL"));
        assert_eq!(read_property("isOpen", true, ALL).as_deref(), Some("open"));
        assert_eq!(read_property("isOpen", false, ALL).as_deref(), Some("isOpen"));
        assert_eq!(read_property("len", false, Conventions::GET_PREFIX), None);

        assert_eq!(write_property("setName", ALL).as_deref(), Some("name"));
        assert_eq!(write_property("reset", ALL), None);
    }
}
