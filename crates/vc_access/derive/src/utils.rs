use proc_macro2::TokenStream;
use syn::{GenericArgument, Generics, PathArguments, ReturnType, Type, parse_quote};

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Rejects lifetime parameters, member tables need `'static` types.
pub(crate) fn reject_lifetimes(generics: &Generics) -> syn::Result<()> {
    match generics.lifetimes().next() {
        Some(lifetime) => Err(syn::Error::new_spanned(
            lifetime,
            "`Inspect` requires a `'static` type, lifetime parameters are not supported",
        )),
        None => Ok(()),
    }
}

/// Adds `T: 'static` for every type parameter.
pub(crate) fn with_static_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();

    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause.predicates.push(parse_quote!(#ident: 'static));
    }
    generics
}

/// Whether a value of type `ty` is owned: no references, no `impl Trait`
/// and no lifetime other than `'static`.
pub(crate) fn is_owned_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => {
            path.qself.as_ref().is_none_or(|qself| is_owned_type(&qself.ty))
                && path.path.segments.iter().all(|segment| match &segment.arguments {
                    PathArguments::None => true,
                    PathArguments::AngleBracketed(args) => args.args.iter().all(|arg| match arg {
                        GenericArgument::Lifetime(lifetime) => lifetime.ident == "static",
                        GenericArgument::Type(ty) => is_owned_type(ty),
                        _ => true,
                    }),
                    PathArguments::Parenthesized(args) => {
                        args.inputs.iter().all(is_owned_type)
                            && match &args.output {
                                ReturnType::Default => true,
                                ReturnType::Type(_, ty) => is_owned_type(ty),
                            }
                    }
                })
        }
        Type::Tuple(tuple) => tuple.elems.iter().all(is_owned_type),
        Type::Array(array) => is_owned_type(&array.elem),
        Type::Paren(paren) => is_owned_type(&paren.elem),
        Type::Group(group) => is_owned_type(&group.elem),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_owned_type;

    #[test]
    fn owned_types() {
        assert!(is_owned_type(&syn::parse_quote!(u32)));
        assert!(is_owned_type(&syn::parse_quote!(Vec<(String, Self)>)));
        assert!(is_owned_type(&syn::parse_quote!(Cow<'static, str>)));
        assert!(!is_owned_type(&syn::parse_quote!(&str)));
        assert!(!is_owned_type(&syn::parse_quote!(Cow<'_, str>)));
        assert!(!is_owned_type(&syn::parse_quote!(impl Iterator<Item = u8>)));
        assert!(!is_owned_type(&syn::parse_quote!([&'static str])));
    }
}
