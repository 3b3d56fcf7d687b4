use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType, Type, Visibility};

use super::MethodAttributes;
use crate::INSPECT_ATTRIBUTE_NAME;
use crate::utils::is_owned_type;

// -----------------------------------------------------------------------------
// AccessorMethod

pub(crate) enum MethodShape {
    /// `fn(&self) -> V`
    Getter { value: Type },
    /// `fn(&mut self, V)`, any return value is discarded.
    Setter { value: Type, returns: bool },
}

/// A method of the impl block registered as a getter or setter.
pub(crate) struct AccessorMethod {
    pub ident: syn::Ident,
    pub vis: Visibility,
    pub shape: MethodShape,
}

impl AccessorMethod {
    /// Returns `None` if `method` does not have an accessor shape.
    fn from_method(method: &ImplItemFn) -> Option<Self> {
        let sig = &method.sig;
        if !sig.generics.params.is_empty()
            || sig.asyncness.is_some()
            || sig.unsafety.is_some()
            || sig.abi.is_some()
            || sig.variadic.is_some()
        {
            return None;
        }

        let mut inputs = sig.inputs.iter();
        let FnArg::Receiver(receiver) = inputs.next()? else {
            return None;
        };
        // `&self` or `&mut self`, not `self: Box<Self>` and the like.
        if receiver.reference.is_none() || receiver.colon_token.is_some() {
            return None;
        }

        let shape = match (receiver.mutability.is_some(), inputs.next(), inputs.next()) {
            (false, None, None) => match &sig.output {
                ReturnType::Type(_, ty) if is_owned_type(ty) => MethodShape::Getter {
                    value: (**ty).clone(),
                },
                _ => return None,
            },
            (true, Some(FnArg::Typed(arg)), None) if is_owned_type(&arg.ty) => {
                MethodShape::Setter {
                    value: (*arg.ty).clone(),
                    returns: matches!(sig.output, ReturnType::Type(..)),
                }
            }
            _ => return None,
        };

        Some(Self {
            ident: sig.ident.clone(),
            vis: method.vis.clone(),
            shape,
        })
    }
}

// -----------------------------------------------------------------------------
// InspectImpl

/// The parsed input of `#[inspect_methods]`.
pub(crate) struct InspectImpl {
    /// The impl block with every `#[inspect(...)]` removed.
    pub item: ItemImpl,
    pub methods: Vec<AccessorMethod>,
}

impl InspectImpl {
    pub fn from_item(mut item: ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new_spanned(
                path,
                "`#[inspect_methods]` must be placed on an inherent impl block",
            ));
        }
        crate::utils::reject_lifetimes(&item.generics)?;

        let mut methods = Vec::new();
        for impl_item in &mut item.items {
            let ImplItem::Fn(method) = impl_item else {
                continue;
            };

            let attrs = MethodAttributes::parse_attrs(&method.attrs)?;
            method
                .attrs
                .retain(|attr| !attr.path().is_ident(INSPECT_ATTRIBUTE_NAME));

            if attrs.skip.is_some() {
                continue;
            }
            if let Some(accessor) = AccessorMethod::from_method(method) {
                methods.push(accessor);
            }
        }

        Ok(Self { item, methods })
    }
}
