//! Macros for creatable types

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, Fields};

/// Expands a derive-macro for Creatable
pub(super) fn expand_creatable(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Creatable` cannot be derived for generic structs"
        ));
    }

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "`Creatable` can only be derived for structs"
        ));
    };

    let ctor = match &data_struct.fields {
        Fields::Named(fields) => {
            let idents = fields.named.iter().map(|field| &field.ident);
            quote! {
                Self {
                    #(#idents: ::lazydi::Creatable::create()?,)*
                }
            }
        }
        Fields::Unnamed(fields) => {
            let values = fields.unnamed
                .iter()
                .map(|_| quote! { ::lazydi::Creatable::create()? });
            quote! { Self(#(#values),*) }
        }
        Fields::Unit => quote! { Self }
    };

    Ok(quote! {
        impl ::lazydi::Creatable for #name {
            #[inline]
            fn create() -> ::core::result::Result<Self, ::lazydi::error::Error> {
                ::core::result::Result::Ok(#ctor)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::expand_creatable;
    use quote::quote;

    #[test]
    fn it_expands_named_struct() {
        let input = syn::parse_quote! {
            struct Service {
                logger: Logger,
                cache: Cache,
            }
        };

        let output = expand_creatable(&input).unwrap();
        let expected = quote! {
            impl ::lazydi::Creatable for Service {
                #[inline]
                fn create() -> ::core::result::Result<Self, ::lazydi::error::Error> {
                    ::core::result::Result::Ok(Self {
                        logger: ::lazydi::Creatable::create()?,
                        cache: ::lazydi::Creatable::create()?,
                    })
                }
            }
        };

        assert_eq!(output.to_string(), expected.to_string());
    }

    #[test]
    fn it_expands_tuple_struct() {
        let input = syn::parse_quote! {
            struct Pair(Left, Right);
        };

        let output = expand_creatable(&input).unwrap();
        let expected = quote! {
            impl ::lazydi::Creatable for Pair {
                #[inline]
                fn create() -> ::core::result::Result<Self, ::lazydi::error::Error> {
                    ::core::result::Result::Ok(Self(
                        ::lazydi::Creatable::create()?,
                        ::lazydi::Creatable::create()?
                    ))
                }
            }
        };

        assert_eq!(output.to_string(), expected.to_string());
    }

    #[test]
    fn it_expands_unit_struct() {
        let input = syn::parse_quote! {
            struct Marker;
        };

        let output = expand_creatable(&input).unwrap();
        let expected = quote! {
            impl ::lazydi::Creatable for Marker {
                #[inline]
                fn create() -> ::core::result::Result<Self, ::lazydi::error::Error> {
                    ::core::result::Result::Ok(Self)
                }
            }
        };

        assert_eq!(output.to_string(), expected.to_string());
    }

    #[test]
    fn it_rejects_enum() {
        let input = syn::parse_quote! {
            enum Level { Debug, Info }
        };

        let err = expand_creatable(&input).unwrap_err();

        assert_eq!(err.to_string(), "`Creatable` can only be derived for structs");
    }

    #[test]
    fn it_rejects_generic_struct() {
        let input = syn::parse_quote! {
            struct Wrapper<T>(T);
        };

        let err = expand_creatable(&input).unwrap_err();

        assert_eq!(err.to_string(), "`Creatable` cannot be derived for generic structs");
    }
}
