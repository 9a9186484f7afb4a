use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse2};

use super::attrs::TableAttrs;

/// Derive macro for the Field trait on fieldless enums.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Field)] only supports enums")
            .to_compile_error();
    };
    if data.variants.is_empty() {
        return syn::Error::new_spanned(&input, "#[derive(Field)] needs at least one variant")
            .to_compile_error();
    }

    let mut arms = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(
                variant,
                "#[derive(Field)] only supports unit variants",
            )
            .to_compile_error();
        }
        let attrs = match TableAttrs::parse(&variant.attrs) {
            Ok(attrs) => attrs,
            Err(e) => return e.to_compile_error(),
        };
        if attrs.skip {
            return syn::Error::new_spanned(variant, "`skip` has no meaning on enum variants")
                .to_compile_error();
        }
        let ident = &variant.ident;
        let label = attrs.rename.unwrap_or_else(|| ident.to_string());
        arms.push(quote! { Self::#ident => #label, });
    }

    quote! {
        impl #impl_generics ::tabula::Field for #name #ty_generics #where_clause {
            fn value(&self) -> ::tabula::Value<'_> {
                ::tabula::Value::Enum(match self {
                    #(#arms)*
                })
            }
        }
    }
}
