use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse2};

use super::attrs::TableAttrs;

/// Derive macro for the Record trait.
///
/// Generates the static header list and an index-to-field match, both in
/// declaration order with skipped fields removed.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "#[derive(Record)] requires a struct with named fields",
                )
                .to_compile_error();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "#[derive(Record)] only supports structs")
                .to_compile_error();
        }
    };

    let mut names = Vec::new();
    let mut arms = Vec::new();
    for field in fields {
        let attrs = match TableAttrs::parse(&field.attrs) {
            Ok(attrs) => attrs,
            Err(e) => return e.to_compile_error(),
        };
        if attrs.skip {
            continue;
        }
        // Named fields always carry an ident
        let Some(ident) = &field.ident else {
            continue;
        };
        let header = attrs.rename.unwrap_or_else(|| ident.to_string());
        let index = names.len();
        names.push(header);
        arms.push(quote! {
            #index => ::core::option::Option::Some(::tabula::Field::value(&self.#ident)),
        });
    }

    quote! {
        impl #impl_generics ::tabula::Record for #name #ty_generics #where_clause {
            fn field_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field(&self, index: usize) -> ::core::option::Option<::tabula::Value<'_>> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
