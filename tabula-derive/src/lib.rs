mod macros;

use proc_macro::TokenStream;

/// Implement `tabula::Record` for a struct with named fields.
///
/// Columns follow field declaration order. `#[table(rename = "...")]`
/// changes a column's header and `#[table(skip)]` leaves the field out.
#[proc_macro_derive(Record, attributes(table))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    macros::record::expand(input.into()).into()
}

/// Implement `tabula::Field` for a fieldless enum, drawn as its variant name.
#[proc_macro_derive(Field, attributes(table))]
pub fn derive_field(input: TokenStream) -> TokenStream {
    macros::field::expand(input.into()).into()
}
