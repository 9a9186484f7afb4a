//! `#[table(...)]` options shared by both derives.

use syn::{Attribute, LitStr};

#[derive(Default)]
pub struct TableAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

impl TableAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("table")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    out.rename = Some(name.value());
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }
        Ok(out)
    }
}
