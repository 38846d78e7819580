#![forbid(unsafe_code)]

extern crate proc_macro;

mod derive_where;

mod attr {
    pub mod attr_util;
    pub mod filter;
}

use proc_macro::TokenStream;

/// Derive `wherebuild::ToWhere` for a struct with named fields.
///
/// Every field becomes one single-column predicate, in declaration order.
/// Fields are compared with `=` unless annotated:
///
/// ```ignore
/// #[derive(ToWhere)]
/// struct Filter {
///     #[filter(in)]
///     cate: Vec<String>,
///     #[filter(gte, column = "created_at")]
///     since: Option<i64>,
/// }
/// ```
///
/// `Option` fields only produce a predicate when they are `Some`.
#[proc_macro_derive(ToWhere, attributes(filter))]
pub fn derive_to_where(input: TokenStream) -> TokenStream {
    let where_struct = syn::parse_macro_input!(input as derive_where::WhereStruct);

    let tokens = derive_where::gen_to_where(where_struct);

    TokenStream::from(tokens)
}
