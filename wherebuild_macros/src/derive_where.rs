use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::ParseStream;
use syn::spanned::Spanned;

use crate::attr::attr_util;
use crate::attr::filter::{Filter, FilterOp};

pub struct WhereStruct {
    pub item: syn::ItemStruct,
    pub fields: Vec<WhereField>,
}

pub struct WhereField {
    pub ident: syn::Ident,
    pub column: String,
    pub op: FilterOp,
    pub optional: bool,
}

impl syn::parse::Parse for WhereStruct {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let item: syn::ItemStruct = input.parse()?;

        let named = match &item.fields {
            syn::Fields::Named(named) => named,
            _ => {
                return Err(syn::Error::new(
                    item.fields.span(),
                    "Expected a struct with named fields",
                ))
            }
        };

        let fields = named
            .named
            .iter()
            .map(WhereField::from_field)
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self { item, fields })
    }
}

impl WhereField {
    fn from_field(field: &syn::Field) -> syn::Result<Self> {
        let ident = match &field.ident {
            Some(ident) => ident.clone(),
            None => return Err(syn::Error::new(field.span(), "Expected a named field")),
        };

        let mut filter = Filter {
            op: None,
            column: None,
        };

        for attr in &field.attrs {
            if attr_util::attr_has_simple_ident(attr, "filter") {
                let parsed: Filter = syn::parse2(attr.tokens.clone())?;
                if filter.op.is_some() || filter.column.is_some() {
                    return Err(syn::Error::new(attr.span(), "Duplicate #[filter] attribute"));
                }
                filter = parsed;
            }
        }

        let column = match filter.column {
            Some(column) => column.value(),
            None => unraw(&ident),
        };

        Ok(Self {
            column,
            op: filter.op.unwrap_or(FilterOp::Eq),
            optional: is_option(&field.ty),
            ident,
        })
    }
}

fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_owned(),
        None => name,
    }
}

fn is_option(ty: &syn::Type) -> bool {
    let path = match ty {
        syn::Type::Path(type_path) if type_path.qself.is_none() => &type_path.path,
        _ => return false,
    };

    match path.segments.last() {
        Some(segment) => {
            segment.ident == "Option"
                && matches!(
                    &segment.arguments,
                    syn::PathArguments::AngleBracketed(args) if args.args.len() == 1
                )
        }
        None => false,
    }
}

pub fn gen_to_where(where_struct: WhereStruct) -> TokenStream {
    let ident = &where_struct.item.ident;
    let (impl_generics, ty_generics, where_clause) = where_struct.item.generics.split_for_impl();

    let pushes = where_struct.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let column = &field.column;
        let op = field.op.to_tokens();

        if field.optional {
            quote! {
                if let ::std::option::Option::Some(value) = &self.#field_ident {
                    exprs.push(::wherebuild::Expr::predicate(
                        #op,
                        [(#column, ::std::convert::Into::<::wherebuild::Arg>::into(::std::clone::Clone::clone(value)))],
                    ));
                }
            }
        } else {
            quote! {
                exprs.push(::wherebuild::Expr::predicate(
                    #op,
                    [(#column, ::std::convert::Into::<::wherebuild::Arg>::into(::std::clone::Clone::clone(&self.#field_ident)))],
                ));
            }
        }
    });

    quote! {
        impl #impl_generics ::wherebuild::ToWhere for #ident #ty_generics #where_clause {
            fn to_exprs(&self) -> ::std::vec::Vec<::wherebuild::Expr> {
                #[allow(unused_mut)]
                let mut exprs = ::std::vec::Vec::new();
                #(#pushes)*
                exprs
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: TokenStream) -> syn::Result<WhereStruct> {
        syn::parse2(tokens)
    }

    #[test]
    fn fields_default_to_eq() {
        let parsed = parse(quote! {
            struct Filter {
                cate: String,
                #[filter(in)]
                ids: Vec<i64>,
                #[filter(gte, column = "created_at")]
                since: Option<i64>,
                r#type: String,
            }
        })
        .unwrap();

        let summary: Vec<_> = parsed
            .fields
            .iter()
            .map(|field| (field.column.as_str(), field.op, field.optional))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("cate", FilterOp::Eq, false),
                ("ids", FilterOp::In, false),
                ("created_at", FilterOp::Gte, true),
                ("type", FilterOp::Eq, false),
            ]
        );
    }

    #[test]
    fn column_before_op() {
        let parsed = parse(quote! {
            struct Filter {
                #[filter(column = "name", like)]
                pattern: String,
            }
        })
        .unwrap();

        assert_eq!(parsed.fields[0].column, "name");
        assert_eq!(parsed.fields[0].op, FilterOp::Like);
    }

    #[test]
    fn rejects_tuple_struct() {
        assert!(parse(quote! { struct Filter(String); }).is_err());
    }

    #[test]
    fn rejects_enum() {
        assert!(parse(quote! { enum Filter { A } }).is_err());
    }

    #[test]
    fn rejects_unknown_op() {
        let err = parse(quote! {
            struct Filter {
                #[filter(between)]
                a: i64,
            }
        })
        .err()
        .unwrap();

        assert_eq!(err.to_string(), "Unknown filter operator `between`");
    }

    #[test]
    fn rejects_two_ops() {
        assert!(parse(quote! {
            struct Filter {
                #[filter(gt, lt)]
                a: i64,
            }
        })
        .is_err());
    }

    #[test]
    fn generated_impl_names_the_trait() {
        let parsed = parse(quote! {
            struct Filter {
                a: i64,
            }
        })
        .unwrap();

        let tokens = gen_to_where(parsed).to_string();
        assert!(tokens.contains("ToWhere for Filter"));
        assert!(tokens.contains("Eq"));
        assert!(tokens.contains("\"a\""));
    }
}
