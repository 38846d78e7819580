use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::ParseStream;

/// Parsed `#[filter(op, column = "name")]`.
pub struct Filter {
    pub op: Option<FilterOp>,
    pub column: Option<syn::LitStr>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
}

impl FilterOp {
    fn from_ident(ident: &syn::Ident) -> syn::Result<Self> {
        match ident.to_string().as_str() {
            "eq" => Ok(FilterOp::Eq),
            "ne" => Ok(FilterOp::Ne),
            "gt" => Ok(FilterOp::Gt),
            "gte" => Ok(FilterOp::Gte),
            "lt" => Ok(FilterOp::Lt),
            "lte" => Ok(FilterOp::Lte),
            "like" => Ok(FilterOp::Like),
            other => Err(syn::Error::new(
                ident.span(),
                format!("Unknown filter operator `{}`", other),
            )),
        }
    }

    /// Path to the matching `wherebuild::Op` variant.
    pub fn to_tokens(self) -> TokenStream {
        match self {
            FilterOp::Eq => quote! { ::wherebuild::Op::Eq },
            FilterOp::Ne => quote! { ::wherebuild::Op::Ne },
            FilterOp::Gt => quote! { ::wherebuild::Op::Gt },
            FilterOp::Gte => quote! { ::wherebuild::Op::Gte },
            FilterOp::Lt => quote! { ::wherebuild::Op::Lt },
            FilterOp::Lte => quote! { ::wherebuild::Op::Lte },
            FilterOp::Like => quote! { ::wherebuild::Op::Like },
            FilterOp::In => quote! { ::wherebuild::Op::In },
        }
    }
}

impl syn::parse::Parse for Filter {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        let _paren_token = syn::parenthesized!(content in input);

        let mut filter = Filter {
            op: None,
            column: None,
        };

        while !content.is_empty() {
            let span = content.span();

            if content.peek(syn::Token![in]) {
                let _: syn::Token![in] = content.parse()?;
                filter.set_op(FilterOp::In, span)?;
            } else {
                let ident: syn::Ident = content.parse()?;

                if ident == "column" {
                    let _: syn::Token![=] = content.parse()?;
                    let column: syn::LitStr = content.parse()?;
                    if filter.column.is_some() {
                        return Err(syn::Error::new(span, "Duplicate `column`"));
                    }
                    filter.column = Some(column);
                } else {
                    filter.set_op(FilterOp::from_ident(&ident)?, span)?;
                }
            }

            if !content.is_empty() {
                let _: syn::Token![,] = content.parse()?;
            }
        }

        Ok(filter)
    }
}

impl Filter {
    fn set_op(&mut self, op: FilterOp, span: Span) -> syn::Result<()> {
        if self.op.is_some() {
            return Err(syn::Error::new(span, "Only one filter operator allowed"));
        }
        self.op = Some(op);
        Ok(())
    }
}
