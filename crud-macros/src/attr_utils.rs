use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Result, Token, Type, parse::Parse, parse::ParseStream};

/// 宏参数：`id = Type`、`debug = bool`
#[derive(Default)]
pub(crate) struct MacroAttrConfig {
    pub(crate) id_ty: Option<Type>,
    pub(crate) derive_debug: Option<bool>,
}

impl Parse for MacroAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = MacroAttrConfig::default();

        if input.is_empty() {
            return Ok(cfg);
        }

        let elems: Punctuated<MacroAttrElem, Token![,]> =
            Punctuated::<MacroAttrElem, Token![,]>::parse_terminated(input)?;

        for elem in elems.into_iter() {
            match elem {
                MacroAttrElem::Id(ty) => {
                    if cfg.id_ty.is_some() {
                        return Err(syn::Error::new(
                            ty.span(),
                            "duplicate key 'id' in attribute",
                        ));
                    }
                    cfg.id_ty = Some(*ty);
                }
                MacroAttrElem::Debug(b) => {
                    if cfg.derive_debug.is_some() {
                        return Err(syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "duplicate key 'debug' in attribute",
                        ));
                    }
                    cfg.derive_debug = Some(b);
                }
            }
        }

        Ok(cfg)
    }
}

enum MacroAttrElem {
    Id(Box<Type>),
    Debug(bool),
}

impl Parse for MacroAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: syn::Ident = input.parse()?;
        if key == "id" {
            let _eq: Token![=] = input.parse()?;
            let ty: Type = input.parse()?;
            Ok(MacroAttrElem::Id(Box::new(ty)))
        } else if key == "debug" {
            let _eq: Token![=] = input.parse()?;
            let expr: syn::Expr = input.parse()?;
            match expr {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => Ok(MacroAttrElem::Debug(b.value())),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected boolean literal for 'debug'",
                )),
            }
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'id' or 'debug'",
            ))
        }
    }
}
