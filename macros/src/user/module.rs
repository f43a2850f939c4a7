//! `#[derive(Module)]`
//!
//! ```ignore
//! #[derive(Module)]
//! #[module(name = "residual")]
//! struct Residual {
//!     #[module(base)]
//!     inner: Linear,
//!     skip: bool,
//! }
//! ```
//!
//! Generates:
//! - `Module` (with `name()` when `name = ".."` is given)
//! - `Classify` with `IsModule = Present`
//! - for a `base` field: `Deref` / `DerefMut` to it, plus `Forward<Args>`,
//!   `ForwardFn<Args>` and `ForwardEntry` delegating to the base
//!
//! The delegations hold exactly when the base provides them, so a base
//! without an entry point leaves the derived type without one too.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Field, Fields, Index, LitStr, Member, Type};

use crate::common::Errors;

/// Options from `#[module(..)]` on the type.
#[derive(Default)]
struct TypeOptions {
    name: Option<LitStr>,
}

/// The field marked `#[module(base)]`.
struct BaseField {
    member: Member,
    ty: Type,
}

pub fn expand_derive_module(input: DeriveInput) -> TokenStream2 {
    match derive_module(input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn derive_module(input: DeriveInput) -> syn::Result<TokenStream2> {
    let options = parse_type_options(&input)?;
    let base = match &input.data {
        Data::Struct(data) => find_base(&data.fields)?,
        Data::Enum(data) => {
            reject_base_attrs(data.variants.iter().flat_map(|v| v.fields.iter()))?;
            None
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "#[derive(Module)] does not support unions",
            ));
        }
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let name_fn = options.name.map(|name| {
        quote! {
            fn name(&self) -> &'static str {
                #name
            }
        }
    });

    let mut tokens = quote! {
        impl #impl_generics ::module_caps::Module for #ident #ty_generics #where_clause {
            #name_fn
        }

        impl #impl_generics ::module_caps::Classify for #ident #ty_generics #where_clause {
            type IsModule = ::module_caps::Present;
            type IsMutRef = ::module_caps::Absent;
            type Decayed = Self;
        }
    };

    if let Some(base) = base {
        tokens.extend(expand_base(&input, &base));
    }

    Ok(tokens)
}

fn expand_base(input: &DeriveInput, base: &BaseField) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let BaseField { member, ty } = base;

    let deref = quote! {
        impl #impl_generics ::core::ops::Deref for #ident #ty_generics #where_clause {
            type Target = #ty;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.#member
            }
        }

        impl #impl_generics ::core::ops::DerefMut for #ident #ty_generics #where_clause {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.#member
            }
        }
    };

    // Forward / ForwardFn get an extra `__Args` parameter.
    let mut with_args = input.generics.clone();
    with_args.params.push(parse_quote!(__Args));
    let (args_impl_generics, _, _) = with_args.split_for_impl();

    let mut forward_where = input.generics.clone();
    forward_where
        .make_where_clause()
        .predicates
        .push(parse_quote!(#ty: ::module_caps::Forward<__Args>));
    let forward_where = &forward_where.where_clause;

    let mut forward_fn_where = input.generics.clone();
    forward_fn_where
        .make_where_clause()
        .predicates
        .push(parse_quote!(#ty: ::module_caps::ForwardFn<__Args>));
    let forward_fn_where = &forward_fn_where.where_clause;

    let mut entry_where = input.generics.clone();
    entry_where
        .make_where_clause()
        .predicates
        .push(parse_quote!(for<'__b> #ty: ::module_caps::ForwardEntry));
    let entry_where = &entry_where.where_clause;

    quote! {
        #deref

        impl #args_impl_generics ::module_caps::Forward<__Args> for #ident #ty_generics #forward_where {
            type Output = <#ty as ::module_caps::Forward<__Args>>::Output;

            #[inline]
            fn forward(&self, args: __Args) -> Self::Output {
                <#ty as ::module_caps::Forward<__Args>>::forward(&self.#member, args)
            }
        }

        impl #args_impl_generics ::module_caps::ForwardFn<__Args> for #ident #ty_generics #forward_fn_where {
            type Output = <#ty as ::module_caps::ForwardFn<__Args>>::Output;

            #[inline]
            fn forward(args: __Args) -> Self::Output {
                <#ty as ::module_caps::ForwardFn<__Args>>::forward(args)
            }
        }

        impl #impl_generics ::module_caps::ForwardEntry for #ident #ty_generics #entry_where {
            const STATIC: bool = <#ty as ::module_caps::ForwardEntry>::STATIC;
        }
    }
}

// =============================================================================
// Attribute Parsing
// =============================================================================

fn parse_type_options(input: &DeriveInput) -> syn::Result<TypeOptions> {
    let mut options = TypeOptions::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("module")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                if options.name.is_some() {
                    return Err(meta.error("duplicate `name`"));
                }
                options.name = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown module option, expected `name = \"..\"`"))
            }
        })?;
    }
    Ok(options)
}

/// Parse `#[module(base)]` on one field.
fn parse_field_flags(field: &Field) -> syn::Result<bool> {
    let mut base = false;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("module")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("base") {
                if base {
                    return Err(meta.error("duplicate `base`"));
                }
                base = true;
                Ok(())
            } else {
                Err(meta.error("unknown field option, expected `base`"))
            }
        })?;
    }
    Ok(base)
}

fn find_base(fields: &Fields) -> syn::Result<Option<BaseField>> {
    let mut errors = Errors::default();
    let mut found: Option<BaseField> = None;

    for (index, field) in fields.iter().enumerate() {
        let base = match parse_field_flags(field) {
            Ok(base) => base,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };
        if !base {
            continue;
        }
        if found.is_some() {
            errors.push(syn::Error::new_spanned(
                field,
                "a module has at most one `#[module(base)]` field",
            ));
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };
        found = Some(BaseField { member, ty: field.ty.clone() });
    }

    errors.finish()?;
    Ok(found)
}

fn reject_base_attrs<'a>(fields: impl Iterator<Item = &'a Field>) -> syn::Result<()> {
    let mut errors = Errors::default();
    for field in fields {
        if let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("module")) {
            errors.push(syn::Error::new_spanned(attr, "enum variants cannot declare a module base"));
        }
    }
    errors.finish()
}
