//! `#[forward]` on an inherent impl block.
//!
//! Finds the method named `forward` and registers it as the type's entry
//! point:
//!
//! ```ignore
//! #[forward]
//! impl Linear {
//!     pub fn forward(&self, input: &Tensor, bias: bool) -> Tensor { .. }
//! }
//!
//! // Generates (besides the untouched impl):
//! impl ForwardEntry for Linear { const STATIC: bool = false; }
//! impl<'__fwd0> Forward<(&'__fwd0 Tensor, bool)> for Linear { .. }
//! ```
//!
//! A receiver-less `forward` generates `ForwardFn` instead. Parameters
//! taken by `&mut` are rejected unless the attribute says `unchecked`.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::{ParseStream, Parser};
use syn::visit::{self, Visit};
use syn::visit_mut::{self, VisitMut};
use syn::{
    FnArg, GenericParam, ImplItem, ImplItemFn, ItemImpl, ReturnType, Signature, Type,
    TypeImplTrait,
};

use crate::common::{has_elided_lifetime, Errors, Flags, NameElided};

pub fn expand_forward(attr: TokenStream2, item: TokenStream2) -> TokenStream2 {
    match forward(attr, item.clone()) {
        Ok(tokens) => tokens,
        Err(e) => {
            // Keep the item so its own uses do not pile up unrelated errors.
            let error = e.to_compile_error();
            quote! { #item #error }
        }
    }
}

fn forward(attr: TokenStream2, item: TokenStream2) -> syn::Result<TokenStream2> {
    let flags = (|input: ParseStream| Flags::parse_allowed(input, &["unchecked"])).parse2(attr)?;
    let unchecked = flags.has("unchecked");

    let item_impl: ItemImpl = syn::parse2(item)?;
    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[forward] goes on an inherent impl block, not on a trait impl",
        ));
    }

    let method = find_forward(&item_impl)?;
    let self_ty = &item_impl.self_ty;
    let mut entry = EntryPoint::analyze(&method.sig, unchecked)?;
    for ty in &mut entry.param_tys {
        ReplaceSelf(self_ty).visit_type_mut(ty);
    }

    let (impl_generics, _, where_clause) = item_impl.generics.split_for_impl();
    let is_static = !entry.has_receiver;

    // Generics for the Forward / ForwardFn impl: method lifetimes and the
    // names given to elided lifetimes come first.
    let mut fwd_generics = item_impl.generics.clone();
    for lifetime in entry.lifetimes.iter().rev() {
        fwd_generics.params.insert(0, lifetime.clone());
    }
    if let Some(method_where) = &method.sig.generics.where_clause {
        fwd_generics
            .make_where_clause()
            .predicates
            .extend(method_where.predicates.iter().cloned());
    }
    let (fwd_impl_generics, _, fwd_where_clause) = fwd_generics.split_for_impl();

    let tys = &entry.param_tys;
    let args: Vec<_> = (0..tys.len()).map(|i| format_ident!("__arg{}", i)).collect();
    let output = &entry.output;

    let generic = !item_impl.generics.params.is_empty() || !method.sig.generics.params.is_empty();
    // Generic impls check each instantiation from inside the generated body.
    let inline_check = (generic && !unchecked).then(|| inline_safety_check(tys, self_ty));

    let entry_impl = if is_static {
        quote! {
            impl #fwd_impl_generics ::module_caps::ForwardFn<(#(#tys,)*)> for #self_ty #fwd_where_clause {
                type Output = #output;

                #[inline]
                fn forward((#(#args,)*): (#(#tys,)*)) -> Self::Output {
                    #inline_check
                    <#self_ty>::forward(#(#args),*)
                }
            }
        }
    } else {
        quote! {
            impl #fwd_impl_generics ::module_caps::Forward<(#(#tys,)*)> for #self_ty #fwd_where_clause {
                type Output = #output;

                #[inline]
                fn forward(&self, (#(#args,)*): (#(#tys,)*)) -> Self::Output {
                    #inline_check
                    <#self_ty>::forward(self, #(#args),*)
                }
            }
        }
    };

    let safety_check = if unchecked || generic {
        None
    } else {
        const_safety_check(&method.sig, self_ty)
    };

    Ok(quote! {
        #item_impl

        impl #impl_generics ::module_caps::ForwardEntry for #self_ty #where_clause {
            const STATIC: bool = #is_static;
        }

        #entry_impl

        #safety_check
    })
}

fn find_forward(item_impl: &ItemImpl) -> syn::Result<&ImplItemFn> {
    item_impl
        .items
        .iter()
        .find_map(|item| match item {
            ImplItem::Fn(method) if method.sig.ident == "forward" => Some(method),
            _ => None,
        })
        .ok_or_else(|| {
            syn::Error::new_spanned(&item_impl.self_ty, "#[forward] impl block has no `fn forward`")
        })
}

// =============================================================================
// Signature Analysis
// =============================================================================

struct EntryPoint {
    has_receiver: bool,
    /// Method lifetime parameters plus names for elided lifetimes.
    lifetimes: Vec<GenericParam>,
    /// Parameter types with every lifetime named.
    param_tys: Vec<Type>,
    output: Type,
}

impl EntryPoint {
    fn analyze(sig: &Signature, unchecked: bool) -> syn::Result<Self> {
        let mut errors = Errors::default();

        if let Some(token) = &sig.asyncness {
            errors.push(syn::Error::new(token.span, "`forward` cannot be async"));
        }
        if let Some(token) = &sig.unsafety {
            errors.push(syn::Error::new(token.span, "`forward` cannot be unsafe"));
        }
        if let Some(variadic) = &sig.variadic {
            errors.push(syn::Error::new_spanned(variadic, "`forward` cannot be variadic"));
        }

        let mut lifetimes = Vec::new();
        for param in &sig.generics.params {
            match param {
                GenericParam::Lifetime(_) => lifetimes.push(param.clone()),
                _ => errors.push(syn::Error::new_spanned(
                    param,
                    "`forward` cannot be generic over types or consts; put the parameter on the impl",
                )),
            }
        }

        let mut has_receiver = false;
        let mut param_tys = Vec::new();
        for input in &sig.inputs {
            match input {
                FnArg::Receiver(receiver) => {
                    has_receiver = true;
                    let plain_shared = matches!(&receiver.reference, Some((_, None)))
                        && receiver.mutability.is_none()
                        && receiver.colon_token.is_none();
                    if !plain_shared {
                        errors.push(syn::Error::new_spanned(
                            receiver,
                            "`forward` must take `&self` or no receiver",
                        ));
                    }
                }
                FnArg::Typed(pat_type) => {
                    let ty = &*pat_type.ty;
                    if contains_impl_trait(ty) {
                        errors.push(syn::Error::new_spanned(
                            ty,
                            "`forward` parameters cannot use `impl Trait`",
                        ));
                    }
                    if !unchecked {
                        if let Type::Reference(reference) = ty {
                            if reference.mutability.is_some() {
                                errors.push(syn::Error::new_spanned(
                                    ty,
                                    "`forward` parameter is passed by mutable reference; \
                                     take it by value or by shared reference, \
                                     or use #[forward(unchecked)]",
                                ));
                            }
                        }
                    }
                    param_tys.push(ty.clone());
                }
            }
        }

        let output: Type = match &sig.output {
            ReturnType::Default => syn::parse_quote!(()),
            ReturnType::Type(_, ty) => {
                if has_elided_lifetime(ty) {
                    errors.push(syn::Error::new_spanned(
                        ty,
                        "`forward` output cannot borrow through an elided lifetime; name it",
                    ));
                }
                (**ty).clone()
            }
        };

        errors.finish()?;

        let mut namer = NameElided::default();
        for ty in &mut param_tys {
            namer.visit_type_mut(ty);
        }
        lifetimes.extend(namer.introduced.into_iter().map(|lifetime| {
            GenericParam::Lifetime(syn::LifetimeParam::new(lifetime))
        }));

        Ok(EntryPoint { has_receiver, lifetimes, param_tys, output })
    }
}

fn contains_impl_trait(ty: &Type) -> bool {
    struct Finder(bool);

    impl<'ast> Visit<'ast> for Finder {
        fn visit_type_impl_trait(&mut self, node: &'ast TypeImplTrait) {
            self.0 = true;
            visit::visit_type_impl_trait(self, node);
        }
    }

    let mut finder = Finder(false);
    finder.visit_type(ty);
    finder.0
}

// =============================================================================
// Const Safety Check
// =============================================================================

/// Replaces a bare `Self` with the impl's self type. Trait arguments in an
/// impl header cannot name `Self`.
struct ReplaceSelf<'a>(&'a Type);

impl VisitMut for ReplaceSelf<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(path) = ty {
            if path.qself.is_none() && path.path.is_ident("Self") {
                *ty = self.0.clone();
                return;
            }
        }
        visit_mut::visit_type_mut(self, ty);
    }
}

/// `const _: () = assert!(forward_safe!(..))` over the declared parameter
/// types. Catches `&mut` hidden behind type aliases, which the syntactic
/// check above cannot see.
fn const_safety_check(sig: &Signature, self_ty: &Type) -> Option<TokenStream2> {
    let mut tys = Vec::new();
    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            let mut ty = (*pat_type.ty).clone();
            ReplaceSelf(self_ty).visit_type_mut(&mut ty);
            // `Self::Assoc` and friends are only nameable inside the impl.
            if quote!(#ty).to_string().contains("Self") {
                return None;
            }
            tys.push(ty);
        }
    }

    let message = unsafe_param_message(self_ty);
    Some(quote! {
        const _: () = ::core::assert!(::module_caps::forward_safe!(#(#tys),*), #message);
    })
}

/// Same assertion as an inline const, for impls whose parameter types
/// mention generics. It runs once per instantiation of `forward`.
fn inline_safety_check(tys: &[Type], self_ty: &Type) -> TokenStream2 {
    let message = unsafe_param_message(self_ty);
    quote! {
        const { ::core::assert!(::module_caps::forward_safe!(#(#tys),*), #message) };
    }
}

fn unsafe_param_message(self_ty: &Type) -> String {
    format!(
        "`{}::forward` takes a parameter by mutable reference",
        quote!(#self_ty).to_string().replace(' ', "")
    )
}
