use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// #[derive(Classify)] marks a type as a plain (non-module) value so that
/// generic code bounded on `Classify` accepts it.
///
/// Modules get their `Classify` impl from #[derive(Module)] instead.
pub fn expand_derive_classify(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::module_caps::Classify for #ident #ty_generics #where_clause {
            type IsModule = ::module_caps::Absent;
            type IsMutRef = ::module_caps::Absent;
            type Decayed = Self;
        }
    }
}
