//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Token,
};

// =============================================================================
// Comma-separated List Parsing
// =============================================================================

/// Parse a comma-separated list of items
pub fn parse_comma_separated<T: Parse>(input: ParseStream) -> syn::Result<Vec<T>> {
    let items = Punctuated::<T, Token![,]>::parse_terminated(input)?;
    Ok(items.into_iter().collect())
}

// =============================================================================
// Keyword Flags
// =============================================================================

/// A set of bare keyword flags, e.g. `#[forward(unchecked)]`.
///
/// Every flag must be one of `allowed`; repeats are rejected.
pub struct Flags {
    pub idents: Vec<Ident>,
}

impl Flags {
    pub fn parse_allowed(input: ParseStream, allowed: &[&str]) -> syn::Result<Self> {
        let idents: Vec<Ident> = parse_comma_separated(input)?;
        let mut errors = Errors::default();

        for (i, ident) in idents.iter().enumerate() {
            let name = ident.to_string();
            if !allowed.contains(&name.as_str()) {
                errors.push(syn::Error::new(
                    ident.span(),
                    format!("unknown option `{}`, expected one of: {}", name, allowed.join(", ")),
                ));
            } else if idents[..i].iter().any(|prev| prev == ident) {
                errors.push(syn::Error::new(ident.span(), format!("duplicate option `{}`", name)));
            }
        }

        errors.finish()?;
        Ok(Flags { idents })
    }

    pub fn has(&self, keyword: &str) -> bool {
        self.idents.iter().any(|ident| ident == keyword)
    }
}

// =============================================================================
// Error Accumulation
// =============================================================================

/// Collects errors so one expansion reports every problem at once.
#[derive(Default)]
pub struct Errors {
    inner: Option<syn::Error>,
}

impl Errors {
    pub fn push(&mut self, error: syn::Error) {
        match &mut self.inner {
            Some(existing) => existing.combine(error),
            None => self.inner = Some(error),
        }
    }

    pub fn finish(self) -> syn::Result<()> {
        match self.inner {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
