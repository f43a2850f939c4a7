//! Procedural macros for module-caps
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Module)]` | struct/enum | Implement `Module` + `Classify`, inherit from a base field |
//! | `#[derive(Classify)]` | struct/enum | Classify a plain (non-module) value type |
//! | `#[forward]` | inherent impl | Register `fn forward` as the entry point |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Module)]
//! struct Linear { weight: f32 }
//!
//! #[forward]
//! impl Linear {
//!     fn forward(&self, x: f32) -> f32 { x * self.weight }
//! }
//!
//! #[derive(Module)]
//! struct Scaled {
//!     #[module(base)]
//!     inner: Linear,
//! }
//!
//! assert!(has_forward!(Scaled));
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derives
// =============================================================================

/// Implement `Module` and `Classify` (`IsModule = Present`).
///
/// # Attributes
///
/// - `#[module(name = "..")]` on the type overrides `Module::name`
/// - `#[module(base)]` on one field derives `Deref`/`DerefMut` to it and
///   inherits the base's `forward` when the base has one
#[proc_macro_derive(Module, attributes(module))]
pub fn derive_module(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_module(input).into()
}

/// Implement `Classify` for a plain value type (`IsModule = Absent`).
#[proc_macro_derive(Classify)]
pub fn derive_classify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::expand_derive_classify(input).into()
}

// =============================================================================
// Attributes
// =============================================================================

/// Register the `fn forward` of an inherent impl block.
///
/// `&self` receivers generate `Forward<(Params,)>`, receiver-less ones
/// `ForwardFn<(Params,)>`; both generate `ForwardEntry`.
///
/// # Options
///
/// - `#[forward(unchecked)]` - allow parameters taken by `&mut`
#[proc_macro_attribute]
pub fn forward(attr: TokenStream, item: TokenStream) -> TokenStream {
    user::expand_forward(attr.into(), item.into()).into()
}
