//! # The Module Abstraction
//!
//! `Module` is the designated root of every composable component. A type is
//! "derived from" the root when it implements the trait; `dyn Module` is the
//! root itself.
//!
//! The `forward` entry point is split in two layers:
//!
//! | Trait | Role |
//! |-------|------|
//! | [`Forward<Args>`] | instance entry point, one impl per signature |
//! | [`ForwardFn<Args>`] | receiver-less (static) entry point |
//! | [`ForwardEntry`] | registers that a `forward` exists at all |
//!
//! `Args` is always a tuple of the parameter types, the way `Fn` traits
//! take their arguments. `#[forward]` generates all three from an inherent
//! `fn forward`.
//!
//! ## Rejected entry points
//!
//! Parameters taken by `&mut` would alias caller state through the
//! forwarding path:
//!
//! ```compile_fail
//! use module_caps::forward;
//!
//! struct Sink;
//!
//! #[forward]
//! impl Sink {
//!     fn forward(&self, out: &mut Vec<u8>) {}
//! }
//! ```
//!
//! The same holds when the borrow hides behind an alias:
//!
//! ```compile_fail
//! use module_caps::forward;
//!
//! type Out<'a> = &'a mut Vec<u8>;
//! struct Sink;
//!
//! #[forward]
//! impl Sink {
//!     fn forward(&self, out: Out<'static>) {}
//! }
//! ```
//!
//! Generic impls are checked for each instantiation the entry point is
//! called with:
//!
//! ```compile_fail
//! use module_caps::{forward, Forward};
//!
//! type Out<'a, T> = &'a mut Vec<T>;
//! struct Sink<T>(T);
//!
//! #[forward]
//! impl<T: Clone> Sink<T> {
//!     fn forward<'a>(&self, out: Out<'a, T>) {
//!         out.push(self.0.clone());
//!     }
//! }
//!
//! let mut buf = Vec::new();
//! Forward::forward(&Sink(1u8), (&mut buf,));
//! ```
//!
//! A type registers at most one entry point. Inheriting `forward` from a
//! base and declaring another one is a coherence error:
//!
//! ```compile_fail
//! use module_caps::{forward, Module};
//!
//! #[derive(Module)]
//! struct Base;
//!
//! #[forward]
//! impl Base {
//!     fn forward(&self, x: u8) -> u8 { x }
//! }
//!
//! #[derive(Module)]
//! struct Child {
//!     #[module(base)]
//!     base: Base,
//! }
//!
//! #[forward]
//! impl Child {
//!     fn forward(&self, x: u16) -> u16 { x }
//! }
//! ```

/// Root abstraction for composable modules.
pub trait Module {
    /// Display name of the module. Defaults to the Rust type name.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Instance `forward` entry point for one argument signature.
///
/// A type may implement several signatures; they are overloads of the same
/// entry point and share a single [`ForwardEntry`] registration.
pub trait Forward<Args> {
    type Output;

    fn forward(&self, args: Args) -> Self::Output;
}

/// Receiver-less `forward` entry point.
pub trait ForwardFn<Args> {
    type Output;

    fn forward(args: Args) -> Self::Output;
}

/// Marks a type as exposing an addressable `forward`.
///
/// Coherence allows one registration per type, so the name-level answer
/// never depends on which overload would be picked.
pub trait ForwardEntry {
    /// `true` when the entry point takes no receiver.
    const STATIC: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scale(i32);

    impl Module for Scale {}

    impl Forward<(i32,)> for Scale {
        type Output = i32;

        fn forward(&self, (x,): (i32,)) -> i32 {
            x * self.0
        }
    }

    impl Forward<(i32, i32)> for Scale {
        type Output = i32;

        fn forward(&self, (x, y): (i32, i32)) -> i32 {
            (x + y) * self.0
        }
    }

    #[test]
    fn test_overloads_share_name() {
        let m = Scale(3);
        assert_eq!(Forward::<(i32,)>::forward(&m, (2,)), 6);
        assert_eq!(Forward::<(i32, i32)>::forward(&m, (1, 2)), 9);
    }

    #[test]
    fn test_default_name() {
        let m = Scale(1);
        assert!(m.name().ends_with("Scale"));

        let object: &dyn Module = &m;
        assert_eq!(object.name(), m.name());
    }
}
