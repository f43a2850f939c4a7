//! # Layer 3: Conditional Enablement
//!
//! Two ways to keep a module-only candidate out of the way of everything
//! else:
//!
//! 1. **Bounds** (this module): `EnableIfModuleT<M, T>` is `T` when
//!    `M` is a module and an unsatisfied bound otherwise.
//! 2. **Type-level selection** (`dispatch.rs`): `SelectModule<M, Then,
//!    Else>` picks one of two candidate types; only the picked one has to
//!    implement the call.
//!
//! ```
//! use module_caps::{impl_classify, EnableIfModule, EnableIfModuleT, Module};
//!
//! struct Linear;
//! impl Module for Linear {}
//! impl_classify!(module: Linear);
//!
//! fn child_name<M: Module + EnableIfModule>(m: &M) -> &'static str {
//!     m.name()
//! }
//!
//! let depth: EnableIfModuleT<&Linear, usize> = 1;
//! assert!(child_name(&Linear).ends_with("Linear"));
//! assert_eq!(depth, 1);
//! ```
//!
//! In generic code use the trait as a bound: the alias only normalizes once
//! `M` is known to be a module, so it belongs in concrete positions.
//!
//! A non-module argument never reaches the body:
//!
//! ```compile_fail
//! use module_caps::EnableIfModule;
//!
//! fn only_modules<M: EnableIfModule>(_: &M) {}
//!
//! only_modules(&42u32);
//! ```

pub mod dispatch;

use crate::classify::Classify;
use crate::primitives::{Absent, Present};

/// Implemented exactly for module types; `Out` is the caller's result type.
pub trait EnableIfModule<T = ()> {
    type Out;
}

impl<M: ?Sized + Classify<IsModule = Present>, T> EnableIfModule<T> for M {
    type Out = T;
}

/// Implemented exactly for classified non-module types.
pub trait EnableIfNotModule<T = ()> {
    type Out;
}

impl<M: ?Sized + Classify<IsModule = Absent>, T> EnableIfNotModule<T> for M {
    type Out = T;
}

/// `T` when `M` is a module; ill-formed otherwise.
pub type EnableIfModuleT<M, T = ()> = <M as EnableIfModule<T>>::Out;

/// `T` when `M` is a classified non-module; ill-formed otherwise.
pub type EnableIfNotModuleT<M, T = ()> = <M as EnableIfNotModule<T>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;

    struct Conv;
    impl Module for Conv {}
    crate::impl_classify!(module: Conv);

    // Two candidates, one per side of the partition.
    trait Slot<Kind> {
        fn slot(&self) -> &'static str;
    }

    impl<M: EnableIfModule> Slot<Present> for M {
        fn slot(&self) -> &'static str {
            "child"
        }
    }

    impl<M: EnableIfNotModule> Slot<Absent> for M {
        fn slot(&self) -> &'static str {
            "buffer"
        }
    }

    fn register<T>(value: &T) -> &'static str
    where
        T: Classify + Slot<<T as Classify>::IsModule>,
    {
        <T as Slot<<T as Classify>::IsModule>>::slot(value)
    }

    #[test]
    fn test_partitioned_candidates() {
        assert_eq!(register(&Conv), "child");
        assert_eq!(register(&&Conv), "child");
        assert_eq!(register(&1.5f32), "buffer");
        assert_eq!(register(&"name"), "buffer");
    }

    #[test]
    fn test_result_type() {
        let unit: EnableIfModuleT<Conv> = ();
        let count: EnableIfModuleT<&'static mut Conv, usize> = 3;
        let flag: EnableIfNotModuleT<u8, bool> = true;
        assert_eq!((unit, count, flag), ((), 3, true));
    }
}
