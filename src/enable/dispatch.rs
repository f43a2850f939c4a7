//! Type-Level Dispatch
//!
//! Zero-overhead selection between a module candidate and a fallback
//! candidate. Uses pure type selection instead of `if` branches.
//!
//! ## Core Concepts
//!
//! 1. `SelectModule<M, Then, Else>` - `Then` if `M` is a module, else `Else`
//! 2. `select_call` - calls `MethodImpl` on the selected candidate only
//! 3. `select_static_call` - both candidates are static, `Bool` picks one
//!
//! ## Example
//!
//! ```
//! use module_caps::enable::dispatch::{select_call, MethodImpl};
//! use module_caps::{impl_classify, Classify, Module};
//!
//! struct Linear;
//! impl Module for Linear {}
//! impl_classify!(module: Linear);
//!
//! // Candidates are types; each only implements the call it can serve.
//! struct AsChild;
//! struct AsValue;
//!
//! impl<M: Module> MethodImpl<M, String> for AsChild {
//!     fn call(m: M) -> String { format!("child {}", m.name()) }
//! }
//! impl<T: core::fmt::Debug> MethodImpl<T, String> for AsValue {
//!     fn call(v: T) -> String { format!("value {v:?}") }
//! }
//!
//! assert!(select_call::<_, AsChild, AsValue, String>(Linear).starts_with("child"));
//! assert_eq!(select_call::<_, AsChild, AsValue, String>(7u8), "value 7");
//! ```

use crate::classify::{Classify, IsModule};
use crate::primitives::Bool;

// =============================================================================
// Method Implementation Traits
// =============================================================================

/// A candidate implementation that consumes a value.
pub trait MethodImpl<T, Output = ()> {
    fn call(value: T) -> Output;
}

/// A candidate implementation with no input (no self parameter).
pub trait StaticMethodImpl<Output = ()> {
    fn call() -> Output;
}

// =============================================================================
// Selection
// =============================================================================

/// `Then` if the decayed `M` is a module, `Else` otherwise.
pub type SelectModule<M, Then, Else> = <IsModule<M> as Bool>::If<Then, Else>;

/// Call whichever candidate `SelectModule` picks for `T`.
///
/// Only the picked candidate needs a `MethodImpl<T, Output>` impl: the
/// other one is never named in the obligation.
#[inline(always)]
pub fn select_call<T, Then, Else, Output>(value: T) -> Output
where
    T: Classify,
    SelectModule<T, Then, Else>: MethodImpl<T, Output>,
{
    <SelectModule<T, Then, Else> as MethodImpl<T, Output>>::call(value)
}

/// Call `Then::call()` for modules and `Else::call()` otherwise.
#[inline(always)]
pub fn select_static_call<M, Then, Else, Output>() -> Output
where
    M: ?Sized + Classify,
    Then: StaticMethodImpl<Output>,
    Else: StaticMethodImpl<Output>,
{
    <M::IsModule as Bool>::static_dispatch::<Then, Else, Output>()
}

// =============================================================================
// NoImpl - Fallback for when no implementation matches
// =============================================================================

/// Candidate that produces `Output::default()`.
pub struct NoImpl;

impl<T, Output: Default> MethodImpl<T, Output> for NoImpl {
    #[inline(always)]
    fn call(_value: T) -> Output {
        Output::default()
    }
}

impl<Output: Default> StaticMethodImpl<Output> for NoImpl {
    #[inline(always)]
    fn call() -> Output {
        Output::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use crate::primitives::{Absent, Present};
    use core::any::TypeId;

    struct Pool;
    impl Module for Pool {}
    crate::impl_classify!(module: Pool);

    struct Kind<const MODULE: bool>;

    impl<const MODULE: bool> StaticMethodImpl<bool> for Kind<MODULE> {
        fn call() -> bool {
            MODULE
        }
    }

    struct Depth;

    impl<M: Module> MethodImpl<M, u32> for Depth {
        fn call(_: M) -> u32 {
            1
        }
    }

    #[test]
    fn test_select_module_alias() {
        assert_eq!(
            TypeId::of::<SelectModule<Pool, Present, Absent>>(),
            TypeId::of::<Present>()
        );
        assert_eq!(
            TypeId::of::<SelectModule<&'static mut Pool, u8, u16>>(),
            TypeId::of::<u8>()
        );
        assert_eq!(TypeId::of::<SelectModule<f32, u8, u16>>(), TypeId::of::<u16>());
    }

    #[test]
    fn test_static_call() {
        assert!(select_static_call::<Pool, Kind<true>, Kind<false>, bool>());
        assert!(!select_static_call::<str, Kind<true>, Kind<false>, bool>());
    }

    #[test]
    fn test_value_call_fallback() {
        assert_eq!(select_call::<_, Depth, NoImpl, u32>(Pool), 1);
        assert_eq!(select_call::<_, Depth, NoImpl, u32>("leaf"), 0);
    }
}
