//! # Layer 1: Classification
//!
//! `Classify` is the generic-context view of the predicates. Every
//! classified type records three facts as type-level values:
//!
//! | Associated type | Meaning |
//! |-----------------|---------|
//! | `IsModule` | decayed type implements [`Module`](crate::Module) |
//! | `IsMutRef` | the type itself is a `&mut` borrow |
//! | `Decayed` | the type with every `&` / `&mut` layer removed |
//!
//! References forward `IsModule` and `Decayed` to their pointee, so decay
//! is built into the impls and never needs a separate normalization step.
//!
//! ```
//! use module_caps::{impl_classify, is_module, Module};
//!
//! struct Linear;
//! impl Module for Linear {}
//! impl_classify!(module: Linear);
//!
//! struct Config;
//! impl_classify!(plain: Config);
//!
//! assert!(is_module::<Linear>());
//! assert!(is_module::<&mut &Linear>());
//! assert!(!is_module::<Config>());
//! ```

mod params;
mod std_types;

pub use params::{forward_safe, ParamList};

use crate::module::Module;
use crate::primitives::{Absent, Bool, Present};

/// Compile-time facts about a type, usable in generic code.
pub trait Classify {
    type IsModule: Bool;
    type IsMutRef: Bool;
    type Decayed: ?Sized;
}

/// Type-level module flag of `M`.
pub type IsModule<M> = <M as Classify>::IsModule;

/// `M` with its reference layers stripped.
pub type Decay<M> = <M as Classify>::Decayed;

/// `true` iff the decayed `M` is a module.
pub const fn is_module<M: ?Sized + Classify>() -> bool {
    <M::IsModule as Bool>::VALUE
}

/// `true` iff `T` is a `&mut` borrow.
pub const fn is_mut_ref<T: ?Sized + Classify>() -> bool {
    <T::IsMutRef as Bool>::VALUE
}

impl<T: ?Sized + Classify> Classify for &T {
    type IsModule = T::IsModule;
    type IsMutRef = Absent;
    type Decayed = T::Decayed;
}

impl<T: ?Sized + Classify> Classify for &mut T {
    type IsModule = T::IsModule;
    type IsMutRef = Present;
    type Decayed = T::Decayed;
}

impl<'a> Classify for dyn Module + 'a {
    type IsModule = Present;
    type IsMutRef = Absent;
    type Decayed = Self;
}

impl<'a> Classify for dyn Module + Send + 'a {
    type IsModule = Present;
    type IsMutRef = Absent;
    type Decayed = Self;
}

impl<'a> Classify for dyn Module + Send + Sync + 'a {
    type IsModule = Present;
    type IsMutRef = Absent;
    type Decayed = Self;
}

/// Implement [`Classify`] for concrete types.
///
/// # Forms
///
/// ```ignore
/// impl_classify!(plain: Config, Tensor);      // not a module
/// impl_classify!(module: Linear, Conv2d);     // asserts `Module` is implemented
/// impl_classify!(module dyn: Layer);          // `dyn Layer + 'a` where `Layer: Module`
/// impl_classify!([T] plain: Buffer<T>);       // generic plain type
/// ```
#[macro_export]
macro_rules! impl_classify {
    (@generic [$($g:tt)*] $ty:ty) => {
        impl<$($g)*> $crate::Classify for $ty {
            type IsModule = $crate::Absent;
            type IsMutRef = $crate::Absent;
            type Decayed = Self;
        }
    };
    (plain: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Classify for $ty {
                type IsModule = $crate::Absent;
                type IsMutRef = $crate::Absent;
                type Decayed = Self;
            }
        )+
    };
    (module: $($ty:ty),+ $(,)?) => {
        $(
            const _: fn() = || {
                fn assert_module<M: ?Sized + $crate::Module>() {}
                assert_module::<$ty>();
            };

            impl $crate::Classify for $ty {
                type IsModule = $crate::Present;
                type IsMutRef = $crate::Absent;
                type Decayed = Self;
            }
        )+
    };
    (module dyn: $($tr:path),+ $(,)?) => {
        $(
            impl<'a> $crate::Classify for dyn $tr + 'a {
                type IsModule = $crate::Present;
                type IsMutRef = $crate::Absent;
                type Decayed = Self;
            }
        )+
    };
    ($gen:tt plain: $($ty:ty),+ $(,)?) => {
        $( $crate::impl_classify!(@generic $gen $ty); )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;

    struct Linear;
    impl Module for Linear {}
    crate::impl_classify!(module: Linear);

    struct Config;
    crate::impl_classify!(plain: Config);

    trait Layer: Module {}
    crate::impl_classify!(module dyn: Layer);

    #[test]
    fn test_decay_strips_every_reference_layer() {
        assert_eq!(TypeId::of::<Decay<&'static &'static mut Linear>>(), TypeId::of::<Linear>());
        assert_eq!(TypeId::of::<Decay<&'static mut Config>>(), TypeId::of::<Config>());
        assert_eq!(TypeId::of::<Decay<&'static i32>>(), TypeId::of::<i32>());
    }

    #[test]
    fn test_module_facts() {
        assert!(is_module::<Linear>());
        assert!(is_module::<&Linear>());
        assert!(is_module::<&mut Linear>());
        assert!(is_module::<dyn Module>());
        assert!(is_module::<&dyn Module>());
        assert!(is_module::<dyn Layer>());
        assert!(!is_module::<Config>());
        assert!(!is_module::<&mut Config>());
        assert!(!is_module::<u32>());
    }

    #[test]
    fn test_mut_ref_is_top_level_only() {
        assert!(is_mut_ref::<&mut i32>());
        assert!(is_mut_ref::<&mut &i32>());
        assert!(!is_mut_ref::<&&mut i32>());
        assert!(!is_mut_ref::<i32>());
        assert!(!is_mut_ref::<*mut i32>());
        assert!(!is_mut_ref::<Option<&mut i32>>());
    }
}
