//! Inherent-const probes behind the detection macros.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time capability detection on concrete types.
//!
//! ## How it works
//!
//! For each fact we want to detect:
//! 1. Define a fallback trait with `const FACT: bool = false`
//! 2. Implement the fallback for `Detect<X>` for all X
//! 3. Implement an inherent `const FACT: bool = true` on `Detect<X>`,
//!    bounded by the condition
//!
//! When resolving `Detect::<Concrete>::FACT`, the compiler:
//! - If the condition holds, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! In `fn foo<T>()` the condition is unprovable and the fallback wins;
//! generic code should state the bound or go through `Classify`.

use core::marker::PhantomData;

use crate::classify::Classify;
use crate::module::{Forward, ForwardEntry, ForwardFn, Module};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Detection wrapper for a (type, argument tuple) pair.
#[doc(hidden)]
pub struct DetectWith<T: ?Sized, Args>(PhantomData<(PhantomData<T>, Args)>);

/// Generate a fallback trait + bounded inherent const for one fact.
macro_rules! impl_probe {
    ($Fallback:ident: $CONST:ident for [$($gen:tt)*] $Probe:ty where [$($bound:tt)*]) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Fallback Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized> [<$Fallback Fallback>] for Detect<T> {}
            impl<$($gen)*> $Probe where $($bound)* { pub const $CONST: bool = true; }
        }
    };
    (with $Fallback:ident: $CONST:ident for [$($gen:tt)*] $Probe:ty where [$($bound:tt)*]) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Fallback Fallback>] { const $CONST: bool = false; }
            impl<T: ?Sized, Args> [<$Fallback Fallback>] for DetectWith<T, Args> {}
            impl<$($gen)*> $Probe where $($bound)* { pub const $CONST: bool = true; }
        }
    };
}

// Capability detector
impl_probe!(HasForward: HAS_FORWARD for [T: ?Sized] Detect<T> where [T: ForwardEntry]);
impl_probe!(with ForwardSig: FORWARD_SIG for [T: ?Sized, Args] DetectWith<T, Args> where [T: Forward<Args>]);
impl_probe!(with ForwardFnSig: FORWARD_FN_SIG for [T: ?Sized, Args] DetectWith<T, Args> where [T: ForwardFn<Args>]);

#[doc(hidden)]
pub trait StaticForwardFallback { const STATIC_FORWARD: bool = false; }
impl<T: ?Sized> StaticForwardFallback for Detect<T> {}
impl<T: ?Sized + ForwardEntry> Detect<T> { pub const STATIC_FORWARD: bool = T::STATIC; }

// Reference safety
impl_probe!(MutRef: IS_MUT_REF for ['a, U: ?Sized] Detect<&'a mut U> where []);

// Module subtype
impl_probe!(Module: IS_MODULE for [T: ?Sized] Detect<T> where [T: Module]);
impl_probe!(SharedModuleRef: IS_SHARED_MODULE_REF for ['a, U: ?Sized] Detect<&'a U> where [U: Module]);
impl_probe!(MutModuleRef: IS_MUT_MODULE_REF for ['a, U: ?Sized] Detect<&'a mut U> where [U: Module]);
impl_probe!(SharedSharedModuleRef: IS_SHARED_SHARED_MODULE_REF for ['a, 'b, U: ?Sized] Detect<&'a &'b U> where [U: Module]);
impl_probe!(SharedMutModuleRef: IS_SHARED_MUT_MODULE_REF for ['a, 'b, U: ?Sized] Detect<&'a &'b mut U> where [U: Module]);
impl_probe!(MutSharedModuleRef: IS_MUT_SHARED_MODULE_REF for ['a, 'b, U: ?Sized] Detect<&'a mut &'b U> where [U: Module]);
impl_probe!(MutMutModuleRef: IS_MUT_MUT_MODULE_REF for ['a, 'b, U: ?Sized] Detect<&'a mut &'b mut U> where [U: Module]);
// Deeper nesting decays through `Classify`.
impl_probe!(DecayedModule: IS_DECAYED_MODULE for [T: ?Sized] Detect<T> where [T: Classify, T::Decayed: Module]);
