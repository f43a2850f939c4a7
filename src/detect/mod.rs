//! # Layer 2: Concrete-Type Detection
//!
//! Const-evaluable predicates for types known at the call site.
//!
//! | Macro | Answers |
//! |-------|---------|
//! | `has_forward!(T)` | `T` registers a `forward` entry point |
//! | `has_forward!(T, Args)` | `T: Forward<Args>` or `T: ForwardFn<Args>` |
//! | `is_static_forward!(T)` | the entry point takes no receiver |
//! | `is_mut_ref!(T)` | `T` is a `&mut` borrow |
//! | `forward_safe!(A, B, ..)` | no parameter is a `&mut` borrow |
//! | `is_module!(M)` | decayed `M` implements `Module` |
//!
//! Every macro expands to a `bool` expression usable in `const` items.
//!
//! ```
//! use module_caps::{forward_safe, has_forward, is_module};
//!
//! struct Unrelated;
//!
//! const SAFE: bool = forward_safe!(i32, &'static String);
//! const UNSAFE: bool = forward_safe!(i32, &'static mut String);
//!
//! assert!(SAFE);
//! assert!(!UNSAFE);
//! assert!(!has_forward!(Unrelated));
//! assert!(!is_module!(Unrelated));
//! ```

pub mod autoref;

/// `true` iff `T` exposes a `forward` entry point.
///
/// With a second argument, `true` iff `T` implements `Forward<Args>` or
/// `ForwardFn<Args>` for exactly that argument tuple.
///
/// ```
/// use module_caps::{has_forward, Forward, ForwardEntry};
///
/// struct Double;
/// impl ForwardEntry for Double {}
/// impl Forward<(i32,)> for Double {
///     type Output = i32;
///     fn forward(&self, (x,): (i32,)) -> i32 { x * 2 }
/// }
///
/// assert!(has_forward!(Double));
/// assert!(has_forward!(Double, (i32,)));
/// assert!(!has_forward!(Double, (f32,)));
/// assert!(!has_forward!(String));
/// ```
#[macro_export]
macro_rules! has_forward {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::HasForwardFallback as _;
        $crate::detect::autoref::Detect::<$T>::HAS_FORWARD
    }};
    ($T:ty, $Args:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::{ForwardFnSigFallback as _, ForwardSigFallback as _};
        $crate::detect::autoref::DetectWith::<$T, $Args>::FORWARD_SIG
            || $crate::detect::autoref::DetectWith::<$T, $Args>::FORWARD_FN_SIG
    }};
}

/// `true` iff `T` registers a receiver-less `forward`.
#[macro_export]
macro_rules! is_static_forward {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::StaticForwardFallback as _;
        $crate::detect::autoref::Detect::<$T>::STATIC_FORWARD
    }};
}

/// `true` iff `T` is a mutable borrow (`&mut U` for any `U` and lifetime).
#[macro_export]
macro_rules! is_mut_ref {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::MutRefFallback as _;
        $crate::detect::autoref::Detect::<$T>::IS_MUT_REF
    }};
}

/// `true` iff none of the listed parameter types is a `&mut` borrow.
///
/// Evaluated head-then-tail; the empty list is `true`.
#[macro_export]
macro_rules! forward_safe {
    () => { true };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        (!$crate::is_mut_ref!($head) && $crate::forward_safe!($($tail),*))
    };
}

/// `true` iff `M`, with reference layers stripped, implements `Module`.
///
/// Up to two reference layers are stripped structurally, so a type that
/// implements `Module` by hand is covered there. Deeper nesting is
/// resolved through `Classify`, which `#[derive(Module)]` provides.
///
/// ```
/// use module_caps::{is_module, Module};
///
/// struct Linear;
/// impl Module for Linear {}
///
/// assert!(is_module!(Linear));
/// assert!(is_module!(&Linear));
/// assert!(is_module!(&mut Linear));
/// assert!(is_module!(dyn Module));
/// assert!(!is_module!(u64));
/// ```
#[macro_export]
macro_rules! is_module {
    ($M:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::autoref::{
            DecayedModuleFallback as _, ModuleFallback as _, MutModuleRefFallback as _,
            MutMutModuleRefFallback as _, MutSharedModuleRefFallback as _,
            SharedModuleRefFallback as _, SharedMutModuleRefFallback as _,
            SharedSharedModuleRefFallback as _,
        };
        $crate::detect::autoref::Detect::<$M>::IS_MODULE
            || $crate::detect::autoref::Detect::<$M>::IS_SHARED_MODULE_REF
            || $crate::detect::autoref::Detect::<$M>::IS_MUT_MODULE_REF
            || $crate::detect::autoref::Detect::<$M>::IS_SHARED_SHARED_MODULE_REF
            || $crate::detect::autoref::Detect::<$M>::IS_SHARED_MUT_MODULE_REF
            || $crate::detect::autoref::Detect::<$M>::IS_MUT_SHARED_MODULE_REF
            || $crate::detect::autoref::Detect::<$M>::IS_MUT_MUT_MODULE_REF
            || $crate::detect::autoref::Detect::<$M>::IS_DECAYED_MODULE
    }};
}

#[cfg(test)]
mod tests {
    use crate::module::{Forward, ForwardEntry, ForwardFn, Module};

    struct Plain;

    struct Entry;
    impl ForwardEntry for Entry {}
    impl Forward<(u8,)> for Entry {
        type Output = u8;
        fn forward(&self, (x,): (u8,)) -> u8 {
            x
        }
    }

    struct Static;
    impl ForwardEntry for Static {
        const STATIC: bool = true;
    }
    impl ForwardFn<()> for Static {
        type Output = &'static str;
        fn forward(_: ()) -> &'static str {
            "static"
        }
    }

    struct Net;
    impl Module for Net {}
    crate::impl_classify!(module: Net);

    #[test]
    fn test_has_forward() {
        assert!(has_forward!(Entry));
        assert!(has_forward!(Static));
        assert!(!has_forward!(Plain));
        assert!(!has_forward!(&Entry));
    }

    #[test]
    fn test_has_forward_signature() {
        assert!(has_forward!(Entry, (u8,)));
        assert!(!has_forward!(Entry, (u16,)));
        assert!(has_forward!(Static, ()));
        assert!(!has_forward!(Plain, ()));
    }

    #[test]
    fn test_static_forward() {
        assert!(is_static_forward!(Static));
        assert!(!is_static_forward!(Entry));
        assert!(!is_static_forward!(Plain));
    }

    #[test]
    fn test_forward_safe_positions() {
        assert!(forward_safe!());
        assert!(forward_safe!(i32));
        assert!(!forward_safe!(&mut i32, u8, u8));
        assert!(!forward_safe!(u8, &mut i32, u8));
        assert!(!forward_safe!(u8, u8, &mut i32));
        assert!(forward_safe!(u8, &i32, u8));
        assert!(forward_safe!(u8, *mut i32, u8));
        assert!(forward_safe!(u8, Option<&mut i32>, u8));
    }

    #[test]
    fn test_is_module_decays() {
        assert!(is_module!(Net));
        assert!(is_module!(&Net));
        assert!(is_module!(&mut Net));
        assert!(is_module!(&&mut Net));
        assert!(is_module!(dyn Module));
        assert!(is_module!(&dyn Module));
        assert!(!is_module!(Plain));
        assert!(!is_module!(&Plain));
        assert!(!is_module!(Box<Net>));
    }

    #[test]
    fn test_usable_in_const() {
        const FACTS: [bool; 3] = [has_forward!(Entry), forward_safe!(u8, &str), is_module!(Net)];
        assert_eq!(FACTS, [true, true, true]);
    }
}
