//! Assertion and dispatch sugar over the detection macros.
//!
//! The `assert_*!` macros expand to `const _: () = assert!(..)`, so a
//! violated predicate stops compilation with the given message.

// =============================================================================
// Compile-time assertions
// =============================================================================

/// Fail compilation unless every listed type is a module after decay.
///
/// ```
/// use module_caps::{assert_module, Module};
///
/// struct Encoder;
/// impl Module for Encoder {}
///
/// assert_module!(Encoder, &Encoder, dyn Module);
/// ```
///
/// ```compile_fail
/// module_caps::assert_module!(String);
/// ```
#[macro_export]
macro_rules! assert_module {
    ($($M:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(
                $crate::is_module!($M),
                ::core::concat!("`", ::core::stringify!($M), "` is not a module")
            );
        )+
    };
}

/// Fail compilation unless every listed type registers a `forward`.
///
/// ```compile_fail
/// struct Inert;
/// module_caps::assert_has_forward!(Inert);
/// ```
#[macro_export]
macro_rules! assert_has_forward {
    ($($T:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(
                $crate::has_forward!($T),
                ::core::concat!("`", ::core::stringify!($T), "` has no `forward` entry point")
            );
        )+
    };
}

/// Fail compilation if any listed parameter type is a `&mut` borrow.
///
/// ```
/// module_caps::assert_forward_safe!(u32, &'static str, *mut u8);
/// ```
///
/// ```compile_fail
/// module_caps::assert_forward_safe!(u32, &'static mut String);
/// ```
#[macro_export]
macro_rules! assert_forward_safe {
    ($($P:ty),* $(,)?) => {
        const _: () = ::core::assert!(
            $crate::forward_safe!($($P),*),
            ::core::concat!(
                "parameters (", ::core::stringify!($($P),*),
                ") pass a value by mutable reference"
            )
        );
    };
}

// =============================================================================
// dispatch_module! - Inline dispatch for concrete types
// =============================================================================

/// Inline compile-time dispatch on whether a concrete type is a module.
///
/// # Example
///
/// ```
/// use module_caps::{dispatch_module, Module};
///
/// struct Block;
/// impl Module for Block {}
///
/// let a = dispatch_module!(Block, { module => "register child", plain => "store buffer" });
/// let b = dispatch_module!(f32, { module => "register child", plain => "store buffer" });
/// assert_eq!((a, b), ("register child", "store buffer"));
/// ```
#[macro_export]
macro_rules! dispatch_module {
    ($M:ty, {
        module => $module:expr,
        plain => $plain:expr $(,)?
    }) => {{
        // Const condition; the dead arm is removed at compile time.
        const IS_MODULE: bool = $crate::is_module!($M);
        if IS_MODULE { $module } else { $plain }
    }};
}
