#![cfg_attr(not(feature = "std"), no_std)]

//! # module-caps
//!
//! Compile-time introspection for module-composition frameworks.
//!
//! Three static questions, answered with zero runtime cost:
//!
//! | Question | Concrete types | Generic code |
//! |----------|----------------|--------------|
//! | Does `T` expose `forward`? | `has_forward!(T)` | `T: ForwardEntry` |
//! | Are these parameters safe to forward? | `forward_safe!(A, B)` | `<(A, B) as ParamList>::SAFE` |
//! | Is decayed `M` a module? | `is_module!(M)` | `is_module::<M>()`, `EnableIfModule` |
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), parameter lists (Nil/Cons)              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Module traits + Classify                                |
//! |  - Module, Forward, ForwardFn, ForwardEntry                       |
//! |  - Classify (IsModule, IsMutRef, Decayed), ParamList              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Detection                                               |
//! |  - Inherent-const probes, has_forward!, forward_safe!, is_module! |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Enablement                                              |
//! |  - EnableIfModule, SelectModule, select_call, dispatch_module!    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Priority Trick
//!
//! Detection relies on path resolution preferring an inherent associated
//! const over a trait const of the same name. The inherent const is bounded
//! by the fact being probed; the trait const is an unconditional `false`.
//! A successful probe therefore always wins over the fallback.
//!
//! ## Quick Start
//!
//! ```
//! use module_caps::prelude::*;
//! use module_caps::{forward_safe, has_forward, is_module};
//!
//! #[derive(Module)]
//! struct Linear {
//!     scale: f32,
//! }
//!
//! #[forward]
//! impl Linear {
//!     fn forward(&self, x: f32) -> f32 {
//!         x * self.scale
//!     }
//! }
//!
//! assert!(has_forward!(Linear));
//! assert!(is_module!(&mut Linear));
//! assert!(forward_safe!(i32, &'static String));
//! assert!(!forward_safe!(i32, &'static mut String));
//! assert_eq!(Linear { scale: 2.0 }.forward(3.0), 6.0);
//! ```

// Allow `::module_caps` to work inside the crate itself
extern crate self as module_caps;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the probe-generating macros
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Module Traits + Classification
// =============================================================================
pub mod module;
pub mod classify;

// =============================================================================
// Layer 2: Concrete-Type Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 3: Conditional Enablement
// =============================================================================
pub mod enable;

// Assertion and dispatch macros (assert_module!, dispatch_module!, ...)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use classify::{
    forward_safe, is_module, is_mut_ref, Classify, Decay, IsModule, ParamList,
};
pub use enable::dispatch::{
    select_call, select_static_call, MethodImpl, NoImpl, SelectModule, StaticMethodImpl,
};
pub use enable::{EnableIfModule, EnableIfModuleT, EnableIfNotModule, EnableIfNotModuleT};
pub use module::{Forward, ForwardEntry, ForwardFn, Module};
pub use primitives::bool::{Absent, Bool, Present};
pub use primitives::list::{Cons, Nil};

// Re-export proc-macros
pub use macros::{forward, Classify, Module};

/// Common items for module authors and dispatchers.
pub mod prelude {
    pub use crate::classify::{Classify, ParamList};
    pub use crate::enable::{EnableIfModule, EnableIfNotModule};
    pub use crate::module::{Forward, ForwardEntry, ForwardFn, Module};
    pub use crate::primitives::{Absent, Bool, Present};
    pub use macros::{forward, Classify, Module};
}
