//! # Layer 0: Primitives
//!
//! Basic building blocks shared by every predicate:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `list.rs`: Type-level parameter lists (Nil/Cons).

pub mod bool;
pub mod list;

pub use bool::{Absent, Bool, Present};
pub use list::{Cons, Nil};
