//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Module)]` | on struct/enum | Implement `Module` + `Classify`, inherit from a base |
//! | `#[derive(Classify)]` | on struct/enum | Classify a plain value type |
//! | `#[forward]` | on inherent impl | Register the `forward` entry point |

mod classify;
mod forward;
mod module;

pub use classify::expand_derive_classify;
pub use forward::expand_forward;
pub use module::expand_derive_module;
