// Common utilities shared between the user-facing macros
//
// This module contains:
// - parse_utils: keyword and list parsing helpers
// - lifetimes: elided-lifetime naming and detection

mod lifetimes;
mod parse_utils;

pub use lifetimes::*;
pub use parse_utils::*;
