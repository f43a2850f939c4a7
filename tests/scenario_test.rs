//! The three predicates evaluated together over a small module zoo:
//!
//! - `A`: module with `forward`
//! - `B`: module without `forward`
//! - `C`: unrelated type with `forward`

use module_caps::prelude::*;
use module_caps::{forward_safe, has_forward, is_module};

#[derive(Module)]
struct A;

#[forward]
impl A {
    #[allow(clippy::ptr_arg)]
    fn forward(&self, x: i32, label: &String) -> usize {
        x as usize + label.len()
    }
}

#[derive(Module)]
struct B;

struct C;

#[forward]
impl C {
    fn forward(&self, x: i32) -> i32 {
        -x
    }
}

// =============================================================================
// Capability Detector
// =============================================================================

#[test]
fn test_has_forward() {
    assert!(has_forward!(A));
    assert!(!has_forward!(B));
    assert!(has_forward!(C));
}

// =============================================================================
// Module Subtype Predicate
// =============================================================================

#[test]
fn test_is_module() {
    assert!(is_module!(A));
    assert!(is_module!(B));
    assert!(!is_module!(C));
}

// =============================================================================
// Reference Safety Checker
// =============================================================================

#[test]
fn test_reference_safety() {
    assert!(forward_safe!(i32, &String));
    assert!(!forward_safe!(i32, &mut String));
}

#[test]
fn test_all_facts_are_const() {
    const FACTS: [bool; 8] = [
        has_forward!(A),
        has_forward!(B),
        has_forward!(C),
        is_module!(A),
        is_module!(B),
        is_module!(C),
        forward_safe!(i32, &'static String),
        forward_safe!(i32, &'static mut String),
    ];
    assert_eq!(FACTS, [true, false, true, true, true, false, true, false]);
}

#[test]
fn test_entry_points_run() {
    let label = String::from("abc");
    assert_eq!(A.forward(1, &label), 4);
    assert_eq!(Forward::forward(&A, (1, &label)), 4);
    assert_eq!(Forward::forward(&C, (5,)), -5);
}
