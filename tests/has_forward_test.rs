//! Capability detector: direct, inherited, static and overloaded `forward`.

use module_caps::prelude::*;
use module_caps::{has_forward, is_module, is_static_forward};

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Module)]
struct Linear {
    weight: f32,
}

#[forward]
impl Linear {
    fn forward(&self, x: f32) -> f32 {
        x * self.weight
    }
}

/// Inherits `forward` from `Linear`.
#[derive(Module)]
struct Scaled {
    #[module(base)]
    inner: Linear,
    note: &'static str,
}

/// Two levels deep: Deeper -> Scaled -> Linear.
#[derive(Module)]
struct Deeper(#[module(base)] Scaled);

/// Holds a `Linear` base next to its own state.
#[derive(Module)]
struct Wrapped {
    #[module(base)]
    inner: Linear,
    calls: u32,
}

/// A base module with no entry point.
#[derive(Module)]
struct Frozen {
    scale: f32,
}

#[derive(Module)]
struct FrozenView {
    #[module(base)]
    inner: Frozen,
}

#[derive(Module)]
struct Identity;

#[forward]
impl Identity {
    fn forward(x: u8) -> u8 {
        x
    }
}

#[derive(Module)]
struct IdentityView(#[module(base)] Identity);

/// Several signatures under one hand-registered entry point.
struct Overloaded;

impl ForwardEntry for Overloaded {}

impl Forward<(i32,)> for Overloaded {
    type Output = &'static str;

    fn forward(&self, _: (i32,)) -> &'static str {
        "one"
    }
}

impl Forward<(i32, i32)> for Overloaded {
    type Output = &'static str;

    fn forward(&self, _: (i32, i32)) -> &'static str {
        "two"
    }
}

/// `Forward` impls but no registration.
struct Unregistered;

impl Forward<()> for Unregistered {
    type Output = ();

    fn forward(&self, _: ()) {}
}

// =============================================================================
// Direct and Inherited
// =============================================================================

#[test]
fn test_direct_forward() {
    assert!(has_forward!(Linear));
    assert!(has_forward!(Linear, (f32,)));
    assert!(!has_forward!(Linear, (f64,)));
}

#[test]
fn test_inherited_forward() {
    assert!(has_forward!(Scaled));
    assert!(has_forward!(Deeper));
    assert!(has_forward!(Scaled, (f32,)));
    assert!(has_forward!(Deeper, (f32,)));

    let deeper = Deeper(Scaled { inner: Linear { weight: 3.0 }, note: "x3" });
    assert_eq!(Forward::forward(&deeper, (2.0f32,)), 6.0);
    assert_eq!(deeper.note, "x3");
}

#[test]
fn test_callable_base_forward_counts() {
    // `wrapped.forward(..)` reaches the base through Deref, so the entry
    // point is reported as present.
    let wrapped = Wrapped { inner: Linear { weight: 0.5 }, calls: 0 };
    assert_eq!(wrapped.forward(4.0), 2.0);
    assert_eq!(wrapped.weight, 0.5);
    assert_eq!(wrapped.calls, 0);

    assert!(has_forward!(Wrapped));
    assert!(has_forward!(Wrapped, (f32,)));
    assert!(!is_static_forward!(Wrapped));
    assert!(is_module!(Wrapped));
}

#[test]
fn test_base_without_entry_point() {
    assert!(!has_forward!(Frozen));
    assert!(!has_forward!(FrozenView));
    assert!(!has_forward!(FrozenView, (f32,)));
    assert!(is_module!(FrozenView));

    let view = FrozenView { inner: Frozen { scale: 2.0 } };
    assert_eq!(view.scale, 2.0);
}

// =============================================================================
// Static, Overloaded, Unregistered
// =============================================================================

#[test]
fn test_static_forward_counts() {
    assert!(has_forward!(Identity));
    assert!(is_static_forward!(Identity));
    assert!(!is_static_forward!(Linear));
    assert!(has_forward!(Identity, (u8,)));
    assert_eq!(<Identity as ForwardFn<(u8,)>>::forward((9,)), 9);

    assert!(has_forward!(IdentityView));
    assert!(is_static_forward!(IdentityView));
    assert_eq!(<IdentityView as ForwardFn<(u8,)>>::forward((4,)), 4);
}

#[test]
fn test_overloads_resolve_per_signature() {
    assert!(has_forward!(Overloaded));
    assert!(has_forward!(Overloaded, (i32,)));
    assert!(has_forward!(Overloaded, (i32, i32)));
    assert!(!has_forward!(Overloaded, ()));

    assert_eq!(Forward::<(i32, i32)>::forward(&Overloaded, (1, 2)), "two");
}

#[test]
fn test_unregistered_signature_only() {
    assert!(!has_forward!(Unregistered));
    assert!(has_forward!(Unregistered, ()));
}

#[test]
fn test_absent_everywhere() {
    assert!(!has_forward!(String));
    assert!(!has_forward!(u32));
    assert!(!has_forward!(&Linear));
    assert!(!has_forward!(dyn Module));
}

// =============================================================================
// Generic Code
// =============================================================================

fn run_all<M: Forward<(f32,), Output = f32>>(modules: &[M], x: f32) -> Vec<f32> {
    modules.iter().map(|m| m.forward((x,))).collect()
}

#[test]
fn test_bound_in_generic_code() {
    let layers = [Linear { weight: 1.0 }, Linear { weight: 2.0 }];
    assert_eq!(run_all(&layers, 3.0), vec![3.0, 6.0]);
}
