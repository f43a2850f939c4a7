//! Reference safety over parameter lists, generic rendition.
//!
//! A list is safe to forward when none of its parameters is a `&mut`
//! borrow. Evaluation is head-then-tail; a mutable head selects `Absent`
//! directly.

use super::Classify;
use crate::primitives::{Absent, Bool, Cons, Nil, Present};

/// Type-level reference safety of a parameter list.
pub trait ParamList {
    type Safe: Bool;

    const SAFE: bool = <Self::Safe as Bool>::VALUE;
}

impl ParamList for Nil {
    type Safe = Present;
}

impl<H: Classify, T: ParamList> ParamList for Cons<H, T> {
    type Safe = <H::IsMutRef as Bool>::Elif<Absent, T::Safe>;
}

macro_rules! impl_param_list_for_tuple {
    ($($T:ident),*) => {
        impl<$($T: Classify),*> ParamList for ($($T,)*) {
            type Safe = <$crate::params![$($T),*] as ParamList>::Safe;
        }
    };
}

impl_param_list_for_tuple!();
impl_param_list_for_tuple!(A);
impl_param_list_for_tuple!(A, B);
impl_param_list_for_tuple!(A, B, C);
impl_param_list_for_tuple!(A, B, C, D);
impl_param_list_for_tuple!(A, B, C, D, E);
impl_param_list_for_tuple!(A, B, C, D, E, F);
impl_param_list_for_tuple!(A, B, C, D, E, F, G);
impl_param_list_for_tuple!(A, B, C, D, E, F, G, H);
impl_param_list_for_tuple!(A, B, C, D, E, F, G, H, I);
impl_param_list_for_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_param_list_for_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_param_list_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// `true` iff no parameter in `P` is a `&mut` borrow.
pub const fn forward_safe<P: ParamList>() -> bool {
    P::SAFE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;

    #[test]
    fn test_empty_list_is_safe() {
        assert!(forward_safe::<Nil>());
        assert!(forward_safe::<()>());
    }

    #[test]
    fn test_mut_ref_in_any_position() {
        assert!(!forward_safe::<params![&'static mut i32, u8, f32]>());
        assert!(!forward_safe::<params![u8, &'static mut i32, f32]>());
        assert!(!forward_safe::<params![u8, f32, &'static mut i32]>());
    }

    #[test]
    fn test_safe_replacements() {
        assert!(forward_safe::<params![u8, &'static i32, f32]>());
        assert!(forward_safe::<params![u8, *mut i32, f32]>());
        assert!(forward_safe::<params![u8, *const i32, f32]>());
        assert!(forward_safe::<params![u8, i32, f32]>());
    }

    #[test]
    fn test_tuples_match_lists() {
        assert_eq!(
            forward_safe::<(u8, &'static mut i32)>(),
            forward_safe::<params![u8, &'static mut i32]>()
        );
        assert!(forward_safe::<(u8, &'static str)>());
    }
}
