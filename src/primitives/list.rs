//! Type-level parameter lists.
//!
//! A forward signature is modelled as a cons-list of its parameter types:
//!
//! ```text
//! (i32, &String, f32)  ==  Cons<i32, Cons<&String, Cons<f32, Nil>>>
//! ```
//!
//! Use [`params!`](crate::params) to spell a list without the nesting.

use core::marker::PhantomData;

/// The empty parameter list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nil;

/// A non-empty parameter list: head `H` followed by list `T`.
pub struct Cons<H, T>(PhantomData<(PhantomData<H>, T)>);

/// Build a type-level parameter list.
///
/// ```
/// use module_caps::params;
/// use module_caps::primitives::{Cons, Nil};
///
/// type Empty = params![];
/// type Two = params![i32, &'static str];
///
/// let _: core::marker::PhantomData<Empty> = core::marker::PhantomData::<Nil>;
/// let _: core::marker::PhantomData<Two> =
///     core::marker::PhantomData::<Cons<i32, Cons<&'static str, Nil>>>;
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::primitives::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::primitives::list::Cons<$head, $crate::params![$($tail),*]>
    };
}
