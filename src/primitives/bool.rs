//! Type-level answers.
//!
//! Every classification fact is a `Present` or `Absent` type, so generic
//! code can branch on it with `If` and `static_dispatch`.

use crate::enable::dispatch::StaticMethodImpl;

/// A fact answered at the type level.
pub trait Bool: 'static {
    const VALUE: bool;

    /// `Then` when present, `Else` otherwise.
    type If<Then, Else>;

    /// `If` restricted to facts, so the result can be queried again.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Runs `Then::call()` when present and `Else::call()` otherwise.
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>;
}

/// The fact holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

/// The fact does not hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Then::call()
    }
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Else::call()
    }
}
