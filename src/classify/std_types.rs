//! `Classify` impls for primitives, core, alloc and std types.
//!
//! None of these are modules, and none of them decay: containers and
//! smart pointers are values, only plain references are stripped.

crate::impl_classify!(plain:
    (), bool, char, str,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
    core::time::Duration,
    core::any::TypeId,
);

crate::impl_classify!([T: ?Sized] plain: *const T, *mut T, core::marker::PhantomData<T>);
crate::impl_classify!([T] plain: [T], Option<T>, core::cell::Cell<T>, core::cell::RefCell<T>);
crate::impl_classify!([T, const N: usize] plain: [T; N]);
crate::impl_classify!([T, E] plain: Result<T, E>);
crate::impl_classify!([T] plain: core::ops::Range<T>, core::ops::RangeInclusive<T>);
crate::impl_classify!([T: ?Sized] plain: core::ptr::NonNull<T>);
crate::impl_classify!([T] plain: core::pin::Pin<T>);

macro_rules! impl_classify_tuple {
    ($($T:ident),+) => {
        crate::impl_classify!([$($T),+] plain: ($($T,)+));
    };
}

impl_classify_tuple!(A);
impl_classify_tuple!(A, B);
impl_classify_tuple!(A, B, C);
impl_classify_tuple!(A, B, C, D);
impl_classify_tuple!(A, B, C, D, E);
impl_classify_tuple!(A, B, C, D, E, F);
impl_classify_tuple!(A, B, C, D, E, F, G);
impl_classify_tuple!(A, B, C, D, E, F, G, H);

#[cfg(feature = "alloc")]
mod alloc_types {
    use alloc::boxed::Box;
    use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    crate::impl_classify!(plain: String);
    crate::impl_classify!([T: ?Sized] plain: Box<T>, Rc<T>, Arc<T>);
    crate::impl_classify!([T] plain: Vec<T>, VecDeque<T>, BTreeSet<T>);
    crate::impl_classify!([K, V] plain: BTreeMap<K, V>);
}

#[cfg(feature = "std")]
mod std_lib_types {
    use std::collections::{HashMap, HashSet};
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, RwLock};

    crate::impl_classify!(plain: PathBuf, Path, std::ffi::OsString);
    crate::impl_classify!([T: ?Sized] plain: Mutex<T>, RwLock<T>);
    crate::impl_classify!([T, S] plain: HashSet<T, S>);
    crate::impl_classify!([K, V, S] plain: HashMap<K, V, S>);
}
