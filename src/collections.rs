//! [`Collector`]s for containers.
//!
//! Every container here is a destination in two flavors:
//!
//! - By value. Its [`Output`](CollectorBase::Output) is the container itself.
//! - By `&mut`. Its [`Output`](CollectorBase::Output) is the same `&mut` reference,
//!   so accumulating into a caller-owned container never swaps it for another one.
//!
//! Order-preserving destinations are [`Vec`], [`VecDeque`], [`String`],
//! [`IndexSet`] and [`IndexMap`]. Inserting an existing key into an [`IndexMap`]
//! overwrites the value but keeps the key where it first appeared.
//!
//! # Examples
//!
//! ```
//! use indexmap::IndexMap;
//! use seqkit::prelude::*;
//!
//! let mut lens = IndexMap::new();
//! let _ = (&mut lens).collect_many([("bb", 2), ("a", 1)]);
//! let _ = (&mut lens).collect_many([("bb", 20)]);
//!
//! assert_eq!(lens.into_iter().collect::<Vec<_>>(), [("bb", 20), ("a", 1)]);
//! ```

use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
    ops::ControlFlow,
};

use indexmap::{IndexMap, IndexSet};

use crate::collector::{Collector, CollectorBase};

macro_rules! collector_impl {
    (
        $coll_name:ident<$($generic:ident),*>, $item_ty:ty,
        $item_pat:pat_param => $push_method_name:ident($($item_args:expr),*),
        $($gen_bound:ident: $bound:path),* $(,)?
    ) => {
        impl<$($generic),*> CollectorBase for $coll_name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            type Output = Self;

            #[inline]
            fn finish(self) -> Self::Output {
                self
            }
        }

        impl<$($generic),*> Collector<$item_ty> for $coll_name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            #[inline]
            fn collect(&mut self, $item_pat: $item_ty) -> ControlFlow<()> {
                // A `false` from `insert` means "already present", not "closed".
                self.$push_method_name($($item_args),*);
                ControlFlow::Continue(())
            }

            #[inline]
            fn collect_many(&mut self, items: impl IntoIterator<Item = $item_ty>) -> ControlFlow<()> {
                self.extend(items);
                ControlFlow::Continue(())
            }

            #[inline]
            fn collect_then_finish(mut self, items: impl IntoIterator<Item = $item_ty>) -> Self::Output {
                self.extend(items);
                self
            }
        }

        impl<'a, $($generic),*> CollectorBase for &'a mut $coll_name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            type Output = Self;

            #[inline]
            fn finish(self) -> Self::Output {
                self
            }
        }

        impl<'a, $($generic),*> Collector<$item_ty> for &'a mut $coll_name<$($generic),*>
        where
            $($gen_bound: $bound,)*
        {
            #[inline]
            fn collect(&mut self, $item_pat: $item_ty) -> ControlFlow<()> {
                (**self).$push_method_name($($item_args),*);
                ControlFlow::Continue(())
            }

            #[inline]
            fn collect_many(&mut self, items: impl IntoIterator<Item = $item_ty>) -> ControlFlow<()> {
                (**self).extend(items);
                ControlFlow::Continue(())
            }

            #[inline]
            fn collect_then_finish(self, items: impl IntoIterator<Item = $item_ty>) -> Self::Output {
                self.extend(items);
                self
            }
        }
    };
}

#[rustfmt::skip]
collector_impl!(
    Vec<T>, T,
    item => push(item),
);

#[rustfmt::skip]
collector_impl!(
    VecDeque<T>, T,
    item => push_back(item),
);

collector_impl!(
    IndexSet<T, S>, T,
    item => insert(item),
    T: Hash, T: Eq, S: BuildHasher,
);

collector_impl!(
    IndexMap<K, V, S>, (K, V),
    (key, value) => insert(key, value),
    K: Hash, K: Eq, S: BuildHasher,
);

collector_impl!(
    HashSet<T, S>, T,
    item => insert(item),
    T: Hash, T: Eq, S: BuildHasher,
);

collector_impl!(
    HashMap<K, V, S>, (K, V),
    (key, value) => insert(key, value),
    K: Hash, K: Eq, S: BuildHasher,
);

collector_impl!(
    BTreeSet<T>, T,
    item => insert(item),
    T: Ord,
);

collector_impl!(
    BTreeMap<K, V>, (K, V),
    (key, value) => insert(key, value),
    K: Ord,
);

impl CollectorBase for String {
    type Output = Self;

    #[inline]
    fn finish(self) -> Self::Output {
        self
    }
}

impl Collector<char> for String {
    #[inline]
    fn collect(&mut self, ch: char) -> ControlFlow<()> {
        self.push(ch);
        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = char>) -> ControlFlow<()> {
        self.extend(items);
        ControlFlow::Continue(())
    }
}

impl CollectorBase for &mut String {
    type Output = Self;

    #[inline]
    fn finish(self) -> Self::Output {
        self
    }
}

impl Collector<char> for &mut String {
    #[inline]
    fn collect(&mut self, ch: char) -> ControlFlow<()> {
        self.push(ch);
        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_many(&mut self, items: impl IntoIterator<Item = char>) -> ControlFlow<()> {
        self.extend(items);
        ControlFlow::Continue(())
    }
}
