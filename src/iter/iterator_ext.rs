use std::hash::Hash;

use indexmap::IndexMap;

use crate::{
    collect::{GroupingBy, ToMapMerging},
    collector::Collector,
};

/// Extends [`Iterator`] with eager terminal operations that feed
/// [`Collector`]s and build order-preserving maps.
///
/// This trait is automatically implemented for all [`Iterator`] types.
/// Every [`Iterator`] is also an [`IntoIterator`], so the list and set
/// conversions live on [`SeqExt`](crate::seq::SeqExt).
pub trait IteratorExt: Iterator {
    /// Extracts items from this iterator into the provided collector till
    /// the collector stops accumulating or the iterator is exhausted,
    /// and returns the collector’s output.
    ///
    /// Items after the one that closed the collector are left in the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, iter::Position};
    ///
    /// let mut nums = [1, 4, 2, 6].into_iter();
    ///
    /// assert_eq!(nums.feed_into(Position::new(|&x: &i32| x > 3)), Some(1));
    /// assert_eq!(nums.collect::<Vec<_>>(), [2, 6]);
    /// ```
    #[inline]
    fn feed_into<C>(&mut self, collector: C) -> C::Output
    where
        C: Collector<Self::Item>,
    {
        collector.collect_then_finish(self)
    }

    /// Builds a map from each item keyed by `key`.
    ///
    /// A later item with an equal key replaces the earlier one,
    /// but the key keeps the position where it first appeared.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let by_len = ["a", "bb", "c"].into_iter().to_map(|s| s.len());
    ///
    /// assert_eq!(by_len.into_iter().collect::<Vec<_>>(), [(1, "c"), (2, "bb")]);
    /// ```
    fn to_map<K, F>(self, mut key: F) -> IndexMap<K, Self::Item>
    where
        Self: Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        let dest = IndexMap::with_capacity(self.size_hint().0);
        dest.collect_then_finish(self.map(move |item| (key(&item), item)))
    }

    /// Builds a map from `key` and `value` of each item, last write wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let ages = [("ann", 31), ("bob", 27), ("ann", 32)]
    ///     .into_iter()
    ///     .to_map_with(|&(name, _)| name, |(_, age)| age);
    ///
    /// assert_eq!(ages["ann"], 32);
    /// assert_eq!(ages.get_index(0), Some((&"ann", &32)));
    /// ```
    fn to_map_with<K, V, FK, FV>(self, mut key: FK, mut value: FV) -> IndexMap<K, V>
    where
        Self: Sized,
        K: Hash + Eq,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        let dest = IndexMap::with_capacity(self.size_hint().0);
        dest.collect_then_finish(self.map(move |item| (key(&item), value(item))))
    }

    /// Builds a map from `key` and `value` of each item, folding the value of
    /// a colliding key into the existing one with `merge(&mut existing, incoming)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let totals = [("a", 1), ("b", 2), ("a", 3)]
    ///     .into_iter()
    ///     .to_map_merging(|&(k, _)| k, |(_, v)| v, |total, v| *total += v);
    ///
    /// assert_eq!(totals.into_iter().collect::<Vec<_>>(), [("a", 4), ("b", 2)]);
    /// ```
    fn to_map_merging<K, V, FK, FV, M>(
        self,
        mut key: FK,
        mut value: FV,
        merge: M,
    ) -> IndexMap<K, V>
    where
        Self: Sized,
        K: Hash + Eq,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
        M: FnMut(&mut V, V),
    {
        ToMapMerging::new(merge).collect_then_finish(self.map(move |item| (key(&item), value(item))))
    }

    /// Groups items into lists by `key`, in order of first key occurrence.
    /// Items inside a group keep their traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let groups = (1..=6).grouping_by(|&n| n % 3);
    ///
    /// assert_eq!(
    ///     groups.into_iter().collect::<Vec<_>>(),
    ///     [(1, vec![1, 4]), (2, vec![2, 5]), (0, vec![3, 6])],
    /// );
    /// ```
    fn grouping_by<K, F>(self, key: F) -> IndexMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        GroupingBy::new(key).collect_then_finish(self)
    }
}

impl<I: Iterator> IteratorExt for I {}
