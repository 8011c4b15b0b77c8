use std::{hash::Hash, ops::ControlFlow};

use super::{Filter, FilterMap, Partition, UniqueBy};

/// The item-independent half of a collector.
///
/// It knows what the collector produces and whether it still accepts items,
/// but not *which* items it accepts. That part is [`Collector`](super::Collector).
///
/// Adaptors live here so that they can be chained on any destination
/// before the item type is known.
pub trait CollectorBase: Sized {
    /// The result this collector yields, via the [`finish`](CollectorBase::finish) method.
    type Output;

    /// Consumes the collector and returns the accumulated result.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let mut v = vec![1, 2];
    /// let collector = (&mut v).filter(|&x: &i32| x > 0);
    ///
    /// // The output of a `&mut` destination is the same reference.
    /// let out: &mut Vec<i32> = collector.collect_then_finish([3, -4, 5]);
    /// out.push(6);
    ///
    /// assert_eq!(v, [1, 2, 3, 5, 6]);
    /// ```
    fn finish(self) -> Self::Output;

    /// Returns whether the collector will stop accumulating if it is fed
    /// another item.
    ///
    /// Containers never stop, so the default answer is [`Continue(())`].
    /// Searches such as [`Position`](crate::iter::Position) answer [`Break(())`]
    /// once they have what they were looking for.
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Creates a collector that only feeds items satisfying `pred` to this collector.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let evens = vec![].filter(|&x: &i32| x % 2 == 0).collect_then_finish(1..=6);
    ///
    /// assert_eq!(evens, [2, 4, 6]);
    /// ```
    #[inline]
    fn filter<F>(self, pred: F) -> Filter<Self, F> {
        Filter::new(self, pred)
    }

    /// Creates a collector that transforms every item with `f` and only feeds
    /// the `Some` results to this collector.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let nums = vec![]
    ///     .filter_map(|s: &str| s.parse::<i32>().ok())
    ///     .collect_then_finish(["1", "two", "3"]);
    ///
    /// assert_eq!(nums, [1, 3]);
    /// ```
    #[inline]
    fn filter_map<F>(self, f: F) -> FilterMap<Self, F> {
        FilterMap::new(self, f)
    }

    /// Creates a collector that routes items satisfying `pred` to this collector
    /// and the rest to `other_if_false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let (odds, evens) = vec![]
    ///     .partition(|&x: &i32| x % 2 != 0, vec![])
    ///     .collect_then_finish(1..=5);
    ///
    /// assert_eq!(odds, [1, 3, 5]);
    /// assert_eq!(evens, [2, 4]);
    /// ```
    #[inline]
    fn partition<C, F>(self, pred: F, other_if_false: C) -> Partition<Self, C, F>
    where
        C: CollectorBase,
    {
        Partition::new(self, other_if_false, pred)
    }

    /// Creates a collector that drops every item whose key, computed by `selector`,
    /// has already been seen. The first item with a given key wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let words = vec![]
    ///     .unique_by(|s: &&str| s.len())
    ///     .collect_then_finish(["a", "bb", "c", "dd", "eee"]);
    ///
    /// assert_eq!(words, ["a", "bb", "eee"]);
    /// ```
    #[inline]
    fn unique_by<K, F>(self, selector: F) -> UniqueBy<Self, K, F>
    where
        K: Hash + Eq,
    {
        UniqueBy::new(self, selector)
    }
}
