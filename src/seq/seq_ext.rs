use std::{
    cmp::Ordering,
    fmt::{Display, Write},
    hash::Hash,
    iter,
};

use indexmap::{IndexMap, IndexSet};

use super::Membership;
use crate::{
    Error, Result,
    cmp::{MaxWith, MinWith},
    collector::{Collector, CollectorBase},
    iter::{Last, LastMatching, LastPosition, Position, Single},
    string::Join,
};

/// Extends every [`IntoIterator`] with eager sequence operations.
///
/// Every operation traverses the sequence once, from front to back, and
/// keeps the traversal order in its result. Only the searches that can
/// settle early (such as [`first_matching`](SeqExt::first_matching)) stop
/// before the end.
///
/// Results are [`Vec`]s, or [`IndexSet`]s and [`IndexMap`]s where
/// uniqueness is involved, so iteration order is always well defined.
/// The `*_to` operations take any [`Collector`] as the destination and
/// return its output. Passing `&mut container` returns that same reference,
/// so several sources can be accumulated into one container.
///
/// Some names carry a suffix (`last_element`, `count_elements`, `fold_left`...)
/// so that they never shadow a method of [`Iterator`].
///
/// This trait is automatically implemented for all [`IntoIterator`] types.
///
/// # Examples
///
/// ```
/// use seqkit::prelude::*;
///
/// let words = ["apple", "kiwi", "avocado", "fig"];
///
/// assert_eq!(words.first_matching(|w| w.starts_with('k')), Ok("kiwi"));
/// assert_eq!(words.index_of_last(|w| w.len() > 3), Some(2));
///
/// let (long, short) = words.partition_by(|w| w.len() > 4);
/// assert_eq!(long, ["apple", "avocado"]);
/// assert_eq!(short, ["kiwi", "fig"]);
///
/// assert_eq!(words.join_to_string(", ")?, "apple, kiwi, avocado, fig");
/// # Ok::<(), seqkit::Error>(())
/// ```
pub trait SeqExt: IntoIterator + Sized {
    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the sequence is empty.
    #[inline]
    fn first_element(self) -> Result<Self::Item> {
        self.first_element_or_none().ok_or(Error::Empty)
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    fn first_element_or_none(self) -> Option<Self::Item> {
        self.into_iter().next()
    }

    /// Returns the first element satisfying `pred`. Stops at that element.
    ///
    /// # Errors
    ///
    /// [`Error::NoneMatching`] if no element satisfies `pred`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, Error};
    ///
    /// assert_eq!([1, 2, 3].first_matching(|&x| x > 1), Ok(2));
    /// assert_eq!([1, 2, 3].first_matching(|&x| x > 5), Err(Error::NoneMatching));
    /// ```
    #[inline]
    fn first_matching<P>(self, pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.first_matching_or_none(pred).ok_or(Error::NoneMatching)
    }

    /// Returns the first element satisfying `pred`, or `None`. Stops at that element.
    #[inline]
    fn first_matching_or_none<P>(self, pred: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().find(pred)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] if the sequence is empty.
    #[inline]
    fn last_element(self) -> Result<Self::Item> {
        self.last_element_or_none().ok_or(Error::Empty)
    }

    /// Returns the last element, or `None` if the sequence is empty.
    ///
    /// Slice and [`Vec`] iterators answer this without walking the elements.
    #[inline]
    fn last_element_or_none(self) -> Option<Self::Item> {
        Last::new().collect_then_finish(self)
    }

    /// Returns the last element satisfying `pred`.
    ///
    /// # Errors
    ///
    /// [`Error::NoneMatching`] if no element satisfies `pred`.
    #[inline]
    fn last_matching<P>(self, pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.last_matching_or_none(pred).ok_or(Error::NoneMatching)
    }

    /// Returns the last element satisfying `pred`, or `None`.
    #[inline]
    fn last_matching_or_none<P>(self, pred: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        LastMatching::new(pred).collect_then_finish(self)
    }

    /// Returns the only element.
    ///
    /// At most two elements are pulled from the sequence.
    ///
    /// # Errors
    ///
    /// - [`Error::Empty`] if the sequence is empty.
    /// - [`Error::MoreThanOne`] if it has more than one element.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, Error};
    ///
    /// assert_eq!(vec!['x'].single_element(), Ok('x'));
    /// assert_eq!(vec![1, 2].single_element(), Err(Error::MoreThanOne));
    /// assert_eq!(Vec::<u8>::new().single_element(), Err(Error::Empty));
    /// ```
    #[inline]
    fn single_element(self) -> Result<Self::Item> {
        Single::new().collect_then_finish(self)
    }

    /// Returns the only element, or `None` if the sequence is empty or has
    /// more than one element.
    #[inline]
    fn single_element_or_none(self) -> Option<Self::Item> {
        self.single_element().ok()
    }

    /// Returns the only element satisfying `pred`. Stops at the second match.
    ///
    /// # Errors
    ///
    /// - [`Error::NoneMatching`] if no element satisfies `pred`.
    /// - [`Error::MultipleMatching`] if more than one does.
    #[inline]
    fn single_matching<P>(self, pred: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Single::matching(pred).collect_then_finish(self)
    }

    /// Returns the only element satisfying `pred`, or `None` if there is none
    /// or more than one.
    #[inline]
    fn single_matching_or_none<P>(self, pred: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.single_matching(pred).ok()
    }

    /// Returns the index of the first element satisfying `pred`, or `None`.
    #[inline]
    fn index_of_first<P>(self, pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Position::new(pred).collect_then_finish(self)
    }

    /// Returns the index of the last element satisfying `pred`, or `None`.
    #[inline]
    fn index_of_last<P>(self, pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        LastPosition::new(pred).collect_then_finish(self)
    }

    /// Returns the elements satisfying `pred`.
    #[inline]
    fn filter_to_list<P>(self, pred: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter_to(Vec::new(), pred)
    }

    /// Feeds the elements satisfying `pred` to `dest`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let mut evens = vec![0];
    /// [1, 2, 3, 4].filter_to(&mut evens, |&x| x % 2 == 0);
    /// (5..=8).filter_to(&mut evens, |&x| x % 2 == 0);
    ///
    /// assert_eq!(evens, [0, 2, 4, 6, 8]);
    /// ```
    #[inline]
    fn filter_to<C, P>(self, dest: C, pred: P) -> C::Output
    where
        C: Collector<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        dest.filter(pred).collect_then_finish(self)
    }

    /// Returns the elements for which `pred(index, &element)` holds.
    #[inline]
    fn filter_indexed_to_list<P>(self, pred: P) -> Vec<Self::Item>
    where
        P: FnMut(usize, &Self::Item) -> bool,
    {
        self.filter_indexed_to(Vec::new(), pred)
    }

    /// Feeds the elements for which `pred(index, &element)` holds to `dest`.
    fn filter_indexed_to<C, P>(self, dest: C, mut pred: P) -> C::Output
    where
        C: Collector<Self::Item>,
        P: FnMut(usize, &Self::Item) -> bool,
    {
        let items = self
            .into_iter()
            .enumerate()
            .filter(move |(index, item)| pred(*index, item))
            .map(|(_, item)| item);
        dest.collect_then_finish(items)
    }

    /// Returns the elements not satisfying `pred`.
    #[inline]
    fn filter_not_to_list<P>(self, pred: P) -> Vec<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter_not_to(Vec::new(), pred)
    }

    /// Feeds the elements not satisfying `pred` to `dest`.
    fn filter_not_to<C, P>(self, dest: C, mut pred: P) -> C::Output
    where
        C: Collector<Self::Item>,
        P: FnMut(&Self::Item) -> bool,
    {
        dest.filter(move |item: &Self::Item| !pred(item))
            .collect_then_finish(self)
    }

    /// Returns each distinct element once, in order of first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// assert_eq!([3, 1, 2, 1, 3].distinct_list(), [3, 1, 2]);
    /// ```
    fn distinct_list(self) -> Vec<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        self.to_set().into_iter().collect()
    }

    /// Returns the elements whose key, computed by `selector`, has not been seen
    /// earlier in the traversal. The selector runs once per element.
    #[inline]
    fn distinct_by<K, F>(self, selector: F) -> Vec<Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        Vec::new().unique_by(selector).collect_then_finish(self)
    }

    /// Builds a map from the key-value pair `transform` returns for each element.
    ///
    /// A later pair with an equal key replaces the value, but the key stays
    /// where it first appeared.
    #[inline]
    fn associate<K, V, F>(self, transform: F) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(Self::Item) -> (K, V),
    {
        self.associate_to(IndexMap::new(), transform)
    }

    /// Feeds the key-value pair `transform` returns for each element to `dest`.
    #[inline]
    fn associate_to<C, K, V, F>(self, dest: C, transform: F) -> C::Output
    where
        C: Collector<(K, V)>,
        F: FnMut(Self::Item) -> (K, V),
    {
        dest.collect_then_finish(self.into_iter().map(transform))
    }

    /// Builds a map from each element keyed by `key`. Last write wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let by_len = ["a", "bb", "cc"].associate_by(|s| s.len());
    ///
    /// assert_eq!(by_len.into_iter().collect::<Vec<_>>(), [(1, "a"), (2, "cc")]);
    /// ```
    #[inline]
    fn associate_by<K, F>(self, key: F) -> IndexMap<K, Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        self.associate_by_to(IndexMap::new(), key)
    }

    /// Feeds each element keyed by `key` to `dest`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexmap::IndexMap;
    /// use seqkit::prelude::*;
    ///
    /// let mut by_initial = IndexMap::new();
    /// ["ant", "bee"].associate_by_to(&mut by_initial, |s| s.as_bytes()[0]);
    /// ["bat", "cow"].associate_by_to(&mut by_initial, |s| s.as_bytes()[0]);
    ///
    /// assert_eq!(by_initial.values().copied().collect::<Vec<_>>(), ["ant", "bat", "cow"]);
    /// ```
    fn associate_by_to<C, K, F>(self, dest: C, mut key: F) -> C::Output
    where
        C: Collector<(K, Self::Item)>,
        F: FnMut(&Self::Item) -> K,
    {
        dest.collect_then_finish(self.into_iter().map(|item| (key(&item), item)))
    }

    /// Builds a map from `key` and `value` of each element. Last write wins.
    #[inline]
    fn associate_by_with<K, V, FK, FV>(self, key: FK, value: FV) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        self.associate_by_with_to(IndexMap::new(), key, value)
    }

    /// Feeds `key` and `value` of each element to `dest`.
    fn associate_by_with_to<C, K, V, FK, FV>(self, dest: C, mut key: FK, mut value: FV) -> C::Output
    where
        C: Collector<(K, V)>,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        dest.collect_then_finish(self.into_iter().map(|item| (key(&item), value(item))))
    }

    /// Returns the distinct elements that also occur in `other`,
    /// in order of first occurrence in this sequence.
    ///
    /// Sets work as either operand. Note that [`IndexSet`] and
    /// [`HashSet`](std::collections::HashSet) have inherent methods named
    /// `union` and `intersection` taking `&self`, which win over this trait
    /// when the receiver is a reference. Call `SeqExt::intersect(&set, ..)`
    /// to be explicit.
    fn intersect(self, other: impl IntoIterator<Item = Self::Item>) -> IndexSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        let mut set = self.to_set();
        let other = Membership::new(other);
        set.retain(|item| other.contains(item));
        set
    }

    /// Returns the distinct elements that do not occur in `other`,
    /// in order of first occurrence in this sequence.
    fn subtract(self, other: impl IntoIterator<Item = Self::Item>) -> IndexSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        let mut set = self.to_set();
        let other = Membership::new(other);
        set.retain(|item| !other.contains(item));
        set
    }

    /// Returns the distinct elements of both sequences: this one's first,
    /// then those only found in `other`, in `other`'s order.
    ///
    /// On a `&IndexSet` or `&HashSet` receiver, `.union(..)` resolves to the
    /// set's inherent method. Use `SeqExt::union(&set, ..)` for this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let all = vec![1, 2].union([2, 3]);
    ///
    /// assert_eq!(all.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    fn union(self, other: impl IntoIterator<Item = Self::Item>) -> IndexSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        let mut set = self.to_set();
        set.extend(other);
        set
    }

    /// Returns every element that does not occur in `other`. Duplicates are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// assert_eq!([1, 2, 3, 2].minus([2]), [1, 3]);
    /// assert_eq!([1, 2, 3].minus([]), [1, 2, 3]);
    /// ```
    fn minus(self, other: impl IntoIterator<Item = Self::Item>) -> Vec<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        let other = Membership::new(other);
        if other.is_empty() {
            return self.to_list();
        }

        self.filter_not_to_list(|item| other.contains(item))
    }

    /// Splits the elements into those satisfying `pred` and the rest.
    /// `pred` runs once per element.
    #[inline]
    fn partition_by<P>(self, pred: P) -> (Vec<Self::Item>, Vec<Self::Item>)
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Vec::new()
            .partition(pred, Vec::new())
            .collect_then_finish(self)
    }

    /// Returns the greatest element according to `cmp`, the first one on ties.
    #[inline]
    fn max_with<F>(self, cmp: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        MaxWith::new(cmp).collect_then_finish(self)
    }

    /// Returns the least element according to `cmp`, the first one on ties.
    #[inline]
    fn min_with<F>(self, cmp: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        MinWith::new(cmp).collect_then_finish(self)
    }

    /// Returns both the least and the greatest element according to `cmp`.
    ///
    /// On ties, the least is the first one and the greatest is the *last* one,
    /// as in [`Itertools::minmax_by()`](itertools::Itertools::minmax_by).
    #[cfg(feature = "itertools")]
    fn min_max_with<F>(self, cmp: F) -> itertools::MinMaxResult<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        use itertools::Itertools;

        self.into_iter().minmax_by(cmp)
    }

    /// Returns the number of elements.
    ///
    /// Sources that know their length, such as [`Vec`] and slices,
    /// answer without walking the elements.
    #[inline]
    fn count_elements(self) -> usize {
        self.into_iter().count()
    }

    /// Returns the number of elements satisfying `pred`.
    #[inline]
    fn count_matching<P>(self, pred: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().filter(pred).count()
    }

    /// Folds every element into an accumulator, from front to back.
    #[inline]
    fn fold_left<A, F>(self, init: A, op: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        self.into_iter().fold(init, op)
    }

    #[inline]
    fn map_to_list<R, F>(self, transform: F) -> Vec<R>
    where
        F: FnMut(Self::Item) -> R,
    {
        self.map_to(Vec::new(), transform)
    }

    #[inline]
    fn map_to<C, R, F>(self, dest: C, transform: F) -> C::Output
    where
        C: Collector<R>,
        F: FnMut(Self::Item) -> R,
    {
        dest.collect_then_finish(self.into_iter().map(transform))
    }

    /// Transforms each element with `transform(index, element)`.
    #[inline]
    fn map_indexed_to_list<R, F>(self, transform: F) -> Vec<R>
    where
        F: FnMut(usize, Self::Item) -> R,
    {
        self.map_indexed_to(Vec::new(), transform)
    }

    fn map_indexed_to<C, R, F>(self, dest: C, mut transform: F) -> C::Output
    where
        C: Collector<R>,
        F: FnMut(usize, Self::Item) -> R,
    {
        let items = self
            .into_iter()
            .enumerate()
            .map(|(index, item)| transform(index, item));
        dest.collect_then_finish(items)
    }

    /// Transforms each element and keeps only the `Some` results.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let nums = ["1", "x", "3"].map_not_none_to_list(|s| s.parse::<u8>().ok());
    ///
    /// assert_eq!(nums, [1, 3]);
    /// ```
    #[inline]
    fn map_not_none_to_list<R, F>(self, transform: F) -> Vec<R>
    where
        F: FnMut(Self::Item) -> Option<R>,
    {
        self.map_not_none_to(Vec::new(), transform)
    }

    #[inline]
    fn map_not_none_to<C, R, F>(self, dest: C, transform: F) -> C::Output
    where
        C: Collector<R>,
        F: FnMut(Self::Item) -> Option<R>,
    {
        dest.filter_map(transform).collect_then_finish(self)
    }

    #[inline]
    fn map_indexed_not_none_to_list<R, F>(self, transform: F) -> Vec<R>
    where
        F: FnMut(usize, Self::Item) -> Option<R>,
    {
        self.map_indexed_not_none_to(Vec::new(), transform)
    }

    fn map_indexed_not_none_to<C, R, F>(self, dest: C, mut transform: F) -> C::Output
    where
        C: Collector<R>,
        F: FnMut(usize, Self::Item) -> Option<R>,
    {
        let items = self
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| transform(index, item));
        dest.collect_then_finish(items)
    }

    /// Concatenates the sequences `transform` returns for each element, in order.
    #[inline]
    fn flat_map_to_list<I, F>(self, transform: F) -> Vec<I::Item>
    where
        I: IntoIterator,
        F: FnMut(Self::Item) -> I,
    {
        self.flat_map_to(Vec::new(), transform)
    }

    #[inline]
    fn flat_map_to<C, I, F>(self, dest: C, transform: F) -> C::Output
    where
        C: Collector<I::Item>,
        I: IntoIterator,
        F: FnMut(Self::Item) -> I,
    {
        dest.collect_then_finish(self.into_iter().flat_map(transform))
    }

    /// Returns the elements from `from` (inclusive) to `to` (exclusive),
    /// or to the end if `to` is `None`.
    ///
    /// The bounds are checked the same way as
    /// [`SliceExt::sub_slice()`](super::SliceExt::sub_slice), which avoids the copy
    /// on slices. An empty sequence always yields an empty list. With `to` given,
    /// at most `to` elements are pulled.
    ///
    /// # Errors
    ///
    /// - [`Error::EndOutOfBounds`] if the sequence ends before `to`.
    /// - [`Error::InvalidRange`] if `from` is past `to`.
    /// - [`Error::StartOutOfBounds`] if `to` is `None` and the sequence ends before `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, ErrorKind};
    ///
    /// assert_eq!([10, 20, 30, 40].sub_list(1, Some(3)), Ok(vec![20, 30]));
    /// assert_eq!(Vec::<u8>::new().sub_list(0, None), Ok(vec![]));
    /// assert_eq!([10, 20].sub_list(1, Some(9)).unwrap_err().kind(), ErrorKind::InvalidArgument);
    /// ```
    fn sub_list(self, from: usize, to: Option<usize>) -> Result<Vec<Self::Item>> {
        let mut items = self.into_iter().peekable();
        if items.peek().is_none() {
            return Ok(Vec::new());
        }

        let end = to.unwrap_or(usize::MAX);
        let mut len = 0;
        let mut list = Vec::new();
        for item in items.take(end) {
            if len >= from {
                list.push(item);
            }
            len += 1;
        }

        match to {
            Some(to) if to > len => Err(Error::EndOutOfBounds { to, len }),
            Some(to) if from > to => Err(Error::InvalidRange { from, to }),
            None if from > len => Err(Error::StartOutOfBounds { from, len }),
            _ => Ok(list),
        }
    }

    /// Returns the elements of this sequence followed by those of `other`.
    #[inline]
    fn plus(self, other: impl IntoIterator<Item = Self::Item>) -> Vec<Self::Item> {
        self.into_iter().chain(other).collect()
    }

    /// Returns the elements of this sequence followed by `element`.
    #[inline]
    fn plus_element(self, element: Self::Item) -> Vec<Self::Item> {
        self.plus(iter::once(element))
    }

    /// Renders every element with [`Display`], separated by `sep`.
    ///
    /// # Errors
    ///
    /// [`Error::Write`] if a [`Display`] impl of an element or of `sep` fails.
    /// The partial text is discarded.
    #[inline]
    fn join_to_string<S>(self, sep: S) -> Result<String>
    where
        Self::Item: Display,
        S: Display,
    {
        let mut out = String::new();
        self.join_to(&mut out, sep)?;
        Ok(out)
    }

    /// Writes every element with [`Display`] into `sink`, separated by `sep`,
    /// and returns `sink`.
    ///
    /// # Errors
    ///
    /// [`Error::Write`] if the sink rejects a write. Nothing is written after that.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let mut out = String::from("[");
    /// [1, 2, 3].join_to(&mut out, "; ")?.push(']');
    ///
    /// assert_eq!(out, "[1; 2; 3]");
    /// # Ok::<(), seqkit::Error>(())
    /// ```
    #[inline]
    fn join_to<W, S>(self, sink: &mut W, sep: S) -> Result<&mut W>
    where
        Self::Item: Display,
        W: Write + ?Sized,
        S: Display,
    {
        Join::new(sink, sep).collect_then_finish(self)
    }

    /// Returns the elements in reverse traversal order.
    fn reversed(self) -> Vec<Self::Item> {
        let mut list = self.to_list();
        list.reverse();
        list
    }

    /// Calls `action(index, element)` on each element, in order.
    #[inline]
    fn for_each_indexed<F>(self, mut action: F)
    where
        F: FnMut(usize, Self::Item),
    {
        self.into_iter()
            .enumerate()
            .for_each(|(index, item)| action(index, item));
    }

    /// Returns the elements as a list, in traversal order.
    #[inline]
    fn to_list(self) -> Vec<Self::Item> {
        self.into_iter().collect()
    }

    /// Returns each distinct element once, in traversal order.
    #[inline]
    fn to_set(self) -> IndexSet<Self::Item>
    where
        Self::Item: Hash + Eq,
    {
        self.into_iter().collect()
    }
}

impl<I: IntoIterator> SeqExt for I {}
