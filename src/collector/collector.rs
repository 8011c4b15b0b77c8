use std::ops::ControlFlow;

use super::CollectorBase;

/// Collects items of type `T` and produces a final output.
///
/// This trait requires one core method beside [`CollectorBase::finish`]:
///
/// - [`collect`](Collector::collect): consumes an item and returns whether the collector continues
///   accumulating further items *after* this operation.
///
/// # Implementing
///
/// For a simple collector, define the output type you want to produce, wrap it in a struct,
/// and implement [`CollectorBase`] and this trait for that struct.
/// You may also override [`collect_many`](Collector::collect_many) and
/// [`collect_then_finish`](Collector::collect_then_finish) for optimizations.
pub trait Collector<T>: CollectorBase {
    /// Collects an item and returns a [`ControlFlow`] indicating whether the collector is “closed”,
    /// meaning it will no longer accumulate items **right after** this operation.
    ///
    /// Return [`Continue(())`] to indicate the collector can still accumulate more items,
    /// or [`Break(())`] if further feeding is meaningless.
    ///
    /// Containers always return [`Continue(())`].
    /// Searches return [`Break(())`] as soon as the answer is settled,
    /// which is what makes operations like
    /// [`index_of_first`](crate::seq::SeqExt::index_of_first) short-circuit.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, iter::Position};
    ///
    /// let mut collector = Position::new(|&x: &i32| x > 2);
    ///
    /// assert!(collector.collect(1).is_continue());
    /// assert!(collector.collect(3).is_break());
    ///
    /// assert_eq!(collector.finish(), Some(1));
    /// ```
    ///
    /// [`Continue(())`]: ControlFlow::Continue
    /// [`Break(())`]: ControlFlow::Break
    fn collect(&mut self, item: T) -> ControlFlow<()>;

    /// Collects items from an iterator and returns a [`ControlFlow`] indicating whether the
    /// collector is “closed”.
    ///
    /// The iterator is not advanced past the item that closed the collector.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let mut v = vec![1, 2];
    /// let _ = v.collect_many([3, 4, 5]);
    ///
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// ```
    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        // Avoid pulling an item out of the iterator that nobody will accept.
        self.break_hint()?;

        // Internal iteration: adaptors like `chain` fold faster than they `next`.
        items.into_iter().try_for_each(|item| self.collect(item))
    }

    /// Collects items from an iterator, consumes the collector, and produces the accumulated result.
    ///
    /// This is equivalent to calling [`collect_many`](Collector::collect_many)
    /// followed by [`finish`](CollectorBase::finish) (which is the default implementation),
    /// but it can be overridden since the collector will be dropped anyway.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::prelude::*;
    ///
    /// let v = vec![1, 2];
    ///
    /// assert_eq!(v.collect_then_finish([3, 4, 5]), [1, 2, 3, 4, 5]);
    /// ```
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let mut this = self;

        // Finished either way.
        let _ = this.collect_many(items);
        this.finish()
    }
}
