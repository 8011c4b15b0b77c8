use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector that stores the last item it collects.
///
/// If no items have been collected, its [`Output`] is `None`;
/// otherwise, it is `Some` containing the most recently collected item.
///
/// This collector corresponds to [`Iterator::last()`].
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, iter::Last};
///
/// let mut collector = Last::new();
///
/// assert!(collector.collect(1).is_continue());
/// assert!(collector.collect(2).is_continue());
/// assert!(collector.collect(3).is_continue());
///
/// assert_eq!(collector.finish(), Some(3));
/// ```
///
/// ```
/// use seqkit::{prelude::*, iter::Last};
///
/// assert_eq!(Last::<i32>::new().finish(), None);
/// ```
///
/// [`Output`]: CollectorBase::Output
#[derive(Debug, Clone)]
pub struct Last<T> {
    value: Option<T>,
}

impl<T> Last<T> {
    /// Creates an intance of this collector.
    #[inline]
    pub const fn new() -> Self {
        assert_collector::<_, T>(Last { value: None })
    }
}

impl<T> Default for Last<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectorBase for Last<T> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.value
    }
}

impl<T> Collector<T> for Last<T> {
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.value = Some(item);
        ControlFlow::Continue(())
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        // We may risk assigning `None` to `self.value` being `Some`.
        if let Some(last) = items.into_iter().last() {
            self.value = Some(last);
        }

        ControlFlow::Continue(())
    }

    #[inline]
    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        // Slices and `Vec` iterators answer `last()` without walking.
        items.into_iter().last().or(self.value)
    }
}

/// A collector that stores the last item satisfying a predicate.
///
/// The predicate runs on every item, so the whole sequence is always traversed.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, iter::LastMatching};
///
/// let last_even = LastMatching::new(|&x: &i32| x % 2 == 0).collect_then_finish([2, 4, 5]);
///
/// assert_eq!(last_even, Some(4));
/// ```
#[derive(Clone)]
pub struct LastMatching<T, F> {
    value: Option<T>,
    pred: F,
}

impl<T, F> LastMatching<T, F>
where
    F: FnMut(&T) -> bool,
{
    /// Creates an intance of this collector with a given predicate.
    #[inline]
    pub const fn new(pred: F) -> Self {
        assert_collector::<_, T>(Self { value: None, pred })
    }
}

impl<T, F> CollectorBase for LastMatching<T, F> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.value
    }
}

impl<T, F> Collector<T> for LastMatching<T, F>
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if (self.pred)(&item) {
            self.value = Some(item);
        }

        ControlFlow::Continue(())
    }

    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output {
        items.into_iter().filter(&mut self.pred).last().or(self.value)
    }
}

impl<T: Debug, F> Debug for LastMatching<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastMatching")
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::*;

    proptest! {
        #[test]
        fn all_collect_methods_last(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            all_collect_methods_last_impl(nums)?;
        }
    }

    fn all_collect_methods_last_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: Last::new,
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if iter.last() != output {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }

    proptest! {
        #[test]
        fn all_collect_methods_last_matching(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            all_collect_methods_last_matching_impl(nums)?;
        }
    }

    fn all_collect_methods_last_matching_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || LastMatching::new(|&num: &i32| num < 0),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                if iter.filter(|&num| num < 0).last() != output {
                    Err(PredError::IncorrectOutput)
                } else if remaining.next().is_some() {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }
}
