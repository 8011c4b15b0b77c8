use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector that computes the minimum among the items it collects
/// according to a comparison function.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// or `Some` containing the minimum item otherwise.
/// Only a strictly better item replaces the current one, so the first
/// of several equal minimums wins.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::MinWith};
///
/// let mut collector = MinWith::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
///
/// let _ = collector.collect_many([(3, 'a'), (9, 'b'), (2, 'c'), (9, 'd'), (1, 'e'), (1, 'f')]);
///
/// assert_eq!(collector.finish().map(|(_, tag)| tag), Some('e'));
/// ```
///
/// The output is `None` if no items were collected.
///
/// ```
/// use seqkit::{prelude::*, cmp::MinWith};
///
/// assert_eq!(MinWith::new(f64::total_cmp).finish(), None);
/// ```
#[derive(Clone)]
pub struct MinWith<T, F> {
    min: Option<T>,
    f: F,
}

impl<T, F> MinWith<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Creates a new instance of this collector with a given comparison function.
    #[inline]
    pub const fn new(f: F) -> Self {
        assert_collector::<_, T>(Self { min: None, f })
    }
}

#[inline]
fn min_assign_with<T>(min: &mut T, item: T, f: &mut impl FnMut(&T, &T) -> Ordering) {
    if f(min, &item) == Ordering::Greater {
        *min = item;
    }
}

impl<T, F> CollectorBase for MinWith<T, F> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.min
    }
}

impl<T, F> Collector<T> for MinWith<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        match self.min {
            None => self.min = Some(item),
            Some(ref mut min) => min_assign_with(min, item, &mut self.f),
        }

        ControlFlow::Continue(())
    }

    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let mut items = items.into_iter();
        let first = self.min.or_else(|| items.next())?;

        Some(items.fold(first, |mut min, item| {
            min_assign_with(&mut min, item, &mut self.f);
            min
        }))
    }
}

impl<T: Debug, F> Debug for MinWith<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinWith").field("min", &self.min).finish()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::cmp::test_utils::Id;
    use crate::test_utils::{BasicCollectorTester, PredError};

    use super::*;

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(-3..3_i32, ..=6),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().enumerate().map(|(id, &num)| Id { id, num }),
            collector_factory: || MinWith::new(Id::cmp_num),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let items: Vec<_> = iter.collect();
                // The earliest item among the extreme ones.
                let expected = items
                    .iter()
                    .map(|item| item.num)
                    .min()
                    .and_then(|extreme| items.iter().copied().find(|item| item.num == extreme));

                if !Id::full_eq_opt(expected, output) {
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
