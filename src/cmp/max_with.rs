use std::{cmp::Ordering, fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector that computes the maximum among the items it collects
/// according to a comparison function.
///
/// Its [`Output`](CollectorBase::Output) is `None` if it has not collected any items,
/// or `Some` containing the maximum item otherwise.
/// Only a strictly better item replaces the current one, so the first
/// of several equal maximums wins.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, cmp::MaxWith};
///
/// let mut collector = MaxWith::new(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
///
/// let _ = collector.collect_many([(3, 'a'), (9, 'b'), (2, 'c'), (9, 'd'), (1, 'e'), (1, 'f')]);
///
/// assert_eq!(collector.finish().map(|(_, tag)| tag), Some('b'));
/// ```
///
/// The output is `None` if no items were collected.
///
/// ```
/// use seqkit::{prelude::*, cmp::MaxWith};
///
/// assert_eq!(MaxWith::new(f64::total_cmp).finish(), None);
/// ```
#[derive(Clone)]
pub struct MaxWith<T, F> {
    max: Option<T>,
    f: F,
}

impl<T, F> MaxWith<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Creates a new instance of this collector with a given comparison function.
    #[inline]
    pub const fn new(f: F) -> Self {
        assert_collector::<_, T>(Self { max: None, f })
    }
}

#[inline]
fn max_assign_with<T>(max: &mut T, item: T, f: &mut impl FnMut(&T, &T) -> Ordering) {
    if f(max, &item) == Ordering::Less {
        *max = item;
    }
}

impl<T, F> CollectorBase for MaxWith<T, F> {
    type Output = Option<T>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.max
    }
}

impl<T, F> Collector<T> for MaxWith<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        match self.max {
            None => self.max = Some(item),
            Some(ref mut max) => max_assign_with(max, item, &mut self.f),
        }

        ControlFlow::Continue(())
    }

    fn collect_then_finish(mut self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let mut items = items.into_iter();
        let first = self.max.or_else(|| items.next())?;

        Some(items.fold(first, |mut max, item| {
            max_assign_with(&mut max, item, &mut self.f);
            max
        }))
    }
}

impl<T: Debug, F> Debug for MaxWith<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaxWith").field("max", &self.max).finish()
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
            collector_factory: || MaxWith::new(Id::cmp_num),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let items: Vec<_> = iter.collect();
                // The earliest item among the extreme ones.
                let expected = items
                    .iter()
                    .map(|item| item.num)
                    .max()
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
