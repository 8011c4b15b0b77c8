use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

/// A collector that routes every item to one of two collectors.
///
/// The predicate runs exactly once per item. Items for which it returns `true`
/// go to the first collector, the rest go to the second one, and both keep the
/// order in which they were fed.
///
/// This `struct` is created by [`CollectorBase::partition()`]. See its documentation for more.
#[derive(Clone)]
pub struct Partition<CT, CF, F> {
    collector_if_true: CT,
    collector_if_false: CF,
    pred: F,
}

impl<CT, CF, F> Partition<CT, CF, F> {
    pub(in crate::collector) fn new(collector_if_true: CT, collector_if_false: CF, pred: F) -> Self {
        Self {
            collector_if_true,
            collector_if_false,
            pred,
        }
    }
}

impl<CT, CF, F> CollectorBase for Partition<CT, CF, F>
where
    CT: CollectorBase,
    CF: CollectorBase,
{
    type Output = (CT::Output, CF::Output);

    fn finish(self) -> Self::Output {
        (
            self.collector_if_true.finish(),
            self.collector_if_false.finish(),
        )
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        // Only closed when neither side accepts anything anymore.
        if self.collector_if_true.break_hint().is_break()
            && self.collector_if_false.break_hint().is_break()
        {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<CT, CF, T, F> Collector<T> for Partition<CT, CF, F>
where
    CT: Collector<T>,
    CF: Collector<T>,
    F: FnMut(&T) -> bool,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        // A side that has closed may still be handed items here. Its hint is what counts.
        let _ = if (self.pred)(&item) {
            self.collector_if_true.collect(item)
        } else {
            self.collector_if_false.collect(item)
        };

        self.break_hint()
    }
}

impl<CT: Debug, CF: Debug, F> Debug for Partition<CT, CF, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Partition")
            .field("collector_if_true", &self.collector_if_true)
            .field("collector_if_false", &self.collector_if_false)
            .finish()
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;
    use crate::test_utils::{BasicCollectorTester, PredError};

    proptest! {
        #[test]
        fn all_collect_methods(
            nums in propvec(any::<i32>(), ..=5),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || vec![].partition(is_even, vec![]),
            should_break_pred: |_| false,
            pred: |iter, (evens, odds): (Vec<i32>, Vec<i32>), remaining| {
                let (expected_evens, expected_odds): (Vec<_>, Vec<_>) = iter.partition(is_even);

                if expected_evens != evens || expected_odds != odds {
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

    fn is_even(&num: &i32) -> bool {
        num % 2 == 0
    }
}
