use std::{fmt::Debug, ops::ControlFlow};

use crate::{
    Error, Result,
    collector::{Collector, CollectorBase, assert_collector},
};

/// A collector that expects exactly one qualifying item.
///
/// Its [`Output`] is `Ok` with that item, or an [`Error`] telling whether
/// nothing qualified or more than one item did. The collector returns [`Break`]
/// as soon as the second qualifying item arrives, since the answer can no longer change.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, iter::Single, Error};
///
/// assert_eq!(Single::new().collect_then_finish([7]), Ok(7));
/// assert_eq!(Single::<i32, _>::new().collect_then_finish([]), Err(Error::Empty));
///
/// let mut collector = Single::matching(|&x: &i32| x > 10);
///
/// assert!(collector.collect(11).is_continue());
/// assert!(collector.collect(3).is_continue());
/// assert!(collector.collect(12).is_break());
///
/// assert_eq!(collector.finish(), Err(Error::MultipleMatching));
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
/// [`Output`]: CollectorBase::Output
#[derive(Clone)]
pub struct Single<T, F> {
    state: State<T>,
    pred: F,
    conditional: bool,
}

#[derive(Clone)]
enum State<T> {
    Nothing,
    One(T),
    Many,
}

impl<T> Single<T, fn(&T) -> bool> {
    /// Creates a collector that expects exactly one item.
    ///
    /// It reports [`Error::Empty`] and [`Error::MoreThanOne`].
    #[inline]
    pub fn new() -> Self {
        assert_collector::<_, T>(Self {
            state: State::Nothing,
            pred: |_| true,
            conditional: false,
        })
    }
}

impl<T> Default for Single<T, fn(&T) -> bool> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Single<T, F>
where
    F: FnMut(&T) -> bool,
{
    /// Creates a collector that expects exactly one item satisfying `pred`.
    ///
    /// It reports [`Error::NoneMatching`] and [`Error::MultipleMatching`].
    #[inline]
    pub fn matching(pred: F) -> Self {
        assert_collector::<_, T>(Self {
            state: State::Nothing,
            pred,
            conditional: true,
        })
    }
}

impl<T, F> CollectorBase for Single<T, F> {
    type Output = Result<T>;

    fn finish(self) -> Self::Output {
        match (self.state, self.conditional) {
            (State::One(item), _) => Ok(item),
            (State::Nothing, false) => Err(Error::Empty),
            (State::Nothing, true) => Err(Error::NoneMatching),
            (State::Many, false) => Err(Error::MoreThanOne),
            (State::Many, true) => Err(Error::MultipleMatching),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if matches!(self.state, State::Many) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, F> Collector<T> for Single<T, F>
where
    F: FnMut(&T) -> bool,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        match self.state {
            State::Many => ControlFlow::Break(()),
            _ if !(self.pred)(&item) => ControlFlow::Continue(()),
            State::Nothing => {
                self.state = State::One(item);
                ControlFlow::Continue(())
            }
            State::One(_) => {
                self.state = State::Many;
                ControlFlow::Break(())
            }
        }
    }
}

impl<T: Debug, F> Debug for Single<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let found = match self.state {
            State::Nothing => "nothing",
            State::One(_) => "one",
            State::Many => "many",
        };

        f.debug_struct("Single")
            .field("found", &found)
            .field("conditional", &self.conditional)
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

    fn expected(first: Option<i32>, second: Option<i32>, conditional: bool) -> Result<i32> {
        match (first, second, conditional) {
            (Some(item), None, _) => Ok(item),
            (None, _, false) => Err(Error::Empty),
            (None, _, true) => Err(Error::NoneMatching),
            (Some(_), Some(_), false) => Err(Error::MoreThanOne),
            (Some(_), Some(_), true) => Err(Error::MultipleMatching),
        }
    }

    proptest! {
        #[test]
        fn all_collect_methods_single(
            nums in propvec(any::<i32>(), ..=3),
        ) {
            all_collect_methods_single_impl(nums)?;
        }
    }

    fn all_collect_methods_single_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: Single::new,
            should_break_pred: |iter| iter.count() >= 2,
            pred: |mut iter, output, remaining| {
                let first = iter.next();
                let second = iter.next();

                if expected(first, second, false) != output {
                    Err(PredError::IncorrectOutput)
                } else if iter.ne(remaining) {
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
        fn all_collect_methods_single_matching(
            nums in propvec(any::<i32>(), ..=6),
        ) {
            all_collect_methods_single_matching_impl(nums)?;
        }
    }

    fn all_collect_methods_single_matching_impl(nums: Vec<i32>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || Single::matching(|&num: &i32| num > 0),
            should_break_pred: |iter| iter.filter(|&num| num > 0).count() >= 2,
            pred: |mut iter, output, remaining| {
                // Stops right after the second match, like the collector.
                let mut matches = iter.by_ref().filter(|&num| num > 0);
                let first = matches.next();
                let second = matches.next();

                if expected(first, second, true) != output {
                    Err(PredError::IncorrectOutput)
                } else if iter.ne(remaining) {
                    Err(PredError::IncorrectIterConsumption)
                } else {
                    Ok(())
                }
            },
        }
        .test_collector()
    }
}
