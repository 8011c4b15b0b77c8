use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::collector::{Collector, CollectorBase};

/// An error returned when the collection operations of the collector are not satisfied.
#[derive(Debug)]
pub enum PredError {
    /// Incorrect [`Output`] produced by the collector
    ///
    /// [`Output`]: crate::collector::CollectorBase::Output
    IncorrectOutput,
    /// The [`Iterator`] is not consumed as expected.
    IncorrectIterConsumption,
}

impl PredError {
    fn of_method(self, name: &'static str) -> OfMethod {
        OfMethod {
            name,
            pred_error: self,
        }
    }
}

/// Helper to convert [`PredError`] into [`TestCaseError`].
struct OfMethod {
    name: &'static str,
    pred_error: PredError,
}

impl From<OfMethod> for TestCaseError {
    fn from(OfMethod { name, pred_error }: OfMethod) -> Self {
        Self::Fail(format!("`{name}()` is implemented incorrectly: {pred_error:?}").into())
    }
}

/// Feeds a fresh collector through each of `collect()`, `collect_many()`
/// and `collect_then_finish()`, and judges every output with `pred`.
///
/// `pred` receives a fresh iterator, the output, and what is left of the
/// iterator that fed the collector.
pub struct BasicCollectorTester<ItFac, ClFac, SbPred, Pred, I, C>
// `where` bound is needed otherwise we get "type annotation needed" for the input iterator.
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub iter_factory: ItFac,
    pub collector_factory: ClFac,
    pub should_break_pred: SbPred,
    pub pred: Pred,
}

impl<ItFac, ClFac, SbPred, Pred, I, C> BasicCollectorTester<ItFac, ClFac, SbPred, Pred, I, C>
where
    I: Iterator,
    C: Collector<I::Item>,
    ItFac: FnMut() -> I,
    ClFac: FnMut() -> C,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, C::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub fn test_collector(&mut self) -> TestCaseResult {
        let should_break = (self.should_break_pred)((self.iter_factory)());

        // `collect()`
        {
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            // Simulate the fact that break_hint is used before looping,
            // which is the intended use case.
            let has_stopped = (|| {
                collector.break_hint()?;
                iter.try_for_each(|item| collector.collect(item))
            })()
            .is_break();

            prop_assert_eq!(
                has_stopped,
                should_break,
                "`collect()` didn't break correctly"
            );

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect"))?;
        }

        // `collect_many()`
        {
            let mut collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            // We don't call `break_hint()` because it's NOT an intended use case.
            let has_stopped = collector.collect_many(&mut iter).is_break();

            prop_assert_eq!(
                has_stopped,
                should_break,
                "`collect_many()` didn't break correctly"
            );

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect_many"))?;
        }

        // `collect_then_finish()`
        {
            let collector = (self.collector_factory)();
            let mut iter = (self.iter_factory)();
            let output = collector.collect_then_finish(&mut iter);

            (self.pred)((self.iter_factory)(), output, &mut iter)
                .map_err(|e| e.of_method("collect_then_finish"))?;
        }

        Ok(())
    }
}
