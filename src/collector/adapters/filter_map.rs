use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

/// A collector that both filters and maps each item before collecting.
///
/// Items for which the closure returns `None` never reach the underlying collector.
///
/// This `struct` is created by [`CollectorBase::filter_map()`].
/// See its documentation for more.
pub struct FilterMap<C, F> {
    collector: C,
    f: F,
}

impl<C, F> FilterMap<C, F> {
    pub(in crate::collector) fn new(collector: C, f: F) -> Self {
        Self { collector, f }
    }
}

impl<C, F> CollectorBase for FilterMap<C, F>
where
    C: CollectorBase,
{
    type Output = C::Output;

    #[inline]
    fn finish(self) -> Self::Output {
        self.collector.finish()
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        self.collector.break_hint()
    }
}

impl<C, T, F, R> Collector<T> for FilterMap<C, F>
where
    C: Collector<R>,
    F: FnMut(T) -> Option<R>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if let Some(item) = (self.f)(item) {
            self.collector.collect(item)
        } else {
            self.collector.break_hint()
        }
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        self.collector
            .collect_many(items.into_iter().filter_map(&mut self.f))
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        self.collector
            .collect_then_finish(items.into_iter().filter_map(self.f))
    }
}

impl<C, F> Debug for FilterMap<C, F>
where
    C: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMap")
            .field("collector", &self.collector)
            .field("f", &std::any::type_name::<F>())
            .finish()
    }
}
