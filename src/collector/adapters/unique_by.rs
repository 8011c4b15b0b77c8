use std::{collections::HashSet, fmt::Debug, hash::Hash, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

/// A collector that only feeds an item if its key has not been seen before.
///
/// The selector runs exactly once per item, in the order items arrive.
/// The first item carrying a key wins, and later ones are dropped.
///
/// This `struct` is created by [`CollectorBase::unique_by()`]. See its documentation for more.
#[derive(Clone)]
pub struct UniqueBy<C, K, F> {
    collector: C,
    seen: HashSet<K>,
    selector: F,
}

impl<C, K, F> UniqueBy<C, K, F>
where
    K: Hash + Eq,
{
    pub(in crate::collector) fn new(collector: C, selector: F) -> Self {
        Self {
            collector,
            seen: HashSet::new(),
            selector,
        }
    }
}

impl<C, K, F> CollectorBase for UniqueBy<C, K, F>
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

impl<C, T, K, F> Collector<T> for UniqueBy<C, K, F>
where
    C: Collector<T>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.seen.insert((self.selector)(&item)) {
            self.collector.collect(item)
        } else {
            self.collector.break_hint()
        }
    }

    fn collect_many(&mut self, items: impl IntoIterator<Item = T>) -> ControlFlow<()> {
        let Self {
            collector,
            seen,
            selector,
        } = self;

        collector.collect_many(
            items
                .into_iter()
                .filter(|item| seen.insert(selector(item))),
        )
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        let Self {
            collector,
            mut seen,
            mut selector,
        } = self;

        collector.collect_then_finish(
            items
                .into_iter()
                .filter(move |item| seen.insert(selector(item))),
        )
    }
}

impl<C: Debug, K: Debug, F> Debug for UniqueBy<C, K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniqueBy")
            .field("collector", &self.collector)
            .field("seen", &self.seen)
            .finish()
    }
}
