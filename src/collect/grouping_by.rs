use std::{fmt::Debug, hash::Hash, ops::ControlFlow};

use indexmap::IndexMap;

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector that groups items into lists by a key.
///
/// Groups appear in the order their key was first seen, and items within
/// a group keep the order they were collected in.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, collect::GroupingBy};
///
/// let mut collector = GroupingBy::new(|s: &&str| s.len());
///
/// let _ = collector.collect_many(["to", "be", "or", "not"]);
/// let groups = collector.finish();
///
/// assert_eq!(groups[&2], ["to", "be", "or"]);
/// assert_eq!(groups[&3], ["not"]);
/// ```
#[derive(Clone)]
pub struct GroupingBy<K, T, F> {
    groups: IndexMap<K, Vec<T>>,
    key: F,
}

impl<K, T, F> GroupingBy<K, T, F>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    /// Creates an intance of this collector with a key selector.
    #[inline]
    pub fn new(key: F) -> Self {
        assert_collector::<_, T>(Self {
            groups: IndexMap::new(),
            key,
        })
    }
}

impl<K, T, F> CollectorBase for GroupingBy<K, T, F> {
    type Output = IndexMap<K, Vec<T>>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.groups
    }
}

impl<K, T, F> Collector<T> for GroupingBy<K, T, F>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.groups
            .entry((self.key)(&item))
            .or_default()
            .push(item);

        ControlFlow::Continue(())
    }
}

impl<K: Debug, T: Debug, F> Debug for GroupingBy<K, T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupingBy")
            .field("groups", &self.groups)
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
        fn all_collect_methods(
            nums in propvec(0..20_u8, ..=8),
        ) {
            all_collect_methods_impl(nums)?;
        }
    }

    fn all_collect_methods_impl(nums: Vec<u8>) -> TestCaseResult {
        BasicCollectorTester {
            iter_factory: || nums.iter().copied(),
            collector_factory: || GroupingBy::new(|&num: &u8| num % 3),
            should_break_pred: |_| false,
            pred: |iter, output, remaining| {
                let items: Vec<_> = iter.collect();

                // Every group must be the subsequence of its key, and the keys
                // must appear in first-occurrence order.
                let groups_ok = output.iter().all(|(&key, group)| {
                    items
                        .iter()
                        .copied()
                        .filter(|num| num % 3 == key)
                        .eq(group.iter().copied())
                });
                let mut keys: Vec<_> = items.iter().map(|num| num % 3).collect();
                let mut seen = Vec::new();
                keys.retain(|key| {
                    let first = !seen.contains(key);
                    seen.push(*key);
                    first
                });

                if !groups_ok || output.keys().copied().ne(keys) {
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
