use std::{fmt::Debug, hash::Hash, ops::ControlFlow};

use indexmap::{IndexMap, map::Entry};

use crate::collector::{Collector, CollectorBase, assert_collector};

/// A collector of key-value pairs that folds the value of a repeated key
/// into the existing one.
///
/// `merge` receives the stored value and the incoming one, in that order.
/// Keys keep the position where they first appeared.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, collect::ToMapMerging};
///
/// let words = ToMapMerging::new(|acc: &mut String, word: String| {
///     acc.push(' ');
///     acc.push_str(&word);
/// })
/// .collect_then_finish([
///     ('g', "good".to_owned()),
///     ('b', "bye".to_owned()),
///     ('g', "grief".to_owned()),
/// ]);
///
/// assert_eq!(words[&'g'], "good grief");
/// assert_eq!(words.get_index(1), Some((&'b', &"bye".to_owned())));
/// ```
#[derive(Clone)]
pub struct ToMapMerging<K, V, M> {
    map: IndexMap<K, V>,
    merge: M,
}

impl<K, V, M> ToMapMerging<K, V, M>
where
    K: Hash + Eq,
    M: FnMut(&mut V, V),
{
    /// Creates an intance of this collector with a merge function.
    #[inline]
    pub fn new(merge: M) -> Self {
        assert_collector::<_, (K, V)>(Self {
            map: IndexMap::new(),
            merge,
        })
    }
}

impl<K, V, M> CollectorBase for ToMapMerging<K, V, M> {
    type Output = IndexMap<K, V>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.map
    }
}

impl<K, V, M> Collector<(K, V)> for ToMapMerging<K, V, M>
where
    K: Hash + Eq,
    M: FnMut(&mut V, V),
{
    fn collect(&mut self, (key, value): (K, V)) -> ControlFlow<()> {
        match self.map.entry(key) {
            Entry::Occupied(mut entry) => (self.merge)(entry.get_mut(), value),
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }

        ControlFlow::Continue(())
    }
}

impl<K: Debug, V: Debug, M> Debug for ToMapMerging<K, V, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToMapMerging")
            .field("map", &self.map)
            .finish()
    }
}
