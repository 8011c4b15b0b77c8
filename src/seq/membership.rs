use std::{collections::HashSet, hash::Hash};

/// Answers "is this item in the right operand" for the set operations.
///
/// Only an operand with more than one element is hashed.
#[derive(Debug)]
pub(crate) enum Membership<T> {
    Empty,
    Single(T),
    Set(HashSet<T>),
}

impl<T> Membership<T>
where
    T: Hash + Eq,
{
    pub(crate) fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items = items.into_iter();

        let Some(first) = items.next() else {
            return Self::Empty;
        };
        let Some(second) = items.next() else {
            return Self::Single(first);
        };

        let mut set = HashSet::with_capacity(items.size_hint().0.saturating_add(2));
        set.insert(first);
        set.insert(second);
        set.extend(items);
        Self::Set(set)
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub(crate) fn contains(&self, item: &T) -> bool {
        match self {
            Self::Empty => false,
            Self::Single(only) => only == item,
            Self::Set(set) => set.contains(item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_only_past_one_element() {
        assert!(matches!(Membership::<i32>::new([]), Membership::Empty));
        assert!(matches!(Membership::new([4]), Membership::Single(4)));
        assert!(matches!(Membership::new([4, 4]), Membership::Set(ref set) if set.len() == 1));
    }

    #[test]
    fn contains() {
        let single = Membership::new(["x"]);
        assert!(single.contains(&"x"));
        assert!(!single.contains(&"y"));

        let set = Membership::new(1..10);
        assert!(set.contains(&9));
        assert!(!set.contains(&10));

        assert!(!Membership::new(std::iter::empty::<u8>()).contains(&0));
    }
}
