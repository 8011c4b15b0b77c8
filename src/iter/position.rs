use std::{fmt::Debug, ops::ControlFlow};

use crate::collector::{Collector, CollectorBase};

/// A collector that finds the zero-based index of the first item satisfying a predicate.
///
/// Its [`Output`] is `None` if no item matched.
/// It returns [`Break`] as soon as the first match is collected.
///
/// This collector corresponds to [`Iterator::position()`].
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, iter::Position};
///
/// let pos = Position::new(|&x: &i32| x > 2).collect_then_finish([1, 5, 3]);
///
/// assert_eq!(pos, Some(1));
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
/// [`Output`]: CollectorBase::Output
#[derive(Clone)]
pub struct Position<F> {
    index: usize,
    found: bool,
    pred: F,
}

impl<F> Position<F> {
    /// Creates an intance of this collector with a given predicate.
    #[inline]
    pub const fn new(pred: F) -> Self {
        Self {
            index: 0,
            found: false,
            pred,
        }
    }
}

impl<F> CollectorBase for Position<F> {
    type Output = Option<usize>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.found.then_some(self.index)
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.found {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, F> Collector<T> for Position<F>
where
    F: FnMut(&T) -> bool,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if self.found {
            return ControlFlow::Break(());
        }

        if (self.pred)(&item) {
            self.found = true;
            ControlFlow::Break(())
        } else {
            self.index += 1;
            ControlFlow::Continue(())
        }
    }

    fn collect_then_finish(self, items: impl IntoIterator<Item = T>) -> Self::Output {
        if self.found {
            return Some(self.index);
        }

        let mut pred = self.pred;
        items
            .into_iter()
            .position(|item| pred(&item))
            .map(|pos| pos + self.index)
    }
}

impl<F> Debug for Position<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Position")
            .field("index", &self.index)
            .field("found", &self.found)
            .finish()
    }
}

/// A collector that finds the zero-based index of the last item satisfying a predicate.
///
/// The whole sequence is always traversed.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, iter::LastPosition};
///
/// let pos = LastPosition::new(|&x: &i32| x > 2).collect_then_finish([1, 5, 3, 0]);
///
/// assert_eq!(pos, Some(2));
/// ```
#[derive(Clone)]
pub struct LastPosition<F> {
    index: usize,
    last: Option<usize>,
    pred: F,
}

impl<F> LastPosition<F> {
    /// Creates an intance of this collector with a given predicate.
    #[inline]
    pub const fn new(pred: F) -> Self {
        Self {
            index: 0,
            last: None,
            pred,
        }
    }
}

impl<F> CollectorBase for LastPosition<F> {
    type Output = Option<usize>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.last
    }
}

impl<T, F> Collector<T> for LastPosition<F>
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        if (self.pred)(&item) {
            self.last = Some(self.index);
        }

        self.index += 1;
        ControlFlow::Continue(())
    }
}

impl<F> Debug for LastPosition<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastPosition")
            .field("index", &self.index)
            .field("last", &self.last)
            .finish()
    }
}
