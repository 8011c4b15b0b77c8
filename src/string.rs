//! String-related [`Collector`]s.
//!
//! [`String`] itself collects `char`s (see [`collections`](crate::collections)).
//! To render arbitrary items as text, use [`Join`].
//!
//! This module corresponds to [`std::string`].
//!
//! [`Collector`]: crate::collector::Collector

use std::{
    fmt::{self, Debug, Display, Write},
    ops::ControlFlow,
};

use crate::{
    Error, Result,
    collector::{Collector, CollectorBase, assert_collector},
};

/// A collector that writes the [`Display`] form of every item into a
/// [`fmt::Write`] sink, with a separator between consecutive items.
///
/// Its [`Output`] is the sink it was given, or [`Error::Write`]
/// if the sink rejected a write. The collector returns [`Break`] after
/// the first failed write and writes nothing afterwards.
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, string::Join};
///
/// let mut out = String::from("nums: ");
/// let _ = Join::new(&mut out, ", ").collect_then_finish([1, 2, 3]);
///
/// assert_eq!(out, "nums: 1, 2, 3");
/// ```
///
/// [`Break`]: std::ops::ControlFlow::Break
/// [`Output`]: CollectorBase::Output
pub struct Join<'a, W: ?Sized, S> {
    sink: &'a mut W,
    sep: S,
    first: bool,
    error: Option<fmt::Error>,
}

impl<'a, W, S> Join<'a, W, S>
where
    W: Write + ?Sized,
    S: Display,
{
    /// Creates an intance of this collector writing into `sink`.
    #[inline]
    pub fn new(sink: &'a mut W, sep: S) -> Self {
        assert_collector::<_, &str>(Self {
            sink,
            sep,
            first: true,
            error: None,
        })
    }
}

impl<'a, W: ?Sized, S> CollectorBase for Join<'a, W, S> {
    type Output = Result<&'a mut W>;

    #[inline]
    fn finish(self) -> Self::Output {
        match self.error {
            Some(e) => Err(Error::Write(e)),
            None => Ok(self.sink),
        }
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.error.is_some() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<W, S, T> Collector<T> for Join<'_, W, S>
where
    W: Write + ?Sized,
    S: Display,
    T: Display,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        self.break_hint()?;

        let res = if self.first {
            self.first = false;
            write!(self.sink, "{item}")
        } else {
            write!(self.sink, "{}{item}", self.sep)
        };

        match res {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                self.error = Some(e);
                ControlFlow::Break(())
            }
        }
    }
}

impl<W: ?Sized, S: Debug> Debug for Join<'_, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Join")
            .field("sep", &self.sep)
            .field("first", &self.first)
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `limit` writes, then fails.
    struct Flaky {
        out: String,
        limit: usize,
    }

    impl Write for Flaky {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.limit == 0 {
                return Err(fmt::Error);
            }

            self.limit -= 1;
            self.out.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn separator_only_between_items() {
        let mut out = String::new();
        let _ = Join::new(&mut out, '|').collect_then_finish(["a"]);
        assert_eq!(out, "a");

        let mut out = String::new();
        let _ = Join::new(&mut out, " - ").collect_then_finish(Vec::<i32>::new());
        assert_eq!(out, "");
    }

    #[test]
    fn returns_the_same_sink() {
        let mut out = String::from(">");
        let sink = Join::new(&mut out, ',').collect_then_finish(['x', 'y']);

        assert!(sink.is_ok_and(|sink| {
            sink.push('<');
            true
        }));
        assert_eq!(out, ">x,y<");
    }

    #[test]
    fn write_failure_stops_collection() {
        let mut sink = Flaky {
            out: String::new(),
            limit: 2,
        };
        let mut collector = Join::new(&mut sink, ", ");

        assert!(collector.collect(1).is_continue());
        // `", 2"` is formatted in two writes, the second one fails.
        assert!(collector.collect(2).is_break());
        assert!(collector.collect(3).is_break());
        assert!(matches!(collector.finish(), Err(Error::Write(_))));
        assert_eq!(sink.out, "1, ");
    }
}
