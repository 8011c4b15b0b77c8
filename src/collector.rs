//! Module contains traits and `struct`s for collectors.
//!
//! A collector is a *destination*: something items are pushed into, one at a time,
//! and that yields an [`Output`](CollectorBase::Output) once it is finished.
//! Every sequence operation in this crate is a traversal that feeds a collector,
//! so "where do the results go" is always answered by this module.
//!
//! Standard containers are collectors out of the box (see [`collections`](crate::collections)).
//! A container taken by value outputs itself, while a `&mut` container
//! outputs the very same `&mut` reference, which is how the `*_to` operations
//! hand back the destination they were given.
//!
//! # Unspecified behaviors
//!
//! After any of [`Collector::collect()`] or [`Collector::collect_many()`]
//! have returned [`Break(())`] once, behaviors of subsequent calls to any
//! method other than [`finish()`](CollectorBase::finish) are unspecified.
//! They must not cause memory unsafety, but they may keep accumulating.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use seqkit::prelude::*;
//!
//! /// Remembers the longest word it has seen.
//! #[derive(Default)]
//! struct Longest(Option<String>);
//!
//! impl CollectorBase for Longest {
//!     type Output = Option<String>;
//!
//!     fn finish(self) -> Self::Output {
//!         self.0
//!     }
//! }
//!
//! impl Collector<String> for Longest {
//!     fn collect(&mut self, word: String) -> ControlFlow<()> {
//!         if self.0.as_ref().is_none_or(|longest| word.len() > longest.len()) {
//!             self.0 = Some(word);
//!         }
//!
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let longest = "the noble and the singer"
//!     .split_whitespace()
//!     .map(String::from)
//!     .feed_into(Longest::default());
//!
//! assert_eq!(longest.as_deref(), Some("singer"));
//! ```
//!
//! [`Break(())`]: std::ops::ControlFlow::Break

mod adapters;
#[allow(clippy::module_inception)]
mod collector;
mod collector_base;

pub use adapters::*;
pub use collector::*;
pub use collector_base::*;

#[inline(always)]
pub(crate) const fn assert_collector<C, T>(collector: C) -> C
where
    C: Collector<T>,
{
    collector
}
