//! Eager, order-aware operations on sequences, built on composable collectors.
//!
//! Every operation in this crate is a single pass over a source that pushes
//! items into a *destination*. The destination is a [`Collector`]: a standard
//! container, or a small state machine such as "the index of the first item matching this predicate".
//! Searches stop pulling items as soon as their answer is settled.
//!
//! # Sequence operations
//!
//! [`SeqExt`] is implemented for everything that is [`IntoIterator`]:
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let scores = [("ann", 7), ("bob", 3), ("cid", 7), ("ann", 9)];
//!
//! // First occurrence of a key keeps its place, the last value wins.
//! let latest = scores.associate_by_with(|&(name, _)| name, |(_, score)| score);
//! assert_eq!(latest.into_iter().collect::<Vec<_>>(), [("ann", 9), ("bob", 3), ("cid", 7)]);
//!
//! // Ties keep the element seen first.
//! assert_eq!(scores.max_with(|a, b| a.1.cmp(&b.1)), Some(("ann", 9)));
//! assert_eq!(scores[..3].iter().max_with(|a, b| a.1.cmp(&b.1)), Some(&("ann", 7)));
//!
//! // "More than one" is an error, not a guess.
//! assert!(scores.single_matching(|&(_, s)| s == 7).is_err());
//! ```
//!
//! # Destinations
//!
//! The `*_to` operations accept any collector. A container passed by `&mut`
//! comes back as the same `&mut`, so results from several sources can pile up in it:
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let mut lens = Vec::new();
//! ["a", "bb"].map_to(&mut lens, str::len);
//! ["ccc"].map_to(&mut lens, str::len).push(0);
//!
//! assert_eq!(lens, [1, 2, 3, 0]);
//! ```
//!
//! # Streams
//!
//! [`IteratorExt`] adds the terminal operations of an iterator pipeline:
//!
//! ```
//! use seqkit::prelude::*;
//!
//! let by_parity = (1..=5).map(|n| n * n).grouping_by(|n| n % 2 == 0);
//!
//! assert_eq!(by_parity[&false], [1, 9, 25]);
//! assert_eq!(by_parity[&true], [4, 16]);
//! ```
//!
//! # Errors
//!
//! Operations that can fail return [`Result`]. The `*_or_none` and `index_of_*`
//! forms return `None` instead. [`Error::kind()`] tells
//! "nothing qualified" apart from "more than one qualified".
//!
//! # Features
//!
//! - `itertools`: adds [`SeqExt::min_max_with()`] on top of [`itertools`].
//!
//! [`Collector`]: collector::Collector
//! [`SeqExt`]: seq::SeqExt
//! [`SeqExt::min_max_with()`]: seq::SeqExt::min_max_with
//! [`IteratorExt`]: iter::IteratorExt
//! [`itertools`]: https://docs.rs/itertools

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cmp;
pub mod collect;
pub mod collections;
pub mod collector;
mod error;
pub mod iter;
pub mod prelude;
pub mod seq;
pub mod string;
#[cfg(test)]
mod test_utils;

pub use error::*;
