//! Eager, order-aware operations on any sequence.
//!
//! [`SeqExt`] is implemented for everything that is [`IntoIterator`],
//! so the same operations work on `Vec`s, slices, sets, maps and iterators alike.
//! Each operation is one traversal feeding a [`Collector`](crate::collector::Collector);
//! the `*_to` forms accept the destination from the caller and hand back its output.
//!
//! [`SliceExt`] adds the operations that need random access.

mod membership;
mod seq_ext;
mod slice_ext;

use membership::Membership;
pub use seq_ext::*;
pub use slice_ext::*;
