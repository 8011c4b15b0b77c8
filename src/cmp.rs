//! [`Collector`]s for comparing items.
//!
//! Both collectors keep the *first* of several equally extreme items,
//! which differs from [`Iterator::max_by()`] keeping the last one.
//!
//! This module corresponds to [`std::cmp`].
//!
//! [`Collector`]: crate::collector::Collector

mod max_with;
mod min_with;

pub use max_with::*;
pub use min_with::*;
