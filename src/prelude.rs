//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the extension traits and the collector traits.
//!
//! # Example
//!
//! ```
//! use seqkit::prelude::*;
//!
//! assert_eq!([2, 1, 2].distinct_list(), [2, 1]);
//! ```

pub use crate::{
    collector::{Collector, CollectorBase},
    iter::IteratorExt,
    seq::{SeqExt, SliceExt},
};
