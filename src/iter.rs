//! [`Collector`]s mirroring the searching methods of [`Iterator`],
//! and the [`IteratorExt`] extension trait that drives them.
//!
//! This module corresponds to [`std::iter`].
//!
//! [`Collector`]: crate::collector::Collector

mod iterator_ext;
mod last;
mod position;
mod single;

pub use iterator_ext::*;
pub use last::*;
pub use position::*;
pub use single::*;
