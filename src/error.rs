//! Errors raised by sequence operations.
//!
//! Every fallible operation returns [`Result`]. The `*_or_none` and `index_of_*`
//! operations never fail; they report absence as `None` instead.

use std::fmt;

use thiserror::Error;

/// The error type of this crate.
///
/// Use [`Error::kind()`] to tell "nothing qualified" apart from "too many qualified".
///
/// # Examples
///
/// ```
/// use seqkit::{prelude::*, ErrorKind};
///
/// let none = Vec::<i32>::new().single_element().unwrap_err();
/// let many = vec![1, 2].single_element().unwrap_err();
///
/// assert_eq!(none.kind(), ErrorKind::EmptyOrNotFound);
/// assert_eq!(many.kind(), ErrorKind::MultipleMatches);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("sequence is empty")]
    Empty,
    #[error("sequence contains no element matching the predicate")]
    NoneMatching,
    #[error("sequence has more than one element")]
    MoreThanOne,
    #[error("sequence contains more than one matching element")]
    MultipleMatching,
    #[error("range start index {from} out of range for length {len}")]
    StartOutOfBounds { from: usize, len: usize },
    #[error("range end index {to} out of range for length {len}")]
    EndOutOfBounds { to: usize, len: usize },
    #[error("range starts at {from} but ends at {to}")]
    InvalidRange { from: usize, to: usize },
    #[error("failed to write to the sink")]
    Write(#[from] fmt::Error),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source is empty, or no element satisfies the predicate.
    EmptyOrNotFound,
    /// More than one element qualifies where exactly one is required.
    MultipleMatches,
    /// A range argument is malformed or out of bounds.
    InvalidArgument,
    /// The sink rejected a write.
    Write,
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Empty | Error::NoneMatching => ErrorKind::EmptyOrNotFound,
            Error::MoreThanOne | Error::MultipleMatching => ErrorKind::MultipleMatches,
            Error::StartOutOfBounds { .. }
            | Error::EndOutOfBounds { .. }
            | Error::InvalidRange { .. } => ErrorKind::InvalidArgument,
            Error::Write(_) => ErrorKind::Write,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(Error::Empty.kind(), ErrorKind::EmptyOrNotFound);
        assert_eq!(Error::NoneMatching.kind(), ErrorKind::EmptyOrNotFound);
        assert_eq!(Error::MoreThanOne.kind(), ErrorKind::MultipleMatches);
        assert_eq!(Error::MultipleMatching.kind(), ErrorKind::MultipleMatches);
        assert_eq!(
            Error::InvalidRange { from: 3, to: 1 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::Write(fmt::Error).kind(), ErrorKind::Write);
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::StartOutOfBounds { from: 5, len: 2 }.to_string(),
            "range start index 5 out of range for length 2"
        );
        assert_eq!(
            Error::MultipleMatching.to_string(),
            "sequence contains more than one matching element"
        );
    }
}
