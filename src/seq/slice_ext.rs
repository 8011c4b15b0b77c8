use crate::{Error, Result};

/// Operations that rely on random access, for [`slice`]s.
///
/// Everything in [`SeqExt`](super::SeqExt) also works on slices; these are the
/// ones where an indexed source can answer without copying.
pub trait SliceExt<T> {
    /// Returns the elements from `from` (inclusive) to `to` (exclusive) as a sub-slice,
    /// or to the end if `to` is `None`. Nothing is copied.
    ///
    /// An empty slice always yields an empty slice, whatever the indices.
    ///
    /// # Errors
    ///
    /// - [`Error::EndOutOfBounds`] if `to` is past the end.
    /// - [`Error::InvalidRange`] if `from` is past `to`.
    /// - [`Error::StartOutOfBounds`] if `to` is `None` and `from` is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use seqkit::{prelude::*, ErrorKind};
    ///
    /// let nums = [10, 20, 30, 40];
    ///
    /// assert_eq!(nums.sub_slice(1, Some(3)), Ok(&[20, 30][..]));
    /// assert_eq!(nums.sub_slice(4, None), Ok(&[][..]));
    /// assert_eq!(nums.sub_slice(1, Some(5)).unwrap_err().kind(), ErrorKind::InvalidArgument);
    /// ```
    fn sub_slice(&self, from: usize, to: Option<usize>) -> Result<&[T]>;
}

impl<T> SliceExt<T> for [T] {
    fn sub_slice(&self, from: usize, to: Option<usize>) -> Result<&[T]> {
        let len = self.len();
        if len == 0 {
            return Ok(self);
        }

        let to = match to {
            Some(to) if to > len => return Err(Error::EndOutOfBounds { to, len }),
            Some(to) if from > to => return Err(Error::InvalidRange { from, to }),
            Some(to) => to,
            None if from > len => return Err(Error::StartOutOfBounds { from, len }),
            None => len,
        };

        Ok(&self[from..to])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_slice() {
        let nums = [10, 20, 30, 40];

        assert_eq!(nums.sub_slice(1, Some(3)), Ok(&nums[1..3]));
        assert_eq!(nums.sub_slice(0, None), Ok(&nums[..]));
        assert_eq!(nums.sub_slice(2, Some(2)), Ok(&[][..]));
    }

    #[test]
    fn sub_slice_errors() {
        let nums = vec!['a', 'b'];

        assert_eq!(
            nums.sub_slice(0, Some(3)),
            Err(Error::EndOutOfBounds { to: 3, len: 2 })
        );
        assert_eq!(
            nums.sub_slice(2, Some(1)),
            Err(Error::InvalidRange { from: 2, to: 1 })
        );
        assert_eq!(
            nums.sub_slice(3, None),
            Err(Error::StartOutOfBounds { from: 3, len: 2 })
        );
    }

    #[test]
    fn empty_slice_short_circuits() {
        let empty: [u8; 0] = [];

        assert_eq!(empty.sub_slice(0, None), Ok(&[][..]));
        assert_eq!(empty.sub_slice(7, Some(1)), Ok(&[][..]));
    }
}
