/// Errors raised by the index based operations of both arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The index lies outside the valid range for the requested operation.
    ///
    /// Reads, writes and removals accept `[0, len)`, insertion by index
    /// accepts `[0, len]`.
    #[error("Index out of range: index {index} for length {len}")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// The length of the array at the time of the call
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Bounds check for element access (`index < len`).
#[inline]
pub(crate) fn check_access(index: usize, len: usize) -> Result<()> {
    if index >= len {
        Err(Error::IndexOutOfRange { index, len })
    } else {
        Ok(())
    }
}

/// Bounds check for insertion by index (`index <= len`).
#[inline]
pub(crate) fn check_insert(index: usize, len: usize) -> Result<()> {
    if index > len {
        Err(Error::IndexOutOfRange { index, len })
    } else {
        Ok(())
    }
}
