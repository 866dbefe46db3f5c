use thiserror::Error;

/// Errors reported by the checked [`FixedArray`](crate::FixedArray) operations.
///
/// The unchecked counterparts (`at_unchecked`, `swap_unchecked`, `from_raw`) never
/// produce these; they rely on the caller upholding the documented contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArrayError {
    #[error("index {index} is out of bounds for an array of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("buffer holds {len} elements but {required} are required")]
    BufferTooShort { len: usize, required: usize },
}
