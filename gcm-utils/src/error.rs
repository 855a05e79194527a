use thiserror::Error;

/// Errors raised when a caller breaks the width or range contract of an
/// operation. They are deterministic and never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcmUtilsError {
    #[error("expected a buffer of {expected} elements, got {found}")]
    Length { expected: usize, found: usize },
    #[error("bit vector of length {0} is not a whole number of bytes")]
    UnalignedBits(usize),
    #[error("index {index} is out of range for a table of {size} entries")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("value {0} is not a bit")]
    NotABit(u8),
    #[error("failed to decode hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Coarse classification of [`GcmUtilsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A buffer does not have the width the operation was built for.
    Length,
    /// An index or a bit is outside of its domain.
    Range,
    /// A textual encoding could not be decoded.
    Encoding,
}

impl GcmUtilsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Length { .. } | Self::UnalignedBits(_) => ErrorKind::Length,
            Self::IndexOutOfRange { .. } | Self::NotABit(_) => ErrorKind::Range,
            Self::Hex(_) => ErrorKind::Encoding,
        }
    }
}

pub type Result<T> = std::result::Result<T, GcmUtilsError>;

/// Checks that `found` elements were supplied where `expected` are required.
pub(crate) fn check_length(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        tracing::debug!(expected, found, "rejecting buffer of the wrong width");
        return Err(GcmUtilsError::Length { expected, found });
    }
    Ok(())
}
