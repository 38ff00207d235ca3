//! Errors reported by the collections of this crate.

use std::ops::Range;

use thiserror::Error;

/// Result type returned by fallible collection operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while operating on a collection.
///
/// Every operation validates its input before touching the structure,
/// so a returned error always means the collection is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An absent element was supplied where a value is required.
    #[error("absent elements cannot be stored or searched for")]
    InvalidArgument,

    /// The index lies outside the range accepted by the operation.
    #[error("index {index} is out of range, it must be within {range:?}")]
    IndexOutOfRange { index: usize, range: Range<usize> },

    /// The operation needs at least one element.
    #[error("the collection is empty")]
    EmptyCollection,

    /// No stored element matched the searched one.
    #[error("no matching element found")]
    NoSuchElement,
}

impl Error {
    pub(crate) const fn out_of_range(index: usize, end: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            range: 0..end,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn test_index_out_of_range_message_states_the_valid_bound() {
        let sut = Error::out_of_range(7, 4);
        assert_eq!(
            sut.to_string(),
            "index 7 is out of range, it must be within 0..4"
        );
    }

    #[test]
    fn test_empty_range_is_reported_as_is() {
        let sut = Error::out_of_range(0, 0);
        assert_eq!(
            sut,
            Error::IndexOutOfRange {
                index: 0,
                range: 0..0
            }
        );
    }
}
