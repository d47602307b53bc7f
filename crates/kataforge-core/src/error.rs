//! Error types for kataforge

use thiserror::Error;

/// Main error type for kataforge operations
///
/// Every exercise is total over its precondition-satisfying domain; these
/// variants signal precondition violations, never partial failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KataforgeError {
    /// A keypad digit outside `'2'..='9'`
    #[error("digit '{digit}' has no keypad letters")]
    InvalidDigit {
        /// The offending character.
        digit: char,
    },

    /// A 1-based position outside the bounds of a list
    #[error("position {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The requested 1-based position.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// Fewer input elements than the arity of the requested combination
    #[error("need at least {needed} elements, got {got}")]
    InsufficientElements {
        /// Required arity.
        needed: usize,
        /// Elements actually supplied.
        got: usize,
    },
}

/// Result type alias for kataforge operations
pub type Result<T> = std::result::Result<T, KataforgeError>;
