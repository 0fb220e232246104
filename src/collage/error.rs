//! Collage error types

use std::fmt;

/// Errors raised while assembling a collage
#[derive(Debug, Clone, PartialEq)]
pub enum CollageError {
    /// No images were selected; the compositor needs at least one
    EmptySelection,
    /// A decode completion referenced a slot outside the join
    SlotOutOfRange { index: usize, slots: usize },
    /// A decode completion arrived twice for the same slot
    SlotAlreadyResolved { index: usize },
    /// The join was finalized while decodes were still outstanding
    JoinIncomplete { pending: usize },
    /// The flattened canvas could not be encoded
    Encoding { details: String },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollageError::EmptySelection => {
                write!(f, "No images selected for the collage")
            }
            CollageError::SlotOutOfRange { index, slots } => {
                write!(f, "Decode slot {} out of range (join has {} slots)", index, slots)
            }
            CollageError::SlotAlreadyResolved { index } => {
                write!(f, "Decode slot {} resolved twice", index)
            }
            CollageError::JoinIncomplete { pending } => {
                write!(f, "Decode join finalized with {} slots still pending", pending)
            }
            CollageError::Encoding { details } => {
                write!(f, "Collage encoding failed: {}", details)
            }
        }
    }
}

impl std::error::Error for CollageError {}

/// Result type for collage operations
pub type CollageResult<T> = Result<T, CollageError>;
