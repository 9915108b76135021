//! Error types for landmark packing.

use thiserror::Error;

use crate::landmark::BodyPart;

/// Result type alias for packing operations
pub type Result<T> = std::result::Result<T, PackError>;

/// Packing errors
///
/// A missing body part is not an error: it is packed as NaN columns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackError {
    /// Image geometry cannot be used for aspect-ratio normalization
    #[error("invalid image geometry {width}x{height}: width and height must be positive")]
    InvalidGeometry {
        /// Image width in pixels
        width: i32,
        /// Image height in pixels
        height: i32,
    },

    /// Normalization was requested but the step carried no image size
    #[error("aspect-ratio normalization requires an image size")]
    MissingImageSize,

    /// A present landmark list does not have its part's fixed length
    #[error("{part} landmarks out of bounds: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Body part the list was supplied for
        part: BodyPart,
        /// Fixed landmark count of the part
        expected: usize,
        /// Length of the supplied list
        actual: usize,
    },
}
