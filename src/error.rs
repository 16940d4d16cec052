//! Errors the printer contract allows an adapter to surface.

use thiserror::Error;

/// The few failures that cross the adapter boundary.
///
/// Remote-call failures never do; they are absorbed into each operation's
/// neutral return value and only logged. What remains are the operations
/// with no honest neutral value: the structured material-hub accessors and
/// camera image decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The machine has no equivalent of the requested accessor.
    #[error("not supported by this machine: {0}")]
    Unsupported(&'static str),

    /// The camera produced no frame to decode.
    #[error("no camera frame available")]
    NoFrame,

    /// A camera frame was not valid base64.
    #[error("camera frame is not valid base64: {0}")]
    FrameEncoding(#[from] base64::DecodeError),

    /// A camera frame could not be decoded into an image.
    #[error("camera frame could not be decoded: {0}")]
    FrameDecode(#[from] image::ImageError),
}
