use thiserror::Error;

/// Result type alias for page detection operations
pub type Result<T> = std::result::Result<T, DetectError>;

/// Errors surfaced by the detection pipeline
#[derive(Error, Debug)]
pub enum DetectError {
    /// Input too small to survive border extension
    #[error("image too small: {width}x{height} (each side must be at least {min_side} px)")]
    ImageTooSmall {
        width: u32,
        height: u32,
        min_side: u32,
    },

    /// Binarization produced no foreground regions to trace
    #[error("no page region detected")]
    NoRegionDetected,
}
