use std::fmt;

/// Why no tile was produced.
///
/// Bad inputs (negative radius, negative stroke width, too few gradient
/// colors) are caller bugs and panic instead; these are the cases a caller
/// has to handle at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The pixel buffer could not be allocated, usually a zero-area size.
    EmptyCanvas { width: u32, height: u32 },
    /// The outline collapsed to nothing drawable.
    DegeneratePath,
    /// The gradient has coincident endpoints or non-finite stops.
    InvalidGradient,
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyCanvas { width, height } => {
                write!(f, "cannot allocate a {width}x{height} canvas")
            }
            RasterError::DegeneratePath => f.write_str("path has no drawable area"),
            RasterError::InvalidGradient => f.write_str("gradient is not drawable"),
            RasterError::Encode(msg) => write!(f, "png encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}
