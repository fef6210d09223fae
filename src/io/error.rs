//! Error types and tile context for seam synthesis operations

use crate::spatial::area::Area;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Requested tile count or resolution is not one of the supported values
    UnsupportedConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: usize,
        /// Values the generator accepts for this parameter
        supported: &'static [usize],
    },

    /// Source image cannot hold a single tile crop
    SourceTooSmall {
        /// Width of the source image in pixels
        width: u32,
        /// Height of the source image in pixels
        height: u32,
        /// Requested tile resolution in pixels
        resolution: u32,
    },

    /// Source image has exactly the tile size along one axis
    ///
    /// Every crop would start at the same offset along that axis, so all
    /// sample tiles would look alike.
    SourceMatchesTile {
        /// Width of the source image in pixels
        width: u32,
        /// Height of the source image in pixels
        height: u32,
        /// Requested tile resolution in pixels
        resolution: u32,
    },

    /// Graph construction, path search or classification reached a state
    /// that correct construction never produces
    InvariantViolation {
        /// Name of the operation that detected the violation
        operation: &'static str,
        /// Area being processed, when the failure is area-specific
        area: Option<Area>,
        /// Description of the failure
        reason: String,
    },

    /// A single tile failed; sibling tiles are unaffected
    TileFailed {
        /// Submission index of the failing tile
        index: usize,
        /// Error raised while building the tile
        source: Box<TilingError>,
    },

    /// Worker pool could not be created
    WorkerPool {
        /// Description of the failure
        reason: String,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::UnsupportedConfiguration {
                parameter,
                value,
                supported,
            } => {
                write!(
                    f,
                    "Unsupported {parameter} {value} (supported: {supported:?})"
                )
            }
            Self::SourceTooSmall {
                width,
                height,
                resolution,
            } => {
                if width < resolution {
                    write!(
                        f,
                        "Width of input image ({width} px) is too small for the desired tile resolution of {resolution} px"
                    )
                } else {
                    write!(
                        f,
                        "Height of input image ({height} px) is too small for the desired tile resolution of {resolution} px"
                    )
                }
            }
            Self::SourceMatchesTile {
                width,
                height,
                resolution,
            } => {
                write!(
                    f,
                    "Input image ({width}x{height}) matches the tile resolution of {resolution} px along one axis; all tiles would look the same"
                )
            }
            Self::InvariantViolation {
                operation,
                area,
                reason,
            } => match area {
                Some(area) => write!(f, "Invariant violated in {operation} ({area} area): {reason}"),
                None => write!(f, "Invariant violated in {operation}: {reason}"),
            },
            Self::TileFailed { index, source } => {
                write!(f, "Tile {index} failed: {source}")
            }
            Self::WorkerPool { reason } => {
                write!(f, "Failed to start worker pool: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::TileFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Attaches the submission index of the tile being built
pub trait WithTile<T> {
    /// Wrap any error as a failure of tile `index`
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`TilingError::TileFailed`]
    fn with_tile(self, index: usize) -> Result<T>;
}

impl<T, E> WithTile<T> for std::result::Result<T, E>
where
    E: Into<TilingError>,
{
    fn with_tile(self, index: usize) -> Result<T> {
        self.map_err(|e| match e.into() {
            // Already attributed to a tile
            error @ TilingError::TileFailed { .. } => error,
            error => TilingError::TileFailed {
                index,
                source: Box::new(error),
            },
        })
    }
}

/// Create an unsupported configuration error
pub const fn unsupported_configuration(
    parameter: &'static str,
    value: usize,
    supported: &'static [usize],
) -> TilingError {
    TilingError::UnsupportedConfiguration {
        parameter,
        value,
        supported,
    }
}

/// Create an invariant violation error
pub fn invariant_violation(
    operation: &'static str,
    area: Option<Area>,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvariantViolation {
        operation,
        area,
        reason: reason.to_string(),
    }
}
