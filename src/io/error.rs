//! Error types and context management for pipeline operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum PipelineError {
    /// A required input sheet does not exist on disk
    MissingInput {
        /// Path that was expected to exist
        path: PathBuf,
    },

    /// Failed to load a sprite sheet from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source data doesn't meet pipeline requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// No tile satisfied a selection predicate
    ///
    /// Raised by the candidate selector when every candidate is rejected
    /// by the eligibility predicate, or when the candidate pool is empty.
    NoEligibleCandidate {
        /// Label of the selection that failed (e.g. "water")
        selection: &'static str,
        /// Number of candidates inspected before giving up
        considered: usize,
    },

    /// Two images that must share dimensions do not
    DimensionMismatch {
        /// Required (width, height)
        expected: (u32, u32),
        /// Actual (width, height)
        found: (u32, u32),
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Linear tile index exceeds the sheet's tile grid
    TileIndexOutOfRange {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the sheet
        tile_count: usize,
    },

    /// Failed to save an output image to disk
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

    /// The terminal logger could not be installed
    LoggerInit {
        /// Underlying logger error
        source: log::SetLoggerError,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { path } => {
                write!(f, "Required input '{}' does not exist", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::NoEligibleCandidate {
                selection,
                considered,
            } => {
                write!(
                    f,
                    "No eligible candidate for {selection} selection ({considered} tiles considered)"
                )
            }
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "Image size mismatch: expected {}x{}, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TileIndexOutOfRange { index, tile_count } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds (sheet has {tile_count} tiles)"
                )
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
            Self::LoggerInit { source } => {
                write!(f, "Failed to install logger: {source}")
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::LoggerInit { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Label of the selection being performed
    pub selection: Option<&'static str>,
    /// Sheet or output path involved
    pub path: Option<PathBuf>,
}

/// Enriches error messages with pipeline state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the selection label
    ///
    /// # Errors
    ///
    /// Propagates the original error with the selection label applied
    fn with_operation(self, selection: &'static str) -> Result<T>;

    /// Add just the file path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PipelineError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                PipelineError::NoEligibleCandidate { selection, .. } => {
                    if let Some(label) = context.selection {
                        *selection = label;
                    }
                }
                PipelineError::ImageLoad { path, .. }
                | PipelineError::ImageExport { path, .. }
                | PipelineError::FileSystem { path, .. } => {
                    if let Some(context_path) = context.path {
                        *path = context_path;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_operation(self, selection: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            selection: Some(selection),
            ..Default::default()
        })
    }

    fn with_path(self, path: &Path) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            ..Default::default()
        })
    }
}

// Path is filled in by `with_path` at the call site
impl From<image::ImageError> for PipelineError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PipelineError {
    PipelineError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a size mismatch error from two (width, height) pairs
pub const fn dimension_mismatch(expected: (u32, u32), found: (u32, u32)) -> PipelineError {
    PipelineError::DimensionMismatch { expected, found }
}
