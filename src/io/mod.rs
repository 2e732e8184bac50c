//! Input/output, configuration and error handling

/// Command-line interface and build orchestration
pub mod cli;
/// Pipeline constants and curated tile indices
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Sprite sheet loading and PNG export
pub mod image;
/// Stage progress display
pub mod progress;
