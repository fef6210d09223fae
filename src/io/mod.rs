//! Input/output, configuration and error handling

/// Command-line interface and output writing
pub mod cli;
/// Constants and validated generator configuration
pub mod configuration;
/// Error types and tile context
pub mod error;
/// Image loading, saving and sheet composition
pub mod image;
/// Progress display for tile assembly
pub mod progress;
