//! Mathematical utilities for seam weights

/// Color magnitude and brightness-difference helpers
pub mod color;
/// Saturating path cost with an explicit forbidden value
pub mod cost;
