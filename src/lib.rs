//! Strict Wang tile synthesis from a single source photograph
//!
//! Each tile overlays a random crop of the photograph with a synthetic edge
//! tile whose four triangular areas carry the texture of the tile's edge
//! codes. A minimum-cost seam between the two is cut in every area, so tiles
//! with matching codes can be placed side by side without visible seams.

#![forbid(unsafe_code)]

/// Seam graph construction, shortest path, classification, blending and tile assembly
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color magnitude helpers and the saturating cost type
pub mod math;
/// Pixel grid, triangular areas and per-area geometry
pub mod spatial;
/// Edge codes, crop preparation and demo tile arrangement
pub mod wang;

pub use io::error::{Result, TilingError};
