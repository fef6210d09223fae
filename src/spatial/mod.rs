//! Spatial data structures for square tiles
//!
//! This module contains spatial-related functionality including:
//! - The shared pixel adjacency grid
//! - Classification of pixels into the four triangular areas
//! - Per-area geometry records driving the seam algorithm

/// Triangular area classification
pub mod area;
/// Per-area seam geometry records
pub mod geometry;
/// Pixel adjacency grid
pub mod grid;

pub use area::Area;
pub use geometry::AreaGeometry;
pub use grid::{AdjacencyGrid, Coord, Direction};
