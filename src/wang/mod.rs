//! Wang tile set definition and input preparation
//!
//! This module contains:
//! - The canonical edge codes and the per-set code tables
//! - Random crops and synthesis of per-tile edge tiles
//! - Compatible random arrangement of finished tiles

/// Edge codes and code tables
pub mod codes;
/// Demo texture arrangement
pub mod ordering;
/// Crops, halfway shifts and edge tile synthesis
pub mod sampling;

pub use codes::{EdgeCodes, EdgeColor, edge_codes};
