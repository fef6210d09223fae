/// Neighborhood blending and per-area merge into the output tile
pub mod blend;
/// Cut path ordering and edge-side classification
pub mod classify;
/// Dijkstra shortest path with saturating costs
pub mod dijkstra;
/// Tile preparation and parallel assembly
pub mod executor;
/// Weighted per-area pixel graph
pub mod graph;
