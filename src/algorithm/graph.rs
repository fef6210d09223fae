//! Weighted pixel graph over one triangular area
//!
//! The graph is rebuilt for every (area, tile) pair because its weights depend
//! on the pixel content of the edge and sample tiles. Nodes are grid pixels
//! visited by the area's diamond walk; edges are grown only in the walk's two
//! directions per half and each undirected edge is added once, by the first
//! node that reaches it.

use crate::io::error::{Result, invariant_violation};
use crate::math::color::norm_difference;
use crate::math::cost::Cost;
use crate::spatial::{AdjacencyGrid, Area, AreaGeometry, Coord, Direction};
use bitvec::prelude::*;
use image::{Rgba, RgbaImage};

/// Undirected edge as it was grown: from walk node `a` to its neighbor `b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    /// Walk node the edge was grown from
    pub a: Coord,
    /// Neighbor the edge was grown to
    pub b: Coord,
    /// Cost of cutting between `a` and `b`
    pub weight: Cost,
}

/// Sparse weighted graph over one area's pixels
#[derive(Clone, Debug)]
pub struct AreaGraph {
    area: Area,
    local_ids: Vec<Option<usize>>,
    nodes: Vec<Coord>,
    adjacency: Vec<Vec<(usize, Cost)>>,
    edges: Vec<WeightedEdge>,
}

impl AreaGraph {
    /// Build the graph of one area from the edge and sample tiles
    ///
    /// # Errors
    ///
    /// Returns an error if either tile does not match the grid resolution
    pub fn build(
        grid: &AdjacencyGrid,
        geometry: &AreaGeometry,
        edge_tile: &RgbaImage,
        sample_tile: &RgbaImage,
    ) -> Result<Self> {
        check_tile_size(grid, geometry.area(), edge_tile)?;
        check_tile_size(grid, geometry.area(), sample_tile)?;

        let mut graph = Self {
            area: geometry.area(),
            local_ids: vec![None; grid.len()],
            nodes: Vec::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        };
        // Two slots per node: edge to the right and edge below
        let mut grown = bitvec![0; grid.len() * 2];

        for (node, directions) in geometry.walk() {
            graph.add_node(grid, node);

            for direction in directions {
                let Some(neighbor) = grid.neighbor(node, direction) else {
                    continue;
                };

                let slot = edge_slot(grid, node, neighbor, direction);
                if grown.get(slot).as_deref() != Some(&false) {
                    continue;
                }
                grown.set(slot, true);

                let weight = edge_weight(grid, geometry, node, neighbor, edge_tile, sample_tile)?;
                graph.add_edge(grid, node, neighbor, weight);
            }
        }

        Ok(graph)
    }

    fn add_node(&mut self, grid: &AdjacencyGrid, coord: Coord) -> usize {
        let index = grid.index(coord);
        if let Some(Some(id)) = self.local_ids.get(index) {
            return *id;
        }

        let id = self.nodes.len();
        self.nodes.push(coord);
        self.adjacency.push(Vec::new());
        if let Some(slot) = self.local_ids.get_mut(index) {
            *slot = Some(id);
        }
        id
    }

    fn add_edge(&mut self, grid: &AdjacencyGrid, a: Coord, b: Coord, weight: Cost) {
        let a_id = self.add_node(grid, a);
        let b_id = self.add_node(grid, b);

        if let Some(list) = self.adjacency.get_mut(a_id) {
            list.push((b_id, weight));
        }
        if let Some(list) = self.adjacency.get_mut(b_id) {
            list.push((a_id, weight));
        }
        self.edges.push(WeightedEdge { a, b, weight });
    }

    /// Area the graph was built for
    pub const fn area(&self) -> Area {
        self.area
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in the order they were grown
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Local node id of a grid pixel, if the pixel is part of the graph
    pub fn node_id(&self, grid: &AdjacencyGrid, coord: Coord) -> Option<usize> {
        if !grid.contains(coord) {
            return None;
        }
        self.local_ids.get(grid.index(coord)).copied().flatten()
    }

    /// Grid pixel of a local node id
    pub fn coord(&self, id: usize) -> Option<Coord> {
        self.nodes.get(id).copied()
    }

    /// Neighbors of a local node with the connecting edge cost
    pub fn neighbors(&self, id: usize) -> &[(usize, Cost)] {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cost of the edge between two pixels, if the graph contains it
    pub fn weight_between(&self, grid: &AdjacencyGrid, a: Coord, b: Coord) -> Option<Cost> {
        let a_id = self.node_id(grid, a)?;
        let b_id = self.node_id(grid, b)?;
        self.neighbors(a_id)
            .iter()
            .find(|(id, _)| *id == b_id)
            .map(|(_, weight)| *weight)
    }
}

/// Weight of the edge grown from `a` to its neighbor `b`
///
/// Rules, first match wins:
/// 1. `a` is a zero-cost exit of the area: free
/// 2. the edge runs along the outer tile border: forbidden
/// 3. `b` lies on a diagonal of the square: forbidden
/// 4. otherwise the brightness mismatch between the two tiles at both ends
///
/// # Errors
///
/// Returns an error if a pixel is missing from either tile
pub fn edge_weight(
    grid: &AdjacencyGrid,
    geometry: &AreaGeometry,
    a: Coord,
    b: Coord,
    edge_tile: &RgbaImage,
    sample_tile: &RgbaImage,
) -> Result<Cost> {
    if geometry.is_zero_cost(a) {
        return Ok(Cost::ZERO);
    }

    let last = grid.resolution().saturating_sub(1);
    if (a.x == 0 || b.x == last) && a.y != b.y {
        return Ok(Cost::Forbidden);
    }
    if (a.y == 0 || b.y == last) && a.x != b.x {
        return Ok(Cost::Forbidden);
    }
    if grid.is_on_diagonal(b) {
        return Ok(Cost::Forbidden);
    }

    let mismatch = |coord: Coord| -> Result<f64> {
        let edge = pixel_at(edge_tile, coord);
        let sample = pixel_at(sample_tile, coord);
        match (edge, sample) {
            (Some(edge), Some(sample)) => Ok(norm_difference(edge, sample)),
            _ => Err(invariant_violation(
                "edge weight",
                Some(geometry.area()),
                &format!("pixel {coord} outside tile"),
            )),
        }
    };

    Ok(Cost::new(mismatch(a)? + mismatch(b)?))
}

/// Pixel of an image at a tile coordinate
pub fn pixel_at(image: &RgbaImage, coord: Coord) -> Option<Rgba<u8>> {
    let x = u32::try_from(coord.x).ok()?;
    let y = u32::try_from(coord.y).ok()?;
    image.get_pixel_checked(x, y).copied()
}

// Slot of the undirected edge, keyed by its left or upper endpoint
fn edge_slot(grid: &AdjacencyGrid, from: Coord, to: Coord, direction: Direction) -> usize {
    let anchor = match direction {
        Direction::Right | Direction::Bottom => from,
        Direction::Left | Direction::Top => to,
    };
    grid.index(anchor) * 2 + usize::from(!direction.is_horizontal())
}

fn check_tile_size(grid: &AdjacencyGrid, area: Area, tile: &RgbaImage) -> Result<()> {
    let resolution = grid.resolution();
    if tile.width() as usize == resolution && tile.height() as usize == resolution {
        Ok(())
    } else {
        Err(invariant_violation(
            "graph build",
            Some(area),
            &format!(
                "tile is {}x{}, grid expects {resolution}x{resolution}",
                tile.width(),
                tile.height()
            ),
        ))
    }
}
