//! Conversion of a cut path into the edge-side partition of an area
//!
//! The cut is swept once along the area's sweep axis. On every sweep line the
//! path contributes one boundary coordinate; pixels on the edge-tile side of
//! it take their color from the edge tile, the rest from the sample tile.

use crate::algorithm::dijkstra::ShortestPath;
use crate::io::error::{Result, invariant_violation};
use crate::spatial::geometry::Extent;
use crate::spatial::{AdjacencyGrid, AreaGeometry, Coord};
use bitvec::prelude::*;

/// Vertex set of a shortest path, sorted by the area's sweep order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CutPath {
    coords: Vec<Coord>,
    members: BitVec,
    resolution: usize,
}

impl CutPath {
    /// Sort and deduplicate the pixels of a route
    ///
    /// # Errors
    ///
    /// Returns an error if the route leaves the grid or does not contain
    /// both corners of the area
    pub fn from_route(
        grid: &AdjacencyGrid,
        geometry: &AreaGeometry,
        route: &[Coord],
    ) -> Result<Self> {
        let area = Some(geometry.area());
        let mut members = bitvec![0; grid.len()];
        let mut coords = Vec::with_capacity(route.len());

        for &coord in route {
            if !grid.contains(coord) {
                return Err(invariant_violation(
                    "cut path",
                    area,
                    &format!("pixel {coord} outside the grid"),
                ));
            }
            let index = grid.index(coord);
            if members.get(index).as_deref() == Some(&false) {
                members.set(index, true);
                coords.push(coord);
            }
        }
        coords.sort_by(|a, b| geometry.compare(a, b));

        let path = Self {
            coords,
            members,
            resolution: grid.resolution(),
        };
        let (a, b) = geometry.corners();
        if !path.contains(a) || !path.contains(b) {
            return Err(invariant_violation(
                "cut path",
                area,
                &format!("path does not join corners {a} and {b}"),
            ));
        }
        Ok(path)
    }

    /// Sort the route of a solved shortest path
    ///
    /// # Errors
    ///
    /// See [`CutPath::from_route`]
    pub fn from_shortest_path(
        grid: &AdjacencyGrid,
        geometry: &AreaGeometry,
        path: &ShortestPath,
    ) -> Result<Self> {
        Self::from_route(grid, geometry, &path.route)
    }

    /// Path pixels in sweep order
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of distinct path pixels
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the path has no pixels
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Test if a pixel lies on the path
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.resolution
            && coord.y < self.resolution
            && self.members.get(coord.y * self.resolution + coord.x).as_deref() == Some(&true)
    }
}

/// Pixels that take their color from the edge tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSideSet {
    bits: BitVec,
    resolution: usize,
}

impl EdgeSideSet {
    /// Empty set for a tile of the given resolution
    pub fn new(resolution: usize) -> Self {
        Self {
            bits: bitvec![0; resolution * resolution],
            resolution,
        }
    }

    /// Add a pixel; pixels outside the tile are ignored
    pub fn insert(&mut self, coord: Coord) {
        if coord.x < self.resolution && coord.y < self.resolution {
            self.bits.set(coord.y * self.resolution + coord.x, true);
        }
    }

    /// Test if a pixel is on the edge side
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.resolution
            && coord.y < self.resolution
            && self.bits.get(coord.y * self.resolution + coord.x).as_deref() == Some(&true)
    }

    /// Number of pixels on the edge side
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no pixel is on the edge side
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

/// Partition an area along its cut
///
/// For every sweep line the boundary is the path pixel selected by the
/// area's [`Extent`]; every pixel of the line passing the area's edge-side
/// rule is marked. The corner guards are always marked.
///
/// # Errors
///
/// Returns an error if some sweep line holds no path pixel
pub fn classify(
    grid: &AdjacencyGrid,
    geometry: &AreaGeometry,
    path: &CutPath,
) -> Result<EdgeSideSet> {
    let resolution = grid.resolution();
    let rule = geometry.edge_side();
    let mut edge_side = EdgeSideSet::new(resolution);

    // Coordinates are sorted by sweep line, then by primary coordinate
    let mut lines = path
        .coords()
        .chunk_by(|a, b| geometry.sweep_value(*a) == geometry.sweep_value(*b));

    for sweep in 0..resolution {
        let boundary = lines
            .next()
            .filter(|line| {
                line.first()
                    .is_some_and(|coord| geometry.sweep_value(*coord) == sweep)
            })
            .and_then(|line| match geometry.boundary() {
                Extent::First => line.first(),
                Extent::Last => line.last(),
            })
            .map(|coord| geometry.primary_value(*coord))
            .ok_or_else(|| {
                invariant_violation(
                    "classify",
                    Some(geometry.area()),
                    &format!("no cut boundary on sweep line {sweep}"),
                )
            })?;

        for primary in (0..resolution).filter(|primary| rule.includes(*primary, boundary)) {
            edge_side.insert(geometry.coord_at(sweep, primary));
        }
    }

    for guard in geometry.corner_guards() {
        edge_side.insert(guard);
    }

    Ok(edge_side)
}
