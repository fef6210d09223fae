//! Pixel adjacency grid shared by every area and tile
//!
//! Nodes are addressed by a flat index `y * resolution + x`. Neighbors are
//! derived by coordinate arithmetic rather than stored links, so the grid is
//! immutable after construction and can be read from any number of workers.
//! The grid also caches the triangular area owning each pixel.

use crate::spatial::area::{Area, area_of};
use ndarray::Array2;
use std::fmt;

/// Integer pixel coordinate inside a square tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column, growing to the right
    pub x: usize,
    /// Row, growing downwards
    pub y: usize,
}

impl Coord {
    /// Create a coordinate from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the 4 direct neighbor directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller x
    Left,
    /// Towards larger x
    Right,
    /// Towards smaller y
    Top,
    /// Towards larger y
    Bottom,
}

impl Direction {
    /// All directions in neighbor enumeration order
    pub const ALL: [Self; 4] = [Self::Right, Self::Bottom, Self::Left, Self::Top];

    /// Direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Whether the direction moves along the x axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Immutable r×r grid of pixel nodes with 4-directional adjacency
#[derive(Clone, Debug)]
pub struct AdjacencyGrid {
    resolution: usize,
    areas: Array2<Area>,
}

impl AdjacencyGrid {
    /// Build the grid for a square tile of the given resolution
    ///
    /// The area map is indexed `[y, x]` like image rows.
    pub fn new(resolution: usize) -> Self {
        let areas = Array2::from_shape_fn((resolution, resolution), |(y, x)| {
            area_of(Coord::new(x, y), resolution)
        });
        Self { resolution, areas }
    }

    /// Width and height of the grid in pixels
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total number of nodes
    pub const fn len(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Whether the grid has no nodes
    pub const fn is_empty(&self) -> bool {
        self.resolution == 0
    }

    /// Test if a coordinate lies inside the grid
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.resolution && coord.y < self.resolution
    }

    /// Flat node index of a coordinate
    pub const fn index(&self, coord: Coord) -> usize {
        coord.y * self.resolution + coord.x
    }

    /// Coordinate of a flat node index
    pub const fn coord(&self, index: usize) -> Coord {
        Coord::new(index % self.resolution, index / self.resolution)
    }

    /// Direct neighbor in `direction`, or `None` at the tile border
    pub const fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let last = self.resolution.saturating_sub(1);
        match direction {
            Direction::Left if coord.x > 0 => Some(Coord::new(coord.x - 1, coord.y)),
            Direction::Right if coord.x < last => Some(Coord::new(coord.x + 1, coord.y)),
            Direction::Top if coord.y > 0 => Some(Coord::new(coord.x, coord.y - 1)),
            Direction::Bottom if coord.y < last => Some(Coord::new(coord.x, coord.y + 1)),
            _ => None,
        }
    }

    /// Neighbor reached by following `first` and then `second`
    ///
    /// Diagonal neighbors are obtained this way, so a diagonal exists only
    /// when both links exist.
    pub fn composed_neighbor(
        &self,
        coord: Coord,
        first: Direction,
        second: Direction,
    ) -> Option<Coord> {
        self.neighbor(coord, first)
            .and_then(|step| self.neighbor(step, second))
    }

    /// Area owning a pixel, following the diagonal classification
    pub fn area(&self, coord: Coord) -> Option<Area> {
        self.areas.get((coord.y, coord.x)).copied()
    }

    /// All coordinates of one area in row-major order
    pub fn area_pixels(&self, area: Area) -> impl Iterator<Item = Coord> + '_ {
        self.areas
            .indexed_iter()
            .filter(move |(_, owner)| **owner == area)
            .map(|((y, x), _)| Coord::new(x, y))
    }

    /// Test if a pixel lies on the outer border of the tile
    pub const fn is_border(&self, coord: Coord) -> bool {
        let last = self.resolution.saturating_sub(1);
        coord.x == 0 || coord.y == 0 || coord.x == last || coord.y == last
    }

    /// Test if a pixel lies on either diagonal of the square
    pub const fn is_on_diagonal(&self, coord: Coord) -> bool {
        coord.x == coord.y || self.resolution.saturating_sub(coord.x + 1) == coord.y
    }
}
