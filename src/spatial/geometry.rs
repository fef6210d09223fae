//! Parameter records describing the seam problem of each triangular area
//!
//! All four areas share one algorithm. What differs is captured here: the two
//! fixed path endpoints, the zero-cost exit pixels, the directions in which
//! graph edges are grown, the axis along which the cut is swept during
//! classification and the rule deciding which side of the cut takes its color
//! from the edge tile.
//!
//! Each area is described in a local frame `(u, d)`: `u` runs along the
//! tile side from corner A to corner B and `d` is the depth measured from the
//! tile side towards the centre.

use crate::spatial::area::Area;
use crate::spatial::grid::{Coord, Direction};
use std::cmp::Ordering;

/// Image axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Column axis
    X,
    /// Row axis
    Y,
}

/// Which path entry on a sweep line marks the cut boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extent {
    /// Smallest primary coordinate on the sweep line
    First,
    /// Largest primary coordinate on the sweep line
    Last,
}

/// Comparison deciding whether a pixel takes the edge tile color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeSideRule {
    /// `primary <= boundary`
    AtOrBefore,
    /// `primary >= boundary`
    AtOrAfter,
    /// `primary > boundary`
    After,
}

impl EdgeSideRule {
    /// Test a primary-axis coordinate against the boundary
    pub const fn includes(self, primary: usize, boundary: usize) -> bool {
        match self {
            Self::AtOrBefore => primary <= boundary,
            Self::AtOrAfter => primary >= boundary,
            Self::After => primary > boundary,
        }
    }
}

/// Half of the diamond walk; the two halves meet on the centre line of the side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    /// Half containing corner A
    First,
    /// Half containing corner B
    Second,
}

/// Data record for one area's seam problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaGeometry {
    area: Area,
    resolution: usize,
    along: Direction,
    outward: Direction,
    sweep_axis: Axis,
    boundary: Extent,
    edge_side: EdgeSideRule,
}

impl AreaGeometry {
    /// Geometry of `area` for a tile of the given resolution
    pub const fn new(area: Area, resolution: usize) -> Self {
        let (along, outward, sweep_axis, boundary, edge_side) = match area {
            Area::Top => (
                Direction::Right,
                Direction::Top,
                Axis::X,
                Extent::Last,
                EdgeSideRule::AtOrBefore,
            ),
            Area::Bottom => (
                Direction::Right,
                Direction::Bottom,
                Axis::X,
                Extent::First,
                EdgeSideRule::AtOrAfter,
            ),
            Area::Left => (
                Direction::Bottom,
                Direction::Left,
                Axis::Y,
                Extent::Last,
                EdgeSideRule::AtOrBefore,
            ),
            Area::Right => (
                Direction::Bottom,
                Direction::Right,
                Axis::Y,
                Extent::Last,
                EdgeSideRule::After,
            ),
        };
        Self {
            area,
            resolution,
            along,
            outward,
            sweep_axis,
            boundary,
            edge_side,
        }
    }

    /// Geometries of all four areas in side order
    pub const fn all(resolution: usize) -> [Self; 4] {
        [
            Self::new(Area::Top, resolution),
            Self::new(Area::Right, resolution),
            Self::new(Area::Bottom, resolution),
            Self::new(Area::Left, resolution),
        ]
    }

    /// Area described by this record
    pub const fn area(&self) -> Area {
        self.area
    }

    /// Tile resolution the record was built for
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Axis swept once during classification
    pub const fn sweep_axis(&self) -> Axis {
        self.sweep_axis
    }

    /// Which path entry per sweep line is the boundary
    pub const fn boundary(&self) -> Extent {
        self.boundary
    }

    /// Edge-side comparison against the boundary
    pub const fn edge_side(&self) -> EdgeSideRule {
        self.edge_side
    }

    /// Map a local `(u, d)` position to tile coordinates
    pub const fn to_global(&self, u: usize, d: usize) -> Coord {
        let last = self.resolution.saturating_sub(1);
        match self.area {
            Area::Top => Coord::new(u, d),
            Area::Bottom => Coord::new(u, last.saturating_sub(d)),
            Area::Left => Coord::new(d, u),
            Area::Right => Coord::new(last.saturating_sub(d), u),
        }
    }

    /// Path endpoints: the two tile corners on this area's side
    pub const fn corners(&self) -> (Coord, Coord) {
        let last = self.resolution.saturating_sub(1);
        (self.to_global(0, 0), self.to_global(last, 0))
    }

    /// Exit pixels whose outgoing edges cost nothing
    pub const fn zero_cost_pixels(&self) -> [Coord; 2] {
        let (a, b) = self.corners();
        [a, b]
    }

    /// Test if a pixel is one of the two zero-cost exits
    pub const fn is_zero_cost(&self, coord: Coord) -> bool {
        let [a, b] = self.zero_cost_pixels();
        (coord.x == a.x && coord.y == a.y) || (coord.x == b.x && coord.y == b.y)
    }

    /// Pixels always assigned to the edge side: both exits and the pixel
    /// diagonally inward from each
    pub const fn corner_guards(&self) -> [Coord; 4] {
        let last = self.resolution.saturating_sub(1);
        let [a, b] = self.zero_cost_pixels();
        [
            a,
            b,
            self.to_global(1, 1),
            self.to_global(last.saturating_sub(1), 1),
        ]
    }

    /// Directions in which the walk grows edges in each half
    pub const fn growth_directions(&self, half: Half) -> [Direction; 2] {
        match half {
            Half::First => [self.along, self.outward],
            Half::Second => [self.along.opposite(), self.outward],
        }
    }

    /// Nodes visited while building the area graph, with their growth directions
    ///
    /// Walks each half in an expanding diamond from the tile side towards the
    /// centre. Every row of the walk reaches one pixel past the diagonals so a
    /// cut can run along them.
    pub fn walk(&self) -> Vec<(Coord, [Direction; 2])> {
        let half = self.resolution / 2;
        let last = self.resolution.saturating_sub(1);
        let mut visits = Vec::with_capacity(self.resolution * (half + 2));

        let first = self.growth_directions(Half::First);
        for d in 0..half {
            for u in d.saturating_sub(1)..half {
                visits.push((self.to_global(u, d), first));
            }
        }

        let second = self.growth_directions(Half::Second);
        for d in 0..half {
            let far = (self.resolution - d).min(last);
            for u in (half..=far).rev() {
                visits.push((self.to_global(u, d), second));
            }
        }

        visits
    }

    /// Coordinate along the sweep axis
    pub const fn sweep_value(&self, coord: Coord) -> usize {
        match self.sweep_axis {
            Axis::X => coord.x,
            Axis::Y => coord.y,
        }
    }

    /// Coordinate along the primary (cross-sweep) axis
    pub const fn primary_value(&self, coord: Coord) -> usize {
        match self.sweep_axis {
            Axis::X => coord.y,
            Axis::Y => coord.x,
        }
    }

    /// Rebuild a coordinate from sweep and primary values
    pub const fn coord_at(&self, sweep: usize, primary: usize) -> Coord {
        match self.sweep_axis {
            Axis::X => Coord::new(sweep, primary),
            Axis::Y => Coord::new(primary, sweep),
        }
    }

    /// Path ordering: sweep coordinate first, then primary coordinate
    pub fn compare(&self, a: &Coord, b: &Coord) -> Ordering {
        self.sweep_value(*a)
            .cmp(&self.sweep_value(*b))
            .then_with(|| self.primary_value(*a).cmp(&self.primary_value(*b)))
    }
}
