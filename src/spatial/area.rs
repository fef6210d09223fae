//! Triangular areas formed by the two diagonals of a square tile

use crate::spatial::grid::Coord;
use std::fmt;

/// One of the 4 triangular regions of a tile, each facing one tile side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Area {
    /// Region touching the top side
    Top,
    /// Region touching the right side
    Right,
    /// Region touching the bottom side
    Bottom,
    /// Region touching the left side
    Left,
}

impl Area {
    /// Areas in side order: top, right, bottom, left
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Position of the side in edge-code tuples
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Area occupied after rotating the tile a quarter turn clockwise
    pub const fn rotated_clockwise(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Classify a pixel into its triangular area
///
/// Pixels exactly on a diagonal belong to one area only: the upper-left half
/// of the main diagonal goes to the left area and its lower-right half to the
/// right area, the upper-right half of the anti-diagonal goes to the top area
/// and its lower-left half to the bottom area. This keeps the classification
/// invariant under quarter-turn rotation of the tile.
pub const fn area_of(coord: Coord, resolution: usize) -> Area {
    let half = resolution / 2;
    let last = resolution.saturating_sub(1);
    let (x, y) = (coord.x, coord.y);

    if x < half {
        if y < half {
            if x > y { Area::Top } else { Area::Left }
        } else if x + y >= last {
            Area::Bottom
        } else {
            Area::Left
        }
    } else if y < half {
        if x + y <= last { Area::Top } else { Area::Right }
    } else if x >= y {
        Area::Right
    } else {
        Area::Bottom
    }
}

/// Rotate a pixel a quarter turn clockwise inside a square tile
pub const fn rotate_clockwise(coord: Coord, resolution: usize) -> Coord {
    Coord::new(resolution.saturating_sub(coord.y + 1), coord.x)
}
