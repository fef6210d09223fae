//! Canonical edge colors and the hardcoded edge-code tables
//!
//! Every tile side carries one of four codes. Yellow and blue only appear on
//! horizontal sides (top and bottom), green and red only on vertical sides.
//! Two tiles may touch when the codes on their shared side are equal.

use crate::io::configuration::TileCount;
use crate::spatial::Area;
use image::Rgba;
use std::fmt;

/// Code of one tile side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeColor {
    /// Horizontal side code 0
    Yellow,
    /// Vertical side code 1
    Green,
    /// Horizontal side code 2
    Blue,
    /// Vertical side code 3
    Red,
}

impl EdgeColor {
    /// All codes in index order
    pub const ALL: [Self; 4] = [Self::Yellow, Self::Green, Self::Blue, Self::Red];

    /// Position of the code's crop among the edge-color tiles
    pub const fn index(self) -> usize {
        match self {
            Self::Yellow => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Red => 3,
        }
    }

    /// Color used when drawing the code next to a tile
    pub const fn display_color(self) -> Rgba<u8> {
        match self {
            Self::Yellow => Rgba([196, 163, 0, 255]),
            Self::Green => Rgba([0, 127, 14, 255]),
            Self::Blue => Rgba([0, 74, 127, 255]),
            Self::Red => Rgba([120, 0, 0, 255]),
        }
    }
}

impl fmt::Display for EdgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
        };
        f.write_str(name)
    }
}

/// Codes on the four sides of one tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeCodes {
    /// Code of the top side
    pub top: EdgeColor,
    /// Code of the right side
    pub right: EdgeColor,
    /// Code of the bottom side
    pub bottom: EdgeColor,
    /// Code of the left side
    pub left: EdgeColor,
}

impl EdgeCodes {
    /// Codes in top, right, bottom, left order
    pub const fn new(top: EdgeColor, right: EdgeColor, bottom: EdgeColor, left: EdgeColor) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Code on the side faced by an area
    pub const fn side(&self, area: Area) -> EdgeColor {
        match area {
            Area::Top => self.top,
            Area::Right => self.right,
            Area::Bottom => self.bottom,
            Area::Left => self.left,
        }
    }

    /// Whether `other` may be placed directly to the right of this tile
    pub fn fits_left_of(&self, other: &Self) -> bool {
        self.right == other.left
    }

    /// Whether `other` may be placed directly below this tile
    pub fn fits_above(&self, other: &Self) -> bool {
        self.bottom == other.top
    }
}

impl fmt::Display for EdgeCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.top, self.right, self.bottom, self.left
        )
    }
}

use EdgeColor::{Blue as B, Green as G, Red as R, Yellow as Y};

/// Edge codes of the 4-tile set
pub const FOUR_TILE_CODES: [EdgeCodes; 4] = [
    EdgeCodes::new(Y, G, B, R),
    EdgeCodes::new(Y, R, B, G),
    EdgeCodes::new(B, G, Y, R),
    EdgeCodes::new(B, G, B, G),
];

/// Edge codes of the 8-tile set
pub const EIGHT_TILE_CODES: [EdgeCodes; 8] = [
    EdgeCodes::new(Y, G, B, R),
    EdgeCodes::new(B, R, B, R),
    EdgeCodes::new(Y, G, Y, G),
    EdgeCodes::new(B, R, Y, G),
    EdgeCodes::new(Y, R, B, G),
    EdgeCodes::new(B, G, B, G),
    EdgeCodes::new(Y, R, Y, R),
    EdgeCodes::new(B, G, Y, R),
];

/// Edge codes of the 16-tile set
pub const SIXTEEN_TILE_CODES: [EdgeCodes; 16] = [
    EdgeCodes::new(Y, R, B, R),
    EdgeCodes::new(Y, G, B, R),
    EdgeCodes::new(Y, G, B, G),
    EdgeCodes::new(Y, R, B, G),
    EdgeCodes::new(B, R, B, R),
    EdgeCodes::new(B, G, B, R),
    EdgeCodes::new(B, G, B, G),
    EdgeCodes::new(B, R, B, G),
    EdgeCodes::new(B, R, Y, R),
    EdgeCodes::new(B, G, Y, R),
    EdgeCodes::new(B, G, Y, G),
    EdgeCodes::new(B, R, Y, G),
    EdgeCodes::new(Y, R, Y, R),
    EdgeCodes::new(Y, G, Y, R),
    EdgeCodes::new(Y, G, Y, G),
    EdgeCodes::new(Y, R, Y, G),
];

/// Edge-code table of a tile set, indexed by tile
pub const fn edge_codes(tile_count: TileCount) -> &'static [EdgeCodes] {
    match tile_count {
        TileCount::Four => &FOUR_TILE_CODES,
        TileCount::Eight => &EIGHT_TILE_CODES,
        TileCount::Sixteen => &SIXTEEN_TILE_CODES,
    }
}
