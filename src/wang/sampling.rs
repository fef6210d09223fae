//! Random crops and synthetic edge tiles
//!
//! Four crops become the canonical edge-color tiles. Each is rolled by half
//! its size along the axis its code borders, which makes the crop continue
//! seamlessly into itself across the tile side it will be placed on.

use crate::io::configuration::TileResolution;
use crate::io::error::{Result, invariant_violation};
use crate::math::color::opaque;
use crate::spatial::{AdjacencyGrid, Coord};
use crate::wang::codes::{EdgeCodes, EdgeColor};
use image::{RgbaImage, imageops};
use rand::Rng;

/// Draw `count` independent opaque square crops from the source
///
/// Crop origins are uniform over every position where the crop fits.
pub fn random_crops<R: Rng + ?Sized>(
    source: &RgbaImage,
    resolution: TileResolution,
    count: usize,
    rng: &mut R,
) -> Vec<RgbaImage> {
    let size = resolution.dimension();
    let max_x = source.width().saturating_sub(size);
    let max_y = source.height().saturating_sub(size);

    (0..count)
        .map(|_| {
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let mut crop = imageops::crop_imm(source, x, y, size, size).to_image();
            for pixel in crop.pixels_mut() {
                *pixel = opaque(*pixel);
            }
            crop
        })
        .collect()
}

/// Swap the upper and lower halves of a tile
pub fn shift_up_halfway(tile: &RgbaImage) -> RgbaImage {
    let (width, height) = tile.dimensions();
    let offset = height / 2;
    RgbaImage::from_fn(width, height, |x, y| {
        *tile.get_pixel(x, (y + offset) % height)
    })
}

/// Swap the left and right halves of a tile
pub fn shift_right_halfway(tile: &RgbaImage) -> RgbaImage {
    let (width, height) = tile.dimensions();
    let offset = width / 2;
    RgbaImage::from_fn(width, height, |x, y| {
        *tile.get_pixel((x + offset) % width, y)
    })
}

/// The four shifted canonical edge-color tiles
#[derive(Clone, Debug)]
pub struct EdgeColorTiles {
    tiles: [RgbaImage; 4],
}

impl EdgeColorTiles {
    /// Shift raw crops given in [`EdgeColor::ALL`] order
    pub fn from_crops(crops: [RgbaImage; 4]) -> Self {
        let [yellow, green, blue, red] = crops;
        Self {
            tiles: [
                shift_up_halfway(&yellow),
                shift_right_halfway(&green),
                shift_up_halfway(&blue),
                shift_right_halfway(&red),
            ],
        }
    }

    /// Shifted tile of one code
    pub fn tile(&self, color: EdgeColor) -> Option<&RgbaImage> {
        self.tiles.get(color.index())
    }
}

/// Build the edge tile of one Wang tile
///
/// Every pixel is copied from the edge-color tile whose code sits on the side
/// faced by the pixel's area.
///
/// # Errors
///
/// Returns an error if an edge-color tile is smaller than the grid
pub fn synthesize_edge_tile(
    grid: &AdjacencyGrid,
    colors: &EdgeColorTiles,
    codes: &EdgeCodes,
) -> Result<RgbaImage> {
    let size = grid.resolution() as u32;
    let mut edge_tile = RgbaImage::new(size, size);

    for (x, y, pixel) in edge_tile.enumerate_pixels_mut() {
        let coord = Coord::new(x as usize, y as usize);
        let color = grid
            .area(coord)
            .map(|area| codes.side(area))
            .and_then(|code| colors.tile(code))
            .and_then(|tile| tile.get_pixel_checked(x, y))
            .ok_or_else(|| {
                invariant_violation(
                    "edge tile synthesis",
                    None,
                    &format!("no edge color for pixel {coord}"),
                )
            })?;
        *pixel = *color;
    }

    Ok(edge_tile)
}
