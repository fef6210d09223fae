//! Merging of edge and sample tiles inside one area
//!
//! Pixels off the cut are copied from whichever tile their side selects.
//! Pixels on the cut are replaced by the mean of their neighborhood so the
//! seam itself does not show.

use crate::algorithm::classify::{CutPath, EdgeSideSet};
use crate::algorithm::graph::pixel_at;
use crate::io::error::{Result, invariant_violation};
use crate::math::color::{mean_color, opaque};
use crate::spatial::{AdjacencyGrid, AreaGeometry, Coord, Direction};
use image::{Rgba, RgbaImage};

/// Neighbors averaged when blending a cut pixel
///
/// The 4 direct neighbors, then the diagonals reached by stepping top or
/// bottom and then right or left. Missing links are skipped and each pixel
/// appears once.
pub fn blend_neighbors(grid: &AdjacencyGrid, coord: Coord) -> Vec<Coord> {
    let direct = [
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::Top,
    ]
    .into_iter()
    .map(|direction| grid.neighbor(coord, direction));
    let diagonal = [
        (Direction::Top, Direction::Right),
        (Direction::Bottom, Direction::Right),
        (Direction::Top, Direction::Left),
        (Direction::Bottom, Direction::Left),
    ]
    .into_iter()
    .map(|(first, second)| grid.composed_neighbor(coord, first, second));

    let mut neighbors: Vec<Coord> = Vec::with_capacity(8);
    for neighbor in direct.chain(diagonal).flatten() {
        if !neighbors.contains(&neighbor) {
            neighbors.push(neighbor);
        }
    }
    neighbors
}

/// Color of a pixel taken from the tile its side selects, without blending
///
/// # Errors
///
/// Returns an error if the pixel lies outside the tiles
pub fn side_color(
    geometry: &AreaGeometry,
    edge_side: &EdgeSideSet,
    edge_tile: &RgbaImage,
    sample_tile: &RgbaImage,
    coord: Coord,
) -> Result<Rgba<u8>> {
    let source = if edge_side.contains(coord) {
        edge_tile
    } else {
        sample_tile
    };
    pixel_at(source, coord).map(opaque).ok_or_else(|| {
        invariant_violation(
            "merge",
            Some(geometry.area()),
            &format!("pixel {coord} outside tile"),
        )
    })
}

/// Mean color of a cut pixel's neighborhood
///
/// # Errors
///
/// Returns an error if a neighbor lies outside the tiles or the pixel has
/// no neighbors at all
pub fn seam_color(
    grid: &AdjacencyGrid,
    geometry: &AreaGeometry,
    edge_side: &EdgeSideSet,
    edge_tile: &RgbaImage,
    sample_tile: &RgbaImage,
    coord: Coord,
) -> Result<Rgba<u8>> {
    let colors = blend_neighbors(grid, coord)
        .into_iter()
        .map(|neighbor| side_color(geometry, edge_side, edge_tile, sample_tile, neighbor))
        .collect::<Result<Vec<_>>>()?;

    mean_color(&colors).ok_or_else(|| {
        invariant_violation(
            "merge",
            Some(geometry.area()),
            &format!("pixel {coord} has no neighbors"),
        )
    })
}

/// Write the final colors of one area into the output tile
///
/// Only pixels owned by the area are written, so the four areas together
/// write every output pixel exactly once.
///
/// # Errors
///
/// Returns an error if the output or either input tile is smaller than the
/// grid
pub fn merge(
    grid: &AdjacencyGrid,
    geometry: &AreaGeometry,
    edge_side: &EdgeSideSet,
    path: &CutPath,
    edge_tile: &RgbaImage,
    sample_tile: &RgbaImage,
    output: &mut RgbaImage,
) -> Result<()> {
    for coord in grid.area_pixels(geometry.area()) {
        let color = if path.contains(coord) {
            seam_color(grid, geometry, edge_side, edge_tile, sample_tile, coord)?
        } else {
            side_color(geometry, edge_side, edge_tile, sample_tile, coord)?
        };

        let target = u32::try_from(coord.x)
            .ok()
            .zip(u32::try_from(coord.y).ok())
            .and_then(|(x, y)| output.get_pixel_mut_checked(x, y))
            .ok_or_else(|| {
                invariant_violation(
                    "merge",
                    Some(geometry.area()),
                    &format!("pixel {coord} outside output tile"),
                )
            })?;
        *target = color;
    }
    Ok(())
}
