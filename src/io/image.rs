//! Source image loading, tile export and contact sheet composition

use crate::io::configuration::{CODE_BORDER_WIDTH, OUTPUT_FORMAT, TILE_FILE_STEM, TileCount};
use crate::io::error::{Result, TilingError, invariant_violation};
use crate::wang::codes::EdgeCodes;
use image::{RgbaImage, imageops};
use std::path::{Path, PathBuf};

/// Load any supported image format as RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let image = image::open(&path_buf).map_err(|e| TilingError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(image.to_rgba8())
}

/// Save an image, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| TilingError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Output path of a file with the given stem
pub fn output_path(directory: &Path, stem: &str) -> PathBuf {
    directory.join(format!("{stem}.{OUTPUT_FORMAT}"))
}

/// Output path of an individual tile: `tile<index>.png`
pub fn tile_path(directory: &Path, index: usize) -> PathBuf {
    output_path(directory, &format!("{TILE_FILE_STEM}{index}"))
}

/// Save every tile under its index
///
/// # Errors
///
/// Returns an error if any tile cannot be written
pub fn save_tiles(tiles: &[RgbaImage], directory: &Path) -> Result<Vec<PathBuf>> {
    tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let path = tile_path(directory, index);
            save_image(tile, &path)?;
            Ok(path)
        })
        .collect()
}

/// Place tiles row-major into a `columns` × `rows` sheet
///
/// `order` lists the tile drawn into each cell.
///
/// # Errors
///
/// Returns an error if the tiles differ in size, `order` does not fill the
/// sheet or refers to a missing tile
pub fn compose_grid(
    tiles: &[RgbaImage],
    order: &[usize],
    columns: usize,
    rows: usize,
) -> Result<RgbaImage> {
    if order.len() != columns * rows {
        return Err(invariant_violation(
            "sheet composition",
            None,
            &format!("{} cells ordered for a {columns}x{rows} sheet", order.len()),
        ));
    }
    let Some(first) = tiles.first() else {
        return Err(invariant_violation("sheet composition", None, &"no tiles"));
    };
    let (width, height) = first.dimensions();
    let mut sheet = RgbaImage::new(width * columns as u32, height * rows as u32);

    for (cell, &index) in order.iter().enumerate() {
        let tile = tiles
            .get(index)
            .filter(|tile| tile.dimensions() == (width, height))
            .ok_or_else(|| {
                invariant_violation(
                    "sheet composition",
                    None,
                    &format!("tile {index} missing or of different size"),
                )
            })?;
        let x = (cell % columns) as i64 * i64::from(width);
        let y = (cell / columns) as i64 * i64::from(height);
        imageops::replace(&mut sheet, tile, x, y);
    }

    Ok(sheet)
}

/// Pack a full tile set into its contact sheet: 2×2, 4×2 or 4×4
///
/// # Errors
///
/// Returns an error if the number of tiles does not match `tile_count`
pub fn pack_contact_sheet(tiles: &[RgbaImage], tile_count: TileCount) -> Result<RgbaImage> {
    let (columns, rows) = tile_count.sheet_layout();
    let order: Vec<usize> = (0..tile_count.count()).collect();
    if tiles.len() != order.len() {
        return Err(invariant_violation(
            "contact sheet",
            None,
            &format!("expected {} tiles, got {}", order.len(), tiles.len()),
        ));
    }
    compose_grid(tiles, &order, columns, rows)
}

/// Frame a tile with its four edge codes
///
/// The result is `CODE_BORDER_WIDTH` pixels larger on every side. The top
/// band spans the full width, the right band the remaining height, then
/// bottom and left fill what is left, so each corner belongs to exactly one
/// side.
pub fn annotate_tile(tile: &RgbaImage, codes: &EdgeCodes) -> RgbaImage {
    let border = CODE_BORDER_WIDTH;
    let width = tile.width() + 2 * border;
    let height = tile.height() + 2 * border;

    RgbaImage::from_fn(width, height, |x, y| {
        if y < border {
            codes.top.display_color()
        } else if x >= width - border {
            codes.right.display_color()
        } else if y >= height - border {
            codes.bottom.display_color()
        } else if x < border {
            codes.left.display_color()
        } else {
            *tile.get_pixel(x - border, y - border)
        }
    })
}

/// Frame every tile with the codes of the same index
///
/// # Errors
///
/// Returns an error if the number of tiles and codes differ
pub fn annotate_tiles(tiles: &[RgbaImage], codes: &[EdgeCodes]) -> Result<Vec<RgbaImage>> {
    if tiles.len() != codes.len() {
        return Err(invariant_violation(
            "tile annotation",
            None,
            &format!("{} tiles for {} edge codes", tiles.len(), codes.len()),
        ));
    }
    Ok(tiles
        .iter()
        .zip(codes)
        .map(|(tile, tile_codes)| annotate_tile(tile, tile_codes))
        .collect())
}
