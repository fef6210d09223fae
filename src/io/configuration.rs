//! Generator constants and validated runtime configuration

use crate::io::error::{Result, TilingError, unsupported_configuration};

// Supported generator parameters
/// Tile counts with a hardcoded edge-code table
pub const SUPPORTED_TILE_COUNTS: [usize; 3] = [4, 8, 16];
/// Tile resolutions in pixels
pub const SUPPORTED_RESOLUTIONS: [usize; 4] = [16, 32, 64, 128];

// Default values for configurable parameters
/// Fixed seed for reproducible crops
pub const DEFAULT_SEED: u64 = 42;
/// Default number of tiles
pub const DEFAULT_TILE_COUNT: usize = 8;
/// Default tile resolution in pixels
pub const DEFAULT_RESOLUTION: usize = 64;

/// Number of canonical edge colors
pub const EDGE_COLOR_COUNT: usize = 4;

// Demo texture layout
/// Tiles per row of the sample texture
pub const SAMPLE_TEXTURE_COLUMNS: usize = 4;
/// Tile rows of the sample texture
pub const SAMPLE_TEXTURE_ROWS: usize = 6;

// Output settings
/// Image format extension of every written file
pub const OUTPUT_FORMAT: &str = "png";
/// File stem of individual tiles and of the packed sheet
pub const TILE_FILE_STEM: &str = "tile";
/// File stem of the demo sample texture
pub const SAMPLE_TEXTURE_FILE_STEM: &str = "sample_texture";
/// Width in pixels of the code border drawn around annotated tiles
pub const CODE_BORDER_WIDTH: u32 = 2;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Number of tiles in a set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileCount {
    /// Minimal complete set
    Four,
    /// Medium set
    Eight,
    /// Full set of every code combination
    Sixteen,
}

impl TileCount {
    /// Number of tiles
    pub const fn count(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// Columns and rows of the packed contact sheet
    pub const fn sheet_layout(self) -> (usize, usize) {
        match self {
            Self::Four => (2, 2),
            Self::Eight => (4, 2),
            Self::Sixteen => (4, 4),
        }
    }
}

impl TryFrom<usize> for TileCount {
    type Error = TilingError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            _ => Err(unsupported_configuration(
                "tile count",
                value,
                &SUPPORTED_TILE_COUNTS,
            )),
        }
    }
}

/// Side length of a square tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileResolution {
    /// 16 × 16 pixels
    Px16,
    /// 32 × 32 pixels
    Px32,
    /// 64 × 64 pixels
    Px64,
    /// 128 × 128 pixels
    Px128,
}

impl TileResolution {
    /// Side length in pixels
    pub const fn pixels(self) -> usize {
        match self {
            Self::Px16 => 16,
            Self::Px32 => 32,
            Self::Px64 => 64,
            Self::Px128 => 128,
        }
    }

    /// Side length as an image dimension
    pub const fn dimension(self) -> u32 {
        self.pixels() as u32
    }
}

impl TryFrom<usize> for TileResolution {
    type Error = TilingError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            16 => Ok(Self::Px16),
            32 => Ok(Self::Px32),
            64 => Ok(Self::Px64),
            128 => Ok(Self::Px128),
            _ => Err(unsupported_configuration(
                "tile resolution",
                value,
                &SUPPORTED_RESOLUTIONS,
            )),
        }
    }
}

/// Validated parameters of one generator run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of tiles to produce
    pub tile_count: TileCount,
    /// Side length of each tile
    pub resolution: TileResolution,
    /// Seed of the crop position generator
    pub seed: u64,
    /// Worker threads; `None` uses the available parallelism
    pub threads: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tile_count: TileCount::Eight,
            resolution: TileResolution::Px64,
            seed: DEFAULT_SEED,
            threads: None,
        }
    }
}

impl GeneratorConfig {
    /// Validate raw parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the tile count or resolution is unsupported
    pub fn new(tile_count: usize, resolution: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            tile_count: TileCount::try_from(tile_count)?,
            resolution: TileResolution::try_from(resolution)?,
            seed,
            threads: None,
        })
    }

    /// Same configuration with an explicit worker count
    #[must_use]
    pub const fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

/// Check that random crops of the tile size fit the source image
///
/// # Errors
///
/// Returns an error if the source is smaller than a tile along either axis,
/// or exactly as wide or as tall as a tile
pub const fn validate_source(width: u32, height: u32, resolution: TileResolution) -> Result<()> {
    let tile = resolution.dimension();
    if width < tile || height < tile {
        return Err(TilingError::SourceTooSmall {
            width,
            height,
            resolution: tile,
        });
    }
    if width == tile || height == tile {
        return Err(TilingError::SourceMatchesTile {
            width,
            height,
            resolution: tile,
        });
    }
    Ok(())
}
