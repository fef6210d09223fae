//! Command-line interface generating a Wang tile set from one photograph

use crate::algorithm::executor::TileAssembler;
use crate::io::configuration::{
    DEFAULT_RESOLUTION, DEFAULT_SEED, DEFAULT_TILE_COUNT, GeneratorConfig, SAMPLE_TEXTURE_COLUMNS,
    SAMPLE_TEXTURE_FILE_STEM, SAMPLE_TEXTURE_ROWS, TILE_FILE_STEM,
};
use crate::io::error::Result;
use crate::io::image::{
    annotate_tiles, compose_grid, load_source, output_path, pack_contact_sheet, save_image,
    save_tiles,
};
use crate::io::progress::ProgressManager;
use crate::wang::ordering::demo_ordering;
use clap::Parser;
use image::RgbaImage;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "strictwang")]
#[command(
    author,
    version,
    about = "Synthesize seamless strict Wang tiles from a photograph"
)]
/// Command-line arguments for the tile generator
pub struct Cli {
    /// Source photograph
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Number of tiles to generate (4, 8 or 16)
    #[arg(short = 'n', long = "tiles", default_value_t = DEFAULT_TILE_COUNT)]
    pub tile_count: usize,

    /// Tile width and height in pixels (16, 32, 64 or 128)
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// Random seed for reproducible crops
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory receiving the generated files
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Worker threads (defaults to available parallelism)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Also write all tiles packed into one sheet
    #[arg(long)]
    pub packed: bool,

    /// Frame each tile of the packed sheet with its edge code colors
    #[arg(long, requires = "packed")]
    pub annotate: bool,

    /// Also write a randomly arranged demo texture
    #[arg(long)]
    pub sample_texture: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one generation from the CLI arguments and writes its outputs
pub struct FileProcessor {
    cli: Cli,
}

impl FileProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the tile set and write every requested file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile count or resolution is unsupported
    /// - The source image cannot be loaded or is too small
    /// - Any tile fails to assemble
    /// - Any output file cannot be written
    pub fn process(&self) -> Result<Vec<PathBuf>> {
        let start_time = Instant::now();
        let config = GeneratorConfig::new(self.cli.tile_count, self.cli.resolution, self.cli.seed)?
            .with_threads(self.cli.threads);

        let source = load_source(&self.cli.image)?;
        let assembler = TileAssembler::new(&source, config)?;

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(assembler.codes().len())
        } else {
            ProgressManager::hidden(assembler.codes().len())
        };
        let results = assembler.generate_with(|index| progress.complete_tile(index))?;
        progress.finish(results.iter().filter(|result| result.is_err()).count());

        let tiles = results.into_iter().collect::<Result<Vec<_>>>()?;
        let mut written = save_tiles(&tiles, &self.cli.output)?;

        if self.cli.packed {
            let sheet = if self.cli.annotate {
                let framed = annotate_tiles(&tiles, assembler.codes())?;
                pack_contact_sheet(&framed, config.tile_count)?
            } else {
                pack_contact_sheet(&tiles, config.tile_count)?
            };
            written.push(self.write(&sheet, TILE_FILE_STEM)?);
        }

        if self.cli.sample_texture {
            let texture = self.sample_texture(&assembler, &tiles)?;
            written.push(self.write(&texture, SAMPLE_TEXTURE_FILE_STEM)?);
        }

        log::info!(
            "Wrote {} files to '{}' in {:.2?}",
            written.len(),
            self.cli.output.display(),
            start_time.elapsed()
        );
        Ok(written)
    }

    fn sample_texture(&self, assembler: &TileAssembler, tiles: &[RgbaImage]) -> Result<RgbaImage> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let order = demo_ordering(
            assembler.codes(),
            SAMPLE_TEXTURE_COLUMNS,
            SAMPLE_TEXTURE_ROWS,
            &mut rng,
        )?;
        compose_grid(tiles, &order, SAMPLE_TEXTURE_COLUMNS, SAMPLE_TEXTURE_ROWS)
    }

    fn write(&self, image: &RgbaImage, stem: &str) -> Result<PathBuf> {
        let path = output_path(&self.cli.output, stem);
        save_image(image, &path)?;
        Ok(path)
    }
}
