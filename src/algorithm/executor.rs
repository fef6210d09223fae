//! Tile assembly: input preparation and parallel execution of the area cuts

use crate::algorithm::blend::merge;
use crate::algorithm::classify::{CutPath, EdgeSideSet, classify};
use crate::algorithm::dijkstra::ShortestPathSolver;
use crate::algorithm::graph::AreaGraph;
use crate::io::configuration::{EDGE_COLOR_COUNT, GeneratorConfig, validate_source};
use crate::io::error::{Result, TilingError, WithTile, invariant_violation};
use crate::math::cost::Cost;
use crate::spatial::{AdjacencyGrid, AreaGeometry};
use crate::wang::codes::{EdgeCodes, edge_codes};
use crate::wang::sampling::{EdgeColorTiles, random_crops, synthesize_edge_tile};
use image::RgbaImage;
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Result of cutting one area of one tile
#[derive(Clone, Debug)]
pub struct AreaCut {
    /// Cut pixels in sweep order
    pub path: CutPath,
    /// Pixels taking the edge tile color
    pub edge_side: EdgeSideSet,
    /// Total cost of the cut
    pub cost: Cost,
}

/// Build, solve and classify the seam of one area
///
/// # Errors
///
/// Returns an error if the tiles do not match the grid or the cut cannot be
/// found or classified
pub fn cut_area(
    grid: &AdjacencyGrid,
    geometry: &AreaGeometry,
    solver: &mut ShortestPathSolver,
    edge_tile: &RgbaImage,
    sample_tile: &RgbaImage,
) -> Result<AreaCut> {
    let graph = AreaGraph::build(grid, geometry, edge_tile, sample_tile)?;
    let (source, target) = geometry.corners();
    let shortest = solver.solve(grid, &graph, source, target)?;
    let path = CutPath::from_shortest_path(grid, geometry, &shortest)?;
    let edge_side = classify(grid, geometry, &path)?;

    log::debug!(
        "{} area: {} nodes, {} edges, cut of {} pixels at cost {}",
        geometry.area(),
        graph.node_count(),
        graph.edge_count(),
        path.len(),
        shortest.cost
    );

    Ok(AreaCut {
        path,
        edge_side,
        cost: shortest.cost,
    })
}

/// Seam one edge tile against one sample tile across all four areas
///
/// # Errors
///
/// Returns an error if any area fails
pub fn assemble_tile(
    grid: &AdjacencyGrid,
    geometries: &[AreaGeometry],
    edge_tile: &RgbaImage,
    sample_tile: &RgbaImage,
) -> Result<RgbaImage> {
    let size = grid.resolution() as u32;
    let mut output = RgbaImage::new(size, size);
    let mut solver = ShortestPathSolver::new();

    for geometry in geometries {
        let cut = cut_area(grid, geometry, &mut solver, edge_tile, sample_tile)?;
        merge(
            grid,
            geometry,
            &cut.edge_side,
            &cut.path,
            edge_tile,
            sample_tile,
            &mut output,
        )?;
    }

    Ok(output)
}

/// Assemble `(edge, sample)` tile pairs on a dedicated worker pool
///
/// `threads` of `None` lets rayon pick the pool size. Results are returned
/// in pair order regardless of completion order, each failure is tagged
/// with its pair index, and `on_tile_done` runs once per pair whether or
/// not it succeeded.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be created
pub fn assemble_pairs<F>(
    grid: &AdjacencyGrid,
    geometries: &[AreaGeometry],
    pairs: &[(&RgbaImage, &RgbaImage)],
    threads: Option<usize>,
    on_tile_done: F,
) -> Result<Vec<Result<RgbaImage>>>
where
    F: Fn(usize) + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or(0))
        .build()
        .map_err(|e| TilingError::WorkerPool {
            reason: e.to_string(),
        })?;

    log::info!(
        "Generating {} tiles on {} worker threads",
        pairs.len(),
        pool.current_num_threads()
    );

    let results: Vec<Result<RgbaImage>> = pool.install(|| {
        pairs
            .par_iter()
            .enumerate()
            .map(|(index, (edge_tile, sample_tile))| {
                let result =
                    assemble_tile(grid, geometries, edge_tile, sample_tile).with_tile(index);
                if let Err(ref error) = result {
                    log::warn!("{error}");
                }
                on_tile_done(index);
                result
            })
            .collect()
    });

    Ok(results)
}

/// Prepared inputs of one tile set and the shared grid
#[derive(Clone, Debug)]
pub struct TileAssembler {
    config: GeneratorConfig,
    grid: AdjacencyGrid,
    geometries: [AreaGeometry; 4],
    codes: &'static [EdgeCodes],
    sample_tiles: Vec<RgbaImage>,
    edge_tiles: Vec<RgbaImage>,
}

impl TileAssembler {
    /// Draw the sample and edge crops and synthesize every edge tile
    ///
    /// Crops are drawn from a generator seeded with `config.seed`, sample
    /// tiles first, then the four edge-color crops.
    ///
    /// # Errors
    ///
    /// Returns an error if the source image cannot hold distinct crops of
    /// the configured resolution
    pub fn new(source: &RgbaImage, config: GeneratorConfig) -> Result<Self> {
        validate_source(source.width(), source.height(), config.resolution)?;

        let resolution = config.resolution.pixels();
        let codes = edge_codes(config.tile_count);
        let mut rng = StdRng::seed_from_u64(config.seed);

        let sample_tiles = random_crops(source, config.resolution, codes.len(), &mut rng);
        let edge_crops: [RgbaImage; EDGE_COLOR_COUNT] =
            random_crops(source, config.resolution, EDGE_COLOR_COUNT, &mut rng)
                .try_into()
                .map_err(|crops: Vec<RgbaImage>| {
                    invariant_violation(
                        "tile preparation",
                        None,
                        &format!("expected {EDGE_COLOR_COUNT} edge crops, got {}", crops.len()),
                    )
                })?;
        let colors = EdgeColorTiles::from_crops(edge_crops);

        let grid = AdjacencyGrid::new(resolution);
        let edge_tiles = codes
            .iter()
            .map(|tile_codes| synthesize_edge_tile(&grid, &colors, tile_codes))
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "Prepared {} tiles of {resolution}x{resolution} px from {}x{} source (seed {})",
            codes.len(),
            source.width(),
            source.height(),
            config.seed
        );

        Ok(Self {
            config,
            geometries: AreaGeometry::all(resolution),
            grid,
            codes,
            sample_tiles,
            edge_tiles,
        })
    }

    /// Configuration the tiles were prepared with
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Shared pixel grid
    pub const fn grid(&self) -> &AdjacencyGrid {
        &self.grid
    }

    /// Edge codes of every tile
    pub const fn codes(&self) -> &'static [EdgeCodes] {
        self.codes
    }

    /// Random crops, one per tile
    pub fn sample_tiles(&self) -> &[RgbaImage] {
        &self.sample_tiles
    }

    /// Synthesized edge tiles, one per tile
    pub fn edge_tiles(&self) -> &[RgbaImage] {
        &self.edge_tiles
    }

    /// Assemble a single tile on the calling thread
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or any area fails
    pub fn assemble(&self, index: usize) -> Result<RgbaImage> {
        let (Some(edge_tile), Some(sample_tile)) =
            (self.edge_tiles.get(index), self.sample_tiles.get(index))
        else {
            return Err(invariant_violation(
                "tile assembly",
                None,
                &format!("tile {index} out of range"),
            ));
        };
        assemble_tile(&self.grid, &self.geometries, edge_tile, sample_tile).with_tile(index)
    }

    /// Assemble every tile on the worker pool
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created; per-tile
    /// failures are reported in the returned list
    pub fn generate(&self) -> Result<Vec<Result<RgbaImage>>> {
        self.generate_with(|_| {})
    }

    /// Assemble every tile, calling `on_tile_done` with each finished index
    ///
    /// Results are returned in tile order regardless of completion order. A
    /// failing tile does not affect the others.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created
    pub fn generate_with<F>(&self, on_tile_done: F) -> Result<Vec<Result<RgbaImage>>>
    where
        F: Fn(usize) + Sync,
    {
        let pairs: Vec<(&RgbaImage, &RgbaImage)> =
            self.edge_tiles.iter().zip(&self.sample_tiles).collect();
        assemble_pairs(
            &self.grid,
            &self.geometries,
            &pairs,
            self.config.threads,
            on_tile_done,
        )
    }

    /// Assemble every tile, failing on the first tile error
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be created or any tile
    /// fails
    pub fn generate_all(&self) -> Result<Vec<RgbaImage>> {
        self.generate()?.into_iter().collect()
    }
}
