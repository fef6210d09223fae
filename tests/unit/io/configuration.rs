//! Tests for generator constants and configuration validation

#[cfg(test)]
mod tests {
    use strictwang::TilingError;
    use strictwang::io::configuration::{
        DEFAULT_RESOLUTION, DEFAULT_SEED, DEFAULT_TILE_COUNT, GeneratorConfig,
        SUPPORTED_RESOLUTIONS, SUPPORTED_TILE_COUNTS, TileCount, TileResolution, validate_source,
    };

    // Tests every supported tile count converts and reports itself
    // Verified by swapping the eight and sixteen arms
    #[test]
    fn test_tile_count_conversion() {
        for value in SUPPORTED_TILE_COUNTS {
            let count = TileCount::try_from(value).unwrap();
            assert_eq!(count.count(), value);
        }
    }

    // Tests unsupported tile counts name the parameter and the choices
    // Verified by accepting any power of two
    #[test]
    fn test_tile_count_rejects_unsupported() {
        let err = TileCount::try_from(12).unwrap_err();

        assert!(matches!(
            err,
            TilingError::UnsupportedConfiguration {
                parameter: "tile count",
                value: 12,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Unsupported tile count 12 (supported: [4, 8, 16])"
        );
    }

    // Tests sheet layouts hold exactly the tile count
    // Verified by transposing the eight tile layout
    #[test]
    fn test_sheet_layout() {
        assert_eq!(TileCount::Four.sheet_layout(), (2, 2));
        assert_eq!(TileCount::Eight.sheet_layout(), (4, 2));
        assert_eq!(TileCount::Sixteen.sheet_layout(), (4, 4));
        for count in [TileCount::Four, TileCount::Eight, TileCount::Sixteen] {
            let (columns, rows) = count.sheet_layout();
            assert_eq!(columns * rows, count.count());
        }
    }

    // Tests resolutions convert to pixels and image dimensions
    // Verified by accepting resolutions between supported values
    #[test]
    fn test_resolution_conversion() {
        for value in SUPPORTED_RESOLUTIONS {
            let resolution = TileResolution::try_from(value).unwrap();
            assert_eq!(resolution.pixels(), value);
            assert_eq!(resolution.dimension() as usize, value);
        }
        assert!(TileResolution::try_from(48).is_err());
        assert!(TileResolution::try_from(0).is_err());
    }

    // Tests defaults match the documented constants
    // Verified by changing the default count
    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();

        assert_eq!(config.tile_count.count(), DEFAULT_TILE_COUNT);
        assert_eq!(config.resolution.pixels(), DEFAULT_RESOLUTION);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.threads, None);
    }

    // Tests raw parameters are validated together
    // Verified by skipping the resolution check
    #[test]
    fn test_config_new() {
        let config = GeneratorConfig::new(16, 32, 5).unwrap().with_threads(Some(3));

        assert_eq!(config.tile_count, TileCount::Sixteen);
        assert_eq!(config.resolution, TileResolution::Px32);
        assert_eq!(config.seed, 5);
        assert_eq!(config.threads, Some(3));
        assert!(GeneratorConfig::new(4, 100, 5).is_err());
        assert!(GeneratorConfig::new(5, 64, 5).is_err());
    }

    // Tests sources smaller than a tile name the offending axis
    // Verified by always reporting the width
    #[test]
    fn test_validate_source_too_small() {
        let width = validate_source(10, 100, TileResolution::Px16).unwrap_err();
        let height = validate_source(100, 10, TileResolution::Px16).unwrap_err();

        assert!(matches!(width, TilingError::SourceTooSmall { .. }));
        assert!(width.to_string().starts_with("Width of input image (10 px)"));
        assert!(height.to_string().starts_with("Height of input image (10 px)"));
    }

    // Tests sources exactly one tile wide or tall are rejected
    // Verified by using a strict comparison only
    #[test]
    fn test_validate_source_matching_tile() {
        assert!(matches!(
            validate_source(64, 200, TileResolution::Px64),
            Err(TilingError::SourceMatchesTile { .. })
        ));
        assert!(matches!(
            validate_source(200, 64, TileResolution::Px64),
            Err(TilingError::SourceMatchesTile { .. })
        ));
        assert!(validate_source(65, 65, TileResolution::Px64).is_ok());
    }
}
