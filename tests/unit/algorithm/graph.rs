//! Tests for area graph construction and the seam weight rules

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use strictwang::TilingError;
    use strictwang::algorithm::graph::{AreaGraph, edge_weight, pixel_at};
    use strictwang::math::cost::Cost;
    use strictwang::spatial::{AdjacencyGrid, Area, AreaGeometry, Coord};

    fn uniform(resolution: u32, color: [u8; 3]) -> RgbaImage {
        let [r, g, b] = color;
        RgbaImage::from_pixel(resolution, resolution, Rgba([r, g, b, 255]))
    }

    // Tests node and edge counts are identical for every area
    // Verified by growing both halves in the same direction
    #[test]
    fn test_graph_size_is_area_invariant() {
        let grid = AdjacencyGrid::new(16);
        let edge = uniform(16, [255, 0, 0]);
        let sample = uniform(16, [0, 0, 0]);

        for geometry in AreaGeometry::all(16) {
            let graph = AreaGraph::build(&grid, &geometry, &edge, &sample).unwrap();
            assert_eq!(graph.area(), geometry.area());
            assert_eq!(graph.node_count(), 86, "{} area", geometry.area());
            assert_eq!(graph.edge_count(), 148, "{} area", geometry.area());
        }
    }

    // Tests exit, border and interior edge weights of the top area
    // Verified by dropping the zero-cost exit rule
    #[test]
    fn test_top_area_weights() {
        let grid = AdjacencyGrid::new(16);
        let geometry = AreaGeometry::new(Area::Top, 16);
        let edge = uniform(16, [255, 0, 0]);
        let sample = uniform(16, [0, 0, 0]);
        let graph = AreaGraph::build(&grid, &geometry, &edge, &sample).unwrap();

        assert_eq!(
            graph.weight_between(&grid, Coord::new(0, 0), Coord::new(1, 0)),
            Some(Cost::ZERO)
        );
        assert_eq!(
            graph.weight_between(&grid, Coord::new(1, 0), Coord::new(2, 0)),
            Some(Cost::Forbidden)
        );
        assert_eq!(
            graph.weight_between(&grid, Coord::new(3, 1), Coord::new(3, 2)),
            Some(Cost::new(510.0))
        );
        assert_eq!(
            graph.weight_between(&grid, Coord::new(3, 2), Coord::new(3, 1)),
            Some(Cost::new(510.0))
        );
    }

    // Tests every undirected edge is stored once
    // Verified by removing the grown-slot check
    #[test]
    fn test_edges_are_not_duplicated() {
        let grid = AdjacencyGrid::new(32);
        let edge = uniform(32, [10, 20, 30]);
        let sample = uniform(32, [30, 20, 10]);

        for geometry in AreaGeometry::all(32) {
            let graph = AreaGraph::build(&grid, &geometry, &edge, &sample).unwrap();
            let mut seen = std::collections::HashSet::new();
            for weighted in graph.edges() {
                let key = if weighted.a < weighted.b {
                    (weighted.a, weighted.b)
                } else {
                    (weighted.b, weighted.a)
                };
                assert!(seen.insert(key), "duplicate edge {key:?}");
            }
        }
    }

    // Tests the diagonal rule is evaluated on the neighbor endpoint
    // Verified by testing the walk node instead
    #[test]
    fn test_diagonal_rule_uses_neighbor() {
        let grid = AdjacencyGrid::new(16);
        let geometry = AreaGeometry::new(Area::Top, 16);
        let edge = uniform(16, [255, 0, 0]);
        let sample = uniform(16, [0, 0, 0]);

        let onto_diagonal =
            edge_weight(&grid, &geometry, Coord::new(3, 2), Coord::new(3, 3), &edge, &sample)
                .unwrap();
        let off_diagonal =
            edge_weight(&grid, &geometry, Coord::new(3, 3), Coord::new(3, 2), &edge, &sample)
                .unwrap();

        assert!(onto_diagonal.is_forbidden());
        assert_eq!(off_diagonal, Cost::new(510.0));
    }

    // Tests edges leaving a zero-cost exit are free even along the border
    // Verified by checking the border rule first
    #[test]
    fn test_exit_edges_are_free() {
        let grid = AdjacencyGrid::new(16);
        let geometry = AreaGeometry::new(Area::Right, 16);
        let edge = uniform(16, [255, 255, 255]);
        let sample = uniform(16, [0, 0, 0]);

        let weight =
            edge_weight(&grid, &geometry, Coord::new(15, 0), Coord::new(15, 1), &edge, &sample)
                .unwrap();

        assert_eq!(weight, Cost::ZERO);
    }

    // Tests equal brightness makes interior edges free
    // Verified by comparing raw channels
    #[test]
    fn test_equal_brightness_costs_nothing() {
        let grid = AdjacencyGrid::new(16);
        let geometry = AreaGeometry::new(Area::Bottom, 16);
        let edge = uniform(16, [255, 0, 0]);
        let sample = uniform(16, [0, 0, 255]);

        let weight =
            edge_weight(&grid, &geometry, Coord::new(5, 12), Coord::new(6, 12), &edge, &sample)
                .unwrap();

        assert_eq!(weight, Cost::ZERO);
    }

    // Tests tiles of the wrong size are rejected
    // Verified by skipping the size check
    #[test]
    fn test_build_rejects_mismatched_tiles() {
        let grid = AdjacencyGrid::new(16);
        let geometry = AreaGeometry::new(Area::Left, 16);
        let edge = uniform(32, [0, 0, 0]);
        let sample = uniform(16, [0, 0, 0]);

        let result = AreaGraph::build(&grid, &geometry, &edge, &sample);

        assert!(matches!(
            result,
            Err(TilingError::InvariantViolation {
                area: Some(Area::Left),
                ..
            })
        ));
    }

    // Tests pixel lookup outside the image
    // Verified by wrapping coordinates
    #[test]
    fn test_pixel_at_bounds() {
        let image = uniform(4, [1, 2, 3]);

        assert_eq!(pixel_at(&image, Coord::new(3, 3)), Some(Rgba([1, 2, 3, 255])));
        assert_eq!(pixel_at(&image, Coord::new(4, 0)), None);
    }
}
