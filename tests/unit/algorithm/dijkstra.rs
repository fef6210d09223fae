//! Tests for the shortest path solver over area graphs

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use num_traits::Zero;
    use num_traits::ops::saturating::SaturatingAdd;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use strictwang::TilingError;
    use strictwang::algorithm::dijkstra::ShortestPathSolver;
    use strictwang::algorithm::graph::AreaGraph;
    use strictwang::math::cost::Cost;
    use strictwang::spatial::{AdjacencyGrid, Area, AreaGeometry, Coord};

    fn noise(resolution: u32, seed: u64) -> RgbaImage {
        let mut rng = StdRng::seed_from_u64(seed);
        RgbaImage::from_fn(resolution, resolution, |_, _| {
            Rgba([rng.random(), rng.random(), rng.random(), 255])
        })
    }

    // Tests the route joins the two corners through 4-adjacent pixels
    // Verified by reconstructing the route from the source side
    #[test]
    fn test_route_joins_corners() {
        let grid = AdjacencyGrid::new(16);
        let edge = noise(16, 1);
        let sample = noise(16, 2);
        let mut solver = ShortestPathSolver::new();

        for geometry in AreaGeometry::all(16) {
            let graph = AreaGraph::build(&grid, &geometry, &edge, &sample).unwrap();
            let (a, b) = geometry.corners();
            let path = solver.solve(&grid, &graph, a, b).unwrap();

            assert_eq!(path.route.first(), Some(&a));
            assert_eq!(path.route.last(), Some(&b));
            for (p, q) in path.route.iter().zip(path.route.iter().skip(1)) {
                assert_eq!(p.x.abs_diff(q.x) + p.y.abs_diff(q.y), 1);
            }
        }
    }

    // Tests the reported cost equals the sum of the traversed edges
    // Verified by counting the source edge twice
    #[test]
    fn test_cost_matches_route_edges() {
        let grid = AdjacencyGrid::new(32);
        let edge = noise(32, 3);
        let sample = noise(32, 4);
        let geometry = AreaGeometry::new(Area::Left, 32);
        let graph = AreaGraph::build(&grid, &geometry, &edge, &sample).unwrap();
        let (a, b) = geometry.corners();

        let path = ShortestPathSolver::new().solve(&grid, &graph, a, b).unwrap();
        let total = path
            .route
            .iter()
            .zip(path.route.iter().skip(1))
            .map(|(p, q)| graph.weight_between(&grid, *p, *q).unwrap())
            .fold(Cost::zero(), |sum, weight| sum.saturating_add(&weight));

        assert!(!path.cost.is_forbidden());
        assert!((total.value().unwrap() - path.cost.value().unwrap()).abs() < 1e-6);
    }

    // Tests identical tiles allow a free cut
    // Verified by adding a constant to every finite weight
    #[test]
    fn test_identical_tiles_cost_nothing() {
        let grid = AdjacencyGrid::new(16);
        let tile = noise(16, 5);
        let geometry = AreaGeometry::new(Area::Bottom, 16);
        let graph = AreaGraph::build(&grid, &geometry, &tile, &tile).unwrap();
        let (a, b) = geometry.corners();

        let path = ShortestPathSolver::new().solve(&grid, &graph, a, b).unwrap();

        assert!(path.cost.is_zero());
        assert_eq!(path.cost, Cost::ZERO);
    }

    // Tests a reused solver gives the same answer twice
    // Verified by not resetting the distance buffer
    #[test]
    fn test_solver_reuse_is_deterministic() {
        let grid = AdjacencyGrid::new(16);
        let edge = noise(16, 6);
        let sample = noise(16, 7);
        let geometry = AreaGeometry::new(Area::Right, 16);
        let graph = AreaGraph::build(&grid, &geometry, &edge, &sample).unwrap();
        let (a, b) = geometry.corners();
        let mut solver = ShortestPathSolver::new();

        let first = solver.solve(&grid, &graph, a, b).unwrap();
        let second = solver.solve(&grid, &graph, a, b).unwrap();

        assert_eq!(first, second);
    }

    // Tests endpoints outside the graph are invariant violations
    // Verified by returning an empty route instead
    #[test]
    fn test_missing_endpoint_fails() {
        let grid = AdjacencyGrid::new(16);
        let tile = noise(16, 8);
        let geometry = AreaGeometry::new(Area::Top, 16);
        let graph = AreaGraph::build(&grid, &geometry, &tile, &tile).unwrap();

        let result =
            ShortestPathSolver::new().solve(&grid, &graph, Coord::new(0, 0), Coord::new(8, 15));

        assert!(matches!(
            result,
            Err(TilingError::InvariantViolation {
                operation: "shortest path",
                ..
            })
        ));
    }
}
