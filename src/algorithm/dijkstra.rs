//! Dijkstra shortest path over an area graph
//!
//! Forbidden edges are never relaxed. A missing path between the two fixed
//! corners means the graph was built wrongly, so it is reported as an
//! invariant violation instead of returning a partial route.

use crate::algorithm::graph::AreaGraph;
use crate::io::error::{Result, invariant_violation};
use crate::math::cost::Cost;
use crate::spatial::{AdjacencyGrid, Coord};
use num_traits::{Zero, ops::saturating::SaturatingAdd};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Cheapest route between two pixels of an area graph
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    /// Pixels from source to target in travel order
    pub route: Vec<Coord>,
    /// Total cost of the route
    pub cost: Cost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeapEntry {
    cost: Cost,
    node: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // Reversed so the max-heap pops the cheapest entry, lowest node id first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Single-source shortest path solver with reusable buffers
#[derive(Debug, Default)]
pub struct ShortestPathSolver {
    distances: Vec<Cost>,
    previous: Vec<Option<usize>>,
    heap: BinaryHeap<HeapEntry>,
}

impl ShortestPathSolver {
    /// Create a solver with empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the cheapest route from `source` to `target`
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not part of the graph or no
    /// route of finite cost connects them
    pub fn solve(
        &mut self,
        grid: &AdjacencyGrid,
        graph: &AreaGraph,
        source: Coord,
        target: Coord,
    ) -> Result<ShortestPath> {
        let area = Some(graph.area());
        let source_id = graph.node_id(grid, source).ok_or_else(|| {
            invariant_violation("shortest path", area, &format!("source {source} not in graph"))
        })?;
        let target_id = graph.node_id(grid, target).ok_or_else(|| {
            invariant_violation("shortest path", area, &format!("target {target} not in graph"))
        })?;

        let node_count = graph.node_count();
        self.distances.clear();
        self.distances.resize(node_count, Cost::Forbidden);
        self.previous.clear();
        self.previous.resize(node_count, None);
        self.heap.clear();

        if let Some(distance) = self.distances.get_mut(source_id) {
            *distance = Cost::zero();
        }
        self.heap.push(HeapEntry {
            cost: Cost::zero(),
            node: source_id,
        });

        while let Some(HeapEntry { cost, node }) = self.heap.pop() {
            if self.distances.get(node).is_some_and(|best| cost > *best) {
                continue;
            }
            if node == target_id {
                break;
            }

            for &(neighbor, weight) in graph.neighbors(node) {
                if weight.is_forbidden() {
                    continue;
                }
                let candidate = cost.saturating_add(&weight);
                if let Some(best) = self.distances.get_mut(neighbor)
                    && candidate < *best
                {
                    *best = candidate;
                    if let Some(link) = self.previous.get_mut(neighbor) {
                        *link = Some(node);
                    }
                    self.heap.push(HeapEntry {
                        cost: candidate,
                        node: neighbor,
                    });
                }
            }
        }

        let cost = self
            .distances
            .get(target_id)
            .copied()
            .unwrap_or(Cost::Forbidden);
        if cost.is_forbidden() {
            return Err(invariant_violation(
                "shortest path",
                area,
                &format!("no finite route from {source} to {target}"),
            ));
        }

        let route = self.trace_back(graph, source_id, target_id)?;
        log::trace!(
            "{} area: route of {} pixels, cost {cost}",
            graph.area(),
            route.len()
        );
        Ok(ShortestPath { route, cost })
    }

    fn trace_back(&self, graph: &AreaGraph, source: usize, target: usize) -> Result<Vec<Coord>> {
        let area = Some(graph.area());
        let mut ids = vec![target];
        let mut current = target;

        while current != source {
            if ids.len() > graph.node_count() {
                return Err(invariant_violation(
                    "shortest path",
                    area,
                    &"predecessor chain contains a cycle",
                ));
            }
            current = self
                .previous
                .get(current)
                .copied()
                .flatten()
                .ok_or_else(|| {
                    invariant_violation("shortest path", area, &"predecessor chain broken")
                })?;
            ids.push(current);
        }

        ids.reverse();
        ids.into_iter()
            .map(|id| {
                graph.coord(id).ok_or_else(|| {
                    invariant_violation("shortest path", area, &format!("unknown node id {id}"))
                })
            })
            .collect()
    }
}
