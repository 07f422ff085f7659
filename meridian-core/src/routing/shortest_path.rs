use log::debug;

use super::{DistanceResult, EdgeLeg, Highlight, Path};
use crate::{EdgeStack, Error, IndexMinPQ, IntersectionId, Miles, StreetEdgeId, StreetGraph};

/// Edge that reached an intersection on its shortest path, and the
/// intersection it came from.
#[derive(Debug, Clone, Copy)]
struct Predecessor {
    edge: StreetEdgeId,
    from: IntersectionId,
}

/// Single-source shortest paths (Dijkstra) over a street graph.
///
/// All distances are computed once, when the engine is built. The engine
/// then answers any number of distance and path queries for its source.
/// Routing from another source needs a new engine.
#[derive(Debug)]
pub struct ShortestPaths<'g> {
    graph: &'g StreetGraph,
    source: IntersectionId,
    distance: Vec<Miles>,
    predecessor: Vec<Option<Predecessor>>,
    settle_order: Vec<IntersectionId>,
}

impl<'g> ShortestPaths<'g> {
    /// Runs Dijkstra from the intersection titled `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] if `source` is not in the graph.
    pub fn new(graph: &'g StreetGraph, source: &str) -> Result<Self, Error> {
        let source = graph.lookup(source)?.id;
        let node_count = graph.vertex_count();

        let mut engine = Self {
            graph,
            source,
            distance: vec![Miles::INFINITY; node_count],
            predecessor: vec![None; node_count],
            settle_order: Vec::with_capacity(node_count),
        };
        engine.run()?;

        debug!(
            "Settled {} of {} intersections from {}",
            engine.settle_order.len(),
            node_count,
            graph[source].title
        );
        Ok(engine)
    }

    fn run(&mut self) -> Result<(), Error> {
        let mut queue = IndexMinPQ::with_capacity(self.distance.len());

        self.distance[self.source.index()] = 0.0;
        queue.insert(self.source.index(), 0.0)?;

        while !queue.is_empty() {
            let settled = IntersectionId::new(queue.del_min()?);
            self.settle_order.push(settled);
            self.relax(settled, &mut queue)?;
        }
        Ok(())
    }

    fn relax(
        &mut self,
        settled: IntersectionId,
        queue: &mut IndexMinPQ<Miles>,
    ) -> Result<(), Error> {
        let graph = self.graph;
        let base = self.distance[settled.index()];

        for (edge, other, street) in graph.incident_edges(settled) {
            let candidate = base + street.weight;
            let other_idx = other.index();

            if candidate < self.distance[other_idx] {
                self.distance[other_idx] = candidate;
                self.predecessor[other_idx] = Some(Predecessor {
                    edge,
                    from: settled,
                });

                if queue.contains(other_idx) {
                    queue.change_key(other_idx, candidate)?;
                } else {
                    queue.insert(other_idx, candidate)?;
                }
            }
        }
        Ok(())
    }

    pub fn source(&self) -> &str {
        &self.graph[self.source].title
    }

    /// Distance in miles to `target`, `+inf` if unreachable.
    pub fn distance_to(&self, target: &str) -> Result<Miles, Error> {
        let target = self.graph.lookup(target)?.id;
        Ok(self.distance[target.index()])
    }

    pub fn has_path_to(&self, target: &str) -> Result<bool, Error> {
        Ok(self.distance_to(target)?.is_finite())
    }

    pub fn distance_result(&self, target: &str) -> Result<DistanceResult, Error> {
        let distance = self.distance_to(target)?;
        Ok(DistanceResult {
            reachable: distance.is_finite(),
            distance_miles: distance,
        })
    }

    /// Intersections in the order they were settled.
    pub fn settle_order(&self) -> &[IntersectionId] {
        &self.settle_order
    }

    /// Shortest path from the source to `target`, in travel order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntity`] for an unregistered title and
    /// [`Error::NoPath`] when `target` cannot be reached.
    pub fn path_to(&self, target: &str) -> Result<Path, Error> {
        let target_id = self.graph.lookup(target)?.id;
        let total_miles = self.distance[target_id.index()];
        if !total_miles.is_finite() {
            return Err(Error::NoPath {
                from: self.source().to_string(),
                to: target.to_string(),
            });
        }

        // Walk back from target to source, then pop into forward order
        let mut stack = EdgeStack::new();
        let mut current = target_id;
        while let Some(step) = self.predecessor[current.index()] {
            stack.push(step.edge);
            current = step.from;
        }

        let mut highlight = Highlight::for_graph(self.graph);
        let mut legs = Vec::with_capacity(stack.len());
        while !stack.is_empty() {
            let edge = stack.pop()?;
            highlight.insert(edge);
            legs.push(EdgeLeg::new(edge, &self.graph[edge]));
        }

        Ok(Path {
            source: self.source().to_string(),
            target: target.to_string(),
            legs,
            total_miles,
            highlight,
        })
    }
}
