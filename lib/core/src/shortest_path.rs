// Dijkstra single-source shortest paths, path reconstruction and path metadata
use crate::frontier::{Distance, Frontier, UNREACHED};
use crate::graph::{Graph, NodeIx};
use crate::node::Node;
use crate::timer::{as_millis_f64, Timed};
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Predecessor and distance tables produced by one Dijkstra run.
///
/// Borrows the graph it was computed on, so it can only be read back
/// against that graph.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g Graph,
    source: NodeIx,
    predecessors: Vec<Option<NodeIx>>,
    distances: Vec<Distance>,
}

impl<'g> ShortestPathTree<'g> {
    #[inline]
    pub fn source(&self) -> &'g Node {
        self.graph.node_at(self.source)
    }

    /// The node before `node` on its shortest path, `None` for the source
    /// and for unreached nodes.
    pub fn predecessor(&self, node: &Node) -> Result<Option<&'g Node>> {
        let ix = self.graph.index_of(node)?;
        Ok(self.predecessors[ix].map(|p| self.graph.node_at(p)))
    }

    /// Shortest distance from the source, `None` if `node` is unreachable.
    pub fn distance(&self, node: &Node) -> Result<Option<Distance>> {
        let ix = self.graph.index_of(node)?;
        Ok(match self.distances[ix] {
            UNREACHED => None,
            d => Some(d),
        })
    }

    /// Number of nodes reachable from the source, the source included.
    pub fn reached(&self) -> usize {
        self.distances.iter().filter(|&&d| d != UNREACHED).count()
    }

    /// The full predecessor map, one entry per graph node.
    pub fn predecessor_map(&self) -> AHashMap<&'g Node, Option<&'g Node>> {
        self.predecessors
            .iter()
            .enumerate()
            .map(|(ix, p)| (self.graph.node_at(ix), p.map(|p| self.graph.node_at(p))))
            .collect()
    }
}

impl PartialEq for ShortestPathTree<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.source == other.source
            && self.predecessors == other.predecessors
            && self.distances == other.distances
    }
}

impl Eq for ShortestPathTree<'_> {}

/// Answer to a source -> target query.
///
/// Equality compares the path and its measures, not the timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPath {
    #[serde(rename = "shortestPath")]
    pub path: Vec<Node>,
    pub total_distance: Distance,
    pub total_edges: usize,
    /// Milliseconds spent across all query phases
    pub total_calculation_time: f64,
}

impl ShortestPath {
    /// `true` when the target was unreachable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl PartialEq for ShortestPath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.total_distance == other.total_distance
            && self.total_edges == other.total_edges
    }
}

impl Graph {
    /// Run Dijkstra from `source` over the whole graph.
    ///
    /// Every node starts at an infinite tentative distance in the frontier;
    /// the source is then lowered to zero. Nodes that are never reached keep
    /// no predecessor. Equal distances are settled in name order, so the
    /// resulting tree is deterministic.
    pub fn shortest_paths_from(&self, source: &Node) -> Result<Timed<ShortestPathTree<'_>>> {
        Timed::try_measure(|| {
            let source = self.index_of(source)?;
            let n = self.node_count();

            let mut distances = vec![UNREACHED; n];
            let mut predecessors: Vec<Option<NodeIx>> = vec![None; n];
            let mut frontier = Frontier::with_capacity(n);

            for ix in 0..n {
                frontier.push(ix, self.node_at(ix).name(), UNREACHED);
            }

            distances[source] = 0;
            frontier.push(source, self.node_at(source).name(), 0);

            while let Some((current, dist)) = frontier.pop(&distances) {
                for (&neighbor, &weight) in self.adjacent(current) {
                    if frontier.is_settled(neighbor) {
                        continue;
                    }
                    let candidate = dist.saturating_add(Distance::from(weight));
                    if candidate < distances[neighbor] {
                        distances[neighbor] = candidate;
                        predecessors[neighbor] = Some(current);
                        frontier.push(neighbor, self.node_at(neighbor).name(), candidate);
                    }
                }
            }

            let tree = ShortestPathTree {
                graph: self,
                source,
                predecessors,
                distances,
            };
            debug!(
                source = tree.source().name(),
                reached = tree.reached(),
                nodes = n,
                "shortest paths computed"
            );
            Ok(tree)
        })
    }

    /// Walk the predecessor chain from `target` back to `source`.
    ///
    /// Returns the nodes in source-to-target order, both ends included, or
    /// an empty path when `target` is unreachable. `tree` must have been
    /// computed on this graph.
    pub fn reconstruct_path(
        &self,
        tree: &ShortestPathTree<'_>,
        source: &Node,
        target: &Node,
    ) -> Result<Timed<Vec<Node>>> {
        Timed::try_measure(|| {
            if !std::ptr::eq(tree.graph, self) {
                return Err(Error::ForeignTree);
            }
            if tree.source() != source {
                return Err(Error::SourceMismatch {
                    expected: tree.source().name().to_string(),
                    actual: source.name().to_string(),
                });
            }
            let target = self.index_of(target)?;

            let mut path = Vec::new();
            if target == tree.source || tree.predecessors[target].is_some() {
                let mut current = Some(target);
                while let Some(ix) = current {
                    path.push(self.node_at(ix).clone());
                    current = tree.predecessors[ix];
                }
            }
            path.reverse();
            Ok(path)
        })
    }

    /// Measure a reconstructed path.
    ///
    /// `elapsed` is the time already spent by earlier phases; the time spent
    /// here is added to it. An empty path measures zero.
    pub fn path_metadata(&self, path: Vec<Node>, elapsed: Duration) -> Result<ShortestPath> {
        let Timed {
            value: total_distance,
            elapsed: own,
        } = Timed::try_measure(|| -> Result<Distance> {
            path.windows(2).try_fold(0 as Distance, |total, pair| {
                let weight = self.weight(&pair[0], &pair[1])?.ok_or_else(|| Error::NotAdjacent {
                    from: pair[0].name().to_string(),
                    to: pair[1].name().to_string(),
                })?;
                Ok(total.saturating_add(Distance::from(weight)))
            })
        })?;

        let total_edges = path.len().saturating_sub(1);
        Ok(ShortestPath {
            path,
            total_distance,
            total_edges,
            total_calculation_time: as_millis_f64(elapsed + own),
        })
    }

    /// Full query: Dijkstra, reconstruction, then metadata.
    ///
    /// The reported time is the sum of the three phases.
    pub fn shortest_path(&self, source: &Node, target: &Node) -> Result<ShortestPath> {
        let (tree, search) = self.shortest_paths_from(source)?.into_parts();
        let (path, walk) = self.reconstruct_path(&tree, source, target)?.into_parts();
        self.path_metadata(path, search + walk)
    }
}
