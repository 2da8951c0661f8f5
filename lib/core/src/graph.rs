// Undirected weighted graph - node arena plus adjacency built from the edge list
use crate::node::{Edge, Node, Weight};
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Position of a node in the graph's arena
pub(crate) type NodeIx = usize;

/// Neighbor table of one node: neighbor index -> edge weight
pub(crate) type Neighbors = AHashMap<NodeIx, Weight>;

/// An immutable, undirected, weighted graph.
///
/// The adjacency is derived from the edge list once, in [`Graph::new`], and
/// never patched afterwards. Every node of the node list owns an adjacency
/// entry, even when no edge touches it. Serializes as `{nodes, edges}`; the
/// adjacency is rebuilt on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphRecord")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: AHashMap<String, NodeIx>,
    #[serde(skip)]
    adjacency: Vec<Neighbors>,
}

#[derive(Deserialize)]
struct GraphRecord {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphRecord> for Graph {
    type Error = Error;

    fn try_from(record: GraphRecord) -> Result<Self> {
        Graph::new(record.nodes, record.edges)
    }
}

impl Graph {
    /// Build a graph and its adjacency.
    ///
    /// Repeated node names keep the first occurrence. Repeated endpoint
    /// pairs keep the last weight seen. Self-loops are stored as given.
    /// Fails with [`Error::DanglingEdge`] if an edge endpoint is not in
    /// `nodes`.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(nodes.len());
        let mut unique = Vec::with_capacity(nodes.len());
        for node in nodes {
            if index.contains_key(node.name()) {
                debug!(node = node.name(), "duplicate node name ignored");
                continue;
            }
            index.insert(node.name().to_string(), unique.len());
            unique.push(node);
        }

        let adjacency = build_adjacency(&index, unique.len(), &edges)?;
        debug!(
            nodes = unique.len(),
            edges = edges.len(),
            "adjacency built"
        );

        Ok(Self {
            nodes: unique,
            edges,
            index,
            adjacency,
        })
    }

    /// Replace the edge list, rebuilding the adjacency from scratch.
    pub fn with_edges(self, edges: Vec<Edge>) -> Result<Self> {
        Self::new(self.nodes, edges)
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn contains(&self, node: &Node) -> bool {
        self.index.contains_key(node.name())
    }

    /// Neighbors of `node` with the weight of the connecting edge.
    pub fn neighbors(&self, node: &Node) -> Result<impl Iterator<Item = (&Node, Weight)> + '_> {
        let ix = self.index_of(node)?;
        Ok(self.adjacency[ix]
            .iter()
            .map(move |(&n, &w)| (&self.nodes[n], w)))
    }

    /// Weight of the edge between `a` and `b`, if they are adjacent.
    pub fn weight(&self, a: &Node, b: &Node) -> Result<Option<Weight>> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self.adjacency[a].get(&b).copied())
    }

    pub(crate) fn index_of(&self, node: &Node) -> Result<NodeIx> {
        self.index
            .get(node.name())
            .copied()
            .ok_or_else(|| Error::NodeNotFound(node.name().to_string()))
    }

    #[inline]
    pub(crate) fn node_at(&self, ix: NodeIx) -> &Node {
        &self.nodes[ix]
    }

    #[inline]
    pub(crate) fn adjacent(&self, ix: NodeIx) -> &Neighbors {
        &self.adjacency[ix]
    }
}

fn build_adjacency(
    index: &AHashMap<String, NodeIx>,
    node_count: usize,
    edges: &[Edge],
) -> Result<Vec<Neighbors>> {
    let mut adjacency = vec![Neighbors::default(); node_count];

    for edge in edges {
        let (source, target) = match (
            index.get(edge.source.name()),
            index.get(edge.target.name()),
        ) {
            (Some(&s), Some(&t)) => (s, t),
            _ => {
                return Err(Error::DanglingEdge {
                    source_node: edge.source.name().to_string(),
                    target_node: edge.target.name().to_string(),
                })
            }
        };

        if edge.is_self_loop() {
            debug!(node = edge.source.name(), "self-loop kept");
        }
        adjacency[source].insert(target, edge.distance);
        adjacency[target].insert(source, edge.distance);
    }

    Ok(adjacency)
}

impl fmt::Display for Graph {
    /// One line per node: `A --> B (3), C (5)`, neighbors sorted by name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Adjacency List:")?;
        for (ix, node) in self.nodes.iter().enumerate() {
            let mut neighbors: Vec<_> = self.adjacency[ix]
                .iter()
                .map(|(&n, &w)| (self.nodes[n].name(), w))
                .collect();
            neighbors.sort_unstable();

            let rendered: Vec<String> = neighbors
                .iter()
                .map(|(name, w)| format!("{} ({})", name, w))
                .collect();
            writeln!(f, "{} --> {}", node.name(), rendered.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> Node {
        Node::new(name, 0, 0)
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = Graph::new(
            vec![node("A"), node("B"), node("C")],
            vec![Edge::new(node("A"), node("B"), 4), Edge::new(node("B"), node("C"), 7)],
        )
        .unwrap();

        assert_eq!(graph.weight(&node("A"), &node("B")).unwrap(), Some(4));
        assert_eq!(graph.weight(&node("B"), &node("A")).unwrap(), Some(4));
        assert_eq!(graph.weight(&node("C"), &node("B")).unwrap(), Some(7));
        assert_eq!(graph.weight(&node("A"), &node("C")).unwrap(), None);
        assert_eq!(graph.neighbors(&node("B")).unwrap().count(), 2);
    }

    #[test]
    fn test_duplicate_edge_last_write_wins() {
        let graph = Graph::new(
            vec![node("A"), node("B")],
            vec![Edge::new(node("A"), node("B"), 5), Edge::new(node("B"), node("A"), 9)],
        )
        .unwrap();

        assert_eq!(graph.weight(&node("A"), &node("B")).unwrap(), Some(9));
        assert_eq!(graph.weight(&node("B"), &node("A")).unwrap(), Some(9));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_is_kept() {
        let graph = Graph::new(vec![node("A")], vec![Edge::new(node("A"), node("A"), 3)]).unwrap();
        assert_eq!(graph.weight(&node("A"), &node("A")).unwrap(), Some(3));
    }

    #[test]
    fn test_isolated_node_has_empty_entry() {
        let graph = Graph::new(vec![node("E")], vec![]).unwrap();
        assert_eq!(graph.neighbors(&node("E")).unwrap().count(), 0);
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let err = Graph::new(vec![node("A")], vec![Edge::new(node("A"), node("Z"), 1)]).unwrap_err();
        assert!(matches!(err, Error::DanglingEdge { .. }));
    }

    #[test]
    fn test_unknown_node_lookup_fails() {
        let graph = Graph::new(vec![node("A")], vec![]).unwrap();
        assert!(!graph.contains(&node("Q")));
        assert!(matches!(graph.neighbors(&node("Q")), Err(Error::NodeNotFound(name)) if name == "Q"));
    }

    #[test]
    fn test_duplicate_node_keeps_first() {
        let graph = Graph::new(vec![Node::new("A", 1, 2), Node::new("A", 8, 9)], vec![]).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes()[0].x, 1);
    }

    #[test]
    fn test_with_edges_rebuilds() {
        let graph = Graph::new(
            vec![node("A"), node("B"), node("C")],
            vec![Edge::new(node("A"), node("B"), 1)],
        )
        .unwrap();
        let graph = graph.with_edges(vec![Edge::new(node("B"), node("C"), 2)]).unwrap();

        assert_eq!(graph.weight(&node("A"), &node("B")).unwrap(), None);
        assert_eq!(graph.weight(&node("C"), &node("B")).unwrap(), Some(2));
    }

    #[test]
    fn test_display_lists_adjacency() {
        let graph = Graph::new(
            vec![node("A"), node("B"), node("C")],
            vec![Edge::new(node("A"), node("C"), 5), Edge::new(node("A"), node("B"), 3)],
        )
        .unwrap();

        let rendered = graph.to_string();
        assert!(rendered.starts_with("Adjacency List:\n"));
        assert!(rendered.contains("A --> B (3), C (5)\n"));
        assert!(rendered.contains("C --> A (5)\n"));
    }

    #[test]
    fn test_json_roundtrip_rebuilds_adjacency() {
        let graph = Graph::new(
            vec![node("A"), node("B")],
            vec![Edge::new(node("A"), node("B"), 6)],
        )
        .unwrap();

        let json = serde_json::to_value(&graph).unwrap();
        assert!(json.get("adjacency").is_none());
        assert_eq!(json["edges"][0]["distance"], 6);

        let restored: Graph = serde_json::from_value(json).unwrap();
        assert_eq!(restored.weight(&node("B"), &node("A")).unwrap(), Some(6));
    }
}
