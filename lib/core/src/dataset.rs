// JSON dataset: named nodes and weighted links, resolved into a Graph
use crate::node::{Edge, Node, Weight};
use crate::{Error, Graph, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A link between two nodes, referenced by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub start: String,
    pub end: String,
    pub weight: Weight,
}

/// The map as it is stored on disk.
///
/// ```json
/// {
///   "nodes": [{"name": "A", "x": 10, "y": 20}],
///   "links": [{"start": "A", "end": "B", "weight": 4}]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            nodes = dataset.nodes.len(),
            links = dataset.links.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Resolve a user-supplied name to its canonical node.
    pub fn node(&self, name: &str) -> Result<&Node> {
        self.nodes
            .iter()
            .find(|n| n.name() == name)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))
    }

    /// Resolve every link's endpoints and build the graph.
    pub fn into_graph(self) -> Result<Graph> {
        let by_name: AHashMap<&str, &Node> =
            self.nodes.iter().map(|n| (n.name(), n)).collect();

        let resolve = |name: &str| -> Result<Node> {
            by_name
                .get(name)
                .map(|&n| n.clone())
                .ok_or_else(|| Error::NodeNotFound(name.to_string()))
        };

        let edges = self
            .links
            .iter()
            .map(|link| -> Result<Edge> {
                Ok(Edge::new(
                    resolve(&link.start)?,
                    resolve(&link.end)?,
                    link.weight,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Graph::new(self.nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "nodes": [
            {"name": "A", "x": 0, "y": 0},
            {"name": "B", "x": 3, "y": 4},
            {"name": "C", "x": 6, "y": 0}
        ],
        "links": [
            {"start": "A", "end": "B", "weight": 5},
            {"start": "B", "end": "C", "weight": 5}
        ]
    }"#;

    #[test]
    fn test_parse_and_build() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert_eq!(dataset.node("B").unwrap().x, 3);

        let graph = dataset.into_graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.weight(&Node::new("C", 0, 0), &Node::new("B", 0, 0)).unwrap(),
            Some(5)
        );
    }

    #[test]
    fn test_unknown_name() {
        let dataset = Dataset::from_json_str(SAMPLE).unwrap();
        assert!(matches!(dataset.node("a"), Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_link_to_missing_node() {
        let json = r#"{"nodes": [{"name": "A", "x": 0, "y": 0}],
                       "links": [{"start": "A", "end": "Q", "weight": 1}]}"#;
        let err = Dataset::from_json_str(json).unwrap().into_graph().unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(name) if name == "Q"));
    }

    #[test]
    fn test_links_default_to_empty() {
        let dataset = Dataset::from_json_str(r#"{"nodes": [{"name": "E", "x": 1, "y": 1}]}"#).unwrap();
        assert!(dataset.links.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = Dataset::from_json_str("{\"nodes\": 3}").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let dataset = Dataset::from_path(file.path()).unwrap();
        assert_eq!(dataset.nodes.len(), 3);

        let missing = Dataset::from_path(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
