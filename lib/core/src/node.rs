use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Edge weight between two adjacent nodes
pub type Weight = u32;

/// A named point on the map.
///
/// Identity is the name alone: two nodes with the same name are the same
/// node regardless of coordinates. The coordinates are carried for display
/// and never read by the shortest-path engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    name: String,
    pub x: i32,
    pub y: i32,
}

impl Node {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// The node's identity. There is no setter: a node used as a key must
    /// keep its name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An undirected, weighted link between two nodes.
///
/// Equality looks at the `(source, target)` pair only, so a second edge
/// between the same endpoints is the same edge with a new weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub source: Node,
    pub target: Node,
    pub distance: Weight,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn new(source: Node, target: Node, distance: Weight) -> Self {
        Self {
            source,
            target,
            distance,
        }
    }

    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}
