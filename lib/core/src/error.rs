use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Edge {source_node} -> {target_node} references a node outside the graph")]
    DanglingEdge {
        source_node: String,
        target_node: String,
    },

    #[error("Nodes are not adjacent: {from} -> {to}")]
    NotAdjacent { from: String, to: String },

    #[error("Shortest path tree was computed from {expected}, not {actual}")]
    SourceMismatch { expected: String, actual: String },

    #[error("Shortest path tree belongs to a different graph")]
    ForeignTree,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
