//! # pathx
//!
//! Shortest paths between named points on a weighted, undirected map.
//!
//! pathx loads a map of nodes (a name plus display coordinates) and the
//! weighted links between them, builds an adjacency map once, and answers
//! "what is the cheapest way from A to B, how far is it, how many hops,
//! and how long did it take to work out".
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! pathx data/map.json --source A --target D
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use pathx::prelude::*;
//!
//! let dataset = Dataset::from_json_str(r#"{
//!     "nodes": [
//!         {"name": "A", "x": 0, "y": 0},
//!         {"name": "B", "x": 1, "y": 0},
//!         {"name": "C", "x": 1, "y": 1}
//!     ],
//!     "links": [
//!         {"start": "A", "end": "B", "weight": 2},
//!         {"start": "B", "end": "C", "weight": 3}
//!     ]
//! }"#).unwrap();
//!
//! let source = dataset.node("A").unwrap().clone();
//! let target = dataset.node("C").unwrap().clone();
//! let graph = dataset.into_graph().unwrap();
//!
//! let result = graph.shortest_path(&source, &target).unwrap();
//! assert_eq!(result.total_distance, 5);
//! assert_eq!(result.total_edges, 2);
//! ```
//!
//! ## Crate Structure
//!
//! - [`pathx-core`](https://docs.rs/pathx-core) - graph model, Dijkstra,
//!   path reconstruction and metadata, JSON dataset
//! - `pathx` (this crate) - re-exports and the `pathx` command-line tool

// Re-export core types
pub use pathx_core::{
    Dataset, Distance, Edge, Error, Graph, LinkRecord, Node, Result, ShortestPath,
    ShortestPathTree, Timed, Weight,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Dataset, Distance, Edge, Error, Graph, Node, Result, ShortestPath, ShortestPathTree,
        Timed, Weight,
    };
}
