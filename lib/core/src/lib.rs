//! # pathx Core
//!
//! Core library for pathx, an in-memory shortest-path engine over a
//! weighted, undirected map of named points.
//!
//! - [`Node`] / [`Edge`] - named points and the weighted links between them
//! - [`Graph`] - immutable node arena with a symmetric adjacency map
//! - [`ShortestPathTree`] - Dijkstra predecessor and distance tables
//! - [`ShortestPath`] - a reconstructed path with its distance, hop count
//!   and computation time
//! - [`Dataset`] - JSON source of nodes and links, resolved by name
//!
//! ## Example
//!
//! ```rust
//! use pathx_core::{Edge, Graph, Node};
//!
//! let a = Node::new("A", 0, 0);
//! let b = Node::new("B", 1, 0);
//! let c = Node::new("C", 2, 0);
//! let graph = Graph::new(
//!     vec![a.clone(), b.clone(), c.clone()],
//!     vec![
//!         Edge::new(a.clone(), b.clone(), 1),
//!         Edge::new(b.clone(), c.clone(), 2),
//!         Edge::new(a.clone(), c.clone(), 10),
//!     ],
//! )
//! .unwrap();
//!
//! // Step by step: each phase reports its own elapsed time
//! let (tree, search) = graph.shortest_paths_from(&a).unwrap().into_parts();
//! let (path, walk) = graph.reconstruct_path(&tree, &a, &c).unwrap().into_parts();
//! let result = graph.path_metadata(path, search + walk).unwrap();
//! assert_eq!(result.total_distance, 3);
//! assert_eq!(result.total_edges, 2);
//!
//! // Or in one call
//! assert_eq!(graph.shortest_path(&a, &c).unwrap(), result);
//! ```

pub mod dataset;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod shortest_path;
pub mod timer;

pub use dataset::{Dataset, LinkRecord};
pub use error::{Error, Result};
pub use frontier::Distance;
pub use graph::Graph;
pub use node::{Edge, Node, Weight};
pub use shortest_path::{ShortestPath, ShortestPathTree};
pub use timer::Timed;
