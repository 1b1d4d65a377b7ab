//! Weighted graphs over interchangeable adjacency storage.
//!
//! A [`Graph`] stores its topology in either an adjacency list or an
//! adjacency matrix, chosen at construction through [`StructureKind`] or
//! [`GraphConfig`].  Both strategies answer the same queries; only the order
//! in which adjacency is reported differs.  On top of the storage the graph
//! offers Eulerian classification through [`Eulerian`] and enumeration of
//! every walk that uses each edge exactly once.
//!
//! ```
//! use graphlib::prelude::*;
//!
//! let mut graph: Graph<u32, u32> = Graph::create(StructureKind::Matrix, None)?;
//! graph.add_edge_undirected(1, 2, 10);
//! graph.add_edge_undirected(2, 3, 20);
//! assert!(graph.is_eulerian_trail());
//! assert_eq!(graph.find_all_paths(&1)?, vec!["->1->2->3"]);
//! # Ok::<(), graphlib::GraphError>(())
//! ```

pub mod config;
pub mod directedness;
pub mod edge;
pub mod error;
pub mod eulerian;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod properties;
pub mod search;
pub mod structure;
pub mod tracing_support;
pub mod vertex;

#[doc(hidden)]
pub mod test_support;

pub use config::{GraphBuilder, GraphConfig};
pub use directedness::Directedness;
pub use edge::{Edge, EdgeId};
pub use error::{GraphError, Result};
pub use eulerian::{Eulerian, EulerianClass};
pub use graph::Graph;
pub use path::Path;
pub use properties::{Properties, PropertyValue};
pub use search::EulerianWalks;
pub use structure::{
    AdjacencyList, AdjacencyMatrix, AdjacencyStructure, Structure, StructureKind,
};
pub use vertex::{Vertex, VertexId, VisitState};
