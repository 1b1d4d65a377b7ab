pub use crate::config::{GraphBuilder, GraphConfig};
pub use crate::directedness::Directedness;
pub use crate::edge::{Edge, EdgeId};
pub use crate::error::GraphError;
pub use crate::eulerian::{Eulerian, EulerianClass};
pub use crate::graph::Graph;
pub use crate::structure::{AdjacencyStructure, Structure, StructureKind};
pub use crate::vertex::{Vertex, VertexId};
