/// Errors reported by graph construction and by lookups through the
/// [`Graph`](crate::Graph) facade.
///
/// Refused insertions (duplicate vertices, duplicate or conflicting edges) are
/// not errors; they are reported as `false` or `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An adjacency structure that already holds vertices was attached to a graph.
    #[error("graph is not empty")]
    NonEmptyGraph,
    /// A structure kind could not be parsed.
    #[error("illegal adjacency structure kind: {0}")]
    IllegalStructureKind(String),
    /// A matrix was requested with a capacity of zero.
    #[error("matrix size must be positive")]
    NonPositiveMatrixSize,
    /// A vertex identifier that was never added to the graph.
    #[error("no such vertex: {0}")]
    VertexNotFound(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found(id: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound(format!("{id:?}"))
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
