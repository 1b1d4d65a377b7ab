use crate::{
    Graph, Result, StructureKind,
    error::GraphError,
    structure::{DEFAULT_MATRIX_CAPACITY, Structure},
    vertex::VertexId,
};

/// Construction parameters for a [`Graph`].
///
/// The default configuration selects an adjacency list.  A matrix capacity
/// hint only affects matrix-backed graphs; when it is absent the matrix starts
/// at [`DEFAULT_MATRIX_CAPACITY`] and grows on demand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    pub kind: StructureKind,
    pub matrix_capacity: Option<usize>,
}

impl GraphConfig {
    pub fn new(kind: StructureKind, matrix_capacity: Option<usize>) -> Self {
        Self {
            kind,
            matrix_capacity,
        }
    }

    /// Checks the configuration without building anything.
    pub fn validate(&self) -> Result<()> {
        match (self.kind, self.matrix_capacity) {
            (StructureKind::Matrix, Some(0)) => Err(GraphError::NonPositiveMatrixSize),
            _ => Ok(()),
        }
    }

    /// Creates an empty structure of the configured kind.
    pub fn structure<T: VertexId, W>(&self) -> Result<Structure<T, W>> {
        self.validate()?;
        Ok(match self.kind {
            StructureKind::List => Structure::list(),
            StructureKind::Matrix => {
                Structure::matrix(self.matrix_capacity.unwrap_or(DEFAULT_MATRIX_CAPACITY))?
            }
        })
    }
}

/// Fluent wrapper around [`GraphConfig`].
///
/// ```
/// use graphlib::{GraphBuilder, Graph};
///
/// let graph: Graph<u32, i32> = GraphBuilder::new().matrix().matrix_capacity(8).build().unwrap();
/// assert!(graph.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: StructureKind) -> Self {
        self.config.kind = kind;
        self
    }

    pub fn list(self) -> Self {
        self.kind(StructureKind::List)
    }

    pub fn matrix(self) -> Self {
        self.kind(StructureKind::Matrix)
    }

    pub fn matrix_capacity(mut self, capacity: usize) -> Self {
        self.config.matrix_capacity = Some(capacity);
        self
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn build<T, W, K>(self) -> Result<Graph<T, W, K>>
    where
        T: VertexId,
        K: VertexId,
    {
        Graph::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_list() {
        let config = GraphConfig::default();
        assert_eq!(config.kind, StructureKind::List);
        assert_eq!(config.matrix_capacity, None);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_matrix_capacity_rejected() {
        let config = GraphConfig::new(StructureKind::Matrix, Some(0));
        assert_eq!(config.validate(), Err(GraphError::NonPositiveMatrixSize));
        assert!(matches!(
            config.structure::<u8, ()>(),
            Err(GraphError::NonPositiveMatrixSize)
        ));
    }

    #[test]
    fn test_zero_capacity_ignored_for_list() {
        let config = GraphConfig::new(StructureKind::List, Some(0));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_selects_matrix() {
        let graph: Graph<u8, ()> = GraphBuilder::new()
            .matrix()
            .matrix_capacity(4)
            .build()
            .unwrap();
        assert_eq!(graph.kind(), StructureKind::Matrix);
    }
}
