use std::{
    collections::HashMap,
    fmt::{self, Display},
};

use derivative::Derivative;
use tracing::debug;

use crate::{
    Result,
    directedness::Directedness,
    edge::{Edge, EdgeArena, EdgeId},
    error::GraphError,
    structure::{
        AdjacencyStructure, DEFAULT_MATRIX_CAPACITY, MAX_INITIAL_MATRIX_CAPACITY, StructureKind,
    },
    vertex::VertexId,
};

/// Placeholder printed for an empty cell.
const EMPTY_CELL: &str = "-";

/// Dense adjacency storage: a square grid of cells indexed by vertex
/// position.
///
/// Cell `(row, col)` holds the edge reachable from the vertex at `row` to the
/// vertex at `col`.  An undirected edge occupies both `(i, j)` and `(j, i)`
/// with the same [`EdgeId`].  Cells are stored row-major in a single vector of
/// `capacity * capacity` entries; when a vertex does not fit, the capacity is
/// doubled and every cell keeps its `(row, col)` position.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, W: Clone"),
    Debug(bound = "T: std::fmt::Debug, W: std::fmt::Debug")
)]
pub struct AdjacencyMatrix<T, W> {
    vertices: Vec<T>,
    /// Invariant: `index[vertices[i]] == i` for every `i`.
    index: HashMap<T, usize>,
    /// Invariant: `cells.len() == capacity * capacity`.
    cells: Vec<Option<EdgeId>>,
    capacity: usize,
    edges: EdgeArena<T, W>,
}

impl<T: VertexId, W> Default for AdjacencyMatrix<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VertexId, W> AdjacencyMatrix<T, W> {
    /// Creates a matrix with [`DEFAULT_MATRIX_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::empty(DEFAULT_MATRIX_CAPACITY)
    }

    /// Creates a matrix with `capacity` slots.  A capacity of zero is
    /// rejected; a capacity above [`MAX_INITIAL_MATRIX_CAPACITY`] is clamped
    /// to it.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GraphError::NonPositiveMatrixSize);
        }
        if capacity > MAX_INITIAL_MATRIX_CAPACITY {
            debug!(
                requested = capacity,
                allocated = MAX_INITIAL_MATRIX_CAPACITY,
                "clamping matrix capacity hint"
            );
        }
        Ok(Self::empty(capacity.min(MAX_INITIAL_MATRIX_CAPACITY)))
    }

    fn empty(capacity: usize) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            cells: vec![None; capacity * capacity],
            capacity,
            edges: EdgeArena::default(),
        }
    }

    /// Gets the number of vertex slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn cell(&self, row: usize, col: usize) -> Option<EdgeId> {
        self.cells[row * self.capacity + col]
    }

    fn set_cell(&mut self, row: usize, col: usize, eid: EdgeId) {
        self.cells[row * self.capacity + col] = Some(eid);
    }

    /// Reallocates the grid to hold at least `required` vertices.
    fn grow(&mut self, required: usize) {
        let new_capacity = (self.capacity * 2).max(required);
        debug!(
            old_capacity = self.capacity,
            new_capacity, "growing adjacency matrix"
        );
        // Saturates rather than wrapping on overflow.
        let mut cells = vec![None; new_capacity.saturating_mul(new_capacity)];
        let used = self.vertices.len();
        for row in 0..used {
            let old_row = &self.cells[row * self.capacity..row * self.capacity + used];
            cells[row * new_capacity..row * new_capacity + used].copy_from_slice(old_row);
        }
        self.cells = cells;
        self.capacity = new_capacity;
    }
}

impl<T: VertexId, W> AdjacencyStructure<T, W> for AdjacencyMatrix<T, W> {
    fn kind(&self) -> StructureKind {
        StructureKind::Matrix
    }

    fn len(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> &[T] {
        &self.vertices
    }

    fn contains_vertex(&self, id: &T) -> bool {
        self.index.contains_key(id)
    }

    fn add_vertex(&mut self, id: T) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        if self.vertices.len() == self.capacity {
            self.grow(self.vertices.len() + 1);
        }
        self.index.insert(id.clone(), self.vertices.len());
        self.vertices.push(id);
        true
    }

    fn edges(&self) -> &[Edge<T, W>] {
        self.edges.as_slice()
    }

    fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge<T, W>> {
        self.edges.get_mut(id)
    }

    fn find_edge(&self, from: &T, into: &T) -> Option<EdgeId> {
        let row = *self.index.get(from)?;
        let col = *self.index.get(into)?;
        self.cell(row, col)
    }

    fn adjacent_edge_ids(&self, id: &T) -> Option<Vec<EdgeId>> {
        let row = *self.index.get(id)?;
        Some(
            (0..self.vertices.len())
                .filter_map(|col| self.cell(row, col))
                .collect(),
        )
    }

    fn link(&mut self, source: T, target: T, weight: W, directedness: Directedness) -> EdgeId {
        let row = self.index[&source];
        let col = self.index[&target];
        let eid = self.edges.push(source, target, weight, directedness);
        self.set_cell(row, col, eid);
        if directedness.is_undirected() {
            self.set_cell(col, row, eid);
        }
        eid
    }

    /// A header line of vertex ids followed by one line per vertex holding
    /// the weight in each cell, `-` for an empty cell.  Columns are
    /// tab-separated.
    fn render(&self) -> String
    where
        T: Display,
        W: Display,
    {
        MatrixDump(self).to_string()
    }
}

struct MatrixDump<'a, T, W>(&'a AdjacencyMatrix<T, W>);

impl<T: VertexId + Display, W: Display> Display for MatrixDump<'_, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matrix = self.0;
        for vertex in &matrix.vertices {
            write!(f, "\t{vertex}")?;
        }
        writeln!(f)?;
        for (row, vertex) in matrix.vertices.iter().enumerate() {
            write!(f, "{vertex}")?;
            for col in 0..matrix.vertices.len() {
                match matrix.cell(row, col).and_then(|eid| matrix.edges.get(eid)) {
                    Some(edge) => write!(f, "\t{}", edge.weight())?,
                    None => write!(f, "\t{EMPTY_CELL}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
