//! Indexing of a grid with evenly spaced nodes in each surface
use crate::{traits::StructuredIndexing, types::RealScalar};

/// Indexing of a structured grid whose nodes are evenly spaced horizontally
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RegularIndexing<T: RealScalar> {
    ncols: usize,
    nrows: usize,
    nsurfaces: usize,
    extent: [T; 2],
}

impl<T: RealScalar> RegularIndexing<T> {
    /// Create new
    ///
    /// `ncols`, `nrows` and `nsurfaces` are node counts and `extent` holds the
    /// horizontal lengths of the grid along the rows and along the columns.
    pub fn new(ncols: usize, nrows: usize, nsurfaces: usize, extent: [T; 2]) -> Self {
        Self {
            ncols,
            nrows,
            nsurfaces,
            extent,
        }
    }

    /// Horizontal lengths of the grid
    pub fn extent(&self) -> [T; 2] {
        self.extent
    }

    /// Number of cells in each cell layer
    pub fn cells_per_layer(&self) -> usize {
        self.ncols.saturating_sub(1) * self.nrows.saturating_sub(1)
    }

    /// Column of a node
    ///
    /// The decomposition helpers return 0 for a grid without nodes.
    pub fn column_of(&self, node: usize) -> usize {
        self.in_layer(node).checked_rem(self.ncols).unwrap_or(0)
    }

    /// Row of a node
    pub fn row_of(&self, node: usize) -> usize {
        self.in_layer(node).checked_div(self.ncols).unwrap_or(0)
    }

    /// Surface of a node
    pub fn surface_of(&self, node: usize) -> usize {
        node.checked_div(self.nodes_per_layer()).unwrap_or(0)
    }

    fn in_layer(&self, node: usize) -> usize {
        node.checked_rem(self.nodes_per_layer()).unwrap_or(0)
    }

    /// Index of the cell in cell layer `layer` whose lowest corner is at (`column`, `row`)
    pub fn cell_index(&self, column: usize, row: usize, layer: usize) -> usize {
        layer * self.cells_per_layer() + row * self.ncols.saturating_sub(1) + column
    }
}

fn spacing<T: RealScalar>(length: T, nodes: usize) -> T {
    if nodes > 1 {
        length / T::from(nodes - 1).unwrap()
    } else {
        T::zero()
    }
}

impl<T: RealScalar> StructuredIndexing for RegularIndexing<T> {
    type T = T;

    fn column_count(&self) -> usize {
        self.ncols
    }
    fn row_count(&self) -> usize {
        self.nrows
    }
    fn surface_count(&self) -> usize {
        self.nsurfaces
    }
    fn set_surface_count(&mut self, count: usize) {
        self.nsurfaces = count;
    }
    fn cell_count(&self) -> usize {
        self.cells_per_layer() * self.nsurfaces.saturating_sub(1)
    }
    fn horizontal_spacing(&self) -> [T; 2] {
        [
            spacing(self.extent[0], self.ncols),
            spacing(self.extent[1], self.nrows),
        ]
    }
    fn element_indices_above_node(&self, node: usize) -> Vec<usize> {
        if node >= self.node_count() || self.cells_per_layer() == 0 {
            return vec![];
        }
        let layer = self.surface_of(node);
        if layer + 1 >= self.nsurfaces {
            return vec![];
        }
        let column = self.column_of(node);
        let row = self.row_of(node);

        let mut cells = Vec::with_capacity(4);
        for cj in row.saturating_sub(1)..(row + 1).min(self.nrows - 1) {
            for ci in column.saturating_sub(1)..(column + 1).min(self.ncols - 1) {
                cells.push(self.cell_index(ci, cj, layer));
            }
        }
        cells
    }
}
