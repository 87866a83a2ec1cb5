//! Indexing of a structured grid
use crate::types::RealScalar;

/// Node and cell numbering of a structured grid made of stacked surfaces
///
/// Nodes are numbered row-major within a surface (columns vary fastest) and surface
/// by surface upwards. Cells sit between two adjacent surfaces.
pub trait StructuredIndexing {
    /// Scalar type
    type T: RealScalar;

    /// Number of nodes along a row
    fn column_count(&self) -> usize;

    /// Number of nodes along a column
    fn row_count(&self) -> usize;

    /// Number of surfaces
    fn surface_count(&self) -> usize;

    /// Change the number of surfaces
    fn set_surface_count(&mut self, count: usize);

    /// Number of cells
    fn cell_count(&self) -> usize;

    /// Node spacing along the rows and along the columns
    fn horizontal_spacing(&self) -> [Self::T; 2];

    /// The cells directly above a node
    ///
    /// Every returned index must be less than [Self::cell_count]; nodes on the top
    /// surface have no cells above them.
    fn element_indices_above_node(&self, node: usize) -> Vec<usize>;

    /// Number of nodes in each surface
    fn nodes_per_layer(&self) -> usize {
        self.column_count() * self.row_count()
    }

    /// Number of nodes
    fn node_count(&self) -> usize {
        self.nodes_per_layer() * self.surface_count()
    }
}
