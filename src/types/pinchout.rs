//! Pinchout detection results
use std::collections::BTreeMap;

/// Pinched elements found in a layered grid
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinchoutReport {
    /// For each cell, the number of pinched vertical edges it touches
    pub element_pinch_counts: Vec<usize>,
    /// Collapsed node id on the lower horizon to the node id one horizon above
    pub node_connections: BTreeMap<usize, usize>,
}

impl PinchoutReport {
    /// Create an empty report for a grid with `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        Self {
            element_pinch_counts: vec![0; cell_count],
            node_connections: BTreeMap::new(),
        }
    }

    /// Number of pinched vertical edges
    pub fn pinched_node_count(&self) -> usize {
        self.node_connections.len()
    }

    /// True if no edge is pinched
    pub fn is_empty(&self) -> bool {
        self.node_connections.is_empty()
    }

    /// Indices of the cells touched by at least one pinched edge
    pub fn pinched_elements(&self) -> Vec<usize> {
        self.element_pinch_counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(i, _)| i)
            .collect()
    }

    pub(crate) fn record(&mut self, base_node: usize, upper_node: usize, elements: &[usize]) {
        for e in elements {
            debug_assert!(
                *e < self.element_pinch_counts.len(),
                "Cell {e} above node {base_node} is outside a grid with {} cells",
                self.element_pinch_counts.len()
            );
            self.element_pinch_counts[*e] += 1;
        }
        self.node_connections.insert(base_node, upper_node);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_record() {
        let mut r = PinchoutReport::new(3);
        assert!(r.is_empty());
        r.record(0, 9, &[0, 2]);
        r.record(1, 10, &[2]);
        assert_eq!(r.element_pinch_counts, vec![1, 0, 2]);
        assert_eq!(r.pinched_elements(), vec![0, 2]);
        assert_eq!(r.pinched_node_count(), 2);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "outside a grid with 3 cells")]
    fn test_record_cell_out_of_range() {
        let mut r = PinchoutReport::new(3);
        r.record(0, 9, &[3]);
    }
}
