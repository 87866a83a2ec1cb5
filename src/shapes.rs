//! Functions to create simple example grids

use crate::{
    frame::ReferenceFrame, grid::LayeredGrid, topology::RegularIndexing,
    traits::StructuredIndexing, types::RealScalar,
};

/// Create a grid with one flat horizon at each of the given elevations
pub fn flat_layers<T: RealScalar>(
    ncols: usize,
    nrows: usize,
    extent: [T; 2],
    elevations: &[T],
) -> LayeredGrid<T> {
    let indexing = RegularIndexing::new(ncols, nrows, elevations.len(), extent);
    let horizons = elevations
        .iter()
        .map(|z| vec![*z; indexing.nodes_per_layer()])
        .collect();
    LayeredGrid::from_horizons(indexing, horizons, ReferenceFrame::identity())
}

/// Create a grid of evenly stacked horizons that rise along the rows
///
/// Horizon `k` is at elevation `base + k * thickness + slope * x`.
pub fn tilted_layers<T: RealScalar>(
    ncols: usize,
    nrows: usize,
    extent: [T; 2],
    nsurfaces: usize,
    base: T,
    thickness: T,
    slope: T,
) -> LayeredGrid<T> {
    let indexing = RegularIndexing::new(ncols, nrows, nsurfaces, extent);
    let dx = indexing.horizontal_spacing()[0];
    let horizons = (0..nsurfaces)
        .map(|k| {
            let offset = base + thickness * T::from(k).unwrap();
            (0..nrows)
                .flat_map(|_| 0..ncols)
                .map(|col| offset + slope * dx * T::from(col).unwrap())
                .collect()
        })
        .collect();
    LayeredGrid::from_horizons(indexing, horizons, ReferenceFrame::identity())
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_layers() {
        let g = flat_layers(3, 4, [2.0, 3.0], &[0.0, 5.0, 5.0]);
        assert_eq!(g.surface_count(), 3);
        assert_eq!(g.indexing().surface_count(), 3);
        assert_eq!(g.indexing().cell_count(), 2 * 3 * 2);
        assert_eq!(g.local_depths(1).unwrap(), &[5.0; 12]);
    }

    #[test]
    fn test_tilted_layers() {
        let g = tilted_layers(3, 2, [10.0, 1.0], 2, 100.0, 20.0, 0.5);
        assert_eq!(g.surface_count(), 2);
        let h1 = g.local_depths(1).unwrap();
        assert_relative_eq!(h1[0], 120.0);
        assert_relative_eq!(h1[2], 125.0);
        assert_relative_eq!(h1[4], 122.5);
        assert!(!g.is_flipped());
    }
}
