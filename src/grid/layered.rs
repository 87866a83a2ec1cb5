//! Layered grid
use crate::{
    frame::ReferenceFrame,
    topology::RegularIndexing,
    traits::StructuredIndexing,
    types::{GridError, GridResult, NodeValues, PinchoutReport, RealScalar},
};
use itertools::izip;
use log::{debug, trace, warn};
use std::any::Any;

/// Default tolerance below which two horizons are considered to coincide
pub const DEFAULT_PINCHOUT_TOLERANCE: f64 = 1.0e-6;

/// A structured grid made of stacked horizons
///
/// Each horizon holds one elevation per node of the row-column lattice, in the
/// order used by the indexing (columns vary fastest). Horizons are only ever
/// appended, so horizon `k` keeps its index for the lifetime of the grid.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LayeredGridData<T, I>")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredGrid<T: RealScalar, I: StructuredIndexing<T = T> = RegularIndexing<T>> {
    indexing: I,
    horizons: Vec<Vec<T>>,
    reference: ReferenceFrame<T>,
}

impl<T: RealScalar> LayeredGrid<T, RegularIndexing<T>> {
    /// Create new
    ///
    /// The grid has `ncols` by `nrows` nodes in each of `nlayers` horizons, all at
    /// elevation zero. `extent` holds the horizontal lengths of the grid.
    pub fn new(
        ncols: usize,
        nrows: usize,
        nlayers: usize,
        extent: [T; 2],
        reference: ReferenceFrame<T>,
    ) -> Self {
        Self::from_indexing(RegularIndexing::new(ncols, nrows, nlayers, extent), reference)
    }
}

impl<T: RealScalar, I: StructuredIndexing<T = T>> LayeredGrid<T, I> {
    /// Create a grid with zero-filled horizons for every surface of `indexing`
    pub fn from_indexing(indexing: I, reference: ReferenceFrame<T>) -> Self {
        let horizons = vec![
            vec![T::zero(); indexing.nodes_per_layer()];
            indexing.surface_count()
        ];
        Self {
            indexing,
            horizons,
            reference,
        }
    }

    pub(crate) fn from_horizons(
        mut indexing: I,
        horizons: Vec<Vec<T>>,
        reference: ReferenceFrame<T>,
    ) -> Self {
        debug_assert!(horizons
            .iter()
            .all(|h| h.len() == indexing.nodes_per_layer()));
        indexing.set_surface_count(horizons.len());
        Self {
            indexing,
            horizons,
            reference,
        }
    }

    /// The indexing of nodes and cells
    pub fn indexing(&self) -> &I {
        &self.indexing
    }

    /// The grid's reference frame
    pub fn reference(&self) -> &ReferenceFrame<T> {
        &self.reference
    }

    /// Replace the grid's reference frame
    pub fn set_reference(&mut self, reference: ReferenceFrame<T>) {
        self.reference = reference;
    }

    /// Number of horizons
    pub fn surface_count(&self) -> usize {
        self.horizons.len()
    }

    /// Number of nodes in each horizon
    pub fn nodes_per_layer(&self) -> usize {
        self.indexing.nodes_per_layer()
    }

    /// Is horizon 0 on average higher than the last horizon?
    ///
    /// Grids with fewer than two horizons are never flipped.
    pub fn is_flipped(&self) -> bool {
        if self.horizons.len() < 2 || self.nodes_per_layer() == 0 {
            return false;
        }
        let mean = |h: &[T]| h.iter().copied().sum::<T>() / T::from(h.len()).unwrap();
        mean(&self.horizons[0]) > mean(&self.horizons[self.horizons.len() - 1])
    }

    /// The elevations of every horizon
    pub fn depths(&self) -> &[Vec<T>] {
        &self.horizons
    }

    /// The elevations of horizon `k`
    pub fn local_depths(&self, k: usize) -> GridResult<&[T]> {
        self.horizons
            .get(k)
            .map(|h| h.as_slice())
            .ok_or_else(|| GridError::index_out_of_range(k, self.horizons.len()))
    }

    /// Make sure the grid has at least `count` horizons
    ///
    /// New horizons are at elevation zero. Existing horizons are never removed.
    pub fn set_surface_count(&mut self, count: usize) {
        if count > self.horizons.len() {
            debug!(
                "Growing grid from {} to {} horizons",
                self.horizons.len(),
                count
            );
            self.horizons
                .resize(count, vec![T::zero(); self.nodes_per_layer()]);
        }
        self.indexing.set_surface_count(self.horizons.len());
    }

    /// Set the elevations of horizon `k`, adding horizons if needed
    ///
    /// The values are checked before anything is changed, so on error the grid
    /// is left as it was.
    pub fn set_elevations<'a>(
        &mut self,
        k: usize,
        values: impl Into<NodeValues<'a, T>>,
    ) -> GridResult<()> {
        let values: NodeValues<'a, T> = values.into();
        let values = values.into_values(self.nodes_per_layer(), "set_elevations")?;
        self.set_surface_count(k + 1);
        self.horizons[k] = values;
        Ok(())
    }

    /// Set the elevations of horizon `k` from a value whose type is only known at run time
    ///
    /// Values that are not a number or a vector of numbers are rejected with an
    /// unsupported elevation value type error.
    pub fn set_elevations_from_value<V: Any>(&mut self, k: usize, value: &V) -> GridResult<()> {
        self.set_elevations(k, NodeValues::<T>::try_from_value(value, "elevation")?)
    }

    /// Add `delta` to the elevation of every node of every horizon
    ///
    /// A scalar shifts everything uniformly; per-node values are added to each
    /// horizon in turn.
    pub fn displace_all<'a>(&mut self, delta: impl Into<NodeValues<'a, T>>) -> GridResult<()> {
        let delta: NodeValues<'a, T> = delta.into();
        delta.validate(self.nodes_per_layer(), "displace_all")?;
        match delta {
            NodeValues::Scalar(d) => {
                for z in self.horizons.iter_mut().flatten() {
                    *z += d;
                }
            }
            NodeValues::Sequence(ref d) => self.displace_by(d),
            NodeValues::Buffer(d) => self.displace_by(d),
        }
        Ok(())
    }

    /// Displace every node by a value whose type is only known at run time
    pub fn displace_all_by_value<V: Any>(&mut self, delta: &V) -> GridResult<()> {
        self.displace_all(NodeValues::<T>::try_from_value(delta, "displacement")?)
    }

    fn displace_by(&mut self, delta: &[T]) {
        for h in self.horizons.iter_mut() {
            for (z, d) in izip!(h.iter_mut(), delta) {
                *z += *d;
            }
        }
    }

    /// Coordinates of the nodes of horizon `k` in the grid's lattice
    ///
    /// `x` and `y` are the column and row multiplied by the horizontal spacing and
    /// `z` is the elevation. Nodes are listed row by row.
    pub fn local_coordinates(&self, k: usize) -> GridResult<Vec<[T; 3]>> {
        let z = self.local_depths(k)?;
        let mut coords = Vec::with_capacity(z.len());
        self.push_coordinates(z, |p| coords.push(p));
        Ok(coords)
    }

    /// Coordinates of every node, horizon by horizon, flattened to `x0, y0, z0, x1, ...`
    pub fn all_local_coordinates(&self) -> Vec<T> {
        let mut coords = Vec::with_capacity(3 * self.nodes_per_layer() * self.surface_count());
        for z in &self.horizons {
            self.push_coordinates(z, |p| coords.extend_from_slice(&p));
        }
        coords
    }

    fn push_coordinates(&self, z: &[T], mut push: impl FnMut([T; 3])) {
        let [dx, dy] = self.indexing.horizontal_spacing();
        let ncols = self.indexing.column_count();
        for row in 0..self.indexing.row_count() {
            let y = dy * T::from(row).unwrap();
            for col in 0..ncols {
                let x = dx * T::from(col).unwrap();
                push([x, y, z[row * ncols + col]]);
            }
        }
    }

    /// Depth of every node below the same node of the last horizon
    ///
    /// Entry `[k][node]` is the elevation of the last horizon minus that of horizon
    /// `k`. The result is only meaningful for grids that are not flipped.
    pub fn depths_from_top(&self) -> Vec<Vec<T>> {
        let Some(top) = self.horizons.last() else {
            return vec![];
        };
        if self.is_flipped() {
            warn!("Computing depths from the top of a flipped grid");
        }
        self.horizons
            .iter()
            .map(|h| izip!(top, h).map(|(t, z)| *t - *z).collect())
            .collect()
    }

    /// Find pinched elements using the default tolerance
    pub fn pinched_elements(&self) -> PinchoutReport {
        self.pinched_elements_with_tolerance(T::from(DEFAULT_PINCHOUT_TOLERANCE).unwrap())
    }

    /// Find pinched elements
    ///
    /// A vertical edge between horizons `k` and `k + 1` is pinched when the two
    /// elevations differ by less than `tolerance`. Every cell above the lower node
    /// of a pinched edge has its count incremented, and the lower node is mapped to
    /// the node it collapses onto.
    pub fn pinched_elements_with_tolerance(&self, tolerance: T) -> PinchoutReport {
        let nodes_per_layer = self.nodes_per_layer();
        let mut report = PinchoutReport::new(self.indexing.cell_count());

        for (k, pair) in self.horizons.windows(2).enumerate() {
            for (node, (below, above)) in izip!(&pair[0], &pair[1]).enumerate() {
                if (*above - *below).abs() < tolerance {
                    let base = nodes_per_layer * k + node;
                    let elements = self.indexing.element_indices_above_node(base);
                    trace!("Edge at node {base} is pinched; cells above: {elements:?}");
                    report.record(base, base + nodes_per_layer, &elements);
                }
            }
        }
        debug!(
            "Found {} pinched edges touching {} cells",
            report.pinched_node_count(),
            report.pinched_elements().len()
        );
        report
    }
}

/// Unchecked grid data, validated when converted into a [LayeredGrid]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize, Debug)]
pub struct LayeredGridData<T: RealScalar, I: StructuredIndexing<T = T>> {
    indexing: I,
    horizons: Vec<Vec<T>>,
    reference: ReferenceFrame<T>,
}

#[cfg(feature = "serde")]
impl<T: RealScalar, I: StructuredIndexing<T = T>> TryFrom<LayeredGridData<T, I>>
    for LayeredGrid<T, I>
{
    type Error = GridError;

    fn try_from(data: LayeredGridData<T, I>) -> GridResult<Self> {
        let LayeredGridData {
            mut indexing,
            horizons,
            reference,
        } = data;
        let nodes_per_layer = indexing.nodes_per_layer();
        if let Some(h) = horizons.iter().find(|h| h.len() != nodes_per_layer) {
            return Err(GridError::length_mismatch(
                "deserialize",
                nodes_per_layer,
                h.len(),
            ));
        }
        indexing.set_surface_count(horizons.len());
        Ok(Self {
            indexing,
            horizons,
            reference,
        })
    }
}
