//! Reference frames
//!
//! A reference frame is an origin and three axes, all expressed in a common ambient
//! frame. Different tools describe the same points in differently oriented frames
//! (for example with the y axis or the vertical axis inverted); [ReferenceFrame::convert_points]
//! moves coordinates from one frame to another.
use crate::types::{GridError, GridResult, RealScalar};
use std::fmt;

fn dot<T: RealScalar>(a: &[T; 3], b: &[T; 3]) -> T {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// An oriented coordinate system in three dimensions
///
/// The axes are not normalised or checked for orthogonality; callers are
/// responsible for supplying an orthogonal triple.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceFrame<T: RealScalar> {
    origin: [T; 3],
    axes: [[T; 3]; 3],
}

impl<T: RealScalar> ReferenceFrame<T> {
    /// Create new
    ///
    /// Missing axes default to the unit axes and a missing origin to zero.
    pub fn new(axes: Option<[[T; 3]; 3]>, origin: Option<[T; 3]>) -> Self {
        let identity = Self::identity();
        Self {
            origin: origin.unwrap_or(identity.origin),
            axes: axes.unwrap_or(identity.axes),
        }
    }

    /// The frame with unit axes and zero origin
    pub fn identity() -> Self {
        let (o, i) = (T::zero(), T::one());
        Self {
            origin: [o; 3],
            axes: [[i, o, o], [o, i, o], [o, o, i]],
        }
    }

    /// Create a frame with the given axes at the ambient origin
    pub fn from_axes(axes: [[T; 3]; 3]) -> Self {
        Self::new(Some(axes), None)
    }

    /// Move this frame's origin
    pub fn with_origin(mut self, origin: [T; 3]) -> Self {
        self.origin = origin;
        self
    }

    /// Origin of the frame in the ambient frame
    pub fn origin(&self) -> &[T; 3] {
        &self.origin
    }

    /// The three axes, in the ambient frame
    pub fn axes(&self) -> &[[T; 3]; 3] {
        &self.axes
    }

    /// Check whether the axes are pairwise orthogonal
    pub fn is_orthogonal(&self, tolerance: T) -> bool {
        [(0, 1), (0, 2), (1, 2)]
            .iter()
            .all(|(i, j)| dot(&self.axes[*i], &self.axes[*j]).abs() < tolerance)
    }

    /// Change of basis matrix from this frame to `target`
    ///
    /// Entry `[i][j]` is the dot product of axis `i` of this frame with axis `j` of
    /// `target`, so a row of components in this frame multiplied by the matrix gives
    /// the components in `target`.
    pub fn change_of_basis_coefficients(&self, target: &Self) -> [[T; 3]; 3] {
        let mut a = [[T::zero(); 3]; 3];
        for (a_i, axis_i) in a.iter_mut().zip(&self.axes) {
            for (a_ij, target_j) in a_i.iter_mut().zip(&target.axes) {
                *a_ij = dot(axis_i, target_j);
            }
        }
        a
    }

    /// Convert one point from this frame to `target`
    pub fn convert_point(&self, point: [T; 3], target: &Self) -> [T; 3] {
        let a = self.change_of_basis_coefficients(target);
        convert(&point, &self.origin_shift(target), &a)
    }

    /// Convert points from this frame to `target`
    ///
    /// `points` holds the coordinates of each point in turn (`x0, y0, z0, x1, ...`).
    /// Each point is translated by the difference of the origins and then rotated.
    /// The translation is applied to the components in this frame, so conversions
    /// between frames with different origins are only exact when this frame is
    /// aligned with the ambient axes.
    pub fn convert_points(&self, points: &[T], target: &Self) -> GridResult<Vec<T>> {
        if points.len() % 3 != 0 {
            return Err(GridError::not_a_multiple("convert_points", 3, points.len()));
        }
        let a = self.change_of_basis_coefficients(target);
        let delta = self.origin_shift(target);

        let mut out = Vec::with_capacity(points.len());
        for p in points.chunks_exact(3) {
            out.extend_from_slice(&convert(p, &delta, &a));
        }
        Ok(out)
    }

    fn origin_shift(&self, target: &Self) -> [T; 3] {
        [
            target.origin[0] - self.origin[0],
            target.origin[1] - self.origin[1],
            target.origin[2] - self.origin[2],
        ]
    }
}

fn convert<T: RealScalar>(point: &[T], delta: &[T; 3], a: &[[T; 3]; 3]) -> [T; 3] {
    let mut out = [T::zero(); 3];
    for (i, a_i) in a.iter().enumerate() {
        let p = point[i] - delta[i];
        for (o, a_ij) in out.iter_mut().zip(a_i) {
            *o += p * *a_ij;
        }
    }
    out
}

impl<T: RealScalar> Default for ReferenceFrame<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealScalar + fmt::Display> fmt::Display for ReferenceFrame<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |v: &[T; 3]| format!("[{}, {}, {}]", v[0], v[1], v[2]);
        writeln!(f, "Origin: {}", row(&self.origin))?;
        for (i, axis) in self.axes.iter().enumerate() {
            writeln!(f, "Axis{}:  {}", i + 1, row(axis))?;
        }
        Ok(())
    }
}
