//! Grids
mod layered;

pub use layered::{LayeredGrid, DEFAULT_PINCHOUT_TOLERANCE};
#[cfg(feature = "serde")]
pub use layered::LayeredGridData;
