//! Types

mod error;
mod node_values;
mod pinchout;

pub use error::{GridError, GridResult};
pub use node_values::NodeValues;
pub use pinchout::PinchoutReport;

use num::{traits::NumAssign, Float};
use std::fmt::Debug;
use std::iter::Sum;

/// A real scalar that grid coordinates and elevations can be stored as
pub trait RealScalar:
    Float + NumAssign + Sum + Debug + Default + Send + Sync + 'static
{
}

impl<T: Float + NumAssign + Sum + Debug + Default + Send + Sync + 'static> RealScalar for T {}
