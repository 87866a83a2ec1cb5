//! Layered structured grids
//!
//! A [LayeredGrid] stacks horizons (elevation surfaces) over a regular
//! row-column lattice. It can report node coordinates, depths below the top
//! horizon and the cells that degenerate where two adjacent horizons meet.
//! A [ReferenceFrame] converts point coordinates between differently oriented
//! frames.
#![cfg_attr(feature = "strict", deny(warnings), deny(unused_crate_dependencies))]
#![warn(missing_docs)]

pub mod frame;
pub mod grid;
pub mod shapes;
pub mod topology;
pub mod traits;
pub mod types;

pub use frame::ReferenceFrame;
pub use grid::LayeredGrid;
