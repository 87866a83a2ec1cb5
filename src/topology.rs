//! Topology
mod regular;

pub use regular::RegularIndexing;
