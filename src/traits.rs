//! Traits

mod indexing;

pub use indexing::StructuredIndexing;
