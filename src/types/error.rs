//! Errors raised by grid and reference frame operations

use thiserror::Error;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Grid error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An array does not have the length an operation requires
    #[error("invalid shape in {operation}: expected {expected}, got {actual} values")]
    InvalidShape {
        /// Operation that rejected the input
        operation: &'static str,
        /// Description of the accepted length
        expected: String,
        /// Length that was supplied
        actual: usize,
    },

    /// A value of a kind the operation cannot interpret
    #[error("unsupported {context} value type: {type_name}")]
    UnsupportedValueType {
        /// What the value was meant to be used as
        context: &'static str,
        /// Name of the offending type
        type_name: &'static str,
    },

    /// A horizon index outside `[0, surface_count)`
    #[error("horizon index {index} out of range for a grid with {surface_count} surfaces")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of surfaces in the grid
        surface_count: usize,
    },
}

impl GridError {
    /// Input whose length must equal `expected`
    pub fn length_mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidShape {
            operation,
            expected: expected.to_string(),
            actual,
        }
    }

    /// Input whose length must be a multiple of `factor`
    pub fn not_a_multiple(operation: &'static str, factor: usize, actual: usize) -> Self {
        Self::InvalidShape {
            operation,
            expected: format!("a multiple of {factor}"),
            actual,
        }
    }

    /// Value of a type that cannot be used as `context`
    pub fn unsupported_type(context: &'static str, type_name: &'static str) -> Self {
        Self::UnsupportedValueType { context, type_name }
    }

    /// Horizon `index` requested from a grid with `surface_count` surfaces
    pub fn index_out_of_range(index: usize, surface_count: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            surface_count,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        let e = GridError::not_a_multiple("convert_points", 3, 7);
        assert_eq!(
            e.to_string(),
            "invalid shape in convert_points: expected a multiple of 3, got 7 values"
        );

        let e = GridError::unsupported_type("elevation", "alloc::string::String");
        assert!(e.to_string().contains("alloc::string::String"));

        let e = GridError::index_out_of_range(3, 3);
        assert_eq!(
            e.to_string(),
            "horizon index 3 out of range for a grid with 3 surfaces"
        );
    }
}
