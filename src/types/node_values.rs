//! Values assigned to, or added to, every node of a horizon
use super::{GridError, GridResult, RealScalar};
use std::any::{type_name, Any};

/// One value per node of a horizon, or a single value for all of them
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValues<'a, T: RealScalar> {
    /// The same value at every node
    Scalar(T),
    /// An owned sequence with one value per node
    Sequence(Vec<T>),
    /// An existing array with one value per node; copied on use
    Buffer(&'a [T]),
}

impl<'a, T: RealScalar> NodeValues<'a, T> {
    /// Interpret a value whose type is only known at run time
    ///
    /// Numeric scalars are converted to `T`. A `Vec<T>` is borrowed as a buffer and a
    /// `Vec` of another float type is converted into a sequence. Anything else is
    /// rejected with an error naming `context` (what the values are used as, for
    /// example `"elevation"`) and the type.
    pub fn try_from_value<V: Any>(value: &'a V, context: &'static str) -> GridResult<Self> {
        let any = value as &dyn Any;
        let unsupported = || GridError::unsupported_type(context, type_name::<V>());

        if let Some(v) = any.downcast_ref::<T>() {
            return Ok(Self::Scalar(*v));
        }
        if let Some(v) = any.downcast_ref::<Vec<T>>() {
            return Ok(Self::Buffer(v.as_slice()));
        }
        if let Some(v) = any.downcast_ref::<f64>() {
            return T::from(*v).map(Self::Scalar).ok_or_else(unsupported);
        }
        if let Some(v) = any.downcast_ref::<f32>() {
            return T::from(*v).map(Self::Scalar).ok_or_else(unsupported);
        }
        if let Some(v) = any.downcast_ref::<i32>() {
            return T::from(*v).map(Self::Scalar).ok_or_else(unsupported);
        }
        if let Some(v) = any.downcast_ref::<i64>() {
            return T::from(*v).map(Self::Scalar).ok_or_else(unsupported);
        }
        if let Some(v) = any.downcast_ref::<usize>() {
            return T::from(*v).map(Self::Scalar).ok_or_else(unsupported);
        }
        if let Some(v) = any.downcast_ref::<Vec<f64>>() {
            return v
                .iter()
                .map(|x| T::from(*x))
                .collect::<Option<Vec<_>>>()
                .map(Self::Sequence)
                .ok_or_else(unsupported);
        }
        if let Some(v) = any.downcast_ref::<Vec<f32>>() {
            return v
                .iter()
                .map(|x| T::from(*x))
                .collect::<Option<Vec<_>>>()
                .map(Self::Sequence)
                .ok_or_else(unsupported);
        }
        Err(unsupported())
    }

    /// Check that these values can be spread over `len` nodes
    pub fn validate(&self, len: usize, operation: &'static str) -> GridResult<()> {
        match self {
            Self::Scalar(_) => Ok(()),
            Self::Sequence(values) if values.len() == len => Ok(()),
            Self::Buffer(values) if values.len() == len => Ok(()),
            Self::Sequence(values) => Err(GridError::length_mismatch(operation, len, values.len())),
            Self::Buffer(values) => Err(GridError::length_mismatch(operation, len, values.len())),
        }
    }

    /// One value for each of `len` nodes
    pub fn into_values(self, len: usize, operation: &'static str) -> GridResult<Vec<T>> {
        self.validate(len, operation)?;
        Ok(match self {
            Self::Scalar(value) => vec![value; len],
            Self::Sequence(values) => values,
            Self::Buffer(values) => values.to_vec(),
        })
    }
}

impl<T: RealScalar> From<T> for NodeValues<'_, T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}

impl<T: RealScalar> From<Vec<T>> for NodeValues<'_, T> {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values)
    }
}

impl<'a, T: RealScalar> From<&'a [T]> for NodeValues<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::Buffer(values)
    }
}

impl<'a, T: RealScalar> From<&'a Vec<T>> for NodeValues<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Self::Buffer(values.as_slice())
    }
}

impl<'a, T: RealScalar, const N: usize> From<&'a [T; N]> for NodeValues<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Self::Buffer(values.as_slice())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_scalar_broadcast() {
        let v = NodeValues::<f64>::from(2.5).into_values(4, "test").unwrap();
        assert_eq!(v, vec![2.5; 4]);
    }

    #[test]
    fn test_length_mismatch() {
        let values = [1.0, 2.0, 3.0];
        let e = NodeValues::<f64>::from(&values).into_values(4, "set_elevations");
        assert_eq!(e, Err(GridError::length_mismatch("set_elevations", 4, 3)));
        let e = NodeValues::<f32>::from(vec![1.0; 5]).validate(4, "displace_all");
        assert_eq!(e, Err(GridError::length_mismatch("displace_all", 4, 5)));
    }

    #[test]
    fn test_buffer_is_copied() {
        let source = vec![1.0, 2.0];
        let mut copy = NodeValues::<f64>::from(&source).into_values(2, "test").unwrap();
        copy[0] = 10.0;
        assert_eq!(source, vec![1.0, 2.0]);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(
            NodeValues::<f64>::try_from_value(&3i32, "elevation"),
            Ok(NodeValues::Scalar(3.0))
        );
        assert_eq!(
            NodeValues::<f32>::try_from_value(&0.5f64, "elevation"),
            Ok(NodeValues::Scalar(0.5))
        );
        let v = vec![1.0f64, 2.0];
        assert_eq!(
            NodeValues::<f64>::try_from_value(&v, "elevation"),
            Ok(NodeValues::Buffer(&[1.0, 2.0][..]))
        );
        assert_eq!(
            NodeValues::<f32>::try_from_value(&v, "elevation"),
            Ok(NodeValues::Sequence(vec![1.0, 2.0]))
        );
    }

    #[test]
    fn test_unsupported_value() {
        let ten = String::from("ten");
        let e = NodeValues::<f64>::try_from_value(&ten, "displacement");
        match e {
            Err(GridError::UnsupportedValueType { context, type_name }) => {
                assert_eq!(context, "displacement");
                assert!(type_name.contains("String"))
            }
            _ => panic!("expected an unsupported value type error"),
        }
    }
}
