use std::fmt::Display;

use crate::error::Error;

/// Containers
///
/// The engine only ever reads a snapshot of a container's shape. Anything
/// with a length and, optionally, a `dim` attribute can be indexed.
///
pub trait Container {
    /// Dimensions, or `None` for a flat vector
    fn dims(&self) -> Option<&[u32]>;

    fn len(&self) -> u32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether missing subscripts may pass through as `NULL` elements
    fn is_list_like(&self) -> bool {
        false
    }
}

/// A plain container shape
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shape {
    dims: Option<Vec<u32>>,
    len: u32,
    list: bool,
}

impl Shape {
    pub fn vector(len: u32) -> Self {
        Shape {
            dims: None,
            len,
            list: false,
        }
    }

    pub fn list(len: u32) -> Self {
        Shape {
            dims: None,
            len,
            list: true,
        }
    }

    pub fn matrix(nrow: u32, ncol: u32) -> Result<Self, Error> {
        Shape::array(vec![nrow, ncol])
    }

    /// Build an array shape, checking that its length is representable
    pub fn array(dims: Vec<u32>) -> Result<Self, Error> {
        let len = dims
            .iter()
            .try_fold(1_u32, |acc, &d| acc.checked_mul(d))
            .ok_or(Error::ResultTooLong)?;

        Ok(Shape {
            dims: Some(dims),
            len,
            list: false,
        })
    }

    pub fn into_list(mut self) -> Self {
        self.list = true;
        self
    }
}

impl Container for Shape {
    fn dims(&self) -> Option<&[u32]> {
        self.dims.as_deref()
    }

    fn len(&self) -> u32 {
        self.len
    }

    fn is_list_like(&self) -> bool {
        self.list
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ctor = if self.list { "list" } else { "vector" };
        match self.dims.as_deref() {
            None => write!(f, "{ctor}({})", self.len),
            Some([nrow, ncol]) if !self.list => write!(f, "matrix({nrow}, {ncol})"),
            Some(dims) => {
                let dims: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
                write!(f, "array(c({}))", dims.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn array_length_is_product() {
        let x = Shape::array(vec![2, 3, 4]).unwrap();
        assert_eq!(x.len(), 24);
        assert_eq!(x.dims(), Some(&[2, 3, 4][..]));
    }

    #[test]
    fn array_with_empty_axis() {
        let x = Shape::matrix(0, 5).unwrap();
        assert_eq!(x.len(), 0);
        assert!(x.is_empty());
    }

    #[test]
    fn array_overflow() {
        let x = Shape::array(vec![u32::MAX, 2]);
        assert_eq!(x, Err(Error::ResultTooLong));
    }

    #[test]
    fn display_shapes() {
        assert_eq!(Shape::vector(4).to_string(), "vector(4)");
        assert_eq!(Shape::list(2).to_string(), "list(2)");
        assert_eq!(Shape::matrix(3, 4).unwrap().to_string(), "matrix(3, 4)");
        assert_eq!(
            Shape::array(vec![1, 2, 3]).unwrap().to_string(),
            "array(c(1, 2, 3))"
        );
    }
}
