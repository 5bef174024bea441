use crate::error::Error;
use crate::object::types::*;
use crate::object::{Obj, OptionNA, Vector};

/// Classified index arguments
///
/// Every positional index argument is reduced to one of these variants before
/// resolution. Doubles are kept as-is here and truncated only when resolved,
/// so that the classification of a value never depends on a dimension.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IndexSpec {
    #[default]
    Missing,
    Logical(Vec<Logical>),
    Integer(Vec<Integer>),
    Double(Vec<Double>),
}

impl IndexSpec {
    pub fn len(&self) -> usize {
        match self {
            IndexSpec::Missing => 0,
            IndexSpec::Logical(x) => x.len(),
            IndexSpec::Integer(x) => x.len(),
            IndexSpec::Double(x) => x.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, IndexSpec::Missing)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            IndexSpec::Missing => "missing",
            IndexSpec::Logical(_) => "logical",
            IndexSpec::Integer(_) => "integer",
            IndexSpec::Double(_) => "double",
        }
    }
}

/// Truncate a double position toward zero
///
/// NaN, NA and infinities become NA. Values in `(-1, 0)` map to `-1` rather
/// than `0`, so they still read as negative positions. Values outside the
/// integer range saturate to `±i32::MAX`. Unlike R's unchecked conversion, a
/// large negative value stays negative instead of wrapping around to `NA`.
///
pub fn truncate_position(x: Double) -> Integer {
    match x {
        OptionNA::NA => OptionNA::NA,
        OptionNA::Some(x) if x.is_nan() || x.is_infinite() => OptionNA::NA,
        OptionNA::Some(x) => {
            let limit = i32::MAX as f64;
            let i = x.trunc().clamp(-limit, limit) as i32;
            if i == 0 && x < 0.0 {
                OptionNA::Some(-1)
            } else {
                OptionNA::Some(i)
            }
        }
    }
}

pub fn truncate_positions(x: &[Double]) -> Vec<Integer> {
    x.iter().copied().map(truncate_position).collect()
}

impl TryFrom<Vector> for IndexSpec {
    type Error = Error;
    fn try_from(value: Vector) -> Result<Self, Self::Error> {
        match value {
            Vector::Logical(x) => Ok(IndexSpec::Logical(x)),
            Vector::Integer(x) => Ok(IndexSpec::Integer(x)),
            Vector::Double(x) => Ok(IndexSpec::Double(x)),
            Vector::Character(_) => Err(Error::UnsupportedIndexKind("character")),
        }
    }
}

impl TryFrom<Obj> for IndexSpec {
    type Error = Error;
    fn try_from(value: Obj) -> Result<Self, Self::Error> {
        match value {
            Obj::Missing => Ok(IndexSpec::Missing),
            Obj::Null => Ok(IndexSpec::Integer(Vec::new())),
            Obj::Vector(v) => IndexSpec::try_from(v),
            Obj::List(_) => Err(Error::UnsupportedIndexKind("list")),
        }
    }
}

impl TryFrom<&Obj> for IndexSpec {
    type Error = Error;
    fn try_from(value: &Obj) -> Result<Self, Self::Error> {
        match value {
            Obj::Vector(Vector::Character(_)) => Err(Error::UnsupportedIndexKind("character")),
            Obj::List(_) => Err(Error::UnsupportedIndexKind("list")),
            value => IndexSpec::try_from(value.clone()),
        }
    }
}

impl From<Vec<i32>> for IndexSpec {
    fn from(value: Vec<i32>) -> Self {
        IndexSpec::Integer(value.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<f64>> for IndexSpec {
    fn from(value: Vec<f64>) -> Self {
        IndexSpec::Double(value.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<bool>> for IndexSpec {
    fn from(value: Vec<bool>) -> Self {
        IndexSpec::Logical(value.into_iter().map(OptionNA::Some).collect())
    }
}

/// Classify each argument, reporting the position of the first one that
/// cannot be used as a positional index
pub fn classify(args: &[Obj]) -> Result<Vec<IndexSpec>, Error> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| IndexSpec::try_from(arg).map_err(|e| e.in_dimension(i)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify_kinds() {
        let args = vec![
            Obj::Missing,
            Obj::from(Vector::from(vec![true, false])),
            Obj::from(Vector::from(vec![1, 2])),
            Obj::from(Vector::from(vec![1.5])),
            Obj::Null,
        ];

        let specs = classify(&args).unwrap();
        assert_eq!(specs[0], IndexSpec::Missing);
        assert_eq!(specs[1], IndexSpec::from(vec![true, false]));
        assert_eq!(specs[2], IndexSpec::from(vec![1, 2]));
        assert_eq!(specs[3], IndexSpec::from(vec![1.5]));
        assert_eq!(specs[4], IndexSpec::Integer(vec![]));
        assert_eq!(specs[2].len(), 2);
    }

    #[test]
    fn classify_rejects_names() {
        let args = vec![
            Obj::from(Vector::from(vec![1])),
            Obj::from(Vector::from(vec!["a".to_string()])),
        ];

        let err = classify(&args).unwrap_err();
        assert_eq!(err.kind(), &Error::UnsupportedIndexKind("character"));
        assert_eq!(err.argument(), Some(1));
    }

    #[test]
    fn classify_rejects_lists() {
        let args = vec![Obj::List(vec![Obj::Null])];
        let err = classify(&args).unwrap_err();
        assert_eq!(err.kind(), &Error::UnsupportedIndexKind("list"));
    }

    #[test]
    fn truncation_toward_zero() {
        assert_eq!(truncate_position(OptionNA::Some(2.9)), OptionNA::Some(2));
        assert_eq!(truncate_position(OptionNA::Some(-2.9)), OptionNA::Some(-2));
        assert_eq!(truncate_position(OptionNA::Some(0.5)), OptionNA::Some(0));
    }

    #[test]
    fn truncation_of_small_negatives() {
        assert_eq!(truncate_position(OptionNA::Some(-0.5)), OptionNA::Some(-1));
        assert_eq!(truncate_position(OptionNA::Some(-1.5)), OptionNA::Some(-1));
        assert_eq!(truncate_position(OptionNA::Some(-0.0)), OptionNA::Some(0));
    }

    #[test]
    fn truncation_of_non_finite() {
        assert_eq!(truncate_position(OptionNA::Some(f64::NAN)), OptionNA::NA);
        assert_eq!(truncate_position(OptionNA::Some(f64::INFINITY)), OptionNA::NA);
        assert_eq!(truncate_position(OptionNA::Some(f64::NEG_INFINITY)), OptionNA::NA);
        assert_eq!(truncate_position(OptionNA::NA), OptionNA::NA);
    }

    #[test]
    fn truncation_saturates() {
        assert_eq!(truncate_position(OptionNA::Some(1e12)), OptionNA::Some(i32::MAX));
        assert_eq!(truncate_position(OptionNA::Some(-1e12)), OptionNA::Some(-i32::MAX));
    }
}
