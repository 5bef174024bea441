use std::fmt::Display;

use super::coercion::{AtomicMode, CoercibleInto};
use super::types::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionNA<T> {
    #[default]
    NA,
    Some(T),
}

impl<T> OptionNA<T> {
    pub fn map<F, U>(self, f: F) -> OptionNA<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OptionNA::Some(x) => OptionNA::Some(f(x)),
            OptionNA::NA => OptionNA::NA,
        }
    }

    pub fn is_na(&self) -> bool {
        matches!(self, OptionNA::NA)
    }
}

impl<T> From<Option<T>> for OptionNA<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => OptionNA::Some(x),
            None => OptionNA::NA,
        }
    }
}

impl<T: Display> Display for OptionNA<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionNA::Some(x) => write!(f, "{x}"),
            OptionNA::NA => write!(f, "NA"),
        }
    }
}

/// Atomic vectors
///
/// Raw values as they arrive from the evaluator. Only the first three modes
/// are usable for positional indexing; characters are carried so that they
/// can be rejected with a meaningful error.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Vector {
    Double(Vec<Double>),
    Integer(Vec<Integer>),
    Logical(Vec<Logical>),
    Character(Vec<Character>),
}

impl Vector {
    pub fn len(&self) -> usize {
        use Vector::*;
        match self {
            Double(x) => x.len(),
            Integer(x) => x.len(),
            Logical(x) => x.len(),
            Character(x) => x.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn type_name(&self) -> &'static str {
        use Vector::*;
        match self {
            Double(_) => "double",
            Integer(_) => "integer",
            Logical(_) => "logical",
            Character(_) => "character",
        }
    }

    fn mode_rank(&self) -> u8 {
        use Vector::*;
        match self {
            Logical(_) => 0,
            Integer(_) => 1,
            Double(_) => 2,
            Character(_) => 3,
        }
    }

    pub fn as_mode<T>(&self) -> Vec<T>
    where
        T: AtomicMode,
        Logical: CoercibleInto<T>,
        Integer: CoercibleInto<T>,
        Double: CoercibleInto<T>,
        Character: CoercibleInto<T>,
    {
        use Vector::*;
        match self {
            Double(x) => x.iter().copied().map(|i| i.coerce_into()).collect(),
            Integer(x) => x.iter().copied().map(|i| i.coerce_into()).collect(),
            Logical(x) => x.iter().copied().map(|i| i.coerce_into()).collect(),
            Character(x) => x.iter().cloned().map(|i| i.coerce_into()).collect(),
        }
    }

    /// Combine vectors
    ///
    /// Concatenates vectors after coercing them to the highest common mode,
    /// following the usual hierarchy `logical < integer < double < character`.
    ///
    pub fn combine(vectors: Vec<Vector>) -> Vector {
        let rank = vectors.iter().map(Vector::mode_rank).max();
        match rank {
            None => Vector::Logical(Vec::new()),
            Some(0) => Vector::Logical(vectors.iter().flat_map(|v| v.as_mode()).collect()),
            Some(1) => Vector::Integer(vectors.iter().flat_map(|v| v.as_mode()).collect()),
            Some(2) => Vector::Double(vectors.iter().flat_map(|v| v.as_mode()).collect()),
            Some(_) => Vector::Character(vectors.iter().flat_map(|v| v.as_mode()).collect()),
        }
    }

    /// Arithmetic negation, as used by `-x` in index expressions
    pub fn negate(&self) -> Option<Vector> {
        use Vector::*;
        match self {
            Double(x) => Some(Double(x.iter().map(|i| i.map(|i| -i)).collect())),
            Integer(x) => Some(Integer(
                x.iter().map(|i| i.map(|i| i.wrapping_neg())).collect(),
            )),
            Logical(_) => Integer(self.as_mode()).negate(),
            Character(_) => None,
        }
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn join<T: Display>(x: &[T]) -> String {
            x.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
        }

        use Vector::*;
        match self {
            Double(x) => write!(f, "{}", join(x)),
            Integer(x) => write!(f, "{}", join(x)),
            Logical(x) => write!(
                f,
                "{}",
                x.iter()
                    .map(|i| match i {
                        OptionNA::Some(true) => "TRUE".to_string(),
                        OptionNA::Some(false) => "FALSE".to_string(),
                        OptionNA::NA => "NA".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            Character(x) => write!(
                f,
                "{}",
                x.iter()
                    .map(|i| match i {
                        OptionNA::Some(s) => format!("{s:?}"),
                        OptionNA::NA => "NA".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::Double(value.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<Double>> for Vector {
    fn from(value: Vec<Double>) -> Self {
        Vector::Double(value)
    }
}

impl From<Vec<i32>> for Vector {
    fn from(value: Vec<i32>) -> Self {
        Vector::Integer(value.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<Integer>> for Vector {
    fn from(value: Vec<Integer>) -> Self {
        Vector::Integer(value)
    }
}

impl From<Vec<bool>> for Vector {
    fn from(value: Vec<bool>) -> Self {
        Vector::Logical(value.into_iter().map(OptionNA::Some).collect())
    }
}

impl From<Vec<Logical>> for Vector {
    fn from(value: Vec<Logical>) -> Self {
        Vector::Logical(value)
    }
}

impl From<Vec<String>> for Vector {
    fn from(value: Vec<String>) -> Self {
        Vector::Character(value.into_iter().map(OptionNA::Some).collect())
    }
}
