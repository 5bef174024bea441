use crate::parser::Rule;

use core::fmt;
use pest::error::LineColLocation::Pos;

#[macro_export]
macro_rules! internal_err {
    () => {
        $crate::error::Error::Internal(None, std::file!(), std::line!()).into()
    };
    ( $x:expr ) => {
        $crate::error::Error::Internal(Some($x.to_string()), std::file!(), std::line!()).into()
    };
}

#[macro_export]
macro_rules! err {
    ( $x:expr ) => {
        $crate::error::Error::Other($x.to_string()).into()
    };
}

/// The different ways an index list can disagree with a container's shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    IncorrectDimensions,
    IncorrectSubscripts,
    IncorrectSubscriptsMatrix,
    ImproperSubscript,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    // index resolution
    DimensionMismatch(Mismatch),
    LogicalSubscriptTooLong,
    OnlyZeroCanBeMixedWithNegative,
    SelectMoreThanOne,
    SelectLessThanOne,
    SelectMoreThanOneInOneIndex,
    SelectLessThanOneInOneIndex,
    SubscriptBounds,
    SubscriptBoundsSub,
    InvalidNegativeSubscript,
    UnsupportedIndexKind(&'static str),
    ResultTooLong,

    // an error raised while resolving the n-th (zero-based) index argument
    InDimension(Box<Error>, usize),

    // session errors
    VariableNotFound(String),
    Other(String),

    // parsing errors
    ParseFailure(Box<pest::error::Error<Rule>>),
    ParseUnexpected(Rule),

    // in-dev errors
    Internal(Option<String>, &'static str, u32),
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::DimensionMismatch(Mismatch::IncorrectDimensions) => {
                "incorrect number of dimensions".to_string()
            }
            Error::DimensionMismatch(Mismatch::IncorrectSubscripts) => {
                "incorrect number of subscripts".to_string()
            }
            Error::DimensionMismatch(Mismatch::IncorrectSubscriptsMatrix) => {
                "incorrect number of subscripts on matrix".to_string()
            }
            Error::DimensionMismatch(Mismatch::ImproperSubscript) => {
                "[[ ]] improper number of subscripts".to_string()
            }
            Error::LogicalSubscriptTooLong => "(subscript) logical subscript too long".to_string(),
            Error::OnlyZeroCanBeMixedWithNegative => {
                "only 0's may be mixed with negative subscripts".to_string()
            }
            Error::SelectMoreThanOne => "attempt to select more than one element".to_string(),
            Error::SelectLessThanOne => "attempt to select less than one element".to_string(),
            Error::SelectMoreThanOneInOneIndex => {
                "attempt to select more than one element in integerOneIndex".to_string()
            }
            Error::SelectLessThanOneInOneIndex => {
                "attempt to select less than one element in integerOneIndex".to_string()
            }
            Error::SubscriptBounds => "subscript out of bounds".to_string(),
            Error::SubscriptBoundsSub => "[[ ]] subscript out of bounds".to_string(),
            Error::InvalidNegativeSubscript => "invalid negative subscript".to_string(),
            Error::UnsupportedIndexKind(kind) => format!("invalid subscript type '{kind}'"),
            Error::ResultTooLong => "result would be too long a vector".to_string(),
            Error::InDimension(e, i) => format!("{} (index argument {})", e.as_str(), i + 1),
            Error::VariableNotFound(v) => format!("object '{}' not found", v.as_str()),
            Error::Other(s) => s.to_string(),
            Error::ParseFailure(e) => match e.line_col {
                Pos((line, col)) => format!("Parse failed at Line {}, Column {}", line, col),
                _ => format!("Parse failed at {:?}", e.line_col),
            },
            Error::ParseUnexpected(rule) => {
                format!("Parse failed. Found unexpected parsing rule '{:#?}'", rule)
            }
            Error::Internal(None, file, line) => format!("Internal Error ({file}:{line})"),
            Error::Internal(Some(msg), file, line) => {
                format!("Internal Error ({file}:{line})\n{msg}")
            }
        }
    }

    /// Strip positional context, returning the underlying error
    pub fn kind(&self) -> &Error {
        match self {
            Error::InDimension(e, _) => e.kind(),
            e => e,
        }
    }

    /// The zero-based index argument an error was raised for, if any
    pub fn argument(&self) -> Option<usize> {
        match self {
            Error::InDimension(_, i) => Some(*i),
            _ => None,
        }
    }

    pub fn in_dimension(self, i: usize) -> Error {
        match self {
            e @ Error::InDimension(..) => e,
            e => Error::InDimension(Box::new(e), i),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.as_str())
    }
}

impl<T> From<Error> for Result<T, Error> {
    fn from(val: Error) -> Self {
        Err(val)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<pest::error::Error<Rule>> for Error {
    fn from(value: pest::error::Error<Rule>) -> Self {
        Error::ParseFailure(Box::new(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_prefix() {
        let e = Error::SubscriptBounds;
        assert_eq!(e.to_string(), "Error: subscript out of bounds");
    }

    #[test]
    fn display_with_argument() {
        let e = Error::OnlyZeroCanBeMixedWithNegative.in_dimension(1);
        assert_eq!(
            e.to_string(),
            "Error: only 0's may be mixed with negative subscripts (index argument 2)"
        );
    }

    #[test]
    fn argument_position_is_not_rewrapped() {
        let e = Error::SubscriptBounds.in_dimension(0).in_dimension(3);
        assert_eq!(e.argument(), Some(0));
        assert_eq!(e.kind(), &Error::SubscriptBounds);
    }

    #[test]
    fn unsupported_kind() {
        let e = Error::UnsupportedIndexKind("character");
        assert_eq!(e.to_string(), "Error: invalid subscript type 'character'");
    }
}
