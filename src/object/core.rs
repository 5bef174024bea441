use std::fmt::Display;

use super::Vector;

/// Index arguments
///
/// An already-evaluated argument as handed over by the evaluator. `Missing`
/// stands for an argument position that was left empty, as in `x[, 1]`.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Obj {
    #[default]
    Missing,
    Null,
    Vector(Vector),
    List(Vec<Obj>),
}

impl Obj {
    pub fn type_name(&self) -> &'static str {
        match self {
            Obj::Missing => "symbol",
            Obj::Null => "NULL",
            Obj::Vector(v) => v.type_name(),
            Obj::List(_) => "list",
        }
    }
}

impl From<Vector> for Obj {
    fn from(value: Vector) -> Self {
        Obj::Vector(value)
    }
}

impl Display for Obj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Obj::Missing => Ok(()),
            Obj::Null => write!(f, "NULL"),
            Obj::Vector(v) => write!(f, "{v}"),
            Obj::List(x) => {
                let elems: Vec<String> = x.iter().map(|i| i.to_string()).collect();
                write!(f, "list({})", elems.join(", "))
            }
        }
    }
}
