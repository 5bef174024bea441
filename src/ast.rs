use std::fmt::Display;

use crate::index::AccessMode;
use crate::object::{Obj, Shape};

/// Parsed session commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank input or a lone comment
    Empty,

    /// `x <- matrix(3, 4)`
    Declare(String, Shape),

    /// `x[i, j]`, `x[[i]]`, or either used as an assignment target
    Access {
        symbol: String,
        mode: AccessMode,
        args: Vec<Obj>,
    },

    /// `x`
    Show(String),

    /// `ls()`
    Ls,
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Empty => Ok(()),
            Command::Declare(symbol, shape) => write!(f, "{symbol} <- {shape}"),
            Command::Access { symbol, mode, args } => {
                let args: Vec<String> = args.iter().map(|i| i.to_string()).collect();
                let (open, close) = if mode.is_subset() {
                    ("[", "]")
                } else {
                    ("[[", "]]")
                };
                write!(f, "{symbol}{open}{}{close}", args.join(", "))?;
                if mode.is_replace() {
                    write!(f, " <- value")?;
                }
                Ok(())
            }
            Command::Show(symbol) => write!(f, "{symbol}"),
            Command::Ls => write!(f, "ls()"),
        }
    }
}
