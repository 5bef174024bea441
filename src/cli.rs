use crate::error::Error;
use crate::object::Shape;

/// Resolve R-style index expressions against declared container shapes
#[derive(clap::Parser, Debug, Clone, Default)]
#[command(version, about)]
pub struct Cli {
    /// Declare `x` as an array with these dimensions, e.g. `--dim 3,4`
    #[arg(long, value_delimiter = ',', conflicts_with = "len")]
    pub dim: Vec<u32>,

    /// Declare `x` as a vector of this length
    #[arg(long)]
    pub len: Option<u32>,

    /// Treat the declared `x` as a list
    #[arg(long)]
    pub list: bool,

    /// Evaluate a single command and exit
    #[arg(short, long)]
    pub expr: Option<String>,

    /// File used to persist REPL history
    #[arg(long)]
    pub history: Option<String>,
}

impl Cli {
    /// The container declared on the command line, if any
    pub fn shape(&self) -> Result<Option<Shape>, Error> {
        let shape = match (self.dim.as_slice(), self.len) {
            ([], None) => return Ok(None),
            ([], Some(len)) => Shape::vector(len),
            (dims, _) => Shape::array(dims.to_vec())?,
        };

        Ok(Some(if self.list { shape.into_list() } else { shape }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    #[test]
    fn dims_are_comma_separated() {
        let cli = Cli::parse_from(["rindex", "--dim", "3,4"]);
        assert_eq!(cli.shape().unwrap(), Some(Shape::matrix(3, 4).unwrap()));
    }

    #[test]
    fn list_of_length() {
        let cli = Cli::parse_from(["rindex", "--len", "5", "--list"]);
        assert_eq!(cli.shape().unwrap(), Some(Shape::list(5)));
    }

    #[test]
    fn nothing_declared() {
        let cli = Cli::parse_from(["rindex", "--expr", "ls()"]);
        assert_eq!(cli.shape().unwrap(), None);
        assert_eq!(cli.expr.as_deref(), Some("ls()"));
    }

    #[test]
    fn dim_and_len_conflict() {
        let res = Cli::try_parse_from(["rindex", "--dim", "2,2", "--len", "4"]);
        assert!(res.is_err());
    }
}
