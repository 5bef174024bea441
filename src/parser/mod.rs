/// Command Parsers
///
/// The primary interface for this module is `parse`, which turns a single line
/// of input into a [`Command`]. Internally, it dispatches out to individual
/// parsers for specific grammar tokens. Index arguments are evaluated while
/// parsing, so an access carries fully built [`Obj`] values.
///
mod style;
pub use style::*;

use pest::iterators::{Pair, Pairs};
use pest::Parser;

use crate::ast::Command;
use crate::error::Error;
use crate::index::AccessMode;
use crate::{err, internal_err};
use crate::object::types::Double;
use crate::object::{Obj, OptionNA, Shape, Vector};

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct IndexParser;

pub type ParseResult = Result<Command, Error>;
pub type HighlightResult = Result<Vec<(String, Style)>, Error>;

pub fn parse(input: &str) -> ParseResult {
    let mut pairs = IndexParser::parse(Rule::repl, input)?;
    let repl = next(&mut pairs)?;
    match repl.into_inner().next() {
        Some(pair) => parse_command(pair),
        None => Ok(Command::Empty),
    }
}

/// Split a line into styled fragments which, joined, reproduce the input
pub fn parse_highlight(input: &str) -> HighlightResult {
    let pairs = IndexParser::parse(Rule::highlight, input)?;
    Ok(pairs
        .flatten()
        .filter(|pair| !matches!(pair.as_rule(), Rule::highlight | Rule::EOI))
        .map(|pair| (pair.as_str().to_string(), Style::from(pair.as_rule())))
        .collect())
}

fn next<'i>(pairs: &mut Pairs<'i, Rule>) -> Result<Pair<'i, Rule>, Error> {
    pairs
        .next()
        .ok_or_else(|| internal_err!("expected another token"))
}

fn parse_command(pair: Pair<Rule>) -> ParseResult {
    match pair.as_rule() {
        Rule::declare => parse_declare(pair),
        Rule::access => parse_access(pair),
        Rule::ls => Ok(Command::Ls),
        Rule::show => Ok(Command::Show(pair.as_str().to_string())),
        Rule::EOI => Ok(Command::Empty),
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

fn parse_declare(pair: Pair<Rule>) -> ParseResult {
    let mut inner = pair.into_inner();
    let symbol = next(&mut inner)?.as_str().to_string();
    let _assign = next(&mut inner)?;
    let shape = parse_shape(next(&mut inner)?)?;
    Ok(Command::Declare(symbol, shape))
}

fn parse_shape(pair: Pair<Rule>) -> Result<Shape, Error> {
    let rule = pair.as_rule();
    let counts = pair
        .into_inner()
        .map(parse_count)
        .collect::<Result<Vec<u32>, Error>>()?;

    match rule {
        Rule::vector_ctor => Ok(Shape::vector(counts[0])),
        Rule::list_ctor => Ok(Shape::list(counts[0])),
        Rule::matrix_ctor => Shape::matrix(counts[0], counts[1]),
        Rule::array_ctor => Shape::array(counts),
        rule => Err(Error::ParseUnexpected(rule)),
    }
}

fn parse_count(pair: Pair<Rule>) -> Result<u32, Error> {
    pair.as_str()
        .parse::<u32>()
        .map_err(|_| Error::ResultTooLong)
}

fn parse_access(pair: Pair<Rule>) -> ParseResult {
    let mut inner = pair.into_inner();
    let symbol = next(&mut inner)?.as_str().to_string();

    let brackets = next(&mut inner)?;
    let mode = match brackets.as_rule() {
        Rule::subset => AccessMode::SUBSET,
        Rule::subscript => AccessMode::SUBSCRIPT,
        rule => return Err(Error::ParseUnexpected(rule)),
    };

    let args = parse_args(next(&mut brackets.into_inner())?)?;

    // a trailing `<- value` makes this an assignment target; the value
    // itself is evaluated for errors but otherwise unused
    let mode = match inner.next() {
        Some(_assign) => {
            parse_expr(next(&mut inner)?)?;
            mode.replace()
        }
        None => mode,
    };

    Ok(Command::Access { symbol, mode, args })
}

fn parse_args(pair: Pair<Rule>) -> Result<Vec<Obj>, Error> {
    pair.into_inner()
        .map(|arg| match arg.into_inner().next() {
            Some(expr) => parse_expr(expr),
            None => Ok(Obj::Missing),
        })
        .collect()
}

pub fn parse_expr(pair: Pair<Rule>) -> Result<Obj, Error> {
    match pair.as_rule() {
        Rule::expr => parse_expr(next(&mut pair.into_inner())?),
        Rule::range => parse_range(pair),
        Rule::term => parse_term(pair),
        _ => parse_atom(pair),
    }
}

fn parse_term(pair: Pair<Rule>) -> Result<Obj, Error> {
    let mut negations = 0;
    let mut value = Obj::Null;

    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::neg => negations += 1,
            _ => value = parse_atom(pair)?,
        }
    }

    if negations % 2 == 0 {
        return Ok(value);
    }

    match value {
        Obj::Null => Ok(Vector::Integer(vec![]).into()),
        Obj::Vector(v) => match v.negate() {
            Some(v) => Ok(v.into()),
            None => err!("invalid argument to unary operator"),
        },
        _ => err!("invalid argument to unary operator"),
    }
}

fn parse_atom(pair: Pair<Rule>) -> Result<Obj, Error> {
    let obj: Obj = match pair.as_rule() {
        Rule::expr => return parse_expr(pair),

        // reserved values
        Rule::val_true => Vector::from(vec![true]).into(),
        Rule::val_false => Vector::from(vec![false]).into(),
        Rule::val_null => Obj::Null,
        Rule::val_na => Vector::Logical(vec![OptionNA::NA]).into(),
        Rule::val_nan => Vector::from(vec![f64::NAN]).into(),
        Rule::val_inf => Vector::from(vec![f64::INFINITY]).into(),

        // atomic values
        Rule::number => match pair.as_str().parse::<f64>() {
            Ok(x) => Vector::from(vec![x]).into(),
            Err(_) => return Err(Error::ParseUnexpected(Rule::number)),
        },
        Rule::integer => {
            let digits = pair.as_str().trim_end_matches('L');
            match (digits.parse::<i32>(), digits.parse::<f64>()) {
                (Ok(x), _) => Vector::from(vec![x]).into(),
                // too large for an integer, kept as a double
                (_, Ok(x)) => Vector::from(vec![x]).into(),
                _ => return Err(Error::ParseUnexpected(Rule::integer)),
            }
        }
        Rule::string => {
            let inner = next(&mut pair.into_inner())?.as_str().to_string();
            Vector::from(vec![inner]).into()
        }

        // composite values
        Rule::vec_combine => {
            let elems = pair
                .into_inner()
                .map(parse_expr)
                .collect::<Result<Vec<Obj>, Error>>()?;
            combine(elems)
        }
        Rule::list_value => Obj::List(
            pair.into_inner()
                .map(parse_expr)
                .collect::<Result<Vec<Obj>, Error>>()?,
        ),

        rule => return Err(Error::ParseUnexpected(rule)),
    };

    Ok(obj)
}

/// Evaluate `c(...)`
///
/// `NULL` elements are dropped. Any list among the elements turns the result
/// into a list, with vectors split into their individual elements.
///
fn combine(elems: Vec<Obj>) -> Obj {
    if !elems.iter().any(|i| matches!(i, Obj::List(_))) {
        let vectors = elems
            .into_iter()
            .filter_map(|i| match i {
                Obj::Vector(v) => Some(v),
                _ => None,
            })
            .collect();

        return Vector::combine(vectors).into();
    }

    let mut list = vec![];
    for elem in elems {
        match elem {
            Obj::List(mut x) => list.append(&mut x),
            Obj::Vector(v) => list.extend(split(v)),
            Obj::Null | Obj::Missing => (),
        }
    }

    Obj::List(list)
}

fn split(v: Vector) -> Vec<Obj> {
    match v {
        Vector::Double(x) => x.into_iter().map(|i| Vector::Double(vec![i]).into()).collect(),
        Vector::Integer(x) => x.into_iter().map(|i| Vector::Integer(vec![i]).into()).collect(),
        Vector::Logical(x) => x.into_iter().map(|i| Vector::Logical(vec![i]).into()).collect(),
        Vector::Character(x) => x
            .into_iter()
            .map(|i| Vector::Character(vec![i]).into())
            .collect(),
    }
}

/// Evaluate `from:to`
///
/// Only the first element of each operand is used. The sequence steps by one
/// toward `to`, and is integer whenever `from` is a whole number.
///
fn parse_range(pair: Pair<Rule>) -> Result<Obj, Error> {
    let mut inner = pair.into_inner();
    let from = range_operand(parse_term(next(&mut inner)?)?)?;
    let to = range_operand(parse_term(next(&mut inner)?)?)?;

    let n = (to - from).abs().floor() + 1.0;
    if n > i32::MAX as f64 {
        return Err(Error::ResultTooLong);
    }

    let step = if to >= from { 1.0 } else { -1.0 };
    let seq = (0..n as i64).map(|i| from + step * i as f64);

    let whole = from.fract() == 0.0 && from.abs() <= i32::MAX as f64;
    let ends_fit = (from + step * (n - 1.0)).abs() <= i32::MAX as f64;

    if whole && ends_fit {
        Ok(Vector::from(seq.map(|i| i as i32).collect::<Vec<i32>>()).into())
    } else {
        Ok(Vector::from(seq.collect::<Vec<f64>>()).into())
    }
}

fn range_operand(obj: Obj) -> Result<f64, Error> {
    let values: Vec<Double> = match obj {
        Obj::Vector(Vector::Character(_)) => return err!("NA/NaN argument"),
        Obj::Vector(v) => v.as_mode(),
        _ => vec![],
    };

    match values.first() {
        None => err!("argument of length 0"),
        Some(OptionNA::Some(x)) if x.is_finite() => Ok(*x),
        Some(_) => err!("NA/NaN argument"),
    }
}
