#[macro_use]
extern crate pest_derive;

pub mod ast;
pub mod cli;
pub mod error;
pub mod index;
pub mod object;
pub mod parser;
pub mod repl;
pub mod session;
