use hashbrown::HashMap;
use tracing::debug;

use crate::ast::Command;
use crate::cli::Cli;
use crate::error::Error;
use crate::index::{resolve, Positions};
use crate::object::{Container, Shape};
use crate::parser::parse;

/// Number of element positions printed before the listing is cut short
const MAX_PRINTED_ELEMENTS: usize = 40;

/// An inspection session
///
/// Holds the containers declared so far, by name, and evaluates commands
/// against them.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    containers: HashMap<String, Shape>,
    pub history: Option<String>,
}

impl Session {
    pub fn with_history_file(mut self, file: String) -> Session {
        self.history = Some(file);
        self
    }

    pub fn declare(&mut self, symbol: impl Into<String>, shape: Shape) {
        self.containers.insert(symbol.into(), shape);
    }

    pub fn get(&self, symbol: &str) -> Result<&Shape, Error> {
        self.containers
            .get(symbol)
            .ok_or_else(|| Error::VariableNotFound(symbol.to_string()))
    }

    /// Declared containers and their shapes, in name order
    pub fn summary(&self) -> String {
        let mut declared: Vec<(&String, &Shape)> = self.containers.iter().collect();
        declared.sort_by_key(|(name, _)| *name);
        declared
            .iter()
            .map(|(name, shape)| format!("{name}: {shape}"))
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Parse and evaluate a line of input, returning the text to print
    pub fn eval(&mut self, input: &str) -> Result<String, Error> {
        let command = parse(input)?;
        self.eval_command(command)
    }

    pub fn eval_command(&mut self, command: Command) -> Result<String, Error> {
        debug!(command = %command, "evaluating");
        match command {
            Command::Empty => Ok(String::new()),
            Command::Declare(symbol, shape) => {
                self.declare(symbol, shape);
                Ok(String::new())
            }
            Command::Show(symbol) => Ok(self.get(&symbol)?.to_string()),
            Command::Ls => {
                let mut names: Vec<&String> = self.containers.keys().collect();
                names.sort();
                let names: Vec<String> = names.iter().map(|i| format!("\"{i}\"")).collect();
                Ok(format!("[1] {}", names.join(" ")))
            }
            Command::Access { symbol, mode, args } => {
                let container = self.get(&symbol)?;
                let positions = resolve(container, &args, mode)?;
                Ok(render(container, &positions))
            }
        }
    }
}

/// Render a resolution along with the element positions it touches
fn render(container: &Shape, positions: &Positions) -> String {
    let len = container.len() as usize;
    let replace = positions.mode().is_replace();
    let total = positions.selected_count() as usize;

    let mut elements: Vec<String> = positions
        .offsets(container)
        .take(MAX_PRINTED_ELEMENTS)
        .map(|offset| match offset {
            // reading past the end yields a missing element
            Some(i) if replace || i < len => (i + 1).to_string(),
            _ => "NA".to_string(),
        })
        .collect();

    if total > MAX_PRINTED_ELEMENTS {
        elements.push(format!("... ({} more)", total - MAX_PRINTED_ELEMENTS));
    }

    format!("{positions}\nelements: {}", elements.join(" "))
}

impl TryFrom<Cli> for Session {
    type Error = Error;

    fn try_from(value: Cli) -> Result<Self, Self::Error> {
        let mut session = Session {
            history: value.history.clone(),
            ..Default::default()
        };

        if let Some(shape) = value.shape()? {
            session.declare("x", shape);
        }

        Ok(session)
    }
}
