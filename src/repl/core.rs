use crossterm::style::Stylize;
use reedline::{FileBackedHistory, Reedline};

use super::prompt::IndexPrompt;
use super::release::*;
use super::validator::BracketValidator;
use crate::error::Error;
use crate::session::Session;

const HISTORY_CAPACITY: usize = 1000;

pub fn repl(mut session: Session) -> Result<(), Error> {
    println!("{}", session_header());

    let history = match &session.history {
        Some(path) => {
            println!("Restoring session history...");
            FileBackedHistory::with_file(HISTORY_CAPACITY, path.into())
                .map_err(|e| Error::Other(format!("Error configuring history with file: {e}")))?
        }
        None => FileBackedHistory::new(HISTORY_CAPACITY),
    };

    let mut line_editor = Reedline::create()
        .with_validator(Box::new(BracketValidator))
        .with_highlighter(Box::new(session.clone()))
        .with_history(Box::new(history));

    // REPL
    loop {
        let prompt = IndexPrompt::from(&session);
        let signal = line_editor.read_line(&prompt);
        match signal {
            Ok(reedline::Signal::Success(line)) => {
                // skip all-whitespace entries
                if line.chars().all(char::is_whitespace) {
                    continue;
                }

                match session.eval(&line) {
                    Ok(out) if out.is_empty() => (),
                    Ok(out) => println!("{out}"),
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
            }
            Ok(reedline::Signal::CtrlD) => break,
            Ok(reedline::Signal::CtrlC) => continue,
            Err(err) => {
                println!("REPL Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
