use clap::Parser;
use tracing_subscriber::EnvFilter;

use rindex::cli::Cli;
use rindex::session::Session;

fn main() {
    let filter = EnvFilter::try_from_env("RINDEX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let expr = cli.expr.clone();

    let mut session = match Session::try_from(cli) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Some(expr) = expr {
        match session.eval(&expr) {
            Ok(out) if out.is_empty() => (),
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        return;
    }

    run(session)
}

#[cfg(feature = "repl")]
fn run(session: Session) {
    if let Err(e) = rindex::repl::repl(session) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "repl"))]
fn run(_session: Session) {
    eprintln!("{}", rindex::repl::session_header());
    eprintln!("built without the interactive console; use --expr");
    std::process::exit(2);
}
