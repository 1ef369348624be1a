use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use matlang::{Error, Session};
use tracing_subscriber::{EnvFilter, fmt};

/// Prompt printed before every interactive line.
const PROMPT: &str = "> ";

/// matlang is an interactive evaluator for nested numeric arrays.
///
/// Without arguments it reads statements from standard input, one line at a
/// time, and prints the value of each.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the statements of a file instead of reading interactively.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Raises the log level; repeat for more detail (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::new();

    if let Some(path) = args.file {
        let script = fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            std::process::exit(1);
        });

        match session.evaluate_all(&script) {
            Ok(results) => results.iter().for_each(|value| println!("{value}")),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = repl(&mut session) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();
}

/// Reads lines until end of input, evaluating every statement on each one.
fn repl(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(stdout)?;
            return Ok(());
        };

        eval_line(session, &line);
    }
}

/// Evaluates the statements of one line in order, stopping at the first
/// error.
fn eval_line(session: &mut Session, line: &str) {
    let mut position = 0;

    while line.get(position..).is_some_and(|rest| !rest.trim().is_empty()) {
        let outcome = session.evaluate(position, line);
        session.reset_transient_state();

        match outcome {
            Ok((next, value)) => {
                println!("{value}");
                position = next;
            },
            Err(e) => {
                report(&e);
                return;
            },
        }
    }
}

/// Prints an error, with a caret under the failing column for syntax errors.
fn report(error: &Error) {
    if let Some(position) = error.position() {
        println!("{}^", " ".repeat(PROMPT.len() + position));
    }
    println!("{error}");
}
