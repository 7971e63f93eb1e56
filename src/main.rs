use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use arith::{
    errors::errors::{Error, ErrorTip},
    get_line_at_position,
    interpreter::interpreter::evaluate,
    lexer::lexer::tokenize,
    parser::parser::parse,
};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Evaluates an integer arithmetic expression
#[derive(Debug, Parser)]
#[command(name = "arith", version, about, long_about = None)]
struct Cli {
    /// File containing the expression
    #[arg(default_value = "main.x")]
    file: PathBuf,

    /// Evaluate this expression instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Print the token stream before evaluating
    #[arg(long)]
    tokens: bool,

    /// Print the expression tree before evaluating
    #[arg(long)]
    ast: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let (source, file_name) = match &cli.expr {
        Some(expr) => (expr.clone(), None),
        None => match read_to_string(&cli.file) {
            Ok(contents) => (contents, Some(cli.file.to_string_lossy().into_owned())),
            Err(error) => {
                debug!(%error, "failed to read source");
                eprintln!("Error: could not open the file {}", cli.file.display());
                return ExitCode::FAILURE;
            }
        },
    };

    let start = Instant::now();

    if cli.tokens {
        for token in tokenize(&source, file_name.clone()) {
            println!("{}", token);
        }
    }

    let tree = match parse(&source, file_name.clone()) {
        Ok(tree) => tree,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", start.elapsed());

    if cli.ast {
        println!("{}", tree);
    }

    match evaluate(&tree) {
        Ok(result) => {
            info!("Evaluated in {:?}", start.elapsed());
            println!("Result: {}", result);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &source);
            ExitCode::FAILURE
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "arith=warn",
        1 => "arith=debug",
        _ => "arith=trace",
    }
}

fn display_error(error: &Error, source: &str) {
    /*
        Error: DivisionByZero (The right-hand side of `/` evaluated to zero)
        -> main.x
           |
        1 | 1 / 0
          | --^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
