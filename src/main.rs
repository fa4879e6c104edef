use std::{fs::read_to_string, path::PathBuf, time::Instant};

use anyhow::{anyhow, Context};
use clap::{ArgAction, Parser as ClapParser};
use log::debug;

use goscript::{
    ast::ast::to_source, display_error, errors::errors::Error, lexer::lexer::tokenize,
    parser::parser::parse,
};

/// Parses a GoScript file and prints it back in canonical form.
#[derive(Debug, ClapParser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// The source file to parse.
    file: PathBuf,

    /// Print the token stream instead of the syntax tree.
    #[arg(long, action = ArgAction::SetTrue)]
    tokens: bool,

    /// Log the progress of each phase.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let source = read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| args.file.display().to_string());

    let start = Instant::now();
    let tokens = tokenize(source.clone(), Some(file_name))
        .map_err(|error| report(error, &source))?;
    debug!("tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let program = parse(tokens).map_err(|error| report(error, &source))?;
    debug!("parsed in {:?}", parse_start.elapsed());

    print!("{}", to_source(&program));
    Ok(())
}

fn report(error: Error, source: &str) -> anyhow::Error {
    eprint!("{}", display_error(&error, source));
    anyhow!("{}", error)
}
